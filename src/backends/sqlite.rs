//! SQLite database backend implementation
//!
//! This module provides the SQLite handle and the row materialization that
//! turns engine result sets into [`RowSet`]s.

use crate::core::{
    database::Database,
    error::{DatabaseError, Result},
    options::{HandleOptions, NullMode},
    resource::Resource,
    value::{Cell, Row, RowSet, NULL_SENTINEL},
};
use rusqlite::{types::ValueRef, Connection, Statement};
use tracing::{debug, error, warn};

/// SQLite database handle
///
/// Owns at most one engine connection. A handle is either closed (no
/// connection, no resource) or open (one connection and its resource).
pub struct SqliteDatabase {
    connection: Option<Connection>,
    resource: Option<Resource>,
    options: HandleOptions,
}

impl SqliteDatabase {
    /// Create a closed handle with default options
    pub fn new() -> Self {
        Self::with_options(HandleOptions::default())
    }

    /// Create a closed handle that will open with `options`
    pub fn with_options(options: HandleOptions) -> Self {
        Self {
            connection: None,
            resource: None,
            options,
        }
    }

    /// Create a handle and open `resource` immediately
    ///
    /// `""` opens a private temporary database, `":memory:"` an in-memory
    /// one, and anything else a file that is created if missing.
    pub fn connect(resource: &str) -> Result<Self> {
        Self::connect_with(resource, HandleOptions::default())
    }

    /// Create a handle with `options` and open `resource` immediately
    pub fn connect_with(resource: &str, options: HandleOptions) -> Result<Self> {
        let mut db = Self::with_options(options);
        db.open(resource)?;
        Ok(db)
    }

    /// Options applied when the handle opens
    pub fn options(&self) -> &HandleOptions {
        &self.options
    }

    fn connection(&self) -> Result<&Connection> {
        self.connection.as_ref().ok_or(DatabaseError::NotOpen)
    }

    /// Open an engine connection and apply the handle options to it
    ///
    /// Options are checked before the engine is touched. A connection that
    /// fails to configure is dropped, which releases it.
    fn establish(resource: &Resource, options: &HandleOptions) -> Result<Connection> {
        let open_error = |e: rusqlite::Error| DatabaseError::open(resource.as_str(), e);
        let busy_timeout = options.busy_timeout_duration()?;

        let conn = Connection::open_with_flags(resource.as_path(), options.open_flags())
            .map_err(open_error)?;

        if let Some(timeout) = busy_timeout {
            conn.busy_timeout(timeout).map_err(open_error)?;
        }

        // The bundled engine enforces foreign keys unless told otherwise
        let pragma = if options.foreign_keys {
            "PRAGMA foreign_keys = ON"
        } else {
            "PRAGMA foreign_keys = OFF"
        };
        conn.execute_batch(pragma).map_err(open_error)?;

        Ok(conn)
    }
}

/// Convert one engine value into a cell
///
/// The engine types each value individually, so two rows of the same
/// column can produce different variants.
fn cell_from_value(value: ValueRef<'_>, null_mode: NullMode) -> Cell {
    match value {
        ValueRef::Text(bytes) => Cell::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Integer(v) => Cell::Integer(v),
        ValueRef::Real(v) => Cell::Float(v),
        ValueRef::Blob(bytes) => Cell::Blob(bytes.to_vec()),
        ValueRef::Null => match null_mode {
            NullMode::Variant => Cell::Null,
            NullMode::SentinelText => Cell::Text(NULL_SENTINEL.to_string()),
        },
    }
}

/// Step a compiled statement to completion, appending one row per record
///
/// Column names are read once up front; they do not change between records.
fn materialize(
    stmt: &mut Statement<'_>,
    null_mode: NullMode,
    rows: &mut RowSet,
) -> rusqlite::Result<()> {
    let names: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();

    let mut records = stmt.query([])?;
    while let Some(record) = records.next()? {
        let mut row = Row::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            row.insert(name.clone(), cell_from_value(record.get_ref(idx)?, null_mode));
        }
        rows.push(row);
    }

    Ok(())
}

impl Default for SqliteDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Database for SqliteDatabase {
    fn open(&mut self, resource: &str) -> Result<()> {
        // Release any existing connection first
        self.close()?;

        let resource = Resource::from(resource);
        let conn = Self::establish(&resource, &self.options).map_err(|e| {
            warn!(resource = %resource, error = %e, "failed to open database");
            e
        })?;

        debug!(resource = %resource, read_only = self.options.read_only, "opened database");
        self.connection = Some(conn);
        self.resource = Some(resource);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let conn = match self.connection.take() {
            Some(conn) => conn,
            None => return Ok(()),
        };

        match conn.close() {
            Ok(()) => {
                if let Some(resource) = self.resource.take() {
                    debug!(resource = %resource, "closed database");
                }
                Ok(())
            }
            Err((conn, e)) => {
                let resource = self
                    .resource
                    .as_ref()
                    .map(|r| r.as_str().to_string())
                    .unwrap_or_default();
                error!(resource = %resource, error = %e, "engine refused to close database");

                // The handle still owns the connection the engine kept open
                self.connection = Some(conn);
                Err(DatabaseError::close(resource, e))
            }
        }
    }

    fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    fn exec(&self, sql: &str) -> Result<()> {
        let conn = self.connection()?;

        debug!(len = sql.len(), "executing statement");
        conn.execute_batch(sql).map_err(|e| {
            warn!(error = %e, "statement failed");
            DatabaseError::statement(e)
        })
    }

    fn exec_into(&self, sql: &str, rows: &mut RowSet) -> Result<()> {
        let conn = self.connection()?;

        debug!(len = sql.len(), "executing query");
        let mut stmt = conn.prepare(sql).map_err(|e| {
            warn!(error = %e, "statement failed to compile");
            DatabaseError::compile(e)
        })?;

        rows.clear();
        if let Err(e) = materialize(&mut stmt, self.options.null_mode, rows) {
            rows.clear();
            warn!(error = %e, "query failed while stepping");
            return Err(DatabaseError::statement(e));
        }

        debug!(rows = rows.len(), "query finished");
        Ok(())
    }
}

impl Drop for SqliteDatabase {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            error!(error = %e, "error at close database while dropping handle");
            // The driver panics when a connection that refuses to close is
            // dropped, so it is leaked instead.
            if let Some(conn) = self.connection.take() {
                std::mem::forget(conn);
            }
        }
    }
}
