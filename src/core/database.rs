//! Database trait
//!
//! This module defines the handle contract that backends implement.

use super::error::Result;
use super::resource::Resource;
use super::value::RowSet;

/// Lifecycle and statement execution for a single engine connection
///
/// Implementations own at most one connection and are used from one thread
/// at a time. Every call blocks until the engine returns.
pub trait Database {
    /// Open the given resource, replacing any current connection
    ///
    /// On failure the handle is left closed.
    fn open(&mut self, resource: &str) -> Result<()>;

    /// Release the connection
    ///
    /// Closing a closed handle succeeds without doing anything.
    fn close(&mut self) -> Result<()>;

    /// Check if a connection is held
    fn is_open(&self) -> bool;

    /// The resource of the current connection, if open
    fn resource(&self) -> Option<&Resource>;

    /// Run statement text that returns no rows
    ///
    /// # Security Warning
    ///
    /// The text is passed to the engine verbatim. Never build it from user
    /// input without validating and escaping that input first.
    fn exec(&self, sql: &str) -> Result<()>;

    /// Run a statement and store its rows in `rows`
    ///
    /// `rows` is cleared first, so it only ever holds this call's results.
    /// The same security warning as [`Database::exec`] applies.
    fn exec_into(&self, sql: &str, rows: &mut RowSet) -> Result<()>;

    /// Run a statement and return its rows
    fn query(&self, sql: &str) -> Result<RowSet> {
        let mut rows = RowSet::new();
        self.exec_into(sql, &mut rows)?;
        Ok(rows)
    }
}
