//! Handle configuration
//!
//! Options are applied when a handle opens its connection. They can be
//! built in code or loaded from JSON.

use super::error::{DatabaseError, Result};
use rusqlite::OpenFlags;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest busy timeout the engine accepts, in milliseconds
pub const MAX_BUSY_TIMEOUT_MS: u64 = i32::MAX as u64;

/// How SQL NULL is represented in materialized rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullMode {
    /// `Cell::Null`
    #[default]
    Variant,
    /// `Cell::Text("null")`, for callers written against the sentinel form
    SentinelText,
}

/// Options applied when a handle opens its connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleOptions {
    /// Open the connection read-only
    pub read_only: bool,
    /// Create the database file when it does not exist
    pub create: bool,
    /// How long the engine waits on a locked database before failing
    ///
    /// At most [`MAX_BUSY_TIMEOUT_MS`]. `None` keeps the driver default.
    pub busy_timeout_ms: Option<u64>,
    /// Enforce foreign key constraints
    pub foreign_keys: bool,
    /// NULL representation in result rows
    pub null_mode: NullMode,
}

impl Default for HandleOptions {
    fn default() -> Self {
        Self {
            read_only: false,
            create: true,
            busy_timeout_ms: None,
            foreign_keys: false,
            null_mode: NullMode::Variant,
        }
    }
}

impl HandleOptions {
    /// Create options with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set read-only mode
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Allow or forbid creating a missing database file
    pub fn create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    /// Set the engine busy timeout
    ///
    /// Timeouts longer than [`MAX_BUSY_TIMEOUT_MS`] are clamped to it.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        let ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.busy_timeout_ms = Some(ms.min(MAX_BUSY_TIMEOUT_MS));
        self
    }

    /// Enable or disable foreign key enforcement
    ///
    /// Off by default, which is the engine's own default.
    pub fn foreign_keys(mut self, enabled: bool) -> Self {
        self.foreign_keys = enabled;
        self
    }

    /// Set the NULL representation
    pub fn null_mode(mut self, mode: NullMode) -> Self {
        self.null_mode = mode;
        self
    }

    /// Parse options from a JSON document
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| DatabaseError::config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every value can be handed to the engine
    pub fn validate(&self) -> Result<()> {
        self.busy_timeout_duration().map(|_| ())
    }

    /// Engine open flags for these options
    ///
    /// URI filenames are not enabled, so an identifier such as
    /// `file:data.db` names a plain file.
    pub fn open_flags(&self) -> OpenFlags {
        let base = OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.read_only {
            base | OpenFlags::SQLITE_OPEN_READ_ONLY
        } else if self.create {
            base | OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
        } else {
            base | OpenFlags::SQLITE_OPEN_READ_WRITE
        }
    }

    /// Busy timeout as a duration
    ///
    /// Fails with [`DatabaseError::Config`] when the timeout exceeds
    /// [`MAX_BUSY_TIMEOUT_MS`].
    pub fn busy_timeout_duration(&self) -> Result<Option<Duration>> {
        match self.busy_timeout_ms {
            Some(ms) if ms > MAX_BUSY_TIMEOUT_MS => Err(DatabaseError::config(format!(
                "busy_timeout_ms {} exceeds the engine limit of {} ms",
                ms, MAX_BUSY_TIMEOUT_MS
            ))),
            Some(ms) => Ok(Some(Duration::from_millis(ms))),
            None => Ok(None),
        }
    }
}
