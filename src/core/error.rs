//! Error types for the database handle
//!
//! This module defines all error types that can occur while opening, using
//! or closing a handle.

/// Result type alias for database operations
pub type Result<T> = std::result::Result<T, DatabaseError>;

/// Error types for database operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The engine could not open or create the resource
    #[error("Unable to open database '{resource}': {message}")]
    Open {
        resource: String,
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    /// The engine failed to compile or run a statement
    #[error("Error in sql statement: {message}")]
    Statement {
        message: String,
        /// Extended engine status code, when the engine reported one
        code: Option<i32>,
        #[source]
        source: Option<rusqlite::Error>,
    },

    /// The engine refused to release the connection
    ///
    /// The handle still owns the connection after this error. Callers
    /// should treat it as unrecoverable for that handle.
    #[error("Error at close database '{resource}': {message}")]
    Close {
        resource: String,
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    /// A statement was issued on a closed handle
    #[error("Database handle is not open")]
    NotOpen,

    /// Handle options could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DatabaseError {
    /// Create an open error from the engine failure
    pub fn open(resource: impl Into<String>, source: rusqlite::Error) -> Self {
        DatabaseError::Open {
            resource: resource.into(),
            message: engine_message(&source),
            source: Some(source),
        }
    }

    /// Create a statement error from an execution failure
    pub fn statement(source: rusqlite::Error) -> Self {
        DatabaseError::Statement {
            message: engine_message(&source),
            code: status_code(&source),
            source: Some(source),
        }
    }

    /// Create a statement error from a compilation (prepare) failure
    ///
    /// The engine status code is embedded in the message.
    pub fn compile(source: rusqlite::Error) -> Self {
        let code = status_code(&source);
        let message = match code {
            Some(code) => format!(
                "Unable to compile the SQL statement. Error code: {}. {}",
                code,
                engine_message(&source)
            ),
            None => format!(
                "Unable to compile the SQL statement. {}",
                engine_message(&source)
            ),
        };
        DatabaseError::Statement {
            message,
            code,
            source: Some(source),
        }
    }

    /// Create a close error from the engine failure
    pub fn close(resource: impl Into<String>, source: rusqlite::Error) -> Self {
        DatabaseError::Close {
            resource: resource.into(),
            message: engine_message(&source),
            source: Some(source),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DatabaseError::Config(msg.into())
    }

    /// Whether the handle that produced this error can no longer be trusted
    pub fn is_fatal(&self) -> bool {
        matches!(self, DatabaseError::Close { .. })
    }

    /// Engine status code carried by a statement error
    pub fn code(&self) -> Option<i32> {
        match self {
            DatabaseError::Statement { code, .. } => *code,
            _ => None,
        }
    }
}

/// Extended status code reported by the engine, if any
fn status_code(err: &rusqlite::Error) -> Option<i32> {
    err.sqlite_error().map(|e| e.extended_code)
}

/// Diagnostic text of an engine failure, without the driver's own framing
fn engine_message(err: &rusqlite::Error) -> String {
    match err {
        rusqlite::Error::SqliteFailure(failure, Some(msg)) => {
            if msg.is_empty() {
                failure.to_string()
            } else {
                msg.clone()
            }
        }
        rusqlite::Error::SqliteFailure(failure, None) => failure.to_string(),
        other => other.to_string(),
    }
}
