//! # Rust SQLite Handle
//!
//! A small, synchronous handle over an embedded SQLite engine. It opens and
//! closes one connection, runs statement text, and materializes result rows
//! into maps from column name to a typed [`Cell`].
//!
//! ## Features
//!
//! - **Typed cells**: integer, float, text, blob and null, chosen per value
//!   from the engine's own type tag
//! - **Explicit lifecycle**: a handle is either closed or holds exactly one
//!   open connection
//! - **Uniform errors**: open, statement and close failures surface as
//!   [`DatabaseError`] variants carrying the engine's diagnostic
//! - **Configurable**: read-only mode, busy timeout, foreign keys and NULL
//!   representation through [`HandleOptions`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_sqlite_handle::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Open an in-memory database
//!     let db = SqliteDatabase::connect(":memory:")?;
//!
//!     db.exec("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT)")?;
//!     db.exec("INSERT INTO users (name) VALUES ('Alice')")?;
//!
//!     for row in db.query("SELECT * FROM users")? {
//!         if let Some(name) = row.get("name") {
//!             println!("User: {}", name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Reusing a row set
//!
//! ```rust,no_run
//! use rust_sqlite_handle::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut db = SqliteDatabase::new();
//!     db.open("app.db")?;
//!
//!     let mut rows = RowSet::new();
//!     db.exec_into("SELECT id FROM users", &mut rows)?;
//!     // Cleared and refilled, not appended to
//!     db.exec_into("SELECT id FROM users WHERE id > 10", &mut rows)?;
//!
//!     db.close()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Resource identifiers
//!
//! | Identifier | Database |
//! |------------|----------|
//! | `""` | Private on-disk database, removed on close |
//! | `":memory:"` | In-memory database |
//! | anything else | File, created if missing |
//!
//! ## Threading
//!
//! A handle owns one connection and does no locking. It can move between
//! threads but not be shared; open one handle per thread instead.

/// Core types and traits
pub mod core;

/// Database backend implementations
pub mod backends;

/// Prelude for convenient imports
///
/// ```rust
/// use rust_sqlite_handle::prelude::*;
///
/// fn main() -> Result<()> {
///     let mut db = SqliteDatabase::connect(":memory:")?;
///     db.close()?;
///     Ok(())
/// }
/// ```
pub mod prelude {
    pub use crate::core::{
        Cell, Database, DatabaseError, HandleOptions, NullMode, Resource, Result, Row, RowSet,
    };

    pub use crate::backends::SqliteDatabase;
}

// Re-export at root level for convenience
pub use core::{
    Cell, Database, DatabaseError, HandleOptions, NullMode, Resource, Result, Row, RowSet,
    MAX_BUSY_TIMEOUT_MS, NULL_SENTINEL,
};

pub use backends::SqliteDatabase;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use prelude::*;

        let resource: Resource = ":memory:".into();
        assert_eq!(resource, Resource::Memory);
        assert_eq!(HandleOptions::default().null_mode, NullMode::Variant);
    }

    #[test]
    fn test_value_conversions() {
        use prelude::*;

        let val: Cell = 42i64.into();
        assert_eq!(val.as_integer(), Some(42));

        let val: Cell = "test".into();
        assert_eq!(val.as_text(), Some("test"));

        let val: Cell = Option::<f64>::None.into();
        assert!(val.is_null());
    }
}
