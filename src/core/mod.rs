//! Core types and traits
//!
//! This module provides the fundamental building blocks for the handle,
//! including error types, the database trait, cell types and options.

pub mod database;
pub mod error;
pub mod options;
pub mod resource;
pub mod value;

// Re-export commonly used types
pub use database::Database;
pub use error::{DatabaseError, Result};
pub use options::{HandleOptions, NullMode, MAX_BUSY_TIMEOUT_MS};
pub use resource::Resource;
pub use value::{Cell, Row, RowSet, NULL_SENTINEL};
