//! Result cell types
//!
//! This module defines the tagged values produced when result rows are
//! materialized, and the row/row-set containers that hold them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Text stored in place of NULL when [`NullMode::SentinelText`] is selected
///
/// [`NullMode::SentinelText`]: crate::core::options::NullMode::SentinelText
pub const NULL_SENTINEL: &str = "null";

/// A single materialized column value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// 64-bit signed integer
    Integer(i64),
    /// Double precision floating point
    Float(f64),
    /// Text value
    Text(String),
    /// Binary data
    Blob(Vec<u8>),
    /// SQL NULL
    Null,
}

impl Cell {
    /// Get the value as an i64
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as an i32
    ///
    /// Returns `None` when the stored integer does not fit.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Cell::Integer(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Get the value as an f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as a string slice (zero-copy)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the value as bytes (zero-copy)
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Cell::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// Check if the value is null
    ///
    /// The sentinel text is not considered null; it is an ordinary text cell.
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Integer(_) => "integer",
            Cell::Float(_) => "float",
            Cell::Text(_) => "text",
            Cell::Blob(_) => "blob",
            Cell::Null => "null",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
            Cell::Blob(b) => write!(f, "<{} bytes>", b.len()),
            Cell::Null => f.write_str(NULL_SENTINEL),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Integer(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Integer(i64::from(v))
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Cell {
    fn from(v: Vec<u8>) -> Self {
        Cell::Blob(v)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Cell::Null,
        }
    }
}

/// A row of results (column name -> cell mapping)
pub type Row = HashMap<String, Cell>;

/// Rows returned from a statement, in the order the engine delivered them
pub type RowSet = Vec<Row>;
