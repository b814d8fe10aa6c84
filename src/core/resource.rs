//! Resource identifiers
//!
//! The engine decides what an identifier means; this type only names the
//! three forms it recognizes so callers and logs can tell them apart.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Reserved identifier for a purely in-memory database
pub const MEMORY: &str = ":memory:";

/// What a handle is (or will be) connected to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// Empty identifier: private on-disk database, deleted on close
    Temporary,
    /// `:memory:`
    Memory,
    /// Anything else, opened or created as a file
    File(PathBuf),
}

impl Resource {
    /// The identifier string handed to the engine
    pub fn as_str(&self) -> &str {
        match self {
            Resource::Temporary => "",
            Resource::Memory => MEMORY,
            Resource::File(path) => path.to_str().unwrap_or_default(),
        }
    }

    /// Path passed to the engine's open call
    pub fn as_path(&self) -> &Path {
        match self {
            Resource::File(path) => path.as_path(),
            _ => Path::new(self.as_str()),
        }
    }

    /// Check if the database lives on disk past the handle's lifetime
    pub fn is_persistent(&self) -> bool {
        matches!(self, Resource::File(_))
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Temporary => f.write_str("<temporary>"),
            Resource::Memory => f.write_str(MEMORY),
            Resource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for Resource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Resource::from(s))
    }
}

impl From<&str> for Resource {
    fn from(s: &str) -> Self {
        match s {
            "" => Resource::Temporary,
            MEMORY => Resource::Memory,
            path => Resource::File(PathBuf::from(path)),
        }
    }
}

impl From<String> for Resource {
    fn from(s: String) -> Self {
        Resource::from(s.as_str())
    }
}

impl From<&Path> for Resource {
    fn from(path: &Path) -> Self {
        match path.to_str() {
            Some(s) => Resource::from(s),
            None => Resource::File(path.to_path_buf()),
        }
    }
}

impl From<PathBuf> for Resource {
    fn from(path: PathBuf) -> Self {
        Resource::from(path.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_from_str() {
        assert_eq!("".parse::<Resource>().ok(), Some(Resource::Temporary));
        assert_eq!(":memory:".parse::<Resource>().ok(), Some(Resource::Memory));
        assert_eq!(
            "test.db".parse::<Resource>().ok(),
            Some(Resource::File(PathBuf::from("test.db")))
        );
    }

    #[test]
    fn test_resource_as_str() {
        assert_eq!(Resource::Temporary.as_str(), "");
        assert_eq!(Resource::Memory.as_str(), ":memory:");
        assert_eq!(Resource::from("data/app.db").as_str(), "data/app.db");
        assert_eq!(Resource::Memory.as_path(), Path::new(":memory:"));
    }

    #[test]
    fn test_resource_persistence() {
        assert!(!Resource::Temporary.is_persistent());
        assert!(!Resource::Memory.is_persistent());
        assert!(Resource::from("test.db").is_persistent());
    }
}
