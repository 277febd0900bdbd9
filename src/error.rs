use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Collection outcomes
// =============================================================================

/// Recoverable outcomes of container operations.
///
/// The plain APIs (`pop`, `push`, `delete`, ...) report these through
/// `Option` and `bool`. The `try_*` and `remove` variants return this enum
/// so callers can use `?`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    #[error("container is empty")]
    Empty,

    #[error("container is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("no matching element found")]
    NotFound,
}

impl CollectionError {
    pub fn full(capacity: usize) -> Self {
        Self::Full { capacity }
    }
}

/// A push rejected by a full [`BoundedStack`](crate::BoundedStack).
///
/// Owns the rejected item so nothing is lost.
#[derive(Error, PartialEq, Eq)]
#[error("stack is full (capacity {capacity})")]
pub struct CapacityError<T> {
    item: T,
    capacity: usize,
}

impl<T> CapacityError<T> {
    pub(crate) fn new(item: T, capacity: usize) -> Self {
        CapacityError { item, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn into_item(self) -> T {
        self.item
    }
}

// Manual impl so `T` needn't be `Debug` for the error to be usable with `?`.
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> From<CapacityError<T>> for CollectionError {
    fn from(err: CapacityError<T>) -> Self {
        CollectionError::full(err.capacity)
    }
}

// =============================================================================
// Demo configuration
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}
