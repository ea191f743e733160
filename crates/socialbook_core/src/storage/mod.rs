//! Storage layer: file-backed stores and split-store reconciliation.
//!
//! # Responsibility
//! - Define the read/write contract every durable store follows.
//! - Keep serialization details inside the storage boundary.
//!
//! # Invariants
//! - A missing file is *absent* (`Ok(None)`), never an error.
//! - Malformed content is always surfaced as `DataLoad` with its path;
//!   treating a bad store as empty would let a later save erase it.
//! - Writes replace whole files atomically; no reader observes a half-write.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod address_book_store;
pub mod appointment_store;
mod json;
pub mod manager;
pub mod prefs_store;

pub type StorageResult<T> = Result<T, StorageError>;

/// Why content at an existing location failed to load.
#[derive(Debug)]
pub enum DataLoadCause {
    /// The file exists but could not be read.
    Io(io::Error),
    /// The file was read but is not valid JSON for the expected shape.
    Json(serde_json::Error),
    /// The file decoded but violates model invariants.
    Invalid(String),
}

impl Display for DataLoadCause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::Invalid(message) => write!(f, "{message}"),
        }
    }
}

impl Error for DataLoadCause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

/// Storage-layer error for durable read/write operations.
#[derive(Debug)]
pub enum StorageError {
    /// Content exists at `path` but cannot be loaded.
    DataLoad { path: PathBuf, cause: DataLoadCause },
    /// A durable write to `path` could not complete.
    WriteFailure { path: PathBuf, source: io::Error },
}

impl StorageError {
    pub(crate) fn data_load(path: impl Into<PathBuf>, cause: DataLoadCause) -> Self {
        Self::DataLoad {
            path: path.into(),
            cause,
        }
    }

    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Returns the durable location this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DataLoad { path, .. } => path,
            Self::WriteFailure { path, .. } => path,
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataLoad { path, cause } => {
                write!(f, "failed to load data from `{}`: {cause}", path.display())
            }
            Self::WriteFailure { path, source } => {
                write!(f, "failed to write data to `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DataLoad { cause, .. } => Some(cause),
            Self::WriteFailure { source, .. } => Some(source),
        }
    }
}
