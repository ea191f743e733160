//! User preference store contract and JSON file implementation.
//!
//! # Responsibility
//! - Persist the single preference object, not a collection.
//!
//! # Invariants
//! - Absent on first run; the caller constructs defaults in that case.

use crate::model::user_prefs::UserPrefs;
use crate::storage::json::{read_json_file, write_json_file};
use crate::storage::StorageResult;
use std::path::{Path, PathBuf};

/// Durable store for the process-wide preference object.
pub trait UserPrefsStore {
    fn path(&self) -> &Path;

    /// Loads preferences; `Ok(None)` means first run, use defaults.
    fn read(&self) -> StorageResult<Option<UserPrefs>>;

    /// Persists preferences, replacing prior content atomically.
    fn write(&self, prefs: &UserPrefs) -> StorageResult<()>;
}

/// File-backed JSON preference store.
pub struct JsonUserPrefsStore {
    path: PathBuf,
}

impl JsonUserPrefsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserPrefsStore for JsonUserPrefsStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StorageResult<Option<UserPrefs>> {
        read_json_file(&self.path)
    }

    fn write(&self, prefs: &UserPrefs) -> StorageResult<()> {
        write_json_file(&self.path, prefs)
    }
}
