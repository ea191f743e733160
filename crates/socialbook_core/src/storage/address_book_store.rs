//! Contact store contract and JSON file implementation.
//!
//! # Responsibility
//! - Persist one contact collection per durable location.
//! - Reject invalid persisted state on read instead of masking it.
//!
//! # Invariants
//! - Read reflects the latest durable state; nothing is cached across calls.
//! - A duplicate identity key inside one file is malformed data, not a merge
//!   situation, and fails the whole read.

use crate::model::address_book::AddressBook;
use crate::model::person::Person;
use crate::storage::json::{read_json_file, write_json_file};
use crate::storage::{DataLoadCause, StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Durable store for one contact collection.
pub trait AddressBookStore {
    /// The durable location this store reads and writes.
    fn path(&self) -> &Path;

    /// Loads the stored collection.
    ///
    /// # Contract
    /// - `Ok(None)` when the location has no data yet.
    /// - `DataLoad` when content exists but cannot be loaded; the error
    ///   carries this store's path.
    fn read(&self) -> StorageResult<Option<AddressBook>>;

    /// Persists the full collection, replacing prior content atomically.
    ///
    /// An empty collection is a valid value and truncates the store.
    fn write(&self, book: &AddressBook) -> StorageResult<()>;
}

/// Serialized file shape: a self-describing person list.
#[derive(Serialize, Deserialize)]
struct StoredAddressBook {
    persons: Vec<Person>,
}

/// File-backed JSON contact store.
pub struct JsonAddressBookStore {
    path: PathBuf,
}

impl JsonAddressBookStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn decode(&self, stored: StoredAddressBook) -> StorageResult<AddressBook> {
        for person in &stored.persons {
            person.validate().map_err(|err| {
                StorageError::data_load(&self.path, DataLoadCause::Invalid(err.to_string()))
            })?;
        }
        AddressBook::from_persons(stored.persons).map_err(|err| {
            StorageError::data_load(&self.path, DataLoadCause::Invalid(err.to_string()))
        })
    }
}

impl AddressBookStore for JsonAddressBookStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StorageResult<Option<AddressBook>> {
        match read_json_file::<StoredAddressBook>(&self.path)? {
            Some(stored) => Ok(Some(self.decode(stored)?)),
            None => Ok(None),
        }
    }

    fn write(&self, book: &AddressBook) -> StorageResult<()> {
        let stored = StoredAddressBook {
            persons: book.persons().to_vec(),
        };
        write_json_file(&self.path, &stored)
    }
}
