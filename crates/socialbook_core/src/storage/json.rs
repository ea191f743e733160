//! Shared JSON file primitives for durable stores.
//!
//! # Responsibility
//! - Read one JSON document per location, distinguishing absent from broken.
//! - Replace files atomically so no reader observes a half-written document.
//!
//! # Invariants
//! - The temp file is created in the destination directory, so the final
//!   rename never crosses a filesystem boundary.
//! - A failed write leaves prior content at the destination untouched.

use crate::storage::{DataLoadCause, StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads and decodes the JSON document at `path`.
///
/// Returns `Ok(None)` when the file does not exist; decoding problems and
/// read-side I/O failures surface as `DataLoad` carrying `path`.
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(StorageError::data_load(path, DataLoadCause::Io(err))),
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(Some(value)),
        Err(err) => Err(StorageError::data_load(path, DataLoadCause::Json(err))),
    }
}

/// Serializes `value` and atomically replaces the document at `path`.
///
/// Creates missing parent directories. The document is written to a temp
/// file in the same directory, flushed, then renamed over the destination.
pub(crate) fn write_json_file<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)
                .map_err(|err| StorageError::write_failure(path, err))?;
            parent
        }
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|err| StorageError::write_failure(path, err))?;
    serde_json::to_writer_pretty(&mut tmp, value)
        .map_err(|err| StorageError::write_failure(path, io::Error::other(err)))?;
    tmp.write_all(b"\n")
        .map_err(|err| StorageError::write_failure(path, err))?;
    tmp.as_file()
        .sync_all()
        .map_err(|err| StorageError::write_failure(path, err))?;
    tmp.persist(path)
        .map_err(|err| StorageError::write_failure(path, err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_json_file, write_json_file};
    use crate::storage::{DataLoadCause, StorageError};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        label: String,
    }

    #[test]
    fn missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<Doc> = read_json_file(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn write_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        write_json_file(&path, &Doc { label: "first".into() }).unwrap();
        write_json_file(&path, &Doc { label: "second".into() }).unwrap();

        let loaded: Option<Doc> = read_json_file(&path).unwrap();
        assert_eq!(loaded, Some(Doc { label: "second".into() }));
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("doc.json");

        write_json_file(&path, &Doc { label: "nested".into() }).unwrap();

        let loaded: Option<Doc> = read_json_file(&path).unwrap();
        assert_eq!(loaded, Some(Doc { label: "nested".into() }));
    }

    #[test]
    fn garbage_content_is_a_data_load_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let err = read_json_file::<Doc>(&path).unwrap_err();
        match err {
            StorageError::DataLoad { path: reported, cause: DataLoadCause::Json(_) } => {
                assert_eq!(reported, path);
            }
            other => panic!("expected DataLoad/Json, got {other:?}"),
        }
    }
}
