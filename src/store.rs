//! JSON file access for the catalog.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{CatalogError, CatalogResult};

/// Reads catalog files from a single data directory.
///
/// Files are read on every call; nothing is cached between requests.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a file inside the data directory.
    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Whether the data directory exists.
    pub fn is_available(&self) -> bool {
        self.root.is_dir()
    }

    /// Read and parse `file`, returning `None` when it does not exist.
    pub fn read_optional<T: DeserializeOwned>(&self, file: &str) -> CatalogResult<Option<T>> {
        let path = self.path(file);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CatalogError::Io { path, source }),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| CatalogError::Parse { path, source })
    }

    /// Read and parse `file`; a missing file is [`CatalogError::MissingFile`].
    pub fn read_required<T: DeserializeOwned>(&self, file: &str) -> CatalogResult<T> {
        self.read_optional(file)?
            .ok_or_else(|| CatalogError::MissingFile(self.path(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none_or_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DataStore::new(dir.path());

        let loaded: Option<Vec<u32>> = store.read_optional("absent.json").unwrap();
        assert!(loaded.is_none());

        let err = store.read_required::<Vec<u32>>("absent.json").unwrap_err();
        assert!(matches!(err, CatalogError::MissingFile(_)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "[1, 2,").unwrap();
        let store = DataStore::new(dir.path());

        let err = store.read_optional::<Vec<u32>>("bad.json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn reads_and_reports_availability() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ids.json"), "[3, 1, 2]").unwrap();
        let store = DataStore::new(dir.path());

        assert!(store.is_available());
        assert_eq!(store.read_required::<Vec<u32>>("ids.json").unwrap(), vec![3, 1, 2]);
        assert!(!DataStore::new(dir.path().join("nope")).is_available());
    }
}
