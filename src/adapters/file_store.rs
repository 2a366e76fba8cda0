//! File-backed key-value store.
//!
//! All keys live in one JSON object on disk, by default
//! `~/.regionswitch/storage.json`.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// JSON file key-value store.
///
/// Every operation reads the file afresh; writes replace the whole file.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location. `None` if there is no home directory.
    pub fn at_default_location() -> Option<Self> {
        crate::config::default_store_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let file = File::open(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        let entries = serde_json::from_reader(BufReader::new(file))?;
        Ok(entries)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let file = File::create(&self.path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush().map_err(write_err)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // An unreadable file is replaced rather than blocking every write.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> FileKeyValueStore {
        FileKeyValueStore::new(temp_dir.path().join("nested").join("storage.json"))
    }

    #[test]
    fn test_get_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(store(&temp_dir).get("k").unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.set("region_sessions", r#"{"US":"t"}"#).unwrap();
        assert!(store.path().exists());

        let reopened = FileKeyValueStore::new(store.path());
        assert_eq!(
            reopened.get("region_sessions").unwrap(),
            Some(r#"{"US":"t"}"#.to_string())
        );
    }

    #[test]
    fn test_set_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();

        assert_eq!(store.get("a").unwrap(), Some("3".to_string()));
        assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.set("a", "1").unwrap();
        store.remove("a").unwrap();
        store.remove("never-there").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error_on_read_but_overwritten_on_set() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{broken").unwrap();

        assert!(matches!(store.get("a"), Err(StorageError::Serialization(_))));

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));
    }
}
