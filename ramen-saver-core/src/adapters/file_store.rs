//! File-backed key-value store
//!
//! All keys live in one JSON object file under the data directory, the
//! closest local analogue to a browser's localStorage namespace. Every `set`
//! is a read-modify-write of the whole map; two concurrent writers are not
//! coordinated and the last write wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::warn;

use crate::domain::{Error, Result};
use crate::ports::KeyValueStore;

const STORAGE_FILE_NAME: &str = "local-storage.json";

/// Key-value store persisted as `<data_dir>/local-storage.json`
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `data_dir`; the file is created lazily on
    /// first write
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STORAGE_FILE_NAME),
        }
    }

    /// Load the full map; a missing or corrupt file reads as empty
    fn load(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::persistence(format!("failed to read {}: {e}", self.path.display()))
        })?;
        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!(
                    "storage file {} is not a valid JSON object ({e}); treating as empty",
                    self.path.display()
                );
                Ok(HashMap::new())
            }
        }
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::persistence(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| Error::persistence(format!("failed to encode storage map: {e}")))?;
        std::fs::write(&self.path, content).map_err(|e| {
            Error::persistence(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileKeyValueStore::new(dir.path());
            store.set("a", "1").unwrap();
            store.set("b", "2").unwrap();
        }
        let store = FileKeyValueStore::new(dir.path());
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));
        assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_reads_as_empty_and_is_recoverable() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(STORAGE_FILE_NAME), "{{{ not json").unwrap();

        let store = FileKeyValueStore::new(dir.path());
        assert_eq!(store.get("k").unwrap(), None);

        // Writes go through and repair the file
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_remove_persists() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();

        let reopened = FileKeyValueStore::new(dir.path());
        assert_eq!(reopened.get("k").unwrap(), None);
    }
}
