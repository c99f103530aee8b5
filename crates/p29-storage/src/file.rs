//! JSON file storage adapter.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::adapter::KeyValueStore;
use crate::error::{StorageError, StorageResult};

/// Storage adapter backed by a single JSON object on disk.
///
/// The file is read once on [`FileStore::open`] and rewritten after every
/// mutation. It is created (with parent directories) on first write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, loading existing contents if the file exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be read, or
    /// `StorageError::Deserialization` if it is not a JSON object of strings.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    StorageError::Deserialization(format!("{}: {e}", path.display()))
                })?
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = values.len(), "opened file store");

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the backing file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(values)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self
            .values
            .read()
            .map_err(StorageError::lock)?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut values = self.values.write().map_err(StorageError::lock)?;
        let mut next = values.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *values = next;
        debug!(key, "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        let mut values = self.values.write().map_err(StorageError::lock)?;
        if !values.contains_key(key) {
            return Ok(false);
        }
        let mut next = values.clone();
        next.remove(key);
        self.persist(&next)?;
        *values = next;
        debug!(key, "removed value");
        Ok(true)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self
            .values
            .read()
            .map_err(StorageError::lock)?
            .keys()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json")).unwrap();
        assert!(!store.exists());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("p29").join("store.json");
        let store = FileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(StorageError::Deserialization(_))
        ));
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = FileStore::open(&path).unwrap();
        store.set("kept", "1").unwrap();

        // Parent "directory" is a regular file, so every persist fails.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let broken = FileStore {
            path: blocker.join("store.json"),
            values: RwLock::new(store.values.read().unwrap().clone()),
        };

        assert!(broken.set("fiscal", "june").is_err());
        assert_eq!(broken.get("fiscal").unwrap(), None);

        assert!(broken.remove("kept").is_err());
        assert_eq!(broken.get("kept").unwrap(), Some("1".to_string()));
    }

    #[test]
    fn test_empty_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "").unwrap();
        assert!(FileStore::open(&path).unwrap().keys().unwrap().is_empty());
    }
}
