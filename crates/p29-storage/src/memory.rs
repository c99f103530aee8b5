//! In-memory storage adapter.
//!
//! Provides a simple in-memory implementation of the KeyValueStore trait.
//! Useful for testing and embedding. Data is not persisted across restarts.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::adapter::KeyValueStore;
use crate::error::{StorageError, StorageResult};

/// In-memory storage adapter.
///
/// Thread-safe through the use of RwLock.
///
/// # Example
///
/// ```rust
/// use p29_storage::{InMemoryStore, KeyValueStore};
///
/// let store = InMemoryStore::new();
/// assert_eq!(store.backend_name(), "memory");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all data from the store.
    pub fn clear(&self) -> StorageResult<()> {
        self.values.write().map_err(StorageError::lock)?.clear();
        Ok(())
    }
}

impl KeyValueStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
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
        self.values
            .write()
            .map_err(StorageError::lock)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        Ok(self
            .values
            .write()
            .map_err(StorageError::lock)?
            .remove(key)
            .is_some())
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
