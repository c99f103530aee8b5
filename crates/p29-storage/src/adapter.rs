//! Key-value store trait definition.
//!
//! This module defines the `KeyValueStore` trait that all storage
//! backends implement.

use crate::error::StorageResult;

/// String-keyed, string-valued store.
///
/// Values are opaque text; callers that keep structured data serialize it
/// to JSON themselves. Methods are synchronous and take `&self`, so backends
/// guard their state internally.
///
/// # Example
///
/// ```rust
/// use p29_storage::{InMemoryStore, KeyValueStore};
///
/// let store = InMemoryStore::new();
/// store.set("greeting", "hello").unwrap();
/// assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Returns the backend name for logging.
    fn backend_name(&self) -> &'static str;

    /// Retrieves the value stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Returns true if a value was present.
    fn remove(&self, key: &str) -> StorageResult<bool>;

    /// Lists all keys in ascending order.
    fn keys(&self) -> StorageResult<Vec<String>>;
}
