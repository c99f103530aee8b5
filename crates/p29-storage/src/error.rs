//! Storage error types.

use thiserror::Error;

/// Storage operation result type.
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage error types.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lock guarding the store was poisoned.
    #[error("Lock error: {0}")]
    Lock(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    pub(crate) fn lock<E: std::fmt::Display>(err: E) -> Self {
        Self::Lock(err.to_string())
    }
}
