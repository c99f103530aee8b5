//! Vitals error types.

use p29_storage::StorageError;
use thiserror::Error;

/// Vitals operation result type.
pub type VitalsResult<T> = Result<T, VitalsError>;

/// Vitals error types.
#[derive(Debug, Error)]
pub enum VitalsError {
    /// Metric name not one of the tracked vitals.
    #[error("Unknown metric: {0}. Use CLS, FID, FCP, LCP, TTFB or INP.")]
    UnknownMetric(String),

    /// Measured value is not a finite, non-negative number.
    #[error("Invalid value for {metric}: {value}")]
    InvalidValue {
        /// Metric being recorded.
        metric: String,
        /// Rejected value.
        value: f64,
    },

    /// The persisted analytics document could not be parsed.
    #[error("Corrupt analytics document: {0}")]
    CorruptDocument(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
