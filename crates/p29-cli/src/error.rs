//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// No store location could be determined.
    #[error("Could not determine config directory; pass --store or set P29_STORE")]
    NoStoreLocation,

    /// Performance budget exceeded.
    #[error("Performance budget failed with {0} violation(s)")]
    BudgetFailed(usize),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
