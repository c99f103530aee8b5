//! Error types for the P29 compliance calendar.

use thiserror::Error;

/// A specialized Result type for calendar operations.
pub type PlaybookResult<T> = Result<T, PlaybookError>;

/// The main error type for calendar operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybookError {
    /// An argument was outside the domain the operation accepts.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the rejected argument.
        reason: String,
    },

    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl PlaybookError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Returns true if this is an [`PlaybookError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
