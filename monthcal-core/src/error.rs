//! Error types for monthcal.

use thiserror::Error;

/// Errors from storage, configuration and serialization.
///
/// None of these reach the presentation layer during normal rendering: the
/// store recovers from them locally and logs.
#[derive(Error, Debug)]
pub enum CalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for monthcal operations.
pub type CalResult<T> = Result<T, CalError>;

/// Rejection of a user-entered event, meant to be shown to the user as is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Date is required")]
    MissingDate,

    #[error("Start time is required")]
    MissingStartTime,
}
