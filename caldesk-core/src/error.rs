//! Error types for caldesk.

use thiserror::Error;

/// Errors that can occur in caldesk operations.
///
/// Widget interactions never fail; only configuration loading and storage
/// writes surface one of these.
#[derive(Error, Debug)]
pub enum CalDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CalDeskError {
    fn from(err: serde_json::Error) -> Self {
        CalDeskError::Serialization(err.to_string())
    }
}

/// Result type alias for caldesk operations.
pub type CalDeskResult<T> = Result<T, CalDeskError>;
