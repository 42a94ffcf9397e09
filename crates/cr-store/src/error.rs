//! Error types for cr-store.

use thiserror::Error;

/// Errors raised while reading, writing or loading road/vehicle data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("parse error: {0}")]
    Parse(String),

    /// The backing store cannot serve the request right now.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
