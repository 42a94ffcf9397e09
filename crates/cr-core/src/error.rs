//! Shared error type.
//!
//! Sub-crates define their own error enums (`RoutingError`, `StoreError`,
//! `ServiceError`) and wrap `CrError` where a lower-level failure surfaces.

use thiserror::Error;

/// The base error type for `cr-core` and the front ends.
#[derive(Debug, Error)]
pub enum CrError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type.
pub type CrResult<T> = Result<T, CrError>;
