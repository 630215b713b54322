//! Base error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers configuration
//! validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ho-core`.
pub type CoreResult<T> = Result<T, CoreError>;
