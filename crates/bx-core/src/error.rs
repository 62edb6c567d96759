//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `bx-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid weight table: {0}")]
    Weights(String),
}

/// Shorthand result type for all `bx-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
