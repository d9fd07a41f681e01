//! Core error type.
//!
//! Sub-crates define their own error enums.  `dd-depot` wraps `CoreError`
//! via `#[from]`; the order loader folds it into a line-numbered parse error.

use thiserror::Error;

/// The error type for `dd-core` value construction and parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid destination code {code:?}: {reason}")]
    Destination { code: String, reason: String },

    #[error("invalid time {value:?}: {reason}")]
    Time { value: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `dd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
