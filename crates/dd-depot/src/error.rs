use dd_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DepotError {
    /// A head-of-queue operation was called with nothing pending.  Callers
    /// must check `has_pending` first.
    #[error("{operation} called on a warehouse with no pending orders")]
    Empty { operation: &'static str },

    #[error("invalid depot configuration: {0}")]
    Config(#[from] CoreError),
}

pub type DepotResult<T> = Result<T, DepotError>;
