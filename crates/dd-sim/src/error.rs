use dd_core::CoreError;
use dd_depot::DepotError;
use dd_stream::StreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("dispatcher configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("order stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("warehouse error: {0}")]
    Depot(#[from] DepotError),
}

pub type SimResult<T> = Result<T, SimError>;
