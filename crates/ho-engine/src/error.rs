use ho_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("handover configuration error: {0}")]
    Config(#[from] CoreError),
}

pub type EngineResult<T> = Result<T, EngineError>;
