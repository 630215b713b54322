use ho_core::CellId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    /// A malformed trajectory sample.  Loaders log it, skip the line, and
    /// keep scanning; it never aborts a load.
    #[error("trace line {line}: {reason}")]
    TraceParse { line: u64, reason: String },

    #[error("cell site line {line}: {reason}")]
    SiteParse { line: u64, reason: String },

    #[error("cell {0} listed more than once")]
    DuplicateCell(CellId),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PredictResult<T> = Result<T, PredictError>;
