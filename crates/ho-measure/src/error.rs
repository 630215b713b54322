use ho_core::TerminalId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeasureError {
    /// No neighbour has been reported for this terminal yet.  This is the
    /// normal state right after attach; callers skip the evaluation.
    #[error("no neighbour measurements recorded for {0}")]
    NoNeighbours(TerminalId),
}

pub type MeasureResult<T> = Result<T, MeasureError>;
