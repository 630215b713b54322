//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DecisionRow, HandoverRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface through [`DecisionObserver::take_error`][crate::DecisionObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write a batch of decision rows.
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()>;

    /// Write one fired handover.
    fn write_handover(&mut self, row: &HandoverRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent - safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
