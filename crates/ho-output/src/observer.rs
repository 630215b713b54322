//! `DecisionObserver<W>` - bridges `HandoverObserver` to an `OutputWriter`.

use ho_core::{MeasurementReport, SimTime};
use ho_engine::{HandoverObserver, ReportOutcome};
use ho_score::Decision;
use ho_trigger::HandoverRequest;
use tracing::warn;

use crate::row::{DecisionRow, HandoverRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Decision rows buffered before a batch write.
const DECISION_BATCH: usize = 512;

/// A [`HandoverObserver`] that records every decision and every fired
/// handover through any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Check them with [`take_error`][Self::take_error],
/// and call [`finish`][Self::finish] once processing is over.
pub struct DecisionObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<DecisionRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> DecisionObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: Vec::with_capacity(DECISION_BATCH), last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write buffered rows and finish the writer.  Returns the first error
    /// seen during the run, if any.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.flush_decisions();
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
        match self.last_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_decisions(&mut self) -> OutputResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let result = self.writer.write_decisions(&self.pending);
        self.pending.clear();
        result
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "decision output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> HandoverObserver for DecisionObserver<W> {
    fn on_decision(
        &mut self,
        report:   &MeasurementReport,
        decision: &Decision,
        outcome:  &ReportOutcome,
        now:      SimTime,
    ) {
        self.pending.push(DecisionRow::new(report, decision, outcome, now));
        if self.pending.len() >= DECISION_BATCH {
            let result = self.flush_decisions();
            self.store_err(result);
        }
    }

    fn on_handover(&mut self, request: &HandoverRequest) {
        let result = self.writer.write_handover(&HandoverRow::from(request));
        self.store_err(result);
    }
}
