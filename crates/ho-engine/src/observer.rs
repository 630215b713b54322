//! Controller observer trait for logging and data collection.

use ho_core::{MeasurementReport, SimTime, TerminalId};
use ho_score::{Decision, Target};
use ho_trigger::HandoverRequest;

use crate::ReportOutcome;

/// Callbacks invoked by the controller while it processes reports.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Call order for one report
///
/// ```text
/// on_report
///   ├─ on_skipped                              (no neighbour data)
///   └─ on_decision ─┬─ on_handover             (fired)
///                   └─ on_suppressed           (cooling down)
/// ```
///
/// In a batch every `on_report` comes first, then the per-report tails in
/// report order.
pub trait HandoverObserver {
    /// A report arrived and was applied to the store.
    fn on_report(&mut self, _report: &MeasurementReport, _now: SimTime) {}

    /// Evaluation was skipped for lack of neighbour data.
    fn on_skipped(&mut self, _terminal: TerminalId, _now: SimTime) {}

    /// An evaluation completed and the trigger acted on it.
    fn on_decision(
        &mut self,
        _report:   &MeasurementReport,
        _decision: &Decision,
        _outcome:  &ReportOutcome,
        _now:      SimTime,
    ) {}

    /// A handover request was handed to the sink.
    fn on_handover(&mut self, _request: &HandoverRequest) {}

    /// A qualifying target was dropped during cooldown.
    fn on_suppressed(
        &mut self,
        _terminal:   TerminalId,
        _target:     &Target,
        _since_last: f64,
        _now:        SimTime,
    ) {}
}

/// A [`HandoverObserver`] that does nothing.
pub struct NoopObserver;

impl HandoverObserver for NoopObserver {}

/// Tallies report outcomes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutcomeCounter {
    pub reports:    u64,
    pub skipped:    u64,
    pub decisions:  u64,
    pub handovers:  u64,
    pub suppressed: u64,
}

impl OutcomeCounter {
    /// Decisions that neither fired nor were suppressed.
    pub fn no_candidate(&self) -> u64 {
        self.decisions - self.handovers - self.suppressed
    }
}

impl HandoverObserver for OutcomeCounter {
    fn on_report(&mut self, _report: &MeasurementReport, _now: SimTime) {
        self.reports += 1;
    }

    fn on_skipped(&mut self, _terminal: TerminalId, _now: SimTime) {
        self.skipped += 1;
    }

    fn on_decision(
        &mut self,
        _report:   &MeasurementReport,
        _decision: &Decision,
        _outcome:  &ReportOutcome,
        _now:      SimTime,
    ) {
        self.decisions += 1;
    }

    fn on_handover(&mut self, _request: &HandoverRequest) {
        self.handovers += 1;
    }

    fn on_suppressed(&mut self, _terminal: TerminalId, _target: &Target, _since_last: f64, _now: SimTime) {
        self.suppressed += 1;
    }
}
