//! Plain data row types written by output backends.

use ho_core::{MeasurementReport, SimTime};
use ho_engine::ReportOutcome;
use ho_score::Decision;
use ho_trigger::HandoverRequest;

/// One evaluated report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRow {
    pub time:         f64,
    pub terminal_id:  u32,
    pub serving_cell: u16,
    pub serving_rsrq: u8,
    /// Selected target, if any (written even when suppressed).
    pub best_cell:    Option<u16>,
    pub best_score:   Option<f64>,
    /// `ReportOutcome::as_str` label.
    pub outcome:      &'static str,
}

impl DecisionRow {
    pub fn new(report: &MeasurementReport, decision: &Decision, outcome: &ReportOutcome, now: SimTime) -> Self {
        Self {
            time:         now.secs(),
            terminal_id:  report.terminal.0,
            serving_cell: report.serving_cell.0,
            serving_rsrq: report.serving_rsrq.0,
            best_cell:    decision.best.map(|t| t.cell.0),
            best_score:   decision.best.map(|t| t.score),
            outcome:      outcome.as_str(),
        }
    }
}

/// One fired handover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandoverRow {
    pub time:        f64,
    pub terminal_id: u32,
    pub source_cell: u16,
    pub target_cell: u16,
}

impl From<&HandoverRequest> for HandoverRow {
    fn from(req: &HandoverRequest) -> Self {
        Self {
            time:        req.time.secs(),
            terminal_id: req.terminal.0,
            source_cell: req.source.0,
            target_cell: req.target.0,
        }
    }
}
