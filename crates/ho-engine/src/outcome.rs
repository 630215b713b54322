//! Per-report outcome.

use ho_score::Target;
use ho_trigger::{HandoverRequest, TriggerOutcome};

/// What happened to one measurement report.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReportOutcome {
    /// The terminal has no neighbour measurements; nothing was evaluated.
    Skipped,
    /// Evaluated, but no neighbour qualified.
    NoCandidate,
    /// A handover request was emitted.
    Fired(HandoverRequest),
    /// A neighbour qualified but the terminal was cooling down.
    Suppressed { target: Target, since_last: f64 },
}

impl ReportOutcome {
    /// Stable lowercase label, used in output files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportOutcome::Skipped => "skipped",
            ReportOutcome::NoCandidate => "no_candidate",
            ReportOutcome::Fired(_) => "fired",
            ReportOutcome::Suppressed { .. } => "suppressed",
        }
    }

    pub fn fired(&self) -> Option<&HandoverRequest> {
        match self {
            ReportOutcome::Fired(req) => Some(req),
            _ => None,
        }
    }
}

impl From<TriggerOutcome> for ReportOutcome {
    fn from(outcome: TriggerOutcome) -> Self {
        match outcome {
            TriggerOutcome::Fired(req) => ReportOutcome::Fired(req),
            TriggerOutcome::Suppressed { target, since_last } => {
                ReportOutcome::Suppressed { target, since_last }
            }
            TriggerOutcome::NoCandidate => ReportOutcome::NoCandidate,
        }
    }
}
