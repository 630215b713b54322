//! Trigger state and per-decision outcome.

use ho_score::Target;

use crate::HandoverRequest;

/// Derived per-terminal trigger state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TriggerState {
    /// No handover within the cooldown interval; the next qualifying target fires.
    Idle,
    /// A handover fired recently; qualifying targets are dropped for
    /// `remaining` more time-units.
    CoolingDown { remaining: f64 },
}

impl TriggerState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, TriggerState::Idle)
    }
}

/// What the trigger did with one decision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TriggerOutcome {
    /// The request was recorded and handed to the sink.
    Fired(HandoverRequest),
    /// A qualifying target arrived during cooldown and was dropped.  It is
    /// not queued or retried.
    Suppressed { target: Target, since_last: f64 },
    /// The decision carried no qualifying target.
    NoCandidate,
}

impl TriggerOutcome {
    pub fn fired(&self) -> Option<&HandoverRequest> {
        match self {
            TriggerOutcome::Fired(req) => Some(req),
            _ => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, TriggerOutcome::Suppressed { .. })
    }
}
