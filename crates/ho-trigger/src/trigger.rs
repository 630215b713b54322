//! The per-terminal cooldown table.

use std::collections::HashMap;

use ho_core::{CellId, Rsrq, SimTime, TerminalId};
use ho_score::Target;
use tracing::{info, warn};

use crate::{HandoverRequest, HandoverSink, TriggerOutcome, TriggerState};

/// Slack on the cooldown boundary; `0.7 - 0.2` is just below `0.5` in f64.
const COOLDOWN_EPS: f64 = 1e-9;

/// Anti-oscillation guard: at most one handover per terminal per
/// `cooldown_secs`.
///
/// Entries are created by the first fired handover, updated by every later
/// one, and removed only by [`forget`](Self::forget) when the terminal's
/// connection is released.
#[derive(Clone, Debug)]
pub struct HandoverTrigger {
    cooldown_secs: f64,
    last:          HashMap<TerminalId, SimTime>,
}

impl HandoverTrigger {
    pub fn new(cooldown_secs: f64) -> Self {
        Self { cooldown_secs, last: HashMap::new() }
    }

    pub fn cooldown_secs(&self) -> f64 {
        self.cooldown_secs
    }

    /// Time of the last fired handover for `terminal`.
    pub fn last_handover(&self, terminal: TerminalId) -> Option<SimTime> {
        self.last.get(&terminal).copied()
    }

    /// State of `terminal` at `now`.
    pub fn state(&self, terminal: TerminalId, now: SimTime) -> TriggerState {
        match self.last.get(&terminal) {
            Some(&last) if self.cooling(now.since(last)) => TriggerState::CoolingDown {
                remaining: self.cooldown_secs - now.since(last),
            },
            _ => TriggerState::Idle,
        }
    }

    fn cooling(&self, since_last: f64) -> bool {
        since_last < self.cooldown_secs - COOLDOWN_EPS
    }

    /// Drop the cooldown entry of a released terminal.
    pub fn forget(&mut self, terminal: TerminalId) -> Option<SimTime> {
        self.last.remove(&terminal)
    }

    /// Number of terminals with a cooldown entry.
    pub fn tracked(&self) -> usize {
        self.last.len()
    }

    /// Act on the best target of one decision.
    ///
    /// The target qualifies if it differs from the serving cell and its RSRQ
    /// strictly exceeds the serving RSRQ.  A qualifying target fires when the
    /// terminal is idle and is suppressed otherwise.  A clock that runs
    /// backwards reads as "still cooling down".
    pub fn apply<S: HandoverSink + ?Sized>(
        &mut self,
        terminal:     TerminalId,
        serving_cell: CellId,
        serving_rsrq: Rsrq,
        best:         Option<Target>,
        now:          SimTime,
        sink:         &mut S,
    ) -> TriggerOutcome {
        let Some(target) = best.filter(|t| t.cell != serving_cell && t.rsrq > serving_rsrq) else {
            return TriggerOutcome::NoCandidate;
        };

        if let Some(&last) = self.last.get(&terminal) {
            let since_last = now.since(last);
            if self.cooling(since_last) {
                warn!(
                    %terminal,
                    target = %target.cell,
                    since_last,
                    cooldown = self.cooldown_secs,
                    "handover suppressed during cooldown"
                );
                return TriggerOutcome::Suppressed { target, since_last };
            }
        }

        self.last.insert(terminal, now);
        let request = HandoverRequest { terminal, source: serving_cell, target: target.cell, time: now };
        info!(%request, score = target.score, "handover triggered");
        sink.submit(request);
        TriggerOutcome::Fired(request)
    }
}
