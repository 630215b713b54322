//! The handover request handed to the execution layer.

use std::fmt;

use ho_core::{CellId, SimTime, TerminalId};

/// Instruction to move `terminal` from `source` to `target`.
///
/// Fire-and-forget: the decision core never learns whether execution
/// succeeded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandoverRequest {
    pub terminal: TerminalId,
    pub source:   CellId,
    pub target:   CellId,
    pub time:     SimTime,
}

impl fmt::Display for HandoverRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {} at {}", self.terminal, self.source, self.target, self.time)
    }
}
