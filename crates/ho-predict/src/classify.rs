//! Terminal → trace partition classification.
//!
//! Which trace file holds a terminal's future positions is a convention of
//! the scenario that generated the traces, so it is injected rather than
//! baked into the predictor.

use std::collections::HashMap;

use ho_core::{TerminalClass, TerminalId};

/// Maps a terminal to the class whose trace holds its trajectory.
///
/// Return `None` for terminals with no trace; the predictor then yields an
/// all-zero forecast (no distance penalty).
pub trait TerminalClassifier: Send + Sync {
    fn classify(&self, terminal: TerminalId) -> Option<TerminalClass>;
}

/// Any `Fn(TerminalId) -> Option<TerminalClass>` is a classifier.
impl<F> TerminalClassifier for F
where
    F: Fn(TerminalId) -> Option<TerminalClass> + Send + Sync,
{
    fn classify(&self, terminal: TerminalId) -> Option<TerminalClass> {
        self(terminal)
    }
}

// ── RangeClassifier ───────────────────────────────────────────────────────────

/// Splits the 1-based terminal ID space into equal thirds:
///
/// | ID range                   | Class        |
/// |----------------------------|--------------|
/// | `1 ..= n/3`                | `Pedestrian` |
/// | `n/3 + 1 ..= 2n/3`         | `Vehicle`    |
/// | above `2n/3`               | `Transit`    |
///
/// Integer division, as in the scenario scripts this mirrors.  Depends on the
/// total terminal count being known up front.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeClassifier {
    pub total_terminals: u32,
}

impl RangeClassifier {
    pub fn new(total_terminals: u32) -> Self {
        Self { total_terminals }
    }
}

impl TerminalClassifier for RangeClassifier {
    fn classify(&self, terminal: TerminalId) -> Option<TerminalClass> {
        if !terminal.is_valid() {
            return None;
        }
        let n = self.total_terminals as u64;
        let id = terminal.0 as u64;
        Some(if id <= n / 3 {
            TerminalClass::Pedestrian
        } else if id <= n * 2 / 3 {
            TerminalClass::Vehicle
        } else {
            TerminalClass::Transit
        })
    }
}

// ── TableClassifier ───────────────────────────────────────────────────────────

/// Explicit terminal → class table with an optional fallback class.
#[derive(Clone, Debug, Default)]
pub struct TableClassifier {
    table:    HashMap<TerminalId, TerminalClass>,
    fallback: Option<TerminalClass>,
}

impl TableClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(mut self, terminal: TerminalId, class: TerminalClass) -> Self {
        self.table.insert(terminal, class);
        self
    }

    /// Class for terminals missing from the table.
    pub fn fallback(mut self, class: TerminalClass) -> Self {
        self.fallback = Some(class);
        self
    }
}

impl TerminalClassifier for TableClassifier {
    fn classify(&self, terminal: TerminalId) -> Option<TerminalClass> {
        self.table.get(&terminal).copied().or(self.fallback)
    }
}
