//! Radio-quality-only baseline, modelled on the classic A2/A4 event pair.

use ho_core::Rsrq;
use tracing::debug;

use crate::{CellCandidate, Decision, EvaluationInput, HandoverAlgorithm, Target};

/// Hand over when the serving cell is weak and a neighbour is clearly better.
///
/// The serving RSRQ must be at or below `serving_threshold`, and the best
/// neighbour must exceed it by at least `neighbour_offset` steps (and by at
/// least one in any case).  QoE, PDR, and position are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RsrqThresholdAlgorithm {
    pub serving_threshold: Rsrq,
    pub neighbour_offset:  u8,
}

impl Default for RsrqThresholdAlgorithm {
    fn default() -> Self {
        Self { serving_threshold: Rsrq(30), neighbour_offset: 2 }
    }
}

impl RsrqThresholdAlgorithm {
    pub fn new(serving_threshold: Rsrq, neighbour_offset: u8) -> Self {
        Self { serving_threshold, neighbour_offset }
    }
}

impl HandoverAlgorithm for RsrqThresholdAlgorithm {
    fn evaluate(&self, input: &EvaluationInput<'_>) -> Decision {
        let candidates: Vec<CellCandidate> = std::iter::once((input.serving_cell, input.serving_rsrq))
            .chain(input.other_cells())
            .map(|(cell, rsrq)| CellCandidate {
                cell,
                rsrq,
                qoe: 0.0,
                pdr: 0.0,
                mean_distance: None,
                raw_score: rsrq.as_f64(),
                adjusted_score: rsrq.as_f64(),
            })
            .collect();

        if input.serving_rsrq > self.serving_threshold {
            return Decision { best: None, candidates };
        }

        // Strongest neighbour; the earliest cell wins a tie.
        let mut strongest: Option<&CellCandidate> = None;
        for c in &candidates[1..] {
            if strongest.is_none_or(|s| c.rsrq > s.rsrq) {
                strongest = Some(c);
            }
        }

        let offset = self.neighbour_offset.saturating_sub(1);
        let best = strongest
            .filter(|c| c.rsrq.exceeds(input.serving_rsrq, offset))
            .map(Target::from);

        debug!(
            terminal = %input.terminal,
            serving_rsrq = input.serving_rsrq.0,
            best = ?best.map(|t| t.cell.0),
            "threshold evaluation"
        );
        Decision { best, candidates }
    }

    fn name(&self) -> &'static str {
        "rsrq-threshold"
    }
}
