//! Weighted multi-criteria scoring with distance adjustment.
//!
//! # Algorithm
//!
//! ```text
//! for each candidate c (serving cell + every other neighbour):
//!     raw(c)      = w_rsrq * rsrq(c) + w_qoe * qoe(c) + w_pdr * pdr(c)
//!     mean_d(c)   = sum(distance(c, slot)) / horizon.slots
//!     adjusted(c) = raw(c) / mean_d(c)   if mean_d(c) > 0
//!                   raw(c)               otherwise
//!
//! best = argmax adjusted(c) over c != serving with rsrq(c) > serving + offset
//!        and adjusted(c) > 0
//! ```
//!
//! Ties keep the first candidate in ascending cell order.

use ho_core::{AhpWeights, CellId, CoreResult, HandoverConfig, Horizon, Rsrq};
use ho_predict::{DistanceForecast, PositionPredictor};
use tracing::debug;

use crate::{CellCandidate, Decision, EvaluationInput, HandoverAlgorithm, ReadingSource, Target};

/// The distance-aware AHP scorer.
///
/// Generic over the predictor and the two reading sources so the common
/// configurations monomorphise without dynamic dispatch.
pub struct AhpScorer<P, Q, D> {
    weights:          AhpWeights,
    horizon:          Horizon,
    neighbour_offset: u8,
    predictor:        P,
    qoe:              Q,
    pdr:              D,
}

impl<P, Q, D> AhpScorer<P, Q, D>
where
    P: PositionPredictor,
    Q: ReadingSource,
    D: ReadingSource,
{
    /// Take weights, horizon, and neighbour offset from a validated `config`.
    pub fn new(config: &HandoverConfig, predictor: P, qoe: Q, pdr: D) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            weights: config.weights,
            horizon: config.horizon,
            neighbour_offset: config.neighbour_offset,
            predictor,
            qoe,
            pdr,
        })
    }

    pub fn weights(&self) -> &AhpWeights {
        &self.weights
    }

    pub fn horizon(&self) -> &Horizon {
        &self.horizon
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    fn candidate(&self, cell: CellId, rsrq: Rsrq, forecast: &DistanceForecast) -> CellCandidate {
        let qoe = sanitize(self.qoe.reading(cell));
        let pdr = sanitize(self.pdr.reading(cell));
        let raw_score = self.weights.score(rsrq.as_f64(), qoe, pdr);

        let mean_distance = forecast.mean_distance(cell);
        let adjusted_score = match mean_distance {
            Some(d) if d.is_finite() && d > 0.0 => raw_score / d,
            _ => raw_score,
        };

        CellCandidate { cell, rsrq, qoe, pdr, mean_distance, raw_score, adjusted_score }
    }
}

impl<P, Q, D> HandoverAlgorithm for AhpScorer<P, Q, D>
where
    P: PositionPredictor,
    Q: ReadingSource,
    D: ReadingSource,
{
    fn evaluate(&self, input: &EvaluationInput<'_>) -> Decision {
        let forecast = self.predictor.predict(input.terminal, input.now, &self.horizon);

        let mut candidates = Vec::with_capacity(input.neighbours.len() + 1);
        candidates.push(self.candidate(input.serving_cell, input.serving_rsrq, &forecast));
        for (cell, rsrq) in input.other_cells() {
            candidates.push(self.candidate(cell, rsrq, &forecast));
        }

        let mut best: Option<&CellCandidate> = None;
        for c in &candidates[1..] {
            if !c.rsrq.exceeds(input.serving_rsrq, self.neighbour_offset) {
                continue;
            }
            if c.adjusted_score > best.map_or(0.0, |b| b.adjusted_score) {
                best = Some(c);
            }
        }
        let best = best.map(Target::from);

        debug!(
            terminal = %input.terminal,
            serving = %input.serving_cell,
            serving_rsrq = input.serving_rsrq.0,
            candidates = candidates.len(),
            covered_slots = forecast.covered_slots(),
            best = ?best.map(|t| t.cell.0),
            "evaluated candidates"
        );

        Decision { best, candidates }
    }

    fn name(&self) -> &'static str {
        "ahp"
    }
}

/// Unavailable, negative, and non-finite readings all count as zero.
#[inline]
fn sanitize(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}
