//! The `PositionPredictor` trait and its trace-backed implementation.
//!
//! # Pluggability
//!
//! The scoring engine calls prediction through [`PositionPredictor`], so a
//! scenario with live mobility (dead reckoning, a Kalman filter) can replace
//! [`TracePredictor`] without touching scoring.

use ho_core::{Horizon, SimTime, TerminalId};
use tracing::debug;

use crate::{CellSiteTable, DistanceForecast, TerminalClassifier, TraceSet};

/// Predicts distances from a terminal to every known cell site over a horizon.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: evaluations for different
/// terminals may run on Rayon workers at the same time.
pub trait PositionPredictor: Send + Sync {
    fn predict(&self, terminal: TerminalId, now: SimTime, horizon: &Horizon) -> DistanceForecast;
}

// ── NoPrediction ──────────────────────────────────────────────────────────────

/// Always returns an empty forecast.  Scores are then never distance-adjusted.
pub struct NoPrediction;

impl PositionPredictor for NoPrediction {
    fn predict(&self, _terminal: TerminalId, _now: SimTime, horizon: &Horizon) -> DistanceForecast {
        DistanceForecast::zeroed(Vec::new(), horizon.slots)
    }
}

// ── TracePredictor ────────────────────────────────────────────────────────────

/// Reads future positions from pre-computed mobility traces.
///
/// The simulation knows each terminal's ground-truth trajectory ahead of
/// time, so "prediction" is a lookahead into the trace of the terminal's
/// class.
pub struct TracePredictor<C: TerminalClassifier> {
    traces:     TraceSet,
    sites:      CellSiteTable,
    classifier: C,
}

impl<C: TerminalClassifier> TracePredictor<C> {
    pub fn new(traces: TraceSet, sites: CellSiteTable, classifier: C) -> Self {
        Self { traces, sites, classifier }
    }

    pub fn sites(&self) -> &CellSiteTable {
        &self.sites
    }

    pub fn traces(&self) -> &TraceSet {
        &self.traces
    }
}

impl<C: TerminalClassifier> PositionPredictor for TracePredictor<C> {
    fn predict(&self, terminal: TerminalId, now: SimTime, horizon: &Horizon) -> DistanceForecast {
        let mut forecast = DistanceForecast::zeroed(self.sites.cell_ids(), horizon.slots);

        let Some(class) = self.classifier.classify(terminal) else {
            debug!(%terminal, "no trace class for terminal");
            return forecast;
        };
        let Some(trace) = self.traces.get(class) else {
            debug!(%terminal, %class, "no trace loaded for class");
            return forecast;
        };

        for sample in trace.window(terminal, now, horizon) {
            let Some(slot) = horizon.slot_of(now, sample.time) else {
                continue;
            };
            for (cell_idx, (_, site)) in self.sites.iter().enumerate() {
                forecast.set(cell_idx, slot, sample.position.distance_to(site));
            }
        }

        debug!(
            %terminal,
            %class,
            covered = forecast.covered_slots(),
            slots = horizon.slots,
            "distance forecast"
        );
        forecast
    }
}
