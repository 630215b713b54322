//! Decision-core configuration.
//!
//! Typically loaded from a JSON/TOML file by the application crate (enable
//! the `serde` feature) and passed to the controller builder.  Every field
//! has a default, so a config file only needs to name what it overrides.

use crate::time::Horizon;
use crate::{CoreError, CoreResult};

// ── AhpWeights ────────────────────────────────────────────────────────────────

/// Linear weights of the composite candidate score.
///
/// The defaults are the principal eigenvector of the pairwise-comparison
/// matrix "packet delivery > quality-of-experience > radio quality".  They are
/// simulation tuning, not derived constants; treat them as review candidates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AhpWeights {
    pub rsrq: f64,
    pub qoe:  f64,
    pub pdr:  f64,
}

impl Default for AhpWeights {
    fn default() -> Self {
        Self { rsrq: 0.14, qoe: 0.28, pdr: 0.57 }
    }
}

impl AhpWeights {
    /// Weighted sum of the three criteria.
    #[inline]
    pub fn score(&self, rsrq: f64, qoe: f64, pdr: f64) -> f64 {
        self.rsrq * rsrq + self.qoe * qoe + self.pdr * pdr
    }
}

// ── HandoverConfig ────────────────────────────────────────────────────────────

/// Top-level configuration of the decision core.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HandoverConfig {
    /// Composite score weights.
    pub weights: AhpWeights,

    /// Minimum interval between two handovers of the same terminal, in
    /// time-units.  Default: 0.5.
    pub cooldown_secs: f64,

    /// Position-prediction lookahead.  Default: 20 slots of 1.0.
    pub horizon: Horizon,

    /// Extra quantized steps a neighbour's RSRQ must exceed the serving
    /// cell's by.  Default: 0 (any strictly better neighbour qualifies).
    pub neighbour_offset: u8,
}

impl Default for HandoverConfig {
    fn default() -> Self {
        Self {
            weights:          AhpWeights::default(),
            cooldown_secs:    0.5,
            horizon:          Horizon::default(),
            neighbour_offset: 0,
        }
    }
}

impl HandoverConfig {
    /// Reject values that would make the decision loop meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        let w = &self.weights;
        if ![w.rsrq, w.qoe, w.pdr].iter().all(|v| v.is_finite() && *v >= 0.0) {
            return Err(CoreError::Config(format!(
                "score weights must be finite and non-negative, got {w:?}"
            )));
        }
        if !self.cooldown_secs.is_finite() || self.cooldown_secs < 0.0 {
            return Err(CoreError::Config(format!(
                "cooldown_secs must be finite and >= 0, got {}",
                self.cooldown_secs
            )));
        }
        if self.horizon.slots == 0 {
            return Err(CoreError::Config("horizon.slots must be > 0".into()));
        }
        if !self.horizon.slot_secs.is_finite() || self.horizon.slot_secs <= 0.0 {
            return Err(CoreError::Config(format!(
                "horizon.slot_secs must be finite and > 0, got {}",
                self.horizon.slot_secs
            )));
        }
        Ok(())
    }
}
