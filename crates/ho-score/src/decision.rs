//! Evaluation results.

use ho_core::{CellId, Rsrq};

/// One scored cell, built per evaluation and never persisted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellCandidate {
    pub cell:           CellId,
    pub rsrq:           Rsrq,
    pub qoe:            f64,
    pub pdr:            f64,
    /// Mean predicted distance over the horizon; `None` if the cell has no
    /// site in the forecast.
    pub mean_distance:  Option<f64>,
    pub raw_score:      f64,
    /// `raw_score` divided by a positive `mean_distance`, else `raw_score`.
    pub adjusted_score: f64,
}

/// The selected handover target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    pub cell:  CellId,
    pub rsrq:  Rsrq,
    pub score: f64,
}

impl From<&CellCandidate> for Target {
    fn from(c: &CellCandidate) -> Self {
        Self { cell: c.cell, rsrq: c.rsrq, score: c.adjusted_score }
    }
}

/// Result of one evaluation.
///
/// `candidates` lists the serving cell first, then every other neighbour in
/// ascending cell order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decision {
    pub best:       Option<Target>,
    pub candidates: Vec<CellCandidate>,
}

impl Decision {
    /// A decision with no target and no candidates.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn has_target(&self) -> bool {
        self.best.is_some()
    }

    pub fn candidate(&self, cell: CellId) -> Option<&CellCandidate> {
        self.candidates.iter().find(|c| c.cell == cell)
    }
}
