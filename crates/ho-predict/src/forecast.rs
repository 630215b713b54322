//! Per-cell distance forecasts over the prediction horizon.

use ho_core::CellId;

/// Predicted terminal-to-site distance for every (cell, horizon slot).
///
/// Slots with no trace sample hold `0.0`.  Consumers must treat a zero or
/// non-finite mean as "no prediction", never divide by it.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceForecast {
    cells:     Vec<CellId>,
    slots:     usize,
    /// Row-major: `dist[cell_idx * slots + slot]`.
    dist:      Vec<f64>,
    /// Slots that received at least one sample.
    covered:   Vec<bool>,
}

impl DistanceForecast {
    /// An all-zero forecast for `cells` over `slots` slots.
    pub fn zeroed(cells: Vec<CellId>, slots: usize) -> Self {
        let n = cells.len() * slots;
        Self { cells, slots, dist: vec![0.0; n], covered: vec![false; slots] }
    }

    /// Record the distance to cell row `cell_idx` at `slot`.  Later writes
    /// to the same slot overwrite earlier ones.
    pub fn set(&mut self, cell_idx: usize, slot: usize, distance: f64) {
        self.dist[cell_idx * self.slots + slot] = distance;
        self.covered[slot] = true;
    }

    pub fn get(&self, cell_idx: usize, slot: usize) -> f64 {
        self.dist[cell_idx * self.slots + slot]
    }

    /// The horizon row for `cell`, or `None` if the cell has no site.
    pub fn row(&self, cell: CellId) -> Option<&[f64]> {
        let i = self.cells.iter().position(|&c| c == cell)?;
        Some(&self.dist[i * self.slots..(i + 1) * self.slots])
    }

    /// Mean distance to `cell` over the whole horizon (uncovered slots count
    /// as zero).  `None` if the cell has no site.
    pub fn mean_distance(&self, cell: CellId) -> Option<f64> {
        let row = self.row(cell)?;
        if row.is_empty() {
            return Some(0.0);
        }
        Some(row.iter().sum::<f64>() / row.len() as f64)
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Number of slots that received a sample.
    pub fn covered_slots(&self) -> usize {
        self.covered.iter().filter(|&&c| c).count()
    }

    /// `true` if no slot received a sample.
    pub fn is_blank(&self) -> bool {
        self.covered_slots() == 0
    }
}
