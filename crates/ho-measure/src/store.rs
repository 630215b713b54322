//! The `MeasurementStore` - freshest neighbour RSRQ per (terminal, cell).

use ho_core::{CellId, MeasurementReport, Rsrq, TerminalId};
use tracing::trace;

use crate::{MeasureError, MeasureResult, NeighbourRow};

#[cfg(not(feature = "fx-hash"))]
type TerminalMap<V> = std::collections::HashMap<TerminalId, V>;
#[cfg(feature = "fx-hash")]
type TerminalMap<V> = rustc_hash::FxHashMap<TerminalId, V>;

/// Sparse measurement table: only terminals that have reported at least one
/// neighbour have a row.
///
/// The store has a single owner (the controller).  Evaluations borrow rows
/// immutably, so a read always observes every write that completed before
/// the borrow was taken.
#[derive(Default)]
pub struct MeasurementStore {
    rows: TerminalMap<NeighbourRow>,
}

impl MeasurementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `(terminal, cell)`.
    ///
    /// `rsrq` is not range-checked; whoever built the report owns validation.
    pub fn update_neighbour_measurement(&mut self, terminal: TerminalId, cell: CellId, rsrq: Rsrq) {
        let prev = self.rows.entry(terminal).or_default().set(cell, rsrq);
        trace!(%terminal, %cell, rsrq = rsrq.0, prev = ?prev.map(|q| q.0), "neighbour measurement");
    }

    /// Record every neighbour result carried by `report`.
    ///
    /// A report without neighbours leaves the store untouched (no empty row
    /// is created for the terminal).
    pub fn apply_report(&mut self, report: &MeasurementReport) {
        for n in &report.neighbours {
            self.update_neighbour_measurement(report.terminal, n.cell, n.rsrq);
        }
    }

    /// Read-only view of `terminal`'s neighbours.
    ///
    /// # Errors
    ///
    /// [`MeasureError::NoNeighbours`] if nothing has been recorded yet.
    /// Treat it as "insufficient data", not as a failure.
    pub fn neighbour_measurements(&self, terminal: TerminalId) -> MeasureResult<&NeighbourRow> {
        match self.rows.get(&terminal) {
            Some(row) if !row.is_empty() => Ok(row),
            _ => Err(MeasureError::NoNeighbours(terminal)),
        }
    }

    /// Drop everything recorded for `terminal` (connection released).
    /// Returns the evicted row, if any.
    pub fn evict(&mut self, terminal: TerminalId) -> Option<NeighbourRow> {
        self.rows.remove(&terminal)
    }

    /// Number of terminals with at least one recorded neighbour.
    pub fn terminal_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of live (terminal, cell) entries.
    pub fn len(&self) -> usize {
        self.rows.values().map(NeighbourRow::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
