//! Read-only evaluation input passed to every algorithm.

use ho_core::{CellId, MeasurementReport, Rsrq, SimTime, TerminalId};
use ho_measure::NeighbourRow;

/// Everything an algorithm may look at for one terminal at one instant.
///
/// Built by the controller after the report has been applied to the store,
/// so `neighbours` already contains the report's own neighbour results.
#[derive(Copy, Clone, Debug)]
pub struct EvaluationInput<'a> {
    pub terminal:     TerminalId,
    pub serving_cell: CellId,
    /// Fresh serving-cell quality from the triggering report.
    pub serving_rsrq: Rsrq,
    /// Snapshot of the terminal's neighbour row, ascending cell order.
    pub neighbours:   &'a NeighbourRow,
    pub now:          SimTime,
}

impl<'a> EvaluationInput<'a> {
    #[inline]
    pub fn new(
        terminal:     TerminalId,
        serving_cell: CellId,
        serving_rsrq: Rsrq,
        neighbours:   &'a NeighbourRow,
        now:          SimTime,
    ) -> Self {
        Self { terminal, serving_cell, serving_rsrq, neighbours, now }
    }

    /// Input for `report` against an already-updated neighbour row.
    #[inline]
    pub fn from_report(report: &MeasurementReport, neighbours: &'a NeighbourRow, now: SimTime) -> Self {
        Self::new(report.terminal, report.serving_cell, report.serving_rsrq, neighbours, now)
    }

    /// Neighbours other than the serving cell, ascending cell order.
    pub fn other_cells(&self) -> impl Iterator<Item = (CellId, Rsrq)> + '_ {
        let serving = self.serving_cell;
        self.neighbours.iter().filter(move |&(cell, _)| cell != serving)
    }
}
