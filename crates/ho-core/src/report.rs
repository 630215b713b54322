//! Measurement reports as delivered by the radio stack.

use crate::{CellId, Rsrq, TerminalId};

/// One neighbour entry of a measurement report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighbourReport {
    pub cell: CellId,
    pub rsrq: Rsrq,
}

/// A periodic measurement report for one terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementReport {
    pub terminal:     TerminalId,
    pub serving_cell: CellId,
    pub serving_rsrq: Rsrq,
    /// May be empty: reports without neighbour results still drive an
    /// evaluation against whatever the store already holds.
    pub neighbours:   Vec<NeighbourReport>,
}

impl MeasurementReport {
    pub fn new(terminal: TerminalId, serving_cell: CellId, serving_rsrq: Rsrq) -> Self {
        Self { terminal, serving_cell, serving_rsrq, neighbours: Vec::new() }
    }

    /// Builder-style helper to append a neighbour result.
    pub fn with_neighbour(mut self, cell: CellId, rsrq: Rsrq) -> Self {
        self.neighbours.push(NeighbourReport { cell, rsrq });
        self
    }
}
