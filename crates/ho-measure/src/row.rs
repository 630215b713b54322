//! One terminal's neighbour measurements.

use std::collections::BTreeMap;

use ho_core::{CellId, Rsrq};

/// Latest RSRQ per neighbour cell for a single terminal.
///
/// Backed by a `BTreeMap` so iteration is always in ascending `CellId` order;
/// candidate scoring depends on that order for its tie-break.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighbourRow {
    cells: BTreeMap<CellId, Rsrq>,
}

impl NeighbourRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value for `cell`.  Returns the previous value.
    #[inline]
    pub fn set(&mut self, cell: CellId, rsrq: Rsrq) -> Option<Rsrq> {
        self.cells.insert(cell, rsrq)
    }

    #[inline]
    pub fn get(&self, cell: CellId) -> Option<Rsrq> {
        self.cells.get(&cell).copied()
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `(cell, rsrq)` pairs in ascending cell order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, Rsrq)> + '_ {
        self.cells.iter().map(|(&c, &q)| (c, q))
    }

    /// Owned copy of the row as a plain map.
    pub fn to_map(&self) -> BTreeMap<CellId, Rsrq> {
        self.cells.clone()
    }
}

impl FromIterator<(CellId, Rsrq)> for NeighbourRow {
    fn from_iter<I: IntoIterator<Item = (CellId, Rsrq)>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}
