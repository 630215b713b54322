//! The cell site table.

use std::collections::HashMap;

use ho_core::{CellId, SitePoint};

use crate::{PredictError, PredictResult};

/// Fixed positions of every cell site, in insertion order.
///
/// The insertion index is the row index of the distance matrix produced by
/// the predictor.
#[derive(Clone, Debug, Default)]
pub struct CellSiteTable {
    sites: Vec<(CellId, SitePoint)>,
    index: HashMap<CellId, usize>,
}

impl CellSiteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a site.
    ///
    /// # Errors
    ///
    /// [`PredictError::DuplicateCell`] if `cell` is already present.
    pub fn insert(&mut self, cell: CellId, position: SitePoint) -> PredictResult<()> {
        if self.index.contains_key(&cell) {
            return Err(PredictError::DuplicateCell(cell));
        }
        self.index.insert(cell, self.sites.len());
        self.sites.push((cell, position));
        Ok(())
    }

    /// Builder-style insert for fixed topologies.  Duplicate IDs replace the
    /// earlier position.
    pub fn with_site(mut self, cell: CellId, position: SitePoint) -> Self {
        match self.index.get(&cell) {
            Some(&i) => self.sites[i].1 = position,
            None => {
                self.index.insert(cell, self.sites.len());
                self.sites.push((cell, position));
            }
        }
        self
    }

    pub fn position(&self, cell: CellId) -> Option<SitePoint> {
        self.index.get(&cell).map(|&i| self.sites[i].1)
    }

    /// Row index of `cell` in insertion order.
    pub fn index_of(&self, cell: CellId) -> Option<usize> {
        self.index.get(&cell).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, SitePoint)> + '_ {
        self.sites.iter().copied()
    }

    pub fn cell_ids(&self) -> Vec<CellId> {
        self.sites.iter().map(|(c, _)| *c).collect()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
