//! Per-cell application-level readings (QoE, packet delivery ratio).
//!
//! The scorer asks "what is the current value for this cell?" and treats any
//! failure to answer as "unavailable".  Sources never return errors.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use ho_core::CellId;
use tracing::trace;

/// Current value of one per-cell metric.
///
/// `None` means unavailable; the scorer substitutes `0`.
pub trait ReadingSource: Send + Sync {
    fn reading(&self, cell: CellId) -> Option<f64>;
}

/// Any `Fn(CellId) -> Option<f64>` is a reading source.
impl<F> ReadingSource for F
where
    F: Fn(CellId) -> Option<f64> + Send + Sync,
{
    fn reading(&self, cell: CellId) -> Option<f64> {
        self(cell)
    }
}

// ── NoReadings ────────────────────────────────────────────────────────────────

/// Every cell is unavailable.
pub struct NoReadings;

impl ReadingSource for NoReadings {
    fn reading(&self, _cell: CellId) -> Option<f64> {
        None
    }
}

// ── ReadingTable ──────────────────────────────────────────────────────────────

/// In-memory cell → value table.
///
/// Cloning yields another handle to the same table, so a collaborator can
/// keep publishing values while the scorer owns its own handle.
#[derive(Clone, Debug, Default)]
pub struct ReadingTable {
    values: Arc<RwLock<HashMap<CellId, f64>>>,
}

impl ReadingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for fixed tables.
    pub fn with(self, cell: CellId, value: f64) -> Self {
        self.set(cell, value);
        self
    }

    /// Publish the latest value for `cell`.
    pub fn set(&self, cell: CellId, value: f64) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(cell, value);
    }

    /// Mark `cell` unavailable.
    pub fn clear(&self, cell: CellId) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&cell);
    }

    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(CellId, f64)> for ReadingTable {
    fn from_iter<I: IntoIterator<Item = (CellId, f64)>>(iter: I) -> Self {
        Self { values: Arc::new(RwLock::new(iter.into_iter().collect())) }
    }
}

impl ReadingSource for ReadingTable {
    fn reading(&self, cell: CellId) -> Option<f64> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&cell)
            .copied()
    }
}

// ── ProbeDirectory ────────────────────────────────────────────────────────────

/// Reads values written by external probes, one file per cell.
///
/// The file for cell `c` is `<dir>/<prefix><c>`, e.g. `qoeTorre3`.  Probes
/// append, so the last whitespace-separated token is the current value.  A
/// missing, empty, or unparsable file is unavailable.
#[derive(Clone, Debug)]
pub struct ProbeDirectory {
    dir:    PathBuf,
    prefix: String,
}

impl ProbeDirectory {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self { dir: dir.into(), prefix: prefix.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the probe file for `cell`.
    pub fn path_for(&self, cell: CellId) -> PathBuf {
        self.dir.join(format!("{}{}", self.prefix, cell.0))
    }
}

impl ReadingSource for ProbeDirectory {
    fn reading(&self, cell: CellId) -> Option<f64> {
        let path = self.path_for(cell);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                trace!(path = %path.display(), error = %e, "probe file unavailable");
                return None;
            }
        };
        let value = text.split_whitespace().last()?.parse::<f64>().ok();
        if value.is_none() {
            trace!(path = %path.display(), "probe file has no numeric value");
        }
        value
    }
}
