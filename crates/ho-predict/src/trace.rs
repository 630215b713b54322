//! Trajectory traces: time-ordered position samples per terminal.
//!
//! A `TrajectoryTrace` holds one exported trace file (one terminal class).
//! Samples are bucketed per terminal and sorted by time once at load, so a
//! horizon lookup is two binary searches instead of a scan of the whole file.

use std::collections::HashMap;

use ho_core::{Horizon, SimTime, SitePoint, TerminalClass, TerminalId};

/// One position sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceSample {
    pub terminal: TerminalId,
    pub time:     SimTime,
    pub position: SitePoint,
    /// Third coordinate as exported.  Carried but unused for distances.
    pub z:        f64,
}

// ── TrajectoryTrace ───────────────────────────────────────────────────────────

/// All samples of one trace partition, grouped by terminal.
#[derive(Clone, Debug)]
pub struct TrajectoryTrace {
    by_terminal: HashMap<TerminalId, Vec<TraceSample>>,
    sorted:      bool,
}

impl TrajectoryTrace {
    pub fn new() -> Self {
        Self { by_terminal: HashMap::new(), sorted: true }
    }

    /// Append a sample.  Order does not matter; call [`finish`](Self::finish)
    /// (loaders do) before querying.
    pub fn push(&mut self, sample: TraceSample) {
        self.by_terminal.entry(sample.terminal).or_default().push(sample);
        self.sorted = false;
    }

    /// Stable-sort every terminal's samples by time.  Samples sharing a
    /// timestamp keep file order, so the later line still wins a slot.
    pub fn finish(mut self) -> Self {
        for samples in self.by_terminal.values_mut() {
            samples.sort_by(|a, b| a.time.0.total_cmp(&b.time.0));
        }
        self.sorted = true;
        self
    }

    /// Samples of `terminal` with `now <= time < now + horizon.span()`.
    pub fn window(&self, terminal: TerminalId, now: SimTime, horizon: &Horizon) -> &[TraceSample] {
        debug_assert!(self.sorted, "TrajectoryTrace queried before finish()");
        let Some(samples) = self.by_terminal.get(&terminal) else {
            return &[];
        };
        let end = now + horizon.span();
        let lo = samples.partition_point(|s| s.time < now);
        let hi = samples.partition_point(|s| s.time < end);
        &samples[lo..hi.max(lo)]
    }

    /// All samples of `terminal` in time order.
    pub fn samples(&self, terminal: TerminalId) -> &[TraceSample] {
        self.by_terminal.get(&terminal).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn terminal_count(&self) -> usize {
        self.by_terminal.len()
    }

    pub fn len(&self) -> usize {
        self.by_terminal.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_terminal.is_empty()
    }
}

impl Default for TrajectoryTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<TraceSample> for TrajectoryTrace {
    fn from_iter<I: IntoIterator<Item = TraceSample>>(iter: I) -> Self {
        let mut trace = TrajectoryTrace::new();
        for s in iter {
            trace.push(s);
        }
        trace.finish()
    }
}

// ── TraceSet ──────────────────────────────────────────────────────────────────

/// One trace per terminal class.  Read-only once built, so it can be shared
/// across concurrent evaluations without locking.
#[derive(Clone, Debug, Default)]
pub struct TraceSet {
    traces: HashMap<TerminalClass, TrajectoryTrace>,
}

impl TraceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.  Replaces any trace already held for `class`.
    pub fn with(mut self, class: TerminalClass, trace: TrajectoryTrace) -> Self {
        self.insert(class, trace);
        self
    }

    pub fn insert(&mut self, class: TerminalClass, trace: TrajectoryTrace) {
        self.traces.insert(class, trace);
    }

    pub fn get(&self, class: TerminalClass) -> Option<&TrajectoryTrace> {
        self.traces.get(&class)
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}
