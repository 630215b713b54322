//! The `HandoverAlgorithm` trait - the pluggable decision strategy.

use crate::{Decision, EvaluationInput};

/// Decides which cell, if any, a terminal should move to.
///
/// # Thread safety
///
/// The controller may evaluate many terminals in parallel via Rayon, so
/// implementations must be `Send + Sync` and keep no per-terminal mutable
/// state.  Cooldown bookkeeping belongs to the trigger, not the algorithm.
///
/// # Example
///
/// ```rust,ignore
/// struct StrongestNeighbour;
///
/// impl HandoverAlgorithm for StrongestNeighbour {
///     fn evaluate(&self, input: &EvaluationInput<'_>) -> Decision {
///         let best = input
///             .other_cells()
///             .filter(|(_, q)| *q > input.serving_rsrq)
///             .max_by_key(|(_, q)| *q)
///             .map(|(cell, rsrq)| Target { cell, rsrq, score: rsrq.as_f64() });
///         Decision { best, candidates: vec![] }
///     }
/// }
/// ```
pub trait HandoverAlgorithm: Send + Sync {
    fn evaluate(&self, input: &EvaluationInput<'_>) -> Decision;

    /// Short label for logs and output files.
    fn name(&self) -> &'static str {
        "custom"
    }
}
