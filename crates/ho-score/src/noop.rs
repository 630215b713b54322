//! A no-op algorithm - terminals are never handed over.

use crate::{Decision, EvaluationInput, HandoverAlgorithm};

/// A [`HandoverAlgorithm`] that never proposes a target.
///
/// Useful as a baseline run or in tests of the surrounding pipeline.
pub struct NoOpAlgorithm;

impl HandoverAlgorithm for NoOpAlgorithm {
    fn evaluate(&self, _input: &EvaluationInput<'_>) -> Decision {
        Decision::none()
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
