//! `ho-score` - candidate scoring and target selection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`input`]     | `EvaluationInput<'a>` - read-only view handed to an algorithm |
//! | [`decision`]  | `CellCandidate`, `Target`, `Decision`                         |
//! | [`reading`]   | `ReadingSource` trait, `ReadingTable`, `ProbeDirectory`, `NoReadings` |
//! | [`algorithm`] | `HandoverAlgorithm` trait                                     |
//! | [`ahp`]       | `AhpScorer` - weighted, distance-adjusted scoring             |
//! | [`threshold`] | `RsrqThresholdAlgorithm` - radio-quality-only baseline        |
//! | [`noop`]      | `NoOpAlgorithm` - never proposes a target                     |
//!
//! # Design notes
//!
//! An algorithm only reads: the neighbour row is borrowed from the store,
//! traces and readings are shared.  The controller therefore evaluates many
//! terminals in parallel and applies trigger state changes afterwards.
//!
//! Scoring never fails.  Missing readings become `0`, a missing distance
//! forecast means "no penalty", and an algorithm with nothing to propose
//! returns a `Decision` whose `best` is `None`.

pub mod ahp;
pub mod algorithm;
pub mod decision;
pub mod input;
pub mod noop;
pub mod reading;
pub mod threshold;

#[cfg(test)]
mod tests;

pub use ahp::AhpScorer;
pub use algorithm::HandoverAlgorithm;
pub use decision::{CellCandidate, Decision, Target};
pub use input::EvaluationInput;
pub use noop::NoOpAlgorithm;
pub use reading::{NoReadings, ProbeDirectory, ReadingSource, ReadingTable};
pub use threshold::RsrqThresholdAlgorithm;
