//! `ho-engine` - the handover controller.
//!
//! # Report processing
//!
//! ```text
//! process_report(report, now):
//!   ① Store    - record the report's neighbour results.
//!   ② Snapshot - borrow the terminal's neighbour row; no row → Skipped.
//!   ③ Evaluate - HandoverAlgorithm::evaluate (read-only).
//!   ④ Trigger  - cooldown check; fire to the sink or suppress.
//!
//! process_batch(reports, now):
//!   ① for every report, in order           (sequential, mutates the store)
//!   ②③ for every report                     (parallel with `parallel`)
//!   ④ for every decision, in report order   (sequential, mutates cooldowns)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs batch evaluation on Rayon's thread pool.          |
//! | `fx-hash`  | FxHash for the measurement store's terminal map.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ho_core::HandoverConfig;
//! use ho_engine::{HandoverControllerBuilder, NoopObserver};
//! use ho_predict::NoPrediction;
//! use ho_score::{AhpScorer, NoReadings};
//!
//! let config = HandoverConfig::default();
//! let scorer = AhpScorer::new(&config, NoPrediction, NoReadings, NoReadings)?;
//! let mut controller = HandoverControllerBuilder::new(config, scorer, Vec::new()).build()?;
//! let outcome = controller.process_report(&report, now, &mut NoopObserver);
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;
pub mod outcome;


pub use builder::HandoverControllerBuilder;
pub use controller::HandoverController;
pub use error::{EngineError, EngineResult};
pub use observer::{HandoverObserver, NoopObserver, OutcomeCounter};
pub use outcome::ReportOutcome;
