//! Fluent builder for constructing a [`HandoverController`].

use ho_core::HandoverConfig;
use ho_measure::MeasurementStore;
use ho_score::HandoverAlgorithm;
use ho_trigger::{HandoverSink, HandoverTrigger};
use tracing::info;

use crate::{EngineResult, HandoverController};

/// Fluent builder for [`HandoverController<A, S>`].
///
/// # Required inputs
///
/// - [`HandoverConfig`] - weights, cooldown, horizon, neighbour offset
/// - `A: HandoverAlgorithm` - e.g. [`ho_score::AhpScorer`]
/// - `S: HandoverSink` - where fired requests go
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                       |
/// |--------------|-------------------------------|
/// | `.store(s)`  | Empty `MeasurementStore`      |
///
/// # Example
///
/// ```rust,ignore
/// let scorer = AhpScorer::new(&config, predictor, qoe, pdr)?;
/// let mut controller = HandoverControllerBuilder::new(config, scorer, tx)
///     .store(warm_store)
///     .build()?;
/// ```
pub struct HandoverControllerBuilder<A: HandoverAlgorithm, S: HandoverSink> {
    config:    HandoverConfig,
    algorithm: A,
    sink:      S,
    store:     Option<MeasurementStore>,
}

impl<A: HandoverAlgorithm, S: HandoverSink> HandoverControllerBuilder<A, S> {
    /// Create a builder with all required inputs.
    pub fn new(config: HandoverConfig, algorithm: A, sink: S) -> Self {
        Self { config, algorithm, sink, store: None }
    }

    /// Start from a pre-populated measurement store.
    pub fn store(mut self, store: MeasurementStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Validate the configuration and return a ready controller.
    ///
    /// # Errors
    ///
    /// [`EngineError::Config`][crate::EngineError::Config] if
    /// [`HandoverConfig::validate`] rejects the configuration.
    pub fn build(self) -> EngineResult<HandoverController<A, S>> {
        self.config.validate()?;

        info!(
            algorithm = self.algorithm.name(),
            cooldown = self.config.cooldown_secs,
            horizon_slots = self.config.horizon.slots,
            "handover controller ready"
        );

        Ok(HandoverController {
            trigger:   HandoverTrigger::new(self.config.cooldown_secs),
            store:     self.store.unwrap_or_default(),
            config:    self.config,
            algorithm: self.algorithm,
            sink:      self.sink,
        })
    }
}
