//! The `HandoverController` and its report pipeline.

use ho_core::{HandoverConfig, MeasurementReport, SimTime, TerminalId};
use ho_measure::MeasurementStore;
use ho_score::{Decision, EvaluationInput, HandoverAlgorithm};
use ho_trigger::{HandoverSink, HandoverTrigger};
use tracing::debug;

use crate::{HandoverObserver, ReportOutcome};

/// Single owner of all mutable decision state.
///
/// `HandoverController<A, S>` holds the measurement store, the algorithm,
/// the cooldown table, and the request sink.  Mutation happens only in
/// `&mut self` methods, so per-terminal updates are serialized by
/// construction; evaluation only borrows.
///
/// Create via [`HandoverControllerBuilder`][crate::HandoverControllerBuilder].
pub struct HandoverController<A: HandoverAlgorithm, S: HandoverSink> {
    pub(crate) config:    HandoverConfig,
    pub(crate) store:     MeasurementStore,
    pub(crate) algorithm: A,
    pub(crate) trigger:   HandoverTrigger,
    pub(crate) sink:      S,
}

impl<A: HandoverAlgorithm, S: HandoverSink> HandoverController<A, S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process one report at `now`.
    ///
    /// The store is updated before evaluation, so the report's own neighbour
    /// results are part of the snapshot it is evaluated against.
    pub fn process_report<O: HandoverObserver>(
        &mut self,
        report:   &MeasurementReport,
        now:      SimTime,
        observer: &mut O,
    ) -> ReportOutcome {
        self.store.apply_report(report);
        observer.on_report(report, now);

        match evaluate(&self.store, &self.algorithm, report, now) {
            Some(decision) => self.settle(report, decision, now, observer),
            None => {
                observer.on_skipped(report.terminal, now);
                ReportOutcome::Skipped
            }
        }
    }

    /// Process a batch of reports that share the instant `now`.
    ///
    /// All store updates are applied first, so every evaluation sees every
    /// report of the batch.  Trigger decisions are then applied in report
    /// order; two reports for one terminal in the same batch can fire at
    /// most once (the second is inside the cooldown).
    ///
    /// Returns one outcome per report, in report order.
    pub fn process_batch<O: HandoverObserver>(
        &mut self,
        reports:  &[MeasurementReport],
        now:      SimTime,
        observer: &mut O,
    ) -> Vec<ReportOutcome> {
        // ── Phase 1: store updates (sequential) ───────────────────────────
        for report in reports {
            self.store.apply_report(report);
            observer.on_report(report, now);
        }

        // ── Phase 2: evaluation (produce) ─────────────────────────────────
        let decisions = self.evaluate_all(reports, now);

        // ── Phase 3: trigger (consume, report order) ──────────────────────
        let mut outcomes = Vec::with_capacity(reports.len());
        for (report, decision) in reports.iter().zip(decisions) {
            let outcome = match decision {
                Some(decision) => self.settle(report, decision, now, observer),
                None => {
                    observer.on_skipped(report.terminal, now);
                    ReportOutcome::Skipped
                }
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    /// The terminal's connection was released: drop its measurements and
    /// its cooldown entry.  Returns `true` if anything was held for it.
    pub fn release_terminal(&mut self, terminal: TerminalId) -> bool {
        let had_row = self.store.evict(terminal).is_some();
        let had_cooldown = self.trigger.forget(terminal).is_some();
        debug!(%terminal, had_row, had_cooldown, "terminal released");
        had_row || had_cooldown
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &HandoverConfig {
        &self.config
    }

    pub fn store(&self) -> &MeasurementStore {
        &self.store
    }

    /// Direct store access for collaborators that deliver neighbour results
    /// outside of reports.
    pub fn store_mut(&mut self) -> &mut MeasurementStore {
        &mut self.store
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    pub fn trigger(&self) -> &HandoverTrigger {
        &self.trigger
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the controller and return the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn settle<O: HandoverObserver>(
        &mut self,
        report:   &MeasurementReport,
        decision: Decision,
        now:      SimTime,
        observer: &mut O,
    ) -> ReportOutcome {
        let outcome: ReportOutcome = self
            .trigger
            .apply(
                report.terminal,
                report.serving_cell,
                report.serving_rsrq,
                decision.best,
                now,
                &mut self.sink,
            )
            .into();

        observer.on_decision(report, &decision, &outcome, now);
        match &outcome {
            ReportOutcome::Fired(request) => observer.on_handover(request),
            ReportOutcome::Suppressed { target, since_last } => {
                observer.on_suppressed(report.terminal, target, *since_last, now)
            }
            ReportOutcome::Skipped | ReportOutcome::NoCandidate => {}
        }
        outcome
    }

    /// Evaluate every report against the (already updated) store.
    ///
    /// With the `parallel` feature the evaluations run on Rayon's pool; the
    /// store and algorithm are only borrowed immutably.
    fn evaluate_all(&self, reports: &[MeasurementReport], now: SimTime) -> Vec<Option<Decision>> {
        let store     = &self.store;
        let algorithm = &self.algorithm;

        #[cfg(not(feature = "parallel"))]
        {
            reports.iter().map(|r| evaluate(store, algorithm, r, now)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            reports.par_iter().map(|r| evaluate(store, algorithm, r, now)).collect()
        }
    }
}

/// Evaluate one report, or `None` if the terminal has no neighbour data.
fn evaluate<A: HandoverAlgorithm>(
    store:     &MeasurementStore,
    algorithm: &A,
    report:    &MeasurementReport,
    now:       SimTime,
) -> Option<Decision> {
    match store.neighbour_measurements(report.terminal) {
        Ok(row) => Some(algorithm.evaluate(&EvaluationInput::from_report(report, row, now))),
        Err(e) => {
            debug!(terminal = %report.terminal, error = %e, "evaluation skipped");
            None
        }
    }
}
