//! drive_test - one vehicle driving past four cells.
//!
//! A terminal moves at 20 m/s along a road lined with four cells 1000 m
//! apart and sends a measurement report every 480 ms for 150 s.  Its future
//! trajectory is known (it is the trace the drive follows), so the scorer's
//! distance adjustment sees where the vehicle is heading.
//!
//! Usage: `drive_test [config.json]`.  The JSON file may override any
//! `HandoverConfig` field; missing fields keep their defaults.  Set
//! `RUST_LOG=debug` to see every evaluation.

mod radio;

use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ho_core::{CellId, HandoverConfig, MeasurementReport, SimTime, TerminalClass, TerminalId};
use ho_engine::{HandoverControllerBuilder, HandoverObserver, OutcomeCounter, ReportOutcome};
use ho_output::{CsvWriter, DecisionObserver, OutputWriter};
use ho_predict::{TableClassifier, TracePredictor, TraceSet};
use ho_score::{AhpScorer, Decision, Target};
use ho_trigger::HandoverRequest;

use radio::{Probes, cell_sites, measurement_report, vehicle_trace};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64        = 42;
const TERMINAL:         TerminalId = TerminalId(1);
const DURATION_SECS:    f64        = 150.0;
const REPORT_INTERVAL:  f64        = 0.48;
/// Probe values are republished this often.
const PROBE_INTERVAL:   f64        = 10.0;
const OUTPUT_DIR:       &str       = "output/drive_test";

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Feeds both the file writer and the outcome tally.
struct DriveObserver<W: OutputWriter> {
    output:  DecisionObserver<W>,
    counter: OutcomeCounter,
}

impl<W: OutputWriter> HandoverObserver for DriveObserver<W> {
    fn on_report(&mut self, report: &MeasurementReport, now: SimTime) {
        self.counter.on_report(report, now);
    }

    fn on_skipped(&mut self, terminal: TerminalId, now: SimTime) {
        self.counter.on_skipped(terminal, now);
    }

    fn on_decision(
        &mut self,
        report:   &MeasurementReport,
        decision: &Decision,
        outcome:  &ReportOutcome,
        now:      SimTime,
    ) {
        self.counter.on_decision(report, decision, outcome, now);
        self.output.on_decision(report, decision, outcome, now);
    }

    fn on_handover(&mut self, request: &HandoverRequest) {
        self.counter.on_handover(request);
        self.output.on_handover(request);
    }

    fn on_suppressed(&mut self, terminal: TerminalId, target: &Target, since_last: f64, now: SimTime) {
        self.counter.on_suppressed(terminal, target, since_last, now);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config() -> Result<HandoverConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            let config: HandoverConfig = serde_json::from_str(&text)
                .with_context(|| format!("parsing config {path}"))?;
            info!(%path, "loaded configuration");
            Ok(config)
        }
        None => Ok(HandoverConfig::default()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    println!("=== drive_test - handover decision core ===");
    println!(
        "Cells: {}  |  Speed: {} m/s  |  Duration: {DURATION_SECS} s  |  Seed: {SEED}",
        radio::CELL_COUNT,
        radio::SPEED_MPS
    );
    println!();

    let config = load_config()?;
    let mut rng = SmallRng::seed_from_u64(SEED);

    // 1. Collaborators: sites, the vehicle's trace, probe readings.
    let sites = cell_sites();
    let lookahead = config.horizon.span();
    let traces = TraceSet::new()
        .with(TerminalClass::Vehicle, vehicle_trace(TERMINAL, DURATION_SECS + lookahead));
    let classifier = TableClassifier::new().assign(TERMINAL, TerminalClass::Vehicle);
    let predictor = TracePredictor::new(traces, sites.clone(), classifier);
    let probes = Probes::new(&mut rng);

    // 2. Controller.  Fired requests go to the "execution layer" over a channel.
    let scorer = AhpScorer::new(&config, predictor, probes.qoe.clone(), probes.pdr.clone())?;
    let (tx, rx) = mpsc::channel::<HandoverRequest>();
    let mut controller = HandoverControllerBuilder::new(config, scorer, tx).build()?;

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = DriveObserver { output: DecisionObserver::new(writer), counter: OutcomeCounter::default() };

    // 4. Drive.
    let mut serving = CellId(1);
    let mut handovers = Vec::new();
    let mut next_probe = PROBE_INTERVAL;
    let t0 = Instant::now();

    let steps = (DURATION_SECS / REPORT_INTERVAL).floor() as u32;
    for step in 0..=steps {
        let now = SimTime(f64::from(step) * REPORT_INTERVAL);
        if now.secs() >= next_probe {
            probes.drift(&mut rng);
            next_probe += PROBE_INTERVAL;
        }

        let report = measurement_report(TERMINAL, serving, now, &sites, &mut rng);
        controller.process_report(&report, now, &mut obs);

        // Execution layer: every accepted request succeeds immediately.
        while let Ok(request) = rx.try_recv() {
            serving = request.target;
            handovers.push(request);
        }
    }
    let elapsed = t0.elapsed();

    controller.release_terminal(TERMINAL);
    obs.output.finish()?;

    // 5. Summary.
    let c = obs.counter;
    println!("Drive complete in {:.3} s", elapsed.as_secs_f64());
    println!("  reports     : {}", c.reports);
    println!("  skipped     : {}", c.skipped);
    println!("  decisions   : {} ({} without candidate)", c.decisions, c.no_candidate());
    println!("  handovers   : {}", c.handovers);
    println!("  suppressed  : {}", c.suppressed);
    println!("  output      : {OUTPUT_DIR}/decisions.csv, {OUTPUT_DIR}/handovers.csv");
    println!();

    println!("{:<10} {:<8} {:<8}", "Time", "From", "To");
    println!("{}", "-".repeat(26));
    for h in &handovers {
        println!("{:<10.2} {:<8} {:<8}", h.time.secs(), h.source.0, h.target.0);
    }
    println!();
    println!("Final serving cell: {}", serving.0);

    Ok(())
}
