//! Unit tests for ho-score.

use ho_core::{
    AhpWeights, CellId, HandoverConfig, Horizon, Rsrq, SimTime, SitePoint, TerminalClass,
    TerminalId,
};
use ho_measure::NeighbourRow;
use ho_predict::{
    CellSiteTable, NoPrediction, TableClassifier, TracePredictor, TraceSample, TraceSet,
    TrajectoryTrace,
};

use crate::{
    AhpScorer, EvaluationInput, HandoverAlgorithm, NoOpAlgorithm, NoReadings, ReadingTable,
    RsrqThresholdAlgorithm,
};

const T: TerminalId = TerminalId(7);

fn row(cells: &[(u16, u8)]) -> NeighbourRow {
    cells.iter().map(|&(c, q)| (CellId(c), Rsrq(q))).collect()
}

fn input(serving: (u16, u8), neighbours: &NeighbourRow) -> EvaluationInput<'_> {
    EvaluationInput::new(T, CellId(serving.0), Rsrq(serving.1), neighbours, SimTime(10.0))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// QoE / PDR of the reference scenario: serving cell 1, neighbour cell 2.
fn scenario_readings() -> (ReadingTable, ReadingTable) {
    let qoe = ReadingTable::new().with(CellId(1), 2.0).with(CellId(2), 4.0);
    let pdr = ReadingTable::new().with(CellId(1), 0.5).with(CellId(2), 0.9);
    (qoe, pdr)
}

fn flat_scorer() -> AhpScorer<NoPrediction, ReadingTable, ReadingTable> {
    let (qoe, pdr) = scenario_readings();
    AhpScorer::new(&HandoverConfig::default(), NoPrediction, qoe, pdr).unwrap()
}

// ── Reading sources ───────────────────────────────────────────────────────────

#[cfg(test)]
mod reading {
    use std::fs;

    use super::*;
    use crate::{ProbeDirectory, ReadingSource};

    #[test]
    fn table_clones_share_values() {
        let table = ReadingTable::new();
        let handle = table.clone();
        handle.set(CellId(3), 1.5);
        assert_eq!(table.reading(CellId(3)), Some(1.5));
        handle.clear(CellId(3));
        assert_eq!(table.reading(CellId(3)), None);
        assert!(table.is_empty());
    }

    #[test]
    fn table_from_iter() {
        let table: ReadingTable = [(CellId(1), 0.2), (CellId(2), 0.4)].into_iter().collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.reading(CellId(2)), Some(0.4));
    }

    #[test]
    fn closure_and_no_readings() {
        let src = |cell: CellId| (cell.0 == 1).then_some(9.0);
        assert_eq!(src.reading(CellId(1)), Some(9.0));
        assert_eq!(src.reading(CellId(2)), None);
        assert_eq!(NoReadings.reading(CellId(1)), None);
    }

    #[test]
    fn probe_directory_takes_last_token() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("qoeTorre2"), "1.0 2.0\n3.5\n").unwrap();
        let probes = ProbeDirectory::new(dir.path(), "qoeTorre");
        assert_eq!(probes.reading(CellId(2)), Some(3.5));
    }

    #[test]
    fn probe_directory_unavailable_cases() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("pdrTorre1"), "").unwrap();
        fs::write(dir.path().join("pdrTorre2"), "0.9 n/a\n").unwrap();
        let probes = ProbeDirectory::new(dir.path(), "pdrTorre");
        assert_eq!(probes.reading(CellId(1)), None); // empty
        assert_eq!(probes.reading(CellId(2)), None); // unparsable
        assert_eq!(probes.reading(CellId(3)), None); // missing
    }
}

// ── AHP scorer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ahp {
    use super::*;

    #[test]
    fn reference_scenario_selects_neighbour() {
        let neighbours = row(&[(2, 25)]);
        let d = flat_scorer().evaluate(&input((1, 10), &neighbours));

        assert_eq!(d.candidates.len(), 2);
        let serving = d.candidate(CellId(1)).unwrap();
        let neighbour = d.candidate(CellId(2)).unwrap();
        assert!(approx(serving.raw_score, 2.245));
        assert!(approx(neighbour.raw_score, 5.133));
        assert!(approx(neighbour.adjusted_score, 5.133));

        let best = d.best.unwrap();
        assert_eq!(best.cell, CellId(2));
        assert_eq!(best.rsrq, Rsrq(25));
    }

    #[test]
    fn serving_candidate_comes_first() {
        let neighbours = row(&[(5, 12), (3, 11)]);
        let d = flat_scorer().evaluate(&input((4, 10), &neighbours));
        let cells: Vec<u16> = d.candidates.iter().map(|c| c.cell.0).collect();
        assert_eq!(cells, vec![4, 3, 5]);
    }

    #[test]
    fn neighbour_entry_for_serving_cell_is_skipped() {
        // A stale neighbour entry for the serving cell must not become a
        // second candidate; the report's fresh value is used.
        let neighbours = row(&[(1, 30), (2, 25)]);
        let d = flat_scorer().evaluate(&input((1, 10), &neighbours));
        assert_eq!(d.candidates.len(), 2);
        assert_eq!(d.candidate(CellId(1)).unwrap().rsrq, Rsrq(10));
        assert_eq!(d.best.unwrap().cell, CellId(2));
    }

    #[test]
    fn better_score_without_better_rsrq_is_not_selected() {
        let qoe = ReadingTable::new().with(CellId(2), 100.0);
        let scorer = AhpScorer::new(&HandoverConfig::default(), NoPrediction, qoe, NoReadings).unwrap();
        let neighbours = row(&[(2, 10)]);
        let d = scorer.evaluate(&input((1, 10), &neighbours));
        assert!(d.candidate(CellId(2)).unwrap().adjusted_score > d.candidates[0].adjusted_score);
        assert!(d.best.is_none());
    }

    #[test]
    fn selected_target_always_beats_serving_rsrq() {
        let neighbours = row(&[(2, 9), (3, 11), (4, 10), (5, 30)]);
        let d = flat_scorer().evaluate(&input((1, 10), &neighbours));
        let best = d.best.unwrap();
        assert!(best.rsrq > Rsrq(10));
        assert_eq!(best.cell, CellId(5));
    }

    #[test]
    fn ties_go_to_lowest_cell() {
        let neighbours = row(&[(9, 20), (3, 20), (6, 20)]);
        let scorer = AhpScorer::new(&HandoverConfig::default(), NoPrediction, NoReadings, NoReadings).unwrap();
        let d = scorer.evaluate(&input((1, 10), &neighbours));
        assert_eq!(d.best.unwrap().cell, CellId(3));
    }

    #[test]
    fn neighbour_offset_raises_the_bar() {
        let config = HandoverConfig { neighbour_offset: 3, ..HandoverConfig::default() };
        let scorer = AhpScorer::new(&config, NoPrediction, NoReadings, NoReadings).unwrap();
        let close = row(&[(2, 13)]);
        assert!(scorer.evaluate(&input((1, 10), &close)).best.is_none());
        let far = row(&[(2, 14)]);
        assert_eq!(scorer.evaluate(&input((1, 10), &far)).best.unwrap().cell, CellId(2));
    }

    #[test]
    fn bad_readings_count_as_zero() {
        let qoe = ReadingTable::new().with(CellId(2), -4.0);
        let pdr = |_: CellId| Some(f64::NAN);
        let scorer = AhpScorer::new(&HandoverConfig::default(), NoPrediction, qoe, pdr).unwrap();
        let neighbours = row(&[(2, 20)]);
        let d = scorer.evaluate(&input((1, 10), &neighbours));
        let c = d.candidate(CellId(2)).unwrap();
        assert_eq!((c.qoe, c.pdr), (0.0, 0.0));
        assert!(approx(c.raw_score, 0.14 * 20.0));
    }

    #[test]
    fn no_other_neighbours_means_no_target() {
        let neighbours = row(&[(1, 30)]);
        let d = flat_scorer().evaluate(&input((1, 10), &neighbours));
        assert!(d.best.is_none());
        assert_eq!(d.candidates.len(), 1);
    }
}

// ── Distance adjustment ───────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use super::*;

    fn sites() -> CellSiteTable {
        CellSiteTable::new()
            .with_site(CellId(1), SitePoint::new(0.0, 0.0))
            .with_site(CellId(2), SitePoint::new(1000.0, 0.0))
            .with_site(CellId(3), SitePoint::new(0.0, 400.0))
    }

    /// Terminal parked at (200, 0) for the whole horizon after t = 10.
    fn parked() -> TrajectoryTrace {
        (10..30)
            .map(|t| TraceSample {
                terminal: T,
                time:     SimTime(t as f64),
                position: SitePoint::new(200.0, 0.0),
                z:        0.0,
            })
            .collect()
    }

    fn predictor(trace: TrajectoryTrace) -> TracePredictor<TableClassifier> {
        TracePredictor::new(
            TraceSet::new().with(TerminalClass::Vehicle, trace),
            sites(),
            TableClassifier::new().assign(T, TerminalClass::Vehicle),
        )
    }

    #[test]
    fn score_divided_by_mean_distance() {
        let (qoe, pdr) = scenario_readings();
        let scorer = AhpScorer::new(&HandoverConfig::default(), predictor(parked()), qoe, pdr).unwrap();
        let neighbours = row(&[(2, 25)]);
        let d = scorer.evaluate(&input((1, 10), &neighbours));

        let serving = d.candidate(CellId(1)).unwrap();
        assert!(approx(serving.mean_distance.unwrap(), 200.0));
        assert!(approx(serving.adjusted_score, 2.245 / 200.0));
        let neighbour = d.candidate(CellId(2)).unwrap();
        assert!(approx(neighbour.mean_distance.unwrap(), 800.0));
        assert!(approx(neighbour.adjusted_score, 5.133 / 800.0));
    }

    #[test]
    fn zero_score_neighbour_is_not_selected() {
        let config = HandoverConfig {
            weights: AhpWeights { rsrq: 0.0, ..AhpWeights::default() },
            ..HandoverConfig::default()
        };
        let scorer = AhpScorer::new(&config, NoPrediction, NoReadings, NoReadings).unwrap();
        let neighbours = row(&[(2, 25)]);
        let d = scorer.evaluate(&input((1, 10), &neighbours));
        assert_eq!(d.candidate(CellId(2)).unwrap().adjusted_score, 0.0);
        assert!(d.best.is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = HandoverConfig {
            horizon: Horizon { slots: 0, slot_secs: 1.0 },
            ..HandoverConfig::default()
        };
        assert!(AhpScorer::new(&config, NoPrediction, NoReadings, NoReadings).is_err());
    }

    #[test]
    fn nearer_cell_can_outrank_stronger_cell() {
        // Cell 2 has the better raw score, cell 3 is much closer.
        let scorer = AhpScorer::new(
            &HandoverConfig::default(),
            predictor(parked()),
            NoReadings,
            NoReadings,
        ).unwrap();
        let neighbours = row(&[(2, 30), (3, 20)]);
        let d = scorer.evaluate(&input((1, 10), &neighbours));
        let c2 = d.candidate(CellId(2)).unwrap();
        let c3 = d.candidate(CellId(3)).unwrap();
        assert!(c2.raw_score > c3.raw_score);
        assert_eq!(d.best.unwrap().cell, CellId(3));
    }

    #[test]
    fn all_zero_horizon_is_unpenalized() {
        let (qoe, pdr) = scenario_readings();
        let empty = TrajectoryTrace::new();
        let scorer = AhpScorer::new(&HandoverConfig::default(), predictor(empty), qoe, pdr).unwrap();
        let neighbours = row(&[(2, 25)]);
        let d = scorer.evaluate(&input((1, 10), &neighbours));
        for c in &d.candidates {
            assert_eq!(c.mean_distance, Some(0.0));
            assert_eq!(c.adjusted_score, c.raw_score);
        }
        assert_eq!(d.best.unwrap().cell, CellId(2));
    }

    #[test]
    fn cell_without_site_is_unpenalized() {
        let scorer = AhpScorer::new(
            &HandoverConfig::default(),
            predictor(parked()),
            NoReadings,
            NoReadings,
        ).unwrap();
        let neighbours = row(&[(8, 20)]);
        let d = scorer.evaluate(&input((1, 10), &neighbours));
        let c = d.candidate(CellId(8)).unwrap();
        assert_eq!(c.mean_distance, None);
        assert_eq!(c.adjusted_score, c.raw_score);
    }

    #[test]
    fn horizon_from_config_is_used() {
        let config = HandoverConfig {
            horizon: Horizon { slots: 40, slot_secs: 1.0 },
            ..HandoverConfig::default()
        };
        let scorer = AhpScorer::new(&config, predictor(parked()), NoReadings, NoReadings).unwrap();
        let neighbours = row(&[(2, 25)]);
        let d = scorer.evaluate(&input((1, 10), &neighbours));
        // 20 covered slots out of 40: mean is half the true distance.
        assert!(approx(d.candidate(CellId(1)).unwrap().mean_distance.unwrap(), 100.0));
    }
}

// ── Baselines ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod baselines {
    use super::*;

    #[test]
    fn noop_never_proposes() {
        let neighbours = row(&[(2, 34)]);
        let d = NoOpAlgorithm.evaluate(&input((1, 0), &neighbours));
        assert!(d.best.is_none());
        assert_eq!(NoOpAlgorithm.name(), "noop");
    }

    #[test]
    fn threshold_hands_over_weak_serving() {
        let alg = RsrqThresholdAlgorithm::default();
        let neighbours = row(&[(2, 22), (3, 25)]);
        let d = alg.evaluate(&input((1, 20), &neighbours));
        assert_eq!(d.best.unwrap().cell, CellId(3));
    }

    #[test]
    fn threshold_ignores_strong_serving() {
        let alg = RsrqThresholdAlgorithm::default();
        let neighbours = row(&[(2, 34)]);
        assert!(alg.evaluate(&input((1, 31), &neighbours)).best.is_none());
        assert!(alg.evaluate(&input((1, 30), &neighbours)).best.is_some());
    }

    #[test]
    fn threshold_requires_offset() {
        let alg = RsrqThresholdAlgorithm::default();
        let one_step = row(&[(2, 21)]);
        assert!(alg.evaluate(&input((1, 20), &one_step)).best.is_none());
        let two_steps = row(&[(2, 22)]);
        assert!(alg.evaluate(&input((1, 20), &two_steps)).best.is_some());
    }

    #[test]
    fn threshold_zero_offset_still_needs_better_rsrq() {
        let alg = RsrqThresholdAlgorithm::new(Rsrq(30), 0);
        let equal = row(&[(2, 20)]);
        assert!(alg.evaluate(&input((1, 20), &equal)).best.is_none());
    }
}
