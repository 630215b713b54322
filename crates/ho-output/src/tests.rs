//! Integration tests for ho-output.

use ho_core::{CellId, MeasurementReport, Rsrq, SimTime, TerminalId};
use ho_score::{Decision, Target};
use ho_trigger::HandoverRequest;

use crate::row::{DecisionRow, HandoverRow};

fn decision_row(terminal_id: u32, best: Option<(u16, f64)>, outcome: &'static str) -> DecisionRow {
    DecisionRow {
        time: 10.5,
        terminal_id,
        serving_cell: 1,
        serving_rsrq: 10,
        best_cell: best.map(|b| b.0),
        best_score: best.map(|b| b.1),
        outcome,
    }
}

fn handover_row() -> HandoverRow {
    HandoverRow { time: 10.5, terminal_id: 1, source_cell: 1, target_cell: 2 }
}

#[cfg(test)]
mod row_tests {
    use super::*;
    use ho_engine::ReportOutcome;

    #[test]
    fn decision_row_from_parts() {
        let report = MeasurementReport::new(TerminalId(4), CellId(1), Rsrq(10));
        let decision = Decision {
            best:       Some(Target { cell: CellId(2), rsrq: Rsrq(25), score: 5.133 }),
            candidates: vec![],
        };
        let row = DecisionRow::new(&report, &decision, &ReportOutcome::NoCandidate, SimTime(3.0));
        assert_eq!(row, DecisionRow {
            time:         3.0,
            terminal_id:  4,
            serving_cell: 1,
            serving_rsrq: 10,
            best_cell:    Some(2),
            best_score:   Some(5.133),
            outcome:      "no_candidate",
        });
    }

    #[test]
    fn handover_row_from_request() {
        let req = HandoverRequest {
            terminal: TerminalId(1),
            source:   CellId(1),
            target:   CellId(2),
            time:     SimTime(10.5),
        };
        assert_eq!(HandoverRow::from(&req), handover_row());
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("decisions.csv").exists());
        assert!(dir.path().join("handovers.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(
            headers(&dir.path().join("decisions.csv")),
            ["time", "terminal_id", "serving_cell", "serving_rsrq", "best_cell", "best_score", "outcome"]
        );
        assert_eq!(
            headers(&dir.path().join("handovers.csv")),
            ["time", "terminal_id", "source_cell", "target_cell"]
        );
    }

    #[test]
    fn csv_decisions_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_decisions(&[
            decision_row(1, Some((2, 5.133)), "fired"),
            decision_row(2, None, "no_candidate"),
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("decisions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "10.5");
        assert_eq!(&rows[0][4], "2");
        assert_eq!(&rows[0][5], "5.133");
        assert_eq!(&rows[0][6], "fired");
        assert_eq!(&rows[1][4], "");
        assert_eq!(&rows[1][5], "");
    }

    #[test]
    fn csv_handover_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_handover(&handover_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("handovers.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[0][3], "2");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("absent")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use ho_core::HandoverConfig;
    use ho_engine::HandoverControllerBuilder;
    use ho_predict::NoPrediction;
    use ho_score::{AhpScorer, NoReadings};

    use super::*;
    use crate::{CsvWriter, DecisionObserver, OutputError, OutputResult, OutputWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn controller_run_to_csv() {
        let config = HandoverConfig::default();
        let scorer = AhpScorer::new(&config, NoPrediction, NoReadings, NoReadings).unwrap();
        let mut controller = HandoverControllerBuilder::new(config, scorer, Vec::new())
            .build()
            .unwrap();

        let dir = tmp();
        let mut obs = DecisionObserver::new(CsvWriter::new(dir.path()).unwrap());
        let report = MeasurementReport::new(TerminalId(1), CellId(1), Rsrq(10))
            .with_neighbour(CellId(2), Rsrq(25));
        controller.process_report(&report, SimTime(10.0), &mut obs);
        controller.process_report(&report, SimTime(10.2), &mut obs);
        // No neighbours at all: skipped, not written.
        let lone = MeasurementReport::new(TerminalId(2), CellId(1), Rsrq(10));
        controller.process_report(&lone, SimTime(10.2), &mut obs);
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("decisions.csv")).unwrap();
        let outcomes: Vec<String> = rdr.records().map(|r| r.unwrap()[6].to_owned()).collect();
        assert_eq!(outcomes, ["fired", "suppressed"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("handovers.csv")).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }

    /// Fails every write.
    struct Broken;

    impl OutputWriter for Broken {
        fn write_decisions(&mut self, _rows: &[DecisionRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_handover(&mut self, _row: &HandoverRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        use ho_engine::HandoverObserver;

        let mut obs = DecisionObserver::new(Broken);
        let req = HandoverRequest {
            terminal: TerminalId(1),
            source:   CellId(1),
            target:   CellId(2),
            time:     SimTime(1.0),
        };
        obs.on_handover(&req);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
        obs.on_handover(&req);
        assert!(obs.finish().is_err());
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_decision_count_and_nulls() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_decisions(&[
            decision_row(1, Some((2, 5.133)), "fired"),
            decision_row(2, None, "no_candidate"),
        ])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM decisions", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
        let best: Option<i64> = conn
            .query_row("SELECT best_cell FROM decisions WHERE terminal_id = 2", [], |r| r.get(0))
            .unwrap();
        assert_eq!(best, None);
    }

    #[test]
    fn sqlite_handover() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_handover(&handover_row()).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (source, target): (i64, i64) = conn
            .query_row("SELECT source_cell, target_cell FROM handovers", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })
            .unwrap();
        assert_eq!((source, target), (1, 2));
    }
}
