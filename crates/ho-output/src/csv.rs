//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `decisions.csv`
//! - `handovers.csv`
//!
//! An absent target leaves `best_cell` and `best_score` empty.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DecisionRow, HandoverRow, OutputResult};

/// Writes decision output to two CSV files.
pub struct CsvWriter {
    decisions: Writer<File>,
    handovers: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut decisions = Writer::from_path(dir.join("decisions.csv"))?;
        decisions.write_record([
            "time",
            "terminal_id",
            "serving_cell",
            "serving_rsrq",
            "best_cell",
            "best_score",
            "outcome",
        ])?;

        let mut handovers = Writer::from_path(dir.join("handovers.csv"))?;
        handovers.write_record(["time", "terminal_id", "source_cell", "target_cell"])?;

        Ok(Self { decisions, handovers, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()> {
        for row in rows {
            self.decisions.write_record(&[
                row.time.to_string(),
                row.terminal_id.to_string(),
                row.serving_cell.to_string(),
                row.serving_rsrq.to_string(),
                row.best_cell.map(|c| c.to_string()).unwrap_or_default(),
                row.best_score.map(|s| s.to_string()).unwrap_or_default(),
                row.outcome.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_handover(&mut self, row: &HandoverRow) -> OutputResult<()> {
        self.handovers.write_record(&[
            row.time.to_string(),
            row.terminal_id.to_string(),
            row.source_cell.to_string(),
            row.target_cell.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.decisions.flush()?;
        self.handovers.flush()?;
        Ok(())
    }
}
