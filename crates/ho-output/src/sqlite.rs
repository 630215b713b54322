//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `decisions` and `handovers`.  An absent target is `NULL`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DecisionRow, HandoverRow, OutputResult};

/// Writes decision output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS decisions (
                 time         REAL    NOT NULL,
                 terminal_id  INTEGER NOT NULL,
                 serving_cell INTEGER NOT NULL,
                 serving_rsrq INTEGER NOT NULL,
                 best_cell    INTEGER,
                 best_score   REAL,
                 outcome      TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS handovers (
                 time        REAL    NOT NULL,
                 terminal_id INTEGER NOT NULL,
                 source_cell INTEGER NOT NULL,
                 target_cell INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO decisions \
                 (time, terminal_id, serving_cell, serving_rsrq, best_cell, best_score, outcome) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.time,
                    row.terminal_id,
                    row.serving_cell,
                    row.serving_rsrq,
                    row.best_cell,
                    row.best_score,
                    row.outcome,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_handover(&mut self, row: &HandoverRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO handovers (time, terminal_id, source_cell, target_cell) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.time, row.terminal_id, row.source_cell, row.target_cell],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
