//! `ho-output` - decision and handover writers.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                        |
//! |-----------|---------|--------------------------------------|
//! | *(none)*  | CSV     | `decisions.csv`, `handovers.csv`     |
//! | `sqlite`  | SQLite  | `output.db`                          |
//!
//! Both implement [`OutputWriter`] and are driven by [`DecisionObserver`],
//! which implements `ho_engine::HandoverObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ho_output::{CsvWriter, DecisionObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = DecisionObserver::new(writer);
//! controller.process_report(&report, now, &mut obs);
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DecisionObserver;
pub use row::{DecisionRow, HandoverRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
