//! `ho-predict` - trajectory lookahead for distance-aware scoring.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`trace`]     | `TraceSample`, `TrajectoryTrace`, `TraceSet`                |
//! | [`sites`]     | `CellSiteTable`                                             |
//! | [`classify`]  | `TerminalClassifier` trait, `RangeClassifier`, `TableClassifier` |
//! | [`forecast`]  | `DistanceForecast` - (cell, slot) → distance matrix         |
//! | [`predictor`] | `PositionPredictor` trait, `TracePredictor`, `NoPrediction` |
//! | [`loader`]    | CSV / ns-2 trace loaders, cell site loaders                 |
//! | [`error`]     | `PredictError`, `PredictResult<T>`                          |
//!
//! # Prediction model
//!
//! ```text
//! class    = classifier(terminal)
//! samples  = trace[class].window(terminal, now, horizon)
//! for s in samples, site in sites:
//!     dist[site][slot_of(s.time)] = |s.xy - site.xy|
//! ```
//!
//! Traces and the site table are loaded once and only read afterwards.

pub mod classify;
pub mod error;
pub mod forecast;
pub mod loader;
pub mod predictor;
pub mod sites;
pub mod trace;


pub use classify::{RangeClassifier, TableClassifier, TerminalClassifier};
pub use error::{PredictError, PredictResult};
pub use forecast::DistanceForecast;
pub use loader::{
    TraceLoad, load_cell_list, load_cell_sites_csv, load_cell_sites_reader, load_ns2_reader,
    load_ns2_trace, load_trace_csv, load_trace_reader, parse_cell_list, parse_ns2_line,
};
pub use predictor::{NoPrediction, PositionPredictor, TracePredictor};
pub use sites::CellSiteTable;
pub use trace::{TraceSample, TraceSet, TrajectoryTrace};
