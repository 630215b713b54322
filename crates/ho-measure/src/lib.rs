//! `ho-measure` - per-terminal neighbour measurement storage.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`row`]   | `NeighbourRow` - one terminal's cell → RSRQ map            |
//! | [`store`] | `MeasurementStore` - terminal → `NeighbourRow`             |
//! | [`error`] | `MeasureError`, `MeasureResult<T>`                         |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for the terminal map.      |
//!
//! There is no history: every update overwrites, so a (terminal, cell) pair
//! has at most one live value.

pub mod error;
pub mod row;
pub mod store;


pub use error::{MeasureError, MeasureResult};
pub use row::NeighbourRow;
pub use store::MeasurementStore;
