//! `ho-core` - foundational types for the handover decision core.
//!
//! Every other `ho-*` crate depends on this one.  It has no `ho-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `TerminalId`, `CellId`                                |
//! | [`quality`] | `Rsrq`                                                |
//! | [`time`]    | `SimTime`, `Horizon`                                  |
//! | [`geo`]     | `SitePoint`, planar distance                          |
//! | [`class`]   | `TerminalClass`                                       |
//! | [`report`]  | `MeasurementReport`, `NeighbourReport`                |
//! | [`config`]  | `HandoverConfig`, `AhpWeights`                        |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod class;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod quality;
pub mod report;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use class::TerminalClass;
pub use config::{AhpWeights, HandoverConfig};
pub use error::{CoreError, CoreResult};
pub use geo::SitePoint;
pub use ids::{CellId, TerminalId};
pub use quality::Rsrq;
pub use report::{MeasurementReport, NeighbourReport};
pub use time::{Horizon, SimTime};
