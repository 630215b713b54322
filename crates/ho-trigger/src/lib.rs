//! `ho-trigger` - turns decisions into handover requests.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`request`] | `HandoverRequest` - what the execution layer receives         |
//! | [`state`]   | `TriggerState`, `TriggerOutcome`                              |
//! | [`sink`]    | `HandoverSink` trait, `DiscardSink`, Vec/channel/closure sinks |
//! | [`trigger`] | `HandoverTrigger` - per-terminal cooldown table               |
//!
//! # State machine (per terminal)
//!
//! ```text
//!            qualifying target                 now - last >= cooldown
//!   Idle ─────────────────────▶ CoolingDown ──────────────────────────▶ Idle
//!                                   │  ▲
//!                                   └──┘ qualifying target: Suppressed
//! ```
//!
//! The state is not stored; it is derived from the last handover time at each
//! check, so no timer is needed.

pub mod request;
pub mod sink;
pub mod state;
pub mod trigger;


pub use request::HandoverRequest;
pub use sink::{DiscardSink, HandoverSink};
pub use state::{TriggerOutcome, TriggerState};
pub use trigger::HandoverTrigger;
