//! Simulation time model.
//!
//! # Design
//!
//! Measurement reports arrive at arbitrary fractional instants (e.g. every
//! 480 ms), and the anti-oscillation guard works on half-unit intervals, so
//! time is a continuous `f64` number of time-units (seconds in every shipped
//! scenario) rather than an integer tick.
//!
//! The lookahead window used by position prediction is a [`Horizon`]: a
//! fixed number of equally sized slots starting at "now".

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation instant, in time-units since the start of the run.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Return the instant `dt` units after `self`.
    #[inline]
    pub fn offset(self, dt: f64) -> SimTime {
        SimTime(self.0 + dt)
    }

    /// Units elapsed from `earlier` to `self`.  Negative if `earlier` is
    /// actually later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}", self.0)
    }
}

// ── Horizon ───────────────────────────────────────────────────────────────────

/// Fixed lookahead window: `slots` predictions spaced `slot_secs` apart.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Horizon {
    /// Number of predictions in the window.  Default: 20.
    pub slots: usize,
    /// Width of one slot in time-units.  Default: 1.0.
    pub slot_secs: f64,
}

impl Default for Horizon {
    fn default() -> Self {
        Self { slots: 20, slot_secs: 1.0 }
    }
}

impl Horizon {
    /// Total span of the window in time-units.
    #[inline]
    pub fn span(&self) -> f64 {
        self.slots as f64 * self.slot_secs
    }

    /// Slot index of instant `t` in the window starting at `now`, or `None`
    /// if `t` falls outside `now <= t < now + span`.
    pub fn slot_of(&self, now: SimTime, t: SimTime) -> Option<usize> {
        let dt = t.since(now);
        if !(0.0..self.span()).contains(&dt) {
            return None;
        }
        let slot = (dt / self.slot_secs).floor() as usize;
        // Guard the upper edge against floating-point rounding.
        Some(slot.min(self.slots - 1))
    }
}
