//! Planar site coordinates.
//!
//! Cell sites and trace samples live in the same local Cartesian frame as the
//! mobility traces (metres in SUMO/ns-2 exports), so distances are plain
//! Euclidean.  Altitude is carried by trace samples but never enters a
//! distance calculation.

/// A point in the simulation's planar frame.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SitePoint {
    pub x: f64,
    pub y: f64,
}

impl SitePoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in the x/y plane.
    #[inline]
    pub fn distance_to(self, other: SitePoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::fmt::Display for SitePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
