//! Quantized radio-quality indicator.

use std::fmt;

/// Reference-signal received quality on the quantized ordinal scale used in
/// measurement reports (0 = worst, 34 = best).
///
/// Values above [`Rsrq::MAX_QUANTIZED`] are carried through unchanged: range
/// validation belongs to whoever produced the report.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rsrq(pub u8);

impl Rsrq {
    /// Top of the quantized reporting range.
    pub const MAX_QUANTIZED: Rsrq = Rsrq(34);

    /// `true` if the value lies inside the quantized reporting range.
    #[inline]
    pub fn in_range(self) -> bool {
        self <= Self::MAX_QUANTIZED
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// `self` strictly exceeds `other` by more than `offset` steps.
    #[inline]
    pub fn exceeds(self, other: Rsrq, offset: u8) -> bool {
        self.0 as u16 > other.0 as u16 + offset as u16
    }
}

impl fmt::Display for Rsrq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RSRQ {}", self.0)
    }
}
