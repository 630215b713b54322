//! Terminal mobility classes.
//!
//! Trajectory traces are exported per class (one file each), so the class is
//! what selects which trace a terminal's future positions are read from.

/// The kind of mobility a terminal follows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TerminalClass {
    /// On foot.
    Pedestrian,
    /// Private vehicle or taxi.
    Vehicle,
    /// Scheduled public transit (bus, tram…).
    Transit,
}

impl TerminalClass {
    pub const ALL: [TerminalClass; 3] = [
        TerminalClass::Pedestrian,
        TerminalClass::Vehicle,
        TerminalClass::Transit,
    ];

    /// Label used in file names and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            TerminalClass::Pedestrian => "pedestrian",
            TerminalClass::Vehicle    => "vehicle",
            TerminalClass::Transit    => "transit",
        }
    }
}

impl std::fmt::Display for TerminalClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
