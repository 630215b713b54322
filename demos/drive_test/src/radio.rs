//! Synthetic radio environment for the drive test.
//!
//! Four cells on a straight road, 1000 m apart.  RSRQ falls off linearly
//! with distance plus seeded jitter; QoE and PDR are per-cell random walks.

use rand::Rng;
use rand::rngs::SmallRng;

use ho_core::{CellId, MeasurementReport, Rsrq, SimTime, SitePoint, TerminalId};
use ho_predict::{CellSiteTable, TraceSample, TrajectoryTrace};
use ho_score::{ReadingSource, ReadingTable};

pub const CELL_COUNT:    u16 = 4;
pub const CELL_SPACING:  f64 = 1_000.0;
/// Lateral offset of the road from the cell sites.
pub const ROAD_OFFSET:   f64 = 50.0;
pub const SPEED_MPS:     f64 = 20.0;
/// Quantized RSRQ steps lost per metre.
const RSRQ_SLOPE:        f64 = 1.0 / 60.0;
const RSRQ_JITTER:       f64 = 1.5;

/// Cell sites along the x axis, starting at the origin.
pub fn cell_sites() -> CellSiteTable {
    (1..=CELL_COUNT).fold(CellSiteTable::new(), |table, id| {
        table.with_site(CellId(id), SitePoint::new(f64::from(id - 1) * CELL_SPACING, 0.0))
    })
}

/// Position of the test vehicle at `t`.
pub fn vehicle_position(t: SimTime) -> SitePoint {
    SitePoint::new(SPEED_MPS * t.secs(), ROAD_OFFSET)
}

/// One sample per second from 0 to `until` (inclusive).
pub fn vehicle_trace(terminal: TerminalId, until: f64) -> TrajectoryTrace {
    (0..=until.ceil() as u32)
        .map(|s| {
            let time = SimTime(f64::from(s));
            TraceSample { terminal, time, position: vehicle_position(time), z: 1.5 }
        })
        .collect()
}

/// Measured RSRQ of `site` at `position`.
fn measure(position: SitePoint, site: SitePoint, rng: &mut SmallRng) -> Rsrq {
    let ideal = Rsrq::MAX_QUANTIZED.as_f64() - position.distance_to(site) * RSRQ_SLOPE;
    let noisy = ideal + rng.gen_range(-RSRQ_JITTER..=RSRQ_JITTER);
    Rsrq(noisy.round().clamp(0.0, Rsrq::MAX_QUANTIZED.as_f64()) as u8)
}

/// The report the vehicle sends at `t` while attached to `serving`.
pub fn measurement_report(
    terminal: TerminalId,
    serving:  CellId,
    t:        SimTime,
    sites:    &CellSiteTable,
    rng:      &mut SmallRng,
) -> MeasurementReport {
    let here = vehicle_position(t);
    let mut report = MeasurementReport::new(terminal, serving, Rsrq(0));
    for (cell, site) in sites.iter() {
        let rsrq = measure(here, site, rng);
        if cell == serving {
            report.serving_rsrq = rsrq;
        } else {
            report = report.with_neighbour(cell, rsrq);
        }
    }
    report
}

/// Per-cell application metrics published by the probes.
pub struct Probes {
    pub qoe: ReadingTable,
    pub pdr: ReadingTable,
}

impl Probes {
    pub fn new(rng: &mut SmallRng) -> Self {
        let probes = Self { qoe: ReadingTable::new(), pdr: ReadingTable::new() };
        for id in 1..=CELL_COUNT {
            probes.qoe.set(CellId(id), rng.gen_range(2.0..4.5));
            probes.pdr.set(CellId(id), rng.gen_range(0.80..0.99));
        }
        probes
    }

    /// Nudge every cell's QoE and PDR.
    pub fn drift(&self, rng: &mut SmallRng) {
        for id in 1..=CELL_COUNT {
            let cell = CellId(id);
            let qoe = rng.gen_range(-0.3_f64..0.3) + self.qoe.reading(cell).unwrap_or(3.0);
            let pdr = rng.gen_range(-0.02_f64..0.02) + self.pdr.reading(cell).unwrap_or(0.9);
            self.qoe.set(cell, qoe.clamp(1.0, 5.0));
            self.pdr.set(cell, pdr.clamp(0.0, 1.0));
        }
    }
}
