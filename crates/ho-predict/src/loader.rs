//! Trace and cell-site loaders.
//!
//! # Trace CSV format
//!
//! One row per position sample, any order.  `z` is optional.
//!
//! ```csv
//! terminal_id,time,x,y,z
//! 1,0.0,0.0,0.0,1.5
//! 1,1.0,20.0,0.0,1.5
//! 2,0.0,500.0,40.0,1.5
//! ```
//!
//! # ns-2 movement format
//!
//! SUMO's `traceExporter` writes ns-2 movement scripts.  Only `setdest`
//! commands carry samples; every other line (initial `set X_` placement,
//! comments) is ignored.
//!
//! ```text
//! $ns_ at 12.0 "$node_(3) setdest 410.25 87.10 13.89"
//! ```
//!
//! Node indices are 0-based while terminal IDs are 1-based, so `$node_(n)`
//! becomes `TerminalId(n + 1)`.  The third number after `setdest`
//! (speed in the ns-2 grammar) is stored as `z` and never used.
//!
//! # Malformed samples
//!
//! A line that does not parse is logged at `warn`, recorded in
//! [`TraceLoad::skipped`], and the scan continues.  Only I/O failures abort.
//!
//! # Cell site formats
//!
//! CSV with header `cell_id,x,y`, or the whitespace "cell list" format with
//! one `<cell_id> <x> <y>` triple per line.  Site files are small and
//! hand-written, so a bad line there is an error, not a skip.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use ho_core::{CellId, SimTime, SitePoint, TerminalId};

use crate::{CellSiteTable, PredictError, PredictResult, TraceSample, TrajectoryTrace};

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TraceRecord {
    terminal_id: u32,
    time:        f64,
    x:           f64,
    y:           f64,
    #[serde(default)]
    z:           f64,
}

#[derive(Deserialize)]
struct SiteRecord {
    cell_id: u16,
    x:       f64,
    y:       f64,
}

/// Result of loading one trace: the usable samples plus every skipped line.
#[derive(Debug, Default)]
pub struct TraceLoad {
    pub trace:   TrajectoryTrace,
    /// One [`PredictError::TraceParse`] per skipped line, in file order.
    pub skipped: Vec<PredictError>,
}

// ── Trace CSV ─────────────────────────────────────────────────────────────────

/// Load a trace from a CSV file.
pub fn load_trace_csv(path: &Path) -> PredictResult<TraceLoad> {
    let file = std::fs::File::open(path)?;
    load_trace_reader(file)
}

/// Like [`load_trace_csv`] but accepts any `Read` source.
pub fn load_trace_reader<R: Read>(reader: R) -> PredictResult<TraceLoad> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut trace   = TrajectoryTrace::new();
    let mut skipped = Vec::new();
    let mut record  = csv::StringRecord::new();

    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                skip(&mut skipped, line, e.to_string());
                continue;
            }
        }
        let line = record.position().map_or(0, |p| p.line());

        match record.deserialize::<TraceRecord>(Some(&headers)) {
            Ok(r) => match sample_from_parts(TerminalId(r.terminal_id), r.time, r.x, r.y, r.z) {
                Ok(s) => trace.push(s),
                Err(reason) => skip(&mut skipped, line, reason),
            },
            Err(e) => skip(&mut skipped, line, e.to_string()),
        }
    }

    Ok(TraceLoad { trace: trace.finish(), skipped })
}

// ── ns-2 movement scripts ─────────────────────────────────────────────────────

/// Load a trace from an ns-2 movement file.
pub fn load_ns2_trace(path: &Path) -> PredictResult<TraceLoad> {
    let file = std::fs::File::open(path)?;
    load_ns2_reader(file)
}

/// Like [`load_ns2_trace`] but accepts any `Read` source.
pub fn load_ns2_reader<R: Read>(reader: R) -> PredictResult<TraceLoad> {
    let mut trace   = TrajectoryTrace::new();
    let mut skipped = Vec::new();

    // Split on raw bytes so a stray non-UTF-8 line is skipped, not fatal.
    for (i, bytes) in BufReader::new(reader).split(b'\n').enumerate() {
        let bytes = bytes?;
        let line  = String::from_utf8_lossy(&bytes);
        match parse_ns2_line(&line) {
            Ok(Some(sample)) => trace.push(sample),
            Ok(None) => {}
            Err(reason) => skip(&mut skipped, i as u64 + 1, reason),
        }
    }

    Ok(TraceLoad { trace: trace.finish(), skipped })
}

/// Parse one line of an ns-2 movement script.
///
/// Returns `Ok(None)` for lines that are not `setdest` commands.
pub fn parse_ns2_line(line: &str) -> Result<Option<TraceSample>, String> {
    let cleaned = line.replace('"', " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let Some(cmd) = tokens.iter().position(|t| *t == "setdest") else {
        return Ok(None);
    };
    // $ns_ at <time> $node_(<n>) setdest <x> <y> <speed>
    if cmd < 3 || tokens[cmd - 3] != "at" || tokens.len() < cmd + 4 {
        return Err(format!(
            "expected `$ns_ at <time> \"$node_(<n>) setdest <x> <y> <speed>\"`, got {:?}",
            line.trim()
        ));
    }

    let time     = parse_number(tokens[cmd - 2], "time")?;
    let terminal = parse_node(tokens[cmd - 1])?;
    let x        = parse_number(tokens[cmd + 1], "x")?;
    let y        = parse_number(tokens[cmd + 2], "y")?;
    let z        = parse_number(tokens[cmd + 3], "speed")?;

    sample_from_parts(terminal, time, x, y, z).map(Some)
}

// ── Cell sites ────────────────────────────────────────────────────────────────

/// Load the cell site table from a CSV file with header `cell_id,x,y`.
pub fn load_cell_sites_csv(path: &Path) -> PredictResult<CellSiteTable> {
    let file = std::fs::File::open(path)?;
    load_cell_sites_reader(file)
}

/// Like [`load_cell_sites_csv`] but accepts any `Read` source.
pub fn load_cell_sites_reader<R: Read>(reader: R) -> PredictResult<CellSiteTable> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut table = CellSiteTable::new();

    for result in rdr.deserialize::<SiteRecord>() {
        let row = result.map_err(|e| PredictError::SiteParse {
            line:   e.position().map_or(0, |p| p.line()),
            reason: e.to_string(),
        })?;
        table.insert(CellId(row.cell_id), SitePoint::new(row.x, row.y))?;
    }
    Ok(table)
}

/// Load the whitespace-separated cell list format from a file.
pub fn load_cell_list(path: &Path) -> PredictResult<CellSiteTable> {
    let text = std::fs::read_to_string(path)?;
    parse_cell_list(&text)
}

/// Parse `<cell_id> <x> <y>` lines.  Blank lines and `#` comments are ignored.
pub fn parse_cell_list(text: &str) -> PredictResult<CellSiteTable> {
    let mut table = CellSiteTable::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let site_err = |reason: String| PredictError::SiteParse { line: i as u64 + 1, reason };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [id, x, y] = fields[..] else {
            return Err(site_err(format!("expected 3 fields, got {}", fields.len())));
        };
        let cell = id
            .parse::<u16>()
            .map_err(|_| site_err(format!("invalid cell id {id:?}")))?;
        let x = parse_number(x, "x").map_err(site_err)?;
        let y = parse_number(y, "y").map_err(site_err)?;

        table.insert(CellId(cell), SitePoint::new(x, y))?;
    }
    Ok(table)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn skip(skipped: &mut Vec<PredictError>, line: u64, reason: String) {
    warn!(line, %reason, "skipping malformed trace line");
    skipped.push(PredictError::TraceParse { line, reason });
}

fn sample_from_parts(
    terminal: TerminalId,
    time:     f64,
    x:        f64,
    y:        f64,
    z:        f64,
) -> Result<TraceSample, String> {
    if !terminal.is_valid() {
        return Err(format!("terminal id {} is reserved", terminal.0));
    }
    if ![time, x, y, z].iter().all(|v| v.is_finite()) {
        return Err(format!("non-finite value in sample (t={time}, x={x}, y={y}, z={z})"));
    }
    Ok(TraceSample {
        terminal,
        time:     SimTime(time),
        position: SitePoint::new(x, y),
        z,
    })
}

fn parse_number(token: &str, what: &str) -> Result<f64, String> {
    token
        .parse::<f64>()
        .map_err(|_| format!("invalid {what} {token:?}"))
}

fn parse_node(token: &str) -> Result<TerminalId, String> {
    token
        .strip_prefix("$node_(")
        .and_then(|rest| rest.strip_suffix(')'))
        .and_then(|n| n.parse::<u32>().ok())
        .and_then(|n| n.checked_add(1))
        .map(TerminalId)
        .ok_or_else(|| format!("invalid node reference {token:?}"))
}
