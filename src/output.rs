//! Output formatting and persistence for traffic snapshots.
//!
//! Supports pretty-printing, JSON serialization for the map renderer, and
//! per-station CSV append.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::traffic::recompute::TrafficSnapshot;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// One CSV row per station per recomputation.
#[derive(Debug, Serialize)]
struct StationRow<'a> {
    time_filter: i32,
    short_name: &'a str,
    arrivals: u32,
    departures: u32,
    total_traffic: u32,
    radius: f64,
}

/// Logs a snapshot using Rust's debug pretty-print format.
pub fn print_pretty(snapshot: &TrafficSnapshot) {
    debug!("{:#?}", snapshot);
}

/// Logs a snapshot as pretty-printed JSON.
pub fn print_json(snapshot: &TrafficSnapshot) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(snapshot)?);
    Ok(())
}

/// Writes the full snapshot as JSON, the payload the renderer reads to draw
/// and size station markers.
pub fn write_snapshot(path: &str, snapshot: &TrafficSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)?;
    info!(path, stations = snapshot.stations.len(), "Snapshot written");
    Ok(())
}

/// Appends one row per station to a CSV file, including the marker radius the
/// snapshot's scale assigns.
///
/// Creates the file with headers if it does not already exist.
pub fn append_rows(path: &str, snapshot: &TrafficSnapshot) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV rows");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for station in &snapshot.stations {
        writer.serialize(StationRow {
            time_filter: snapshot.time_filter,
            short_name: &station.short_name,
            arrivals: station.arrivals,
            departures: station.departures,
            total_traffic: station.total_traffic,
            radius: snapshot.scale.radius(station.total_traffic),
        })?;
    }
    writer.flush()?;

    Ok(())
}
