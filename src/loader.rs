//! Dataset loading for the traffic pipeline.
//!
//! Stations come from a GBFS-style station information JSON file, trips from
//! a trip history CSV. Timestamps are validated here: the core filter and
//! aggregate functions are never called with unparsed data, so a malformed
//! timestamp fails the load with row context instead of leaking downstream.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs::File;
use tracing::info;

use crate::model::{Station, Trip};

#[derive(Deserialize)]
struct StationFile {
    data: StationData,
}

#[derive(Deserialize)]
struct StationData {
    stations: Vec<Station>,
}

/// A raw trip row as it appears in the CSV, timestamps still unparsed.
#[derive(Debug, Deserialize)]
struct TripRecord {
    start_station_id: String,
    end_station_id: String,
    started_at: String,
    ended_at: String,
}

/// Loads the station set from a GBFS-style JSON file
/// (`{ "data": { "stations": [...] } }`).
pub fn load_stations(path: &str) -> Result<Vec<Station>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read station file {path}"))?;
    let file: StationFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse station JSON in {path}"))?;

    let stations = file.data.stations;
    info!(path, count = stations.len(), "Stations loaded");
    Ok(stations)
}

/// Loads the trip history from a CSV file with `start_station_id`,
/// `end_station_id`, `started_at`, and `ended_at` columns.
pub fn load_trips(path: &str) -> Result<Vec<Trip>> {
    let file = File::open(path).with_context(|| format!("failed to open trip file {path}"))?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut trips = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let record: TripRecord = result.with_context(|| format!("bad trip row {}", i + 1))?;

        let started_at = parse_timestamp(&record.started_at)
            .with_context(|| format!("malformed started_at in trip row {}", i + 1))?;
        let ended_at = parse_timestamp(&record.ended_at)
            .with_context(|| format!("malformed ended_at in trip row {}", i + 1))?;

        trips.push(Trip {
            start_station_id: record.start_station_id,
            end_station_id: record.end_station_id,
            started_at,
            ended_at,
        });
    }

    info!(path, count = trips.len(), "Trips loaded");
    Ok(trips)
}

/// Trip exports write timestamps as `2024-03-01 08:15:23` (sometimes with a
/// fractional second, sometimes with a `T` separator).
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }
    anyhow::bail!("unparseable timestamp {raw:?}")
}
