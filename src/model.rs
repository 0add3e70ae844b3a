//! Domain types shared across the traffic pipeline.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A fixed-location bike dock with derived traffic counts.
///
/// `short_name` is the unique key within a station set; position is immutable.
/// The traffic fields are derived by [`crate::traffic::aggregate::aggregate`]
/// and recomputed wholesale on every filter change, never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub short_name: String,
    #[serde(default)]
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,

    // derived traffic fields
    #[serde(default)]
    pub arrivals: u32,
    #[serde(default)]
    pub departures: u32,
    #[serde(default)]
    pub total_traffic: u32,
}

/// A single rental event. Immutable once loaded; station ids reference
/// [`Station::short_name`] values (a dangling id is unused data, not an error).
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_station_id: String,
    pub end_station_id: String,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}

/// Minutes since midnight for a wall-clock instant. Date and seconds are
/// irrelevant to time-of-day filtering.
pub fn minute_of_day(at: &NaiveDateTime) -> i32 {
    (at.hour() * 60 + at.minute()) as i32
}
