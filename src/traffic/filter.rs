use anyhow::{Result, bail};

use crate::model::{Trip, minute_of_day};

/// Half-width of the inclusion window, in minutes.
const WINDOW_MINUTES: i32 = 60;

/// Raw sentinel meaning "no filter", as exposed by the time slider.
pub const ANY_TIME: i32 = -1;

/// A validated time-of-day selection: either "no filter" or a minute of the
/// day in `[0, 1439]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    Any,
    MinuteOfDay(u16),
}

impl TimeFilter {
    /// Validates a raw slider value: `-1` means no filter, `0..=1439` selects
    /// a minute of the day, anything else is rejected.
    pub fn from_raw(raw: i32) -> Result<Self> {
        match raw {
            ANY_TIME => Ok(TimeFilter::Any),
            0..=1439 => Ok(TimeFilter::MinuteOfDay(raw as u16)),
            _ => bail!(
                "invalid time filter {raw}: expected -1 (any time) or a minute of day in 0..=1439"
            ),
        }
    }

    pub fn as_raw(&self) -> i32 {
        match self {
            TimeFilter::Any => ANY_TIME,
            TimeFilter::MinuteOfDay(m) => *m as i32,
        }
    }

    pub fn is_active(&self) -> bool {
        *self != TimeFilter::Any
    }
}

/// Selects the trips relevant to a time-of-day selection.
///
/// With [`TimeFilter::Any`] every trip is returned, same order, same elements.
/// Otherwise a trip is included iff its start or end falls within 60 minutes
/// of the selected minute. The window does not wrap around midnight: a filter
/// at 23:30 does not match a trip starting at 00:15. That boundary gap is a
/// documented limitation of the filtering rule, kept for compatibility.
pub fn filter_by_time(trips: &[Trip], filter: TimeFilter) -> Vec<Trip> {
    match filter {
        TimeFilter::Any => trips.to_vec(),
        TimeFilter::MinuteOfDay(selected) => {
            let selected = selected as i32;
            trips
                .iter()
                .filter(|trip| {
                    let started = minute_of_day(&trip.started_at);
                    let ended = minute_of_day(&trip.ended_at);
                    (started - selected).abs() <= WINDOW_MINUTES
                        || (ended - selected).abs() <= WINDOW_MINUTES
                })
                .cloned()
                .collect()
        }
    }
}
