//! Time-of-day display formatting for the slider UI.

use chrono::NaiveTime;

use crate::traffic::filter::TimeFilter;

/// Formats a minute of the day as a 12-hour clock string, e.g. `510` ->
/// `"8:30 AM"`. Callers pass minutes already validated to `[0, 1439]`.
pub fn format_time(minute_of_day: u16) -> String {
    let time = NaiveTime::from_hms_opt(u32::from(minute_of_day) / 60, u32::from(minute_of_day) % 60, 0)
        .unwrap_or(NaiveTime::MIN);
    time.format("%-I:%M %p").to_string()
}

/// The label shown next to the slider: the formatted time, or `"(any time)"`
/// when no filter is active.
pub fn label(filter: TimeFilter) -> String {
    match filter {
        TimeFilter::Any => "(any time)".to_string(),
        TimeFilter::MinuteOfDay(m) => format_time(m),
    }
}
