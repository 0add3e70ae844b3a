use serde::Serialize;

use crate::model::{Station, Trip};
use crate::traffic::aggregate::aggregate;
use crate::traffic::filter::{TimeFilter, filter_by_time};
use crate::traffic::scale::RadiusScale;

/// Radius range when no time filter is active. The full month of trips drives
/// totals into the thousands, so the visual range stays compressed.
const UNFILTERED_RANGE: [f64; 2] = [0.0, 25.0];

/// Radius range under an active filter. Windowed counts are much smaller, so
/// a wider range with a nonzero floor keeps markers legible.
const FILTERED_RANGE: [f64; 2] = [3.0, 50.0];

/// Everything the renderer needs after a filter change: stations with fresh
/// traffic counts and the radius scale to size their markers with.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficSnapshot {
    pub time_filter: i32,
    pub stations: Vec<Station>,
    pub scale: RadiusScale,
}

/// Re-derives station traffic for a time-of-day selection.
///
/// Runs the full pipeline from scratch: filter the trip set, aggregate counts
/// per station, then build the radius scale over `[0, max total]` with the
/// range picked by filter state. Pure function of its inputs; it is called
/// once at startup with [`TimeFilter::Any`] and again on every slider change.
pub fn recompute(stations: &[Station], trips: &[Trip], filter: TimeFilter) -> TrafficSnapshot {
    let filtered = filter_by_time(trips, filter);
    let stations = aggregate(stations, &filtered);

    let max_traffic = stations.iter().map(|s| s.total_traffic).max().unwrap_or(0);
    let range = if filter.is_active() {
        FILTERED_RANGE
    } else {
        UNFILTERED_RANGE
    };

    TrafficSnapshot {
        time_filter: filter.as_raw(),
        scale: RadiusScale::sqrt(max_traffic as f64, range),
        stations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{station, trip};

    fn sample() -> (Vec<Station>, Vec<Trip>) {
        let stations = vec![station("A"), station("B"), station("C")];
        let trips = vec![
            trip("A", "B", 510, 530),   // 8:30 -> 8:50
            trip("A", "C", 520, 560),   // 8:40 -> 9:20
            trip("B", "A", 1200, 1230), // 20:00 -> 20:30
        ];
        (stations, trips)
    }

    #[test]
    fn test_unfiltered_snapshot_counts_everything() {
        let (stations, trips) = sample();
        let snapshot = recompute(&stations, &trips, TimeFilter::Any);

        let total: u32 = snapshot.stations.iter().map(|s| s.total_traffic).sum();
        assert_eq!(total, 6); // each trip counted once departing, once arriving
        assert_eq!(snapshot.scale.range, [0.0, 25.0]);
        assert_eq!(snapshot.scale.domain, [0.0, 3.0]); // A: 2 out, 1 in
        assert_eq!(snapshot.time_filter, -1);
    }

    #[test]
    fn test_filtered_snapshot_uses_expanded_range() {
        let (stations, trips) = sample();
        let snapshot = recompute(&stations, &trips, TimeFilter::MinuteOfDay(540));

        // Only the two morning trips are in the 9:00 window.
        let total: u32 = snapshot.stations.iter().map(|s| s.total_traffic).sum();
        assert_eq!(total, 4);
        assert_eq!(snapshot.scale.range, [3.0, 50.0]);
        assert_eq!(snapshot.time_filter, 540);
    }

    #[test]
    fn test_filtered_and_unfiltered_totals_differ() {
        let (stations, trips) = sample();

        let all = recompute(&stations, &trips, TimeFilter::Any);
        let windowed = recompute(&stations, &trips, TimeFilter::MinuteOfDay(540));

        let sum = |snap: &TrafficSnapshot| -> u32 {
            snap.stations.iter().map(|s| s.total_traffic).sum()
        };
        assert_ne!(sum(&all), sum(&windowed));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let (stations, trips) = sample();

        let first = recompute(&stations, &trips, TimeFilter::MinuteOfDay(540));
        let second = recompute(&stations, &trips, TimeFilter::MinuteOfDay(540));

        assert_eq!(first.scale, second.scale);
        assert_eq!(
            first.stations.iter().map(|s| s.total_traffic).collect::<Vec<_>>(),
            second.stations.iter().map(|s| s.total_traffic).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_no_stations_yields_zero_domain() {
        let (_, trips) = sample();
        let snapshot = recompute(&[], &trips, TimeFilter::Any);

        assert!(snapshot.stations.is_empty());
        assert_eq!(snapshot.scale.domain, [0.0, 0.0]);
    }
}
