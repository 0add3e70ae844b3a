use std::collections::HashMap;

use crate::model::{Station, Trip};

/// Computes arrival, departure, and total counts for every station.
///
/// Builds two frequency maps over `trips` (start ids count as departures, end
/// ids as arrivals), then resolves each station's counts by point lookup,
/// defaulting to 0. The result has the same length and order as `stations`.
/// Trips referencing an id with no matching station contribute map entries
/// that are simply never looked up.
pub fn aggregate(stations: &[Station], trips: &[Trip]) -> Vec<Station> {
    let mut departures: HashMap<&str, u32> = HashMap::new();
    let mut arrivals: HashMap<&str, u32> = HashMap::new();

    for trip in trips {
        *departures.entry(trip.start_station_id.as_str()).or_default() += 1;
        *arrivals.entry(trip.end_station_id.as_str()).or_default() += 1;
    }

    stations
        .iter()
        .map(|station| {
            let id = station.short_name.as_str();
            let arrived = arrivals.get(id).copied().unwrap_or(0);
            let departed = departures.get(id).copied().unwrap_or(0);

            Station {
                arrivals: arrived,
                departures: departed,
                total_traffic: arrived + departed,
                ..station.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{station, trip};

    #[test]
    fn test_empty_trips_yield_all_zero_traffic() {
        let stations = vec![station("A"), station("B")];
        let result = aggregate(&stations, &[]);

        assert_eq!(result.len(), 2);
        for s in &result {
            assert_eq!(s.arrivals, 0);
            assert_eq!(s.departures, 0);
            assert_eq!(s.total_traffic, 0);
        }
    }

    #[test]
    fn test_single_trip_counts_departure_and_arrival() {
        let stations = vec![station("A"), station("B")];
        let trips = vec![trip("A", "B", 510, 530)];

        let result = aggregate(&stations, &trips);

        assert_eq!(result[0].departures, 1);
        assert_eq!(result[0].arrivals, 0);
        assert_eq!(result[0].total_traffic, 1);
        assert_eq!(result[1].departures, 0);
        assert_eq!(result[1].arrivals, 1);
        assert_eq!(result[1].total_traffic, 1);
    }

    #[test]
    fn test_trip_to_unknown_station_is_ignored() {
        let stations = vec![station("A")];
        let trips = vec![trip("C", "D", 100, 120)];

        let result = aggregate(&stations, &trips);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_traffic, 0);
    }

    #[test]
    fn test_output_preserves_station_order() {
        let stations = vec![station("Z"), station("M"), station("A")];
        let result = aggregate(&stations, &[]);

        let names: Vec<_> = result.iter().map(|s| s.short_name.as_str()).collect();
        assert_eq!(names, vec!["Z", "M", "A"]);
    }

    #[test]
    fn test_departure_sum_matches_trip_count() {
        let stations = vec![station("A"), station("B")];
        let trips = vec![
            trip("A", "B", 100, 120),
            trip("A", "A", 200, 220),
            trip("B", "A", 300, 320),
            trip("X", "B", 400, 420), // unknown start, known end
        ];

        let result = aggregate(&stations, &trips);

        let departed: u32 = result.iter().map(|s| s.departures).sum();
        let arrived: u32 = result.iter().map(|s| s.arrivals).sum();
        assert_eq!(departed, 3); // trip from "X" has no matching station
        assert_eq!(arrived, 4);
        for s in &result {
            assert_eq!(s.total_traffic, s.arrivals + s.departures);
        }
    }

    #[test]
    fn test_round_trip_counts_both_ways() {
        let stations = vec![station("A")];
        let trips = vec![trip("A", "A", 600, 640)];

        let result = aggregate(&stations, &trips);

        assert_eq!(result[0].departures, 1);
        assert_eq!(result[0].arrivals, 1);
        assert_eq!(result[0].total_traffic, 2);
    }
}
