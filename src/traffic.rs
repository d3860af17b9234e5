use std::collections::HashMap;
use crate::models::{StationBase, StationTraffic, TripRecord};

type CountMap<'a> = HashMap<&'a str, u32>;

/// Count trips per station id, keyed by the given endpoint
fn count_by<'a>(
    trips: &[&'a TripRecord],
    key: impl Fn(&'a TripRecord) -> &'a str,
) -> CountMap<'a> {
    let mut counts: CountMap<'a> = HashMap::new();
    for &trip in trips {
        *counts.entry(key(trip)).or_insert(0) += 1;
    }
    counts
}

/// Count for a station, zero when it never appears
#[must_use]
pub fn lookup(counts: &HashMap<&str, u32>, station_id: &str) -> u32 {
    counts.get(station_id).copied().unwrap_or(0)
}

/// Reduce a (pre-filtered) set of trips into per-station traffic.
///
/// The output follows the order of `stations`, one entry per station,
/// regardless of which stations the trips touch. Trips referring to unknown
/// stations are counted but never surface.
#[must_use]
pub fn aggregate<'a, I>(trips: I, stations: &[StationBase]) -> Vec<StationTraffic>
where
    I: IntoIterator<Item = &'a TripRecord>,
{
    let trips: Vec<&TripRecord> = trips.into_iter().collect();
    let departures = count_by(&trips, |t| t.start_station_id.as_str());
    let arrivals = count_by(&trips, |t| t.end_station_id.as_str());

    stations
        .iter()
        .map(|station| {
            StationTraffic::new(
                station.clone(),
                lookup(&arrivals, &station.id),
                lookup(&departures, &station.id),
            )
        })
        .collect()
}

/// Largest `total_traffic` in an aggregate, zero when empty
#[must_use]
pub fn max_total_traffic(traffic: &[StationTraffic]) -> u32 {
    traffic.iter().map(StationTraffic::total_traffic).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .expect("valid time")
    }

    fn trip(from: &str, to: &str) -> TripRecord {
        TripRecord {
            start_station_id: from.to_string(),
            end_station_id: to.to_string(),
            started_at: at(8, 10),
            ended_at: at(8, 25),
        }
    }

    fn stations(ids: &[&str]) -> Vec<StationBase> {
        ids.iter().map(|id| StationBase::new(*id, *id, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_round_trip_counts_both_ways() {
        let trips = vec![trip("A", "A")];
        let result = aggregate(&trips, &stations(&["A"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].arrivals(), 1);
        assert_eq!(result[0].departures(), 1);
        assert_eq!(result[0].total_traffic(), 2);
    }

    #[test]
    fn test_stations_without_trips_get_zero() {
        let trips = vec![trip("A", "B")];
        let result = aggregate(&trips, &stations(&["A", "B", "C"]));
        let c = &result[2];
        assert_eq!(c.id(), "C");
        assert_eq!((c.arrivals(), c.departures(), c.total_traffic()), (0, 0, 0));
    }

    #[test]
    fn test_output_follows_station_order() {
        let trips = vec![trip("C", "A"), trip("C", "B"), trip("B", "A")];
        let result = aggregate(&trips, &stations(&["B", "A", "C"]));
        let ids: Vec<&str> = result.iter().map(StationTraffic::id).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);

        assert_eq!((result[0].departures(), result[0].arrivals()), (1, 1));
        assert_eq!((result[1].departures(), result[1].arrivals()), (0, 2));
        assert_eq!((result[2].departures(), result[2].arrivals()), (2, 0));
    }

    #[test]
    fn test_total_is_sum_for_every_station() {
        let trips = vec![trip("A", "B"), trip("B", "C"), trip("C", "A"), trip("A", "A")];
        for station in aggregate(&trips, &stations(&["A", "B", "C", "D"])) {
            assert_eq!(station.total_traffic(), station.arrivals() + station.departures());
        }
    }

    #[test]
    fn test_unknown_station_ids_are_ignored() {
        let trips = vec![trip("ghost", "A")];
        let result = aggregate(&trips, &stations(&["A"]));
        assert_eq!(result[0].arrivals(), 1);
        assert_eq!(result[0].departures(), 0);
    }

    #[test]
    fn test_lookup_defaults_to_zero() {
        let mut counts = HashMap::new();
        counts.insert("A", 4);
        assert_eq!(lookup(&counts, "A"), 4);
        assert_eq!(lookup(&counts, "missing"), 0);
    }

    #[test]
    fn test_max_total_traffic() {
        let trips = vec![trip("A", "B"), trip("A", "B")];
        let result = aggregate(&trips, &stations(&["A", "B", "C"]));
        assert_eq!(max_total_traffic(&result), 2);
        assert_eq!(max_total_traffic(&[]), 0);
    }
}
