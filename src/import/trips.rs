use serde::Deserialize;
use crate::error::{DataLoadError, Result};
use crate::models::TripRecord;
use crate::time::parse_timestamp;
use crate::trip_store::TripStore;

/// Columns we need from a trip log row; everything else is ignored
#[derive(Deserialize)]
struct RawTrip {
    start_station_id: String,
    end_station_id: String,
    started_at: String,
    ended_at: String,
}

fn parse_field(line: u64, field: &'static str, value: String) -> Result<chrono::NaiveDateTime> {
    parse_timestamp(&value).map_err(|_| DataLoadError::Timestamp { line, field, value })
}

/// Parse a trip log CSV (with header row) into a `TripStore`
///
/// # Errors
///
/// Returns an error on malformed CSV, missing columns, or any timestamp
/// that cannot be parsed. No rows are skipped.
pub fn parse_trips(csv_content: &str) -> Result<TripStore> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DataLoadError::TripCsv { line: 1, reason: e.to_string() })?
        .clone();

    let mut trips = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| DataLoadError::TripCsv {
            line: e.position().map_or(0, csv::Position::line),
            reason: e.to_string(),
        })?;
        let line = record.position().map_or(0, csv::Position::line);

        let raw: RawTrip = record
            .deserialize(Some(&headers))
            .map_err(|e| DataLoadError::TripCsv { line, reason: e.to_string() })?;

        trips.push(TripRecord {
            started_at: parse_field(line, "started_at", raw.started_at)?,
            ended_at: parse_field(line, "ended_at", raw.ended_at)?,
            start_station_id: raw.start_station_id,
            end_station_id: raw.end_station_id,
        });
    }

    Ok(TripStore::new(trips))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const CSV: &str = "\
ride_id,bike_type,started_at,ended_at,start_station_id,end_station_id,is_member
F1C9,classic,2024-03-01 08:10:17.123,2024-03-01 08:25:02.456,A32000,M32006,1
0B2E,electric,2024-03-01 17:45:00,2024-03-01 18:05:00,M32006,A32000,0
";

    #[test]
    fn test_parse_trips() {
        let store = parse_trips(CSV).expect("valid csv");
        assert_eq!(store.len(), 2);

        let first = &store.trips()[0];
        assert_eq!(first.start_station_id, "A32000");
        assert_eq!(first.end_station_id, "M32006");
        assert_eq!(first.started_at.hour(), 8);
        assert_eq!(first.start_minute(), 490);
        assert_eq!(first.end_minute(), 505);
    }

    #[test]
    fn test_malformed_timestamp_is_fatal() {
        let csv = "started_at,ended_at,start_station_id,end_station_id\n\
                   2024-03-01 08:10:00,2024-03-01 08:20:00,A,B\n\
                   2024-03-01 09:00:00,soon,B,A\n";
        let err = parse_trips(csv).expect_err("bad timestamp");
        match err {
            DataLoadError::Timestamp { line, field, value } => {
                assert_eq!(line, 3);
                assert_eq!(field, "ended_at");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "started_at,ended_at,start_station_id\n2024-03-01 08:10:00,2024-03-01 08:20:00,A\n";
        assert!(matches!(parse_trips(csv), Err(DataLoadError::TripCsv { .. })));
    }

    #[test]
    fn test_header_only() {
        let store = parse_trips("started_at,ended_at,start_station_id,end_station_id\n").expect("valid csv");
        assert!(store.is_empty());
    }
}
