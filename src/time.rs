use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};
use crate::constants::MINUTES_PER_DAY;

/// Accepted wall-clock layouts for trip timestamps, tried in order
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a trip timestamp into a naive local wall-clock instant
///
/// Trip logs record local time without an offset. RFC 3339 values are also
/// accepted and reduced to the wall clock they were written in.
///
/// # Errors
///
/// Returns an error if the text matches none of the accepted layouts.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let s = s.trim();
    let mut last_err = None;

    for format in TIMESTAMP_FORMATS {
        match NaiveDateTime::parse_from_str(s, format) {
            Ok(dt) => return Ok(dt),
            Err(e) => last_err = Some(e),
        }
    }

    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Ok(dt.naive_local()),
        Err(e) => Err(last_err.unwrap_or(e)),
    }
}

/// Minutes elapsed since local midnight, ignoring seconds
#[must_use]
pub fn minutes_since_midnight(time: NaiveDateTime) -> u16 {
    // hour < 24 and minute < 60, so the result always fits
    #[allow(clippy::cast_possible_truncation)]
    let minutes = (time.hour() * 60 + time.minute()) as u16;
    minutes
}

/// Format a minute-of-day as a short US-style clock time, e.g. `8:10 AM`
#[must_use]
pub fn format_short_time(minute_of_day: u16) -> String {
    let minute_of_day = u32::from(minute_of_day % MINUTES_PER_DAY);
    NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0)
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid time")
    }

    #[test]
    fn test_parse_timestamp_with_fraction() {
        let parsed = parse_timestamp("2024-03-01 08:10:17.123").expect("should parse");
        assert_eq!(parsed.hour(), 8);
        assert_eq!(parsed.minute(), 10);
        assert_eq!(parsed.second(), 17);
    }

    #[test]
    fn test_parse_timestamp_without_fraction() {
        let parsed = parse_timestamp("2024-03-01 23:59:00").expect("should parse");
        assert_eq!(parsed, at(23, 59, 0));
    }

    #[test]
    fn test_parse_timestamp_iso_separator() {
        let parsed = parse_timestamp("2024-03-01T08:25:00").expect("should parse");
        assert_eq!(parsed, at(8, 25, 0));
    }

    #[test]
    fn test_parse_timestamp_rfc3339_keeps_wall_clock() {
        let parsed = parse_timestamp("2024-03-01T08:25:00-05:00").expect("should parse");
        assert_eq!(parsed, at(8, 25, 0));
    }

    #[test]
    fn test_parse_timestamp_trims_whitespace() {
        let parsed = parse_timestamp("  2024-03-01 08:10:00 ").expect("should parse");
        assert_eq!(parsed, at(8, 10, 0));
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("not a date").is_err());
        assert!(parse_timestamp("2024-13-01 08:00:00").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(minutes_since_midnight(at(0, 0, 0)), 0);
        assert_eq!(minutes_since_midnight(at(8, 10, 59)), 490);
        assert_eq!(minutes_since_midnight(at(8, 25, 0)), 505);
        assert_eq!(minutes_since_midnight(at(23, 59, 59)), 1439);
    }

    #[test]
    fn test_format_short_time() {
        assert_eq!(format_short_time(0), "12:00 AM");
        assert_eq!(format_short_time(490), "8:10 AM");
        assert_eq!(format_short_time(720), "12:00 PM");
        assert_eq!(format_short_time(1439), "11:59 PM");
    }
}
