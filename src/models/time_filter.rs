use serde::{Deserialize, Serialize};
use crate::constants::{FILTER_WINDOW_MINUTES, MINUTES_PER_DAY, SLIDER_ANY_TIME};
use crate::time::format_short_time;
use super::TripRecord;

/// Time-of-day restriction applied to the trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFilter {
    #[default]
    Unfiltered,
    /// Minutes since midnight, in `0..1440`
    Filtered(u16),
}

impl TimeFilter {
    /// Interpret a raw slider position, where `-1` means "any time"
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither the sentinel nor a minute of the day.
    pub fn from_slider_value(value: i32) -> Result<Self, String> {
        if value == SLIDER_ANY_TIME {
            return Ok(Self::Unfiltered);
        }
        u16::try_from(value)
            .ok()
            .filter(|minute| *minute < MINUTES_PER_DAY)
            .map(Self::Filtered)
            .ok_or_else(|| format!("Slider value {value} is outside -1..=1439"))
    }

    #[must_use]
    pub fn to_slider_value(self) -> i32 {
        match self {
            Self::Unfiltered => SLIDER_ANY_TIME,
            Self::Filtered(minute) => i32::from(minute),
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Filtered(_))
    }

    /// Whether a trip falls inside the window.
    ///
    /// A trip qualifies when either its start or its end is within
    /// `FILTER_WINDOW_MINUTES` of the selected minute (inclusive). The
    /// window does not wrap around midnight.
    #[must_use]
    pub fn matches(self, trip: &TripRecord) -> bool {
        match self {
            Self::Unfiltered => true,
            Self::Filtered(minute) => {
                minute.abs_diff(trip.start_minute()) <= FILTER_WINDOW_MINUTES
                    || minute.abs_diff(trip.end_minute()) <= FILTER_WINDOW_MINUTES
            }
        }
    }

    /// Text for the label next to the slider; `None` shows the "any time" indicator
    #[must_use]
    pub fn label(self) -> Option<String> {
        match self {
            Self::Unfiltered => None,
            Self::Filtered(minute) => Some(format_short_time(minute)),
        }
    }
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

    fn trip(start: (u32, u32), end: (u32, u32)) -> TripRecord {
        TripRecord {
            start_station_id: "A".to_string(),
            end_station_id: "B".to_string(),
            started_at: at(start.0, start.1),
            ended_at: at(end.0, end.1),
        }
    }

    #[test]
    fn test_from_slider_value() {
        assert_eq!(TimeFilter::from_slider_value(-1), Ok(TimeFilter::Unfiltered));
        assert_eq!(TimeFilter::from_slider_value(0), Ok(TimeFilter::Filtered(0)));
        assert_eq!(TimeFilter::from_slider_value(1439), Ok(TimeFilter::Filtered(1439)));
        assert!(TimeFilter::from_slider_value(1440).is_err());
        assert!(TimeFilter::from_slider_value(-2).is_err());
    }

    #[test]
    fn test_slider_value_round_trip_for_sentinel() {
        assert_eq!(TimeFilter::Unfiltered.to_slider_value(), -1);
        assert_eq!(TimeFilter::Filtered(540).to_slider_value(), 540);
    }

    #[test]
    fn test_default_is_unfiltered() {
        assert_eq!(TimeFilter::default(), TimeFilter::Unfiltered);
        assert!(!TimeFilter::default().is_active());
    }

    #[test]
    fn test_unfiltered_matches_everything() {
        assert!(TimeFilter::Unfiltered.matches(&trip((3, 0), (3, 10))));
    }

    #[test]
    fn test_window_includes_start_within_an_hour() {
        // 08:10 is 50 minutes before 09:00
        assert!(TimeFilter::Filtered(540).matches(&trip((8, 10), (8, 25))));
    }

    #[test]
    fn test_window_excludes_when_both_endpoints_far() {
        assert!(!TimeFilter::Filtered(300).matches(&trip((8, 10), (8, 25))));
    }

    #[test]
    fn test_window_is_inclusive_at_sixty_minutes() {
        assert!(TimeFilter::Filtered(600).matches(&trip((9, 0), (9, 0))));
        assert!(!TimeFilter::Filtered(601).matches(&trip((9, 0), (9, 0))));
        assert!(TimeFilter::Filtered(480).matches(&trip((9, 0), (9, 0))));
        assert!(!TimeFilter::Filtered(479).matches(&trip((9, 0), (9, 0))));
    }

    #[test]
    fn test_window_accepts_either_endpoint() {
        // Long ride: only the end is near 12:00
        assert!(TimeFilter::Filtered(720).matches(&trip((7, 0), (11, 30))));
        // Only the start is near 07:00
        assert!(TimeFilter::Filtered(420).matches(&trip((7, 0), (11, 30))));
    }

    #[test]
    fn test_window_does_not_wrap_midnight() {
        assert!(!TimeFilter::Filtered(10).matches(&trip((23, 50), (23, 55))));
    }

    #[test]
    fn test_label() {
        assert_eq!(TimeFilter::Unfiltered.label(), None);
        assert_eq!(TimeFilter::Filtered(540).label().as_deref(), Some("9:00 AM"));
    }
}
