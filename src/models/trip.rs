use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::time::minutes_since_midnight;

/// One rental, from the station it was taken at to the one it was returned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    pub start_station_id: String,
    pub end_station_id: String,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}

impl TripRecord {
    #[must_use]
    pub fn start_minute(&self) -> u16 {
        minutes_since_midnight(self.started_at)
    }

    #[must_use]
    pub fn end_minute(&self) -> u16 {
        minutes_since_midnight(self.ended_at)
    }
}
