use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A fixed bike-share dock, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationBase {
    /// Stable short code, also used as the join key for trips
    pub id: String,
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    /// Every other field of the source record, untouched
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl StationBase {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lon,
            lat,
            metadata: Map::new(),
        }
    }
}

/// A station together with the traffic counted for the current time filter.
///
/// Built wholesale by the aggregator on every filter change. The counts are
/// only reachable through accessors so `total_traffic` can never drift from
/// `arrivals + departures`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationTraffic {
    station: StationBase,
    arrivals: u32,
    departures: u32,
    total_traffic: u32,
}

impl StationTraffic {
    #[must_use]
    pub fn new(station: StationBase, arrivals: u32, departures: u32) -> Self {
        Self {
            station,
            arrivals,
            departures,
            total_traffic: arrivals.saturating_add(departures),
        }
    }

    #[must_use]
    pub fn station(&self) -> &StationBase {
        &self.station
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.station.id
    }

    #[must_use]
    pub fn arrivals(&self) -> u32 {
        self.arrivals
    }

    #[must_use]
    pub fn departures(&self) -> u32 {
        self.departures
    }

    #[must_use]
    pub fn total_traffic(&self) -> u32 {
        self.total_traffic
    }

    /// Share of traffic that left from this station.
    ///
    /// `None` when the station saw no traffic at all, where the ratio is
    /// undefined.
    #[must_use]
    pub fn departure_ratio(&self) -> Option<f64> {
        if self.total_traffic == 0 {
            None
        } else {
            Some(f64::from(self.departures) / f64::from(self.total_traffic))
        }
    }
}
