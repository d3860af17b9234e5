use serde::Deserialize;
use serde_json::{Map, Value};
use crate::error::{DataLoadError, Result};
use crate::models::StationBase;

#[derive(Deserialize)]
struct StationFeed {
    data: StationFeedData,
}

#[derive(Deserialize)]
struct StationFeedData {
    stations: Vec<RawStation>,
}

/// Coordinates show up as numbers in some feeds and as strings in others
#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

#[derive(Deserialize)]
struct RawStation {
    short_name: String,
    #[serde(default)]
    name: String,
    lon: Coordinate,
    lat: Coordinate,
    #[serde(flatten)]
    metadata: Map<String, Value>,
}

impl TryFrom<RawStation> for StationBase {
    type Error = DataLoadError;

    fn try_from(raw: RawStation) -> Result<Self> {
        let (Some(lon), Some(lat)) = (raw.lon.value(), raw.lat.value()) else {
            return Err(DataLoadError::InvalidCoordinate { station: raw.short_name });
        };
        Ok(Self {
            id: raw.short_name,
            name: raw.name,
            lon,
            lat,
            metadata: raw.metadata,
        })
    }
}

/// Parse a station feed (`{ "data": { "stations": [...] } }`), keeping feed order
///
/// # Errors
///
/// Returns an error if the JSON does not have the expected shape or a
/// station's coordinates are not numeric.
pub fn parse_stations(json: &str) -> Result<Vec<StationBase>> {
    let feed: StationFeed =
        serde_json::from_str(json).map_err(|e| DataLoadError::StationJson(e.to_string()))?;
    feed.data.stations.into_iter().map(StationBase::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "last_updated": 1710000000,
        "data": {
            "stations": [
                {"short_name": "A32000", "name": "Fan Pier", "lon": -71.0444, "lat": 42.3534, "capacity": 15},
                {"short_name": "M32006", "name": "MIT at Mass Ave", "lon": "-71.0939", "lat": "42.3581", "region_id": 8}
            ]
        }
    }"#;

    #[test]
    fn test_parse_stations() {
        let stations = parse_stations(FEED).expect("valid feed");
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id, "A32000");
        assert_eq!(stations[0].name, "Fan Pier");
        assert_eq!(stations[0].lon, -71.0444);
        assert_eq!(stations[0].metadata.get("capacity"), Some(&Value::from(15)));
    }

    #[test]
    fn test_string_coordinates() {
        let stations = parse_stations(FEED).expect("valid feed");
        assert_eq!(stations[1].id, "M32006");
        assert_eq!(stations[1].lat, 42.3581);
        assert!(stations[1].metadata.contains_key("region_id"));
        assert!(!stations[1].metadata.contains_key("lat"));
    }

    #[test]
    fn test_bad_coordinate_is_fatal() {
        let json = r#"{"data": {"stations": [{"short_name": "X", "lon": "west", "lat": 42.0}]}}"#;
        let err = parse_stations(json).expect_err("invalid coordinate");
        assert!(matches!(err, DataLoadError::InvalidCoordinate { station } if station == "X"));
    }

    #[test]
    fn test_wrong_shape_is_fatal() {
        assert!(matches!(
            parse_stations(r#"{"stations": []}"#),
            Err(DataLoadError::StationJson(_))
        ));
        assert!(matches!(parse_stations("not json"), Err(DataLoadError::StationJson(_))));
    }

    #[test]
    fn test_missing_name_defaults_to_empty() {
        let json = r#"{"data": {"stations": [{"short_name": "Y", "lon": 0, "lat": 0}]}}"#;
        let stations = parse_stations(json).expect("valid feed");
        assert_eq!(stations[0].name, "");
        assert_eq!(stations[0].lon, 0.0);
    }
}
