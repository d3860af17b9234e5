use serde::{Deserialize, Serialize};
use crate::constants::{
    BOSTON_LANES_URL, CAMBRIDGE_LANES_URL, LANE_COLOR, LANE_OPACITY, LANE_WIDTH, MAP_CENTER,
    MAP_MAX_ZOOM, MAP_MIN_ZOOM, MAP_ZOOM, STATIONS_URL, TRIPS_URL,
};
use crate::projection::LngLat;

/// Decorative line layer handed to the map engine as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneLayer {
    pub id: String,
    pub url: String,
    pub color: String,
    pub width: f64,
    pub opacity: f64,
}

impl LaneLayer {
    #[must_use]
    pub fn new(id: &str, url: &str) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
            color: LANE_COLOR.to_string(),
            width: LANE_WIDTH,
            opacity: LANE_OPACITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialView {
    pub center: LngLat,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            center: LngLat::new(MAP_CENTER.0, MAP_CENTER.1),
            zoom: MAP_ZOOM,
            min_zoom: MAP_MIN_ZOOM,
            max_zoom: MAP_MAX_ZOOM,
        }
    }
}

/// Where the data comes from and how the map starts out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub stations_url: String,
    pub trips_url: String,
    pub view: InitialView,
    pub lanes: Vec<LaneLayer>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            stations_url: STATIONS_URL.to_string(),
            trips_url: TRIPS_URL.to_string(),
            view: InitialView::default(),
            lanes: vec![
                LaneLayer::new("boston-bike-lanes", BOSTON_LANES_URL),
                LaneLayer::new("cambridge-bike-lanes", CAMBRIDGE_LANES_URL),
            ],
        }
    }
}

impl MapConfig {
    /// Read overrides from JSON; absent fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse map config: {e}"))
    }
}
