/// Station information feed (GBFS-style `{ data: { stations: [...] } }`)
pub const STATIONS_URL: &str = "https://dsc106.com/labs/lab07/data/bluebikes-stations.json";

/// Trip log for one month, one row per rental
pub const TRIPS_URL: &str = "https://dsc106.com/labs/lab07/data/bluebikes-traffic-2024-03.csv";

pub const BOSTON_LANES_URL: &str =
    "https://bostonopendata-boston.opendata.arcgis.com/datasets/boston::existing-bike-network-2022.geojson";
pub const CAMBRIDGE_LANES_URL: &str =
    "https://raw.githubusercontent.com/cambridgegis/cambridgegis_data/main/Recreation/Bike_Facilities/RECREATION_BikeFacilities.geojson";

pub const LANE_COLOR: &str = "green";
pub const LANE_WIDTH: f64 = 3.0;
pub const LANE_OPACITY: f64 = 0.4;

/// Initial map view (Boston), as (lon, lat)
pub const MAP_CENTER: (f64, f64) = (-71.094_15, 42.360_27);
pub const MAP_ZOOM: f64 = 12.0;
pub const MAP_MIN_ZOOM: f64 = 5.0;
pub const MAP_MAX_ZOOM: f64 = 18.0;

/// Slider value meaning "no time filter"
pub const SLIDER_ANY_TIME: i32 = -1;
pub const MINUTES_PER_DAY: u16 = 1440;
/// Half-width of the inclusive time window around the selected minute
pub const FILTER_WINDOW_MINUTES: u16 = 60;

/// Marker radius range in pixels while unfiltered
pub const RADIUS_RANGE_UNFILTERED: (f64, f64) = (2.0, 25.0);
/// Marker radius range in pixels while a time window is active
pub const RADIUS_RANGE_FILTERED: (f64, f64) = (3.0, 50.0);

pub const MARKER_STROKE: &str = "white";
pub const MARKER_OPACITY: f64 = 0.6;
pub const MARKER_STROKE_WIDTH: f64 = 1.0;
pub const MARKER_HOVER_STROKE_WIDTH: f64 = 2.0;

/// Colour for stations dominated by departures (ratio 1.0), steelblue
pub const DEPARTURES_COLOR: (u8, u8, u8) = (70, 130, 180);
/// Colour for stations dominated by arrivals (ratio 0.0), darkorange
pub const ARRIVALS_COLOR: (u8, u8, u8) = (255, 140, 0);

/// Tooltip placement relative to the pointer's client coordinates
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = -20.0;
