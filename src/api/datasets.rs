use std::future::Future;
use crate::config::MapConfig;
use crate::error::{DataLoadError, Result};
use crate::import::{parse_stations, parse_trips};
use crate::models::StationBase;
use crate::trip_store::TripStore;

/// Both startup datasets, parsed and validated
#[derive(Debug, Clone)]
pub struct Datasets {
    pub stations: Vec<StationBase>,
    pub trips: TripStore,
}

async fn fetch_text(what: &'static str, url: &str) -> Result<String> {
    let fetch_error = |reason: String| DataLoadError::Fetch {
        what,
        url: url.to_string(),
        reason,
    };

    let response = reqwest::get(url)
        .await
        .map_err(|e| fetch_error(format!("Request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    response
        .text()
        .await
        .map_err(|e| fetch_error(format!("Failed to read body: {e}")))
}

/// Wait for both raw datasets together, then parse them
async fn join_datasets<S, T>(stations: S, trips: T) -> Result<Datasets>
where
    S: Future<Output = Result<String>>,
    T: Future<Output = Result<String>>,
{
    let (stations_json, trips_csv) = futures_util::try_join!(stations, trips)?;

    Ok(Datasets {
        stations: parse_stations(&stations_json)?,
        trips: parse_trips(&trips_csv)?,
    })
}

/// Fetch the station feed and the trip log concurrently and parse them
///
/// # Errors
///
/// Returns the first fetch or parse failure; there is no partial result.
pub async fn fetch_datasets(config: &MapConfig) -> Result<Datasets> {
    join_datasets(
        fetch_text("stations", &config.stations_url),
        fetch_text("trips", &config.trips_url),
    )
    .await
}

/// Fetch a lane layer's `GeoJSON` as raw text for the map engine
///
/// # Errors
///
/// Returns an error if the request fails or the server does not answer 2xx.
pub async fn fetch_lane_geojson(url: &str) -> std::result::Result<String, String> {
    fetch_text("lane layer", url).await.map_err(|e| e.to_string())
}
