/// Failure to obtain or parse one of the startup datasets.
///
/// Always fatal for the session: nothing is rendered without both the
/// station list and the trip log.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("Failed to fetch {what} from {url}: {reason}")]
    Fetch {
        what: &'static str,
        url: String,
        reason: String,
    },

    #[error("Invalid station data: {0}")]
    StationJson(String),

    #[error("Invalid station {station}: coordinates must be finite numbers")]
    InvalidCoordinate { station: String },

    #[error("Invalid trip data at line {line}: {reason}")]
    TripCsv { line: u64, reason: String },

    #[error("Invalid {field} timestamp at line {line}: {value:?}")]
    Timestamp {
        line: u64,
        field: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, DataLoadError>;
