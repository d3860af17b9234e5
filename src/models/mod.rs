mod station;
mod time_filter;
mod trip;

pub use station::{StationBase, StationTraffic};
pub use time_filter::TimeFilter;
pub use trip::TripRecord;
