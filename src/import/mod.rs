pub mod stations;
pub mod trips;

// Re-export commonly used items
pub use stations::parse_stations;
pub use trips::parse_trips;
