pub mod app;
pub mod leaflet;
pub mod legend;
pub mod overlay_canvas;
pub mod station_tooltip;
pub mod time_slider;
pub mod traffic_map;
