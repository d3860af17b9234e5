#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod logging;
pub mod error;
pub mod constants;
pub mod config;
pub mod time;
pub mod models;
pub mod import;
pub mod api;
pub mod trip_store;
pub mod traffic;
pub mod scales;
pub mod projection;
#[cfg(any(test, feature = "reference_viewport"))]
pub mod mercator;
pub mod overlay;
pub mod interaction;
pub mod controller;
pub mod session;
pub mod components;

pub use components::app::App;
