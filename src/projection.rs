use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lon: f64,
    pub lat: f64,
}

impl LngLat {
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Pixel position relative to the map container's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Changes of the map viewport that invalidate marker positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportEvent {
    Move,
    Zoom,
    Resize,
    MoveEnd,
}

impl ViewportEvent {
    pub const ALL: [Self; 4] = [Self::Move, Self::Zoom, Self::Resize, Self::MoveEnd];

    /// Event name as emitted by the map engine
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Zoom => "zoom",
            Self::Resize => "resize",
            Self::MoveEnd => "moveend",
        }
    }
}

/// Geographic-to-screen projection for the map's *current* transform.
///
/// Implementors hold no copy of the transform; every call reflects the
/// live pan/zoom state.
pub trait MapProjection {
    fn project(&self, coord: LngLat) -> ScreenPoint;
}

impl<F> MapProjection for F
where
    F: Fn(LngLat) -> ScreenPoint,
{
    fn project(&self, coord: LngLat) -> ScreenPoint {
        self(coord)
    }
}
