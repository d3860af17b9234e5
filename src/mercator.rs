use std::f64::consts::PI;
use crate::constants::{MAP_MAX_ZOOM, MAP_MIN_ZOOM};
use crate::projection::{LngLat, MapProjection, ScreenPoint, ViewportEvent};

/// Pixel size of one web-mercator tile at zoom 0 (Leaflet's default)
const TILE_SIZE: f64 = 256.0;
/// Latitude beyond which web mercator is undefined
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// A web-mercator viewport: center, zoom and container size.
///
/// Mirrors the transform of a tiled map engine so projection and viewport
/// handling can run without a browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorViewport {
    pub center: LngLat,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
}

impl MercatorViewport {
    #[must_use]
    pub fn new(center: LngLat, zoom: f64, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MAP_MIN_ZOOM, MAP_MAX_ZOOM),
            width,
            height,
        }
    }

    fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Absolute pixel coordinate on the world plane at the current zoom
    fn to_world(&self, coord: LngLat) -> (f64, f64) {
        let size = self.world_size();
        let lat = coord.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (coord.lon + 180.0) / 360.0 * size;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
        (x, y)
    }

    fn from_world(&self, (x, y): (f64, f64)) -> LngLat {
        let size = self.world_size();
        let lon = x / size * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * y / size);
        let lat = n.sinh().atan().to_degrees();
        LngLat { lon, lat }
    }

    #[must_use]
    pub fn unproject(&self, point: ScreenPoint) -> LngLat {
        let (cx, cy) = self.to_world(self.center);
        self.from_world((
            cx + point.x - self.width / 2.0,
            cy + point.y - self.height / 2.0,
        ))
    }

    /// Drag the map by a pixel delta; content follows the pointer
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> ViewportEvent {
        let (cx, cy) = self.to_world(self.center);
        self.center = self.from_world((cx - dx, cy - dy));
        ViewportEvent::Move
    }

    /// Zoom by `delta` levels keeping the geographic point under `anchor` fixed
    pub fn zoom_around(&mut self, delta: f64, anchor: ScreenPoint) -> ViewportEvent {
        let fixed = self.unproject(anchor);
        self.zoom = (self.zoom + delta).clamp(MAP_MIN_ZOOM, MAP_MAX_ZOOM);

        let (fx, fy) = self.to_world(fixed);
        self.center = self.from_world((
            fx - (anchor.x - self.width / 2.0),
            fy - (anchor.y - self.height / 2.0),
        ));
        ViewportEvent::Zoom
    }

    pub fn resize(&mut self, width: f64, height: f64) -> ViewportEvent {
        self.width = width;
        self.height = height;
        ViewportEvent::Resize
    }
}

impl MapProjection for MercatorViewport {
    fn project(&self, coord: LngLat) -> ScreenPoint {
        let (x, y) = self.to_world(coord);
        let (cx, cy) = self.to_world(self.center);
        ScreenPoint {
            x: x - cx + self.width / 2.0,
            y: y - cy + self.height / 2.0,
        }
    }
}
