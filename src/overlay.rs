use indexmap::IndexMap;
use crate::constants::{
    ARRIVALS_COLOR, DEPARTURES_COLOR, MARKER_HOVER_STROKE_WIDTH, MARKER_OPACITY, MARKER_STROKE,
    MARKER_STROKE_WIDTH,
};
use crate::models::StationTraffic;
use crate::projection::{LngLat, MapProjection, ScreenPoint};
use crate::scales::Scales;

/// One circle drawn over the map, bound to a station.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Station the marker is bound to (also its key in the arena)
    pub datum: StationTraffic,
    pub radius: f64,
    /// Quantized departure ratio driving the fill colour mix
    pub departure_ratio: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub opacity: f64,
    /// Screen position, `None` until the first position pass
    pub position: Option<ScreenPoint>,
}

impl Marker {
    fn new(datum: StationTraffic, scales: &Scales) -> Self {
        let mut marker = Self {
            datum,
            radius: 0.0,
            departure_ratio: 0.0,
            stroke: MARKER_STROKE,
            stroke_width: MARKER_STROKE_WIDTH,
            opacity: MARKER_OPACITY,
            position: None,
        };
        marker.apply_scales(scales);
        marker
    }

    fn apply_scales(&mut self, scales: &Scales) {
        self.radius = scales.size.radius(self.datum.total_traffic());
        self.departure_ratio = scales.flow.for_station(&self.datum);
    }

    #[must_use]
    pub fn station_id(&self) -> &str {
        self.datum.id()
    }

    #[must_use]
    pub fn coordinates(&self) -> LngLat {
        let station = self.datum.station();
        LngLat::new(station.lon, station.lat)
    }

    /// Fill colour for the marker's departure ratio
    #[must_use]
    pub fn fill_color(&self) -> String {
        flow_color(self.departure_ratio)
    }

    /// Stroke width to paint with, widened while the pointer is over the marker
    #[must_use]
    pub fn effective_stroke_width(&self, hovered: bool) -> f64 {
        if hovered {
            MARKER_HOVER_STROKE_WIDTH
        } else {
            self.stroke_width
        }
    }

    #[must_use]
    pub fn contains(&self, point: ScreenPoint) -> bool {
        self.position
            .is_some_and(|center| center.distance_to(point) <= self.radius)
    }
}

/// Mix the departures and arrivals colours; `1.0` is all departures.
///
/// Non-finite ratios are treated as balanced.
#[must_use]
pub fn flow_color(ratio: f64) -> String {
    let t = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.5 };
    let channel = |departures: u8, arrivals: u8| {
        let mixed = f64::from(departures) * t + f64::from(arrivals) * (1.0 - t);
        // Always within 0..=255 because t is clamped
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = mixed.round() as u8;
        value
    };
    let (dr, dg, db) = DEPARTURES_COLOR;
    let (ar, ag, ab) = ARRIVALS_COLOR;
    format!("rgb({}, {}, {})", channel(dr, ar), channel(dg, ag), channel(db, ab))
}

/// What a reconciliation pass did, by station id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub removed: Vec<String>,
}

/// Owns the set of markers, keyed by station id.
///
/// Visual attributes change only in `reconcile`; screen positions change
/// only in `update_positions`. Everything else reads.
#[derive(Debug, Clone, Default)]
pub struct OverlayRenderer {
    markers: IndexMap<String, Marker>,
}

impl OverlayRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the marker set in line with `stations`.
    ///
    /// New ids get a marker, known ids are updated in place (keeping their
    /// position), ids no longer present are dropped. Marker order follows
    /// `stations`, which is also paint order.
    pub fn reconcile(&mut self, stations: &[StationTraffic], scales: &Scales) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();
        let mut next: IndexMap<String, Marker> = IndexMap::with_capacity(stations.len());

        for station in stations {
            let id = station.id().to_string();
            let marker = match self.markers.swap_remove(&id) {
                Some(mut existing) => {
                    existing.datum = station.clone();
                    existing.apply_scales(scales);
                    summary.updated.push(id.clone());
                    existing
                }
                None => {
                    summary.created.push(id.clone());
                    Marker::new(station.clone(), scales)
                }
            };
            next.insert(id, marker);
        }

        summary.removed = self.markers.drain(..).map(|(id, _)| id).collect();
        self.markers = next;
        summary
    }

    /// Re-project every marker through the map's current transform
    pub fn update_positions(&mut self, projection: &impl MapProjection) {
        for marker in self.markers.values_mut() {
            marker.position = Some(projection.project(marker.coordinates()));
        }
    }

    #[must_use]
    pub fn get(&self, station_id: &str) -> Option<&Marker> {
        self.markers.get(station_id)
    }

    /// Markers in paint order
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Topmost marker under a screen point (the last one painted wins)
    #[must_use]
    pub fn marker_at(&self, point: ScreenPoint) -> Option<&Marker> {
        self.markers.values().rev().find(|marker| marker.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StationBase, TimeFilter};

    fn traffic(id: &str, lon: f64, arrivals: u32, departures: u32) -> StationTraffic {
        StationTraffic::new(StationBase::new(id, id, lon, 0.0), arrivals, departures)
    }

    fn identity(c: LngLat) -> ScreenPoint {
        ScreenPoint::new(c.lon, c.lat)
    }

    #[test]
    fn test_first_pass_creates_all() {
        let data = vec![traffic("A", 0.0, 1, 1), traffic("B", 50.0, 0, 4)];
        let scales = Scales::derive(&data, TimeFilter::Unfiltered);
        let mut renderer = OverlayRenderer::new();

        let summary = renderer.reconcile(&data, &scales);
        assert_eq!(summary.created, vec!["A", "B"]);
        assert!(summary.updated.is_empty());
        assert!(summary.removed.is_empty());

        let b = renderer.get("B").expect("marker B");
        assert_eq!(b.radius, 25.0);
        assert_eq!(b.departure_ratio, 1.0);
        assert_eq!(b.fill_color(), "rgb(70, 130, 180)");
        assert_eq!(b.stroke, "white");
        assert_eq!(b.position, None);
    }

    #[test]
    fn test_reconcile_twice_is_stable() {
        let data = vec![traffic("A", 0.0, 3, 1), traffic("B", 50.0, 0, 0)];
        let scales = Scales::derive(&data, TimeFilter::Unfiltered);
        let mut renderer = OverlayRenderer::new();
        renderer.reconcile(&data, &scales);
        renderer.update_positions(&identity);
        let before: Vec<Marker> = renderer.markers().cloned().collect();

        let summary = renderer.reconcile(&data, &scales);
        assert!(summary.created.is_empty());
        assert!(summary.removed.is_empty());
        assert_eq!(summary.updated, vec!["A", "B"]);

        let after: Vec<Marker> = renderer.markers().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_keeps_position_and_changes_attributes() {
        let mut renderer = OverlayRenderer::new();
        let first = vec![traffic("A", 10.0, 1, 0), traffic("B", 20.0, 3, 0)];
        renderer.reconcile(&first, &Scales::derive(&first, TimeFilter::Unfiltered));
        renderer.update_positions(&identity);

        let second = vec![traffic("A", 10.0, 0, 8), traffic("B", 20.0, 0, 2)];
        renderer.reconcile(&second, &Scales::derive(&second, TimeFilter::Filtered(600)));

        let a = renderer.get("A").expect("marker A");
        assert_eq!(a.position, Some(ScreenPoint::new(10.0, 0.0)));
        assert_eq!(a.datum.departures(), 8);
        assert_eq!(a.radius, 50.0);
        assert_eq!(a.departure_ratio, 1.0);
    }

    #[test]
    fn test_absent_station_is_removed() {
        let mut renderer = OverlayRenderer::new();
        let first = vec![traffic("A", 0.0, 1, 0), traffic("B", 0.0, 1, 0), traffic("C", 0.0, 1, 0)];
        renderer.reconcile(&first, &Scales::derive(&first, TimeFilter::Unfiltered));

        let second = vec![traffic("C", 0.0, 1, 0), traffic("A", 0.0, 1, 0), traffic("D", 0.0, 1, 0)];
        let summary = renderer.reconcile(&second, &Scales::derive(&second, TimeFilter::Unfiltered));

        assert_eq!(summary.created, vec!["D"]);
        assert_eq!(summary.updated, vec!["C", "A"]);
        assert_eq!(summary.removed, vec!["B"]);
        let order: Vec<&str> = renderer.markers().map(Marker::station_id).collect();
        assert_eq!(order, vec!["C", "A", "D"]);
    }

    #[test]
    fn test_update_positions_uses_projection() {
        let data = vec![traffic("A", 5.0, 1, 0)];
        let mut renderer = OverlayRenderer::new();
        renderer.reconcile(&data, &Scales::derive(&data, TimeFilter::Unfiltered));

        renderer.update_positions(&|c: LngLat| ScreenPoint::new(c.lon * 2.0, 7.0));
        assert_eq!(renderer.get("A").and_then(|m| m.position), Some(ScreenPoint::new(10.0, 7.0)));

        renderer.update_positions(&|c: LngLat| ScreenPoint::new(c.lon - 1.0, 0.0));
        assert_eq!(renderer.get("A").and_then(|m| m.position), Some(ScreenPoint::new(4.0, 0.0)));
    }

    #[test]
    fn test_marker_at_prefers_topmost() {
        let data = vec![traffic("below", 0.0, 2, 2), traffic("above", 40.0, 2, 2)];
        let mut renderer = OverlayRenderer::new();
        renderer.reconcile(&data, &Scales::derive(&data, TimeFilter::Unfiltered));
        renderer.update_positions(&identity);

        let hit = renderer.marker_at(ScreenPoint::new(20.0, 0.0)).map(Marker::station_id);
        assert_eq!(hit, Some("above"));
        let hit = renderer.marker_at(ScreenPoint::new(-5.0, 0.0)).map(Marker::station_id);
        assert_eq!(hit, Some("below"));
        assert!(renderer.marker_at(ScreenPoint::new(100.0, 100.0)).is_none());
    }

    #[test]
    fn test_flow_color_mix() {
        assert_eq!(flow_color(1.0), "rgb(70, 130, 180)");
        assert_eq!(flow_color(0.0), "rgb(255, 140, 0)");
        assert_eq!(flow_color(0.5), "rgb(163, 135, 90)");
        assert_eq!(flow_color(f64::NAN), flow_color(0.5));
    }

    #[test]
    fn test_hover_stroke_width() {
        let data = vec![traffic("A", 0.0, 1, 0)];
        let mut renderer = OverlayRenderer::new();
        renderer.reconcile(&data, &Scales::derive(&data, TimeFilter::Unfiltered));
        let marker = renderer.get("A").expect("marker A");
        assert_eq!(marker.effective_stroke_width(false), 1.0);
        assert_eq!(marker.effective_stroke_width(true), 2.0);
    }
}
