use crate::log;
use crate::models::{StationBase, StationTraffic, TimeFilter};
use crate::overlay::{OverlayRenderer, ReconcileSummary};
use crate::projection::MapProjection;
use crate::scales::Scales;
use crate::traffic::aggregate;
use crate::trip_store::TripStore;

/// Sole owner of the time filter. Every change re-runs the pipeline:
/// filter trips, aggregate, derive scales, reconcile markers, re-project.
#[derive(Debug, Clone)]
pub struct TimeFilterController {
    trips: TripStore,
    stations: Vec<StationBase>,
    filter: TimeFilter,
    traffic: Vec<StationTraffic>,
    scales: Scales,
}

impl TimeFilterController {
    /// Start unfiltered and run the first pass immediately
    pub fn new(
        trips: TripStore,
        stations: Vec<StationBase>,
        renderer: &mut OverlayRenderer,
        projection: &impl MapProjection,
    ) -> Self {
        let traffic = aggregate(trips.trips(), &stations);
        let scales = Scales::derive(&traffic, TimeFilter::Unfiltered);
        let controller = Self {
            trips,
            stations,
            filter: TimeFilter::Unfiltered,
            traffic,
            scales,
        };
        controller.render(renderer, projection);
        controller
    }

    #[must_use]
    pub fn current_filter(&self) -> TimeFilter {
        self.filter
    }

    /// Switch to a new filter and recompute everything downstream of it
    pub fn set_filter(
        &mut self,
        filter: TimeFilter,
        renderer: &mut OverlayRenderer,
        projection: &impl MapProjection,
    ) -> ReconcileSummary {
        #[cfg(feature = "perf_timing")]
        let started = chrono::Utc::now();

        self.filter = filter;
        self.traffic = aggregate(self.trips.filtered(filter), &self.stations);
        self.scales = Scales::derive(&self.traffic, filter);
        let summary = self.render(renderer, projection);

        #[cfg(feature = "perf_timing")]
        log!(
            "Filter pass {:?}: {}ms",
            filter,
            (chrono::Utc::now() - started).num_milliseconds()
        );

        summary
    }

    /// Apply a raw slider position (`-1` = any time)
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a valid slider position; the
    /// current filter is left untouched.
    pub fn set_slider_value(
        &mut self,
        value: i32,
        renderer: &mut OverlayRenderer,
        projection: &impl MapProjection,
    ) -> Result<ReconcileSummary, String> {
        let filter = TimeFilter::from_slider_value(value)?;
        Ok(self.set_filter(filter, renderer, projection))
    }

    fn render(&self, renderer: &mut OverlayRenderer, projection: &impl MapProjection) -> ReconcileSummary {
        let summary = renderer.reconcile(&self.traffic, &self.scales);
        renderer.update_positions(projection);
        log!(
            "Overlay reconciled: {} created, {} updated, {} removed",
            summary.created.len(),
            summary.updated.len(),
            summary.removed.len()
        );
        summary
    }

    #[must_use]
    pub fn traffic(&self) -> &[StationTraffic] {
        &self.traffic
    }

    #[must_use]
    pub fn scales(&self) -> Scales {
        self.scales
    }

    #[must_use]
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }
}
