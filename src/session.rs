use crate::controller::TimeFilterController;
use crate::interaction::{InteractionLayer, MarkerPointerEvent, PointerTracker, Tooltip};
use crate::models::{StationBase, TimeFilter};
use crate::overlay::OverlayRenderer;
use crate::projection::{MapProjection, ScreenPoint, ViewportEvent};
use crate::trip_store::TripStore;

/// What a pointer event changed, so the host only repaints what it must
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerUpdate {
    pub hover_changed: bool,
    pub tooltip_changed: bool,
}

/// Everything the map view holds once the datasets are in memory.
///
/// Each entry point corresponds to one kind of host event and runs to
/// completion before returning.
#[derive(Debug, Clone)]
pub struct MapSession {
    controller: TimeFilterController,
    renderer: OverlayRenderer,
    interaction: InteractionLayer,
    tracker: PointerTracker,
}

impl MapSession {
    pub fn new(trips: TripStore, stations: Vec<StationBase>, projection: &impl MapProjection) -> Self {
        let mut renderer = OverlayRenderer::new();
        let controller = TimeFilterController::new(trips, stations, &mut renderer, projection);
        Self {
            controller,
            renderer,
            interaction: InteractionLayer::new(),
            tracker: PointerTracker::new(),
        }
    }

    /// Slider input
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a valid slider position.
    pub fn on_slider_input(&mut self, value: i32, projection: &impl MapProjection) -> Result<TimeFilter, String> {
        self.controller.set_slider_value(value, &mut self.renderer, projection)?;
        Ok(self.controller.current_filter())
    }

    /// Pan, zoom or resize: positions only, attributes stay as they are
    pub fn on_viewport_change(&mut self, _event: ViewportEvent, projection: &impl MapProjection) {
        self.renderer.update_positions(projection);
    }

    pub fn on_pointer_move(&mut self, local: ScreenPoint, client: ScreenPoint) -> PointerUpdate {
        let events = self.tracker.pointer_moved(&self.renderer, local, client);
        self.apply_pointer_events(events)
    }

    pub fn on_pointer_leave(&mut self, client: ScreenPoint) -> PointerUpdate {
        let events = self.tracker.pointer_left(client).into_iter().collect();
        self.apply_pointer_events(events)
    }

    fn apply_pointer_events(&mut self, events: Vec<MarkerPointerEvent>) -> PointerUpdate {
        let hovered = self.interaction.hovered().map(ToString::to_string);
        let tooltip = self.interaction.tooltip();
        for event in &events {
            self.interaction.handle(event, &self.renderer);
        }
        PointerUpdate {
            hover_changed: hovered.as_deref() != self.interaction.hovered(),
            tooltip_changed: tooltip != self.interaction.tooltip(),
        }
    }

    #[must_use]
    pub fn current_filter(&self) -> TimeFilter {
        self.controller.current_filter()
    }

    #[must_use]
    pub fn renderer(&self) -> &OverlayRenderer {
        &self.renderer
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionLayer {
        &self.interaction
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        self.interaction.tooltip()
    }

    #[must_use]
    pub fn controller(&self) -> &TimeFilterController {
        &self.controller
    }
}
