use crate::constants::{TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y};
use crate::overlay::OverlayRenderer;
use crate::projection::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Move,
    Leave,
}

/// A pointer event addressed to one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPointerEvent {
    pub station_id: String,
    pub kind: PointerKind,
    /// Pointer position in viewport (client) coordinates
    pub client: ScreenPoint,
}

/// Counts shown for the hovered station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipContent {
    pub total: u32,
    pub departures: u32,
    pub arrivals: u32,
}

impl TooltipContent {
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            format!("{} trips", self.total),
            format!("{} departures", self.departures),
            format!("{} arrivals", self.arrivals),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tooltip {
    pub content: TooltipContent,
    /// Fixed-position coordinates of the tooltip box
    pub left: f64,
    pub top: f64,
}

/// Tooltip and hover state. Reads markers, never writes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionLayer {
    hovered: Option<String>,
    tooltip: Option<Tooltip>,
}

fn placement(client: ScreenPoint) -> (f64, f64) {
    (client.x + TOOLTIP_OFFSET_X, client.y + TOOLTIP_OFFSET_Y)
}

impl InteractionLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: &MarkerPointerEvent, overlay: &OverlayRenderer) {
        match event.kind {
            PointerKind::Enter => {
                let Some(marker) = overlay.get(&event.station_id) else {
                    self.clear();
                    return;
                };
                let (left, top) = placement(event.client);
                self.hovered = Some(event.station_id.clone());
                self.tooltip = Some(Tooltip {
                    content: TooltipContent {
                        total: marker.datum.total_traffic(),
                        departures: marker.datum.departures(),
                        arrivals: marker.datum.arrivals(),
                    },
                    left,
                    top,
                });
            }
            PointerKind::Move => {
                if self.hovered.as_deref() != Some(event.station_id.as_str()) {
                    return;
                }
                if let Some(tooltip) = self.tooltip.as_mut() {
                    (tooltip.left, tooltip.top) = placement(event.client);
                }
            }
            PointerKind::Leave => {
                if self.hovered.as_deref() == Some(event.station_id.as_str()) {
                    self.clear();
                }
            }
        }
    }

    /// Hide the tooltip and drop hover emphasis
    pub fn clear(&mut self) {
        self.hovered = None;
        self.tooltip = None;
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        self.tooltip
    }

    #[must_use]
    pub fn is_hovered(&self, station_id: &str) -> bool {
        self.hovered.as_deref() == Some(station_id)
    }
}

/// Turns raw pointer positions over the map into per-marker enter/move/leave events.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    current: Option<String>,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `local` is relative to the overlay, `client` to the browser viewport
    pub fn pointer_moved(
        &mut self,
        overlay: &OverlayRenderer,
        local: ScreenPoint,
        client: ScreenPoint,
    ) -> Vec<MarkerPointerEvent> {
        let target = overlay.marker_at(local).map(|m| m.station_id().to_string());
        let mut events = Vec::new();

        if target == self.current {
            if let Some(id) = target {
                events.push(MarkerPointerEvent { station_id: id, kind: PointerKind::Move, client });
            }
            return events;
        }

        if let Some(previous) = self.current.take() {
            events.push(MarkerPointerEvent { station_id: previous, kind: PointerKind::Leave, client });
        }
        if let Some(id) = target {
            events.push(MarkerPointerEvent { station_id: id.clone(), kind: PointerKind::Enter, client });
            self.current = Some(id);
        }
        events
    }

    /// Pointer left the map entirely
    pub fn pointer_left(&mut self, client: ScreenPoint) -> Option<MarkerPointerEvent> {
        self.current
            .take()
            .map(|id| MarkerPointerEvent { station_id: id, kind: PointerKind::Leave, client })
    }
}
