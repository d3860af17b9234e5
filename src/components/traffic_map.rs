use leptos::{
    component, create_effect, create_node_ref, create_signal, html, spawn_local, store_value, view,
    IntoView, NodeRef, SignalSet, StoredValue, WriteSignal,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, MouseEvent};
use crate::api::datasets::{fetch_datasets, fetch_lane_geojson};
use crate::components::legend::FlowLegend;
use crate::components::leaflet::LeafletMap;
use crate::components::overlay_canvas::draw_overlay;
use crate::components::station_tooltip::StationTooltip;
use crate::components::time_slider::TimeSlider;
use crate::config::{LaneLayer, MapConfig};
use crate::interaction::Tooltip;
use crate::log;
use crate::models::TimeFilter;
use crate::projection::{ScreenPoint, ViewportEvent};
use crate::session::{MapSession, PointerUpdate};

type MapHandle = StoredValue<Option<LeafletMap>>;
type SessionHandle = StoredValue<Option<MapSession>>;

/// Repaint the overlay canvas from the current session state
fn redraw(canvas_ref: NodeRef<html::Canvas>, session: SessionHandle) {
    let Some(canvas) = canvas_ref.get_untracked() else { return };
    let canvas_elem: &web_sys::HtmlCanvasElement = &canvas;

    #[allow(clippy::cast_sign_loss)]
    let (width, height) = (canvas_elem.client_width().max(0) as u32, canvas_elem.client_height().max(0) as u32);
    if width > 0 && height > 0 && (canvas_elem.width() != width || canvas_elem.height() != height) {
        canvas_elem.set_width(width);
        canvas_elem.set_height(height);
    }

    let Some(ctx) = canvas_elem
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    session.with_value(|session| {
        if let Some(session) = session {
            draw_overlay(
                &ctx,
                (f64::from(width), f64::from(height)),
                session.renderer(),
                session.interaction(),
            );
        }
    });
}

fn subscribe_viewport(
    leaflet: &LeafletMap,
    map: MapHandle,
    session: SessionHandle,
    canvas_ref: NodeRef<html::Canvas>,
) {
    for event in ViewportEvent::ALL {
        let result = leaflet.on_viewport_change(event, move || {
            session.update_value(|session| {
                let Some(session) = session else { return };
                map.with_value(|map| {
                    if let Some(map) = map {
                        session.on_viewport_change(event, map);
                    }
                });
            });
            redraw(canvas_ref, session);
        });
        if let Err(e) = result {
            leptos::logging::error!("Failed to subscribe to map '{}' events: {:?}", event.event_name(), e);
        }
    }
}

fn load_lane_layers(lanes: Vec<LaneLayer>, map: MapHandle) {
    for layer in lanes {
        spawn_local(async move {
            match fetch_lane_geojson(&layer.url).await {
                Ok(geojson) => map.with_value(|map| {
                    let Some(map) = map else { return };
                    if let Err(e) = map.add_lane_layer(&layer, &geojson) {
                        leptos::logging::error!("Failed to add lane layer {}: {:?}", layer.id, e);
                    }
                }),
                Err(e) => leptos::logging::error!("Failed to load lane layer {}: {}", layer.id, e),
            }
        });
    }
}

fn load_datasets(
    config: MapConfig,
    map: MapHandle,
    session: SessionHandle,
    filter: WriteSignal<TimeFilter>,
    canvas_ref: NodeRef<html::Canvas>,
) {
    spawn_local(async move {
        let datasets = match fetch_datasets(&config).await {
            Ok(datasets) => datasets,
            Err(e) => {
                leptos::logging::error!("Error loading data: {}", e);
                return;
            }
        };
        log!(
            "Loaded {} stations and {} trips",
            datasets.stations.len(),
            datasets.trips.len()
        );

        map.with_value(|map| {
            let Some(map) = map else { return };
            session.set_value(Some(MapSession::new(datasets.trips, datasets.stations, map)));
        });
        filter.set(TimeFilter::Unfiltered);
        redraw(canvas_ref, session);
    });
}

fn initialize(
    container: &web_sys::HtmlElement,
    config: MapConfig,
    map: MapHandle,
    session: SessionHandle,
    filter: WriteSignal<TimeFilter>,
    canvas_ref: NodeRef<html::Canvas>,
) {
    let leaflet = match LeafletMap::create(container, &config.view) {
        Ok(leaflet) => leaflet,
        Err(e) => {
            leptos::logging::error!("Failed to create map: {:?}", e);
            return;
        }
    };

    subscribe_viewport(&leaflet, map, session, canvas_ref);
    // The stylesheet may not have sized the container yet
    leaflet.invalidate_size_after_layout();
    if let Err(e) = leaflet.observe_container_resize(container) {
        leptos::logging::error!("Failed to observe map container size: {:?}", e);
    }
    map.set_value(Some(leaflet));
    load_lane_layers(config.lanes.clone(), map);
    load_datasets(config, map, session, filter, canvas_ref);
}

#[component]
#[must_use]
pub fn TrafficMap(config: MapConfig) -> impl IntoView {
    let map_ref = create_node_ref::<html::Div>();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (filter, set_filter) = create_signal(TimeFilter::Unfiltered);
    let (tooltip, set_tooltip) = create_signal(None::<Tooltip>);
    let map: MapHandle = store_value(None);
    let session: SessionHandle = store_value(None);
    let config = store_value(config);

    create_effect(move |initialized: Option<bool>| {
        if initialized == Some(true) {
            return true;
        }
        let Some(container) = map_ref.get() else { return false };
        let container: &web_sys::HtmlElement = &container;
        initialize(container, config.get_value(), map, session, set_filter, canvas_ref);
        true
    });

    let handle_slider = Box::new(move |value: i32| {
        session.update_value(|session| {
            let Some(session) = session else { return };
            map.with_value(|map| {
                let Some(map) = map else { return };
                match session.on_slider_input(value, map) {
                    Ok(new_filter) => set_filter.set(new_filter),
                    Err(e) => leptos::logging::error!("Ignoring slider input: {}", e),
                }
            });
        });
        redraw(canvas_ref, session);
    });

    let handle_mouse_move = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let canvas_elem: &web_sys::HtmlCanvasElement = &canvas;
        let rect = canvas_elem.get_bounding_client_rect();
        let client = ScreenPoint::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        let local = ScreenPoint::new(client.x - rect.left(), client.y - rect.top());

        let mut update = PointerUpdate::default();
        session.update_value(|session| {
            let Some(session) = session else { return };
            update = session.on_pointer_move(local, client);
            if update.tooltip_changed {
                set_tooltip.set(session.tooltip());
            }
        });
        if update.hover_changed {
            redraw(canvas_ref, session);
        }
    };

    let handle_mouse_leave = move |ev: MouseEvent| {
        let client = ScreenPoint::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        let mut update = PointerUpdate::default();
        session.update_value(|session| {
            if let Some(session) = session {
                update = session.on_pointer_leave(client);
            }
        });
        if update.tooltip_changed {
            set_tooltip.set(None);
        }
        if update.hover_changed {
            redraw(canvas_ref, session);
        }
    };

    view! {
        <header class="map-header">
            <h1>"Bikewatching"</h1>
            <TimeSlider filter=filter on_input=handle_slider />
        </header>
        <div
            class="map-container"
            on:mousemove=handle_mouse_move
            on:mouseleave=handle_mouse_leave
        >
            <div id="map" node_ref=map_ref class="map"></div>
            <canvas node_ref=canvas_ref class="station-overlay"></canvas>
        </div>
        <FlowLegend />
        <StationTooltip tooltip=tooltip />
    }
}
