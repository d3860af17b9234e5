use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::config::{InitialView, LaneLayer};
use crate::projection::{LngLat, MapProjection, ScreenPoint, ViewportEvent};

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

fn leaflet() -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let l = js_sys::Reflect::get(&window, &JsValue::from_str("L"))?;
    if l.is_undefined() {
        return Err(JsValue::from_str("Leaflet (window.L) is not loaded"));
    }
    Ok(l)
}

fn method(target: &JsValue, name: &str) -> Result<js_sys::Function, JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| JsValue::from_str(&format!("{name} not a function")))
}

fn request_animation_frame<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(f);
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn lat_lng_array(coord: LngLat) -> js_sys::Array {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_f64(coord.lat));
    array.push(&JsValue::from_f64(coord.lon));
    array
}

/// Handle to a live Leaflet map. All viewport state stays on the JS side.
#[derive(Clone)]
pub struct LeafletMap {
    map: JsValue,
}

impl LeafletMap {
    /// `L.map(container, options).setView([lat, lng], zoom)` plus an OSM tile layer
    ///
    /// # Errors
    ///
    /// Returns an error if Leaflet is not loaded or any call into it fails.
    pub fn create(container: &web_sys::HtmlElement, view: &InitialView) -> Result<Self, JsValue> {
        let l = leaflet()?;

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("minZoom"), &JsValue::from_f64(view.min_zoom))?;
        js_sys::Reflect::set(&options, &JsValue::from_str("maxZoom"), &JsValue::from_f64(view.max_zoom))?;
        let map = method(&l, "map")?.call2(&l, container, &options)?;

        method(&map, "setView")?.call2(&map, &lat_lng_array(view.center), &JsValue::from_f64(view.zoom))?;

        let tile_options = js_sys::Object::new();
        js_sys::Reflect::set(&tile_options, &JsValue::from_str("attribution"), &JsValue::from_str(TILE_ATTRIBUTION))?;
        js_sys::Reflect::set(&tile_options, &JsValue::from_str("maxZoom"), &JsValue::from_f64(view.max_zoom))?;
        let tile_layer = method(&l, "tileLayer")?.call2(&l, &JsValue::from_str(TILE_URL), &tile_options)?;
        method(&tile_layer, "addTo")?.call1(&tile_layer, &map)?;

        Ok(Self { map })
    }

    /// Subscribe to a viewport event. The callback lives as long as the page.
    ///
    /// # Errors
    ///
    /// Returns an error if `map.on` cannot be called.
    pub fn on_viewport_change<F>(&self, event: ViewportEvent, callback: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        method(&self.map, "on")?.call2(
            &self.map,
            &JsValue::from_str(event.event_name()),
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
        Ok(())
    }

    /// `map.invalidateSize({animate: false, pan: false})`. When the container
    /// size changed, Leaflet fires `resize` and `move`, which re-project markers.
    ///
    /// # Errors
    ///
    /// Returns an error if `invalidateSize` cannot be called.
    pub fn invalidate_size(&self) -> Result<(), JsValue> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("animate"), &JsValue::from_bool(false))?;
        js_sys::Reflect::set(&options, &JsValue::from_str("pan"), &JsValue::from_bool(false))?;
        method(&self.map, "invalidateSize")?.call1(&self.map, &options)?;
        Ok(())
    }

    /// Re-measure the container two frames from now, once styles have applied
    pub fn invalidate_size_after_layout(&self) {
        let map = self.clone();
        request_animation_frame(move || {
            request_animation_frame(move || {
                if let Err(e) = map.invalidate_size() {
                    leptos::logging::error!("Failed to invalidate map size: {:?}", e);
                }
            });
        });
    }

    /// Re-measure whenever the container element changes size
    ///
    /// # Errors
    ///
    /// Returns an error if `ResizeObserver` is unavailable or `observe` fails.
    pub fn observe_container_resize(&self, container: &web_sys::HtmlElement) -> Result<(), JsValue> {
        let map = self.clone();
        let callback = Closure::wrap(Box::new(move |_entries: JsValue| {
            if let Err(e) = map.invalidate_size() {
                leptos::logging::error!("Failed to invalidate map size: {:?}", e);
            }
        }) as Box<dyn FnMut(JsValue)>);

        let window = web_sys::window().ok_or("No window")?;
        let constructor = js_sys::Reflect::get(&window, &JsValue::from_str("ResizeObserver"))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| JsValue::from_str("ResizeObserver is not supported"))?;
        let observer = js_sys::Reflect::construct(&constructor, &js_sys::Array::of1(callback.as_ref()))?;
        method(&observer, "observe")?.call1(&observer, container)?;

        callback.forget();
        Ok(())
    }

    /// Register a decorative line layer from raw `GeoJSON` text:
    /// `L.geoJSON(data, { style }).addTo(map)`
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or Leaflet rejects it.
    pub fn add_lane_layer(&self, layer: &LaneLayer, geojson: &str) -> Result<(), JsValue> {
        let l = leaflet()?;
        let data = js_sys::JSON::parse(geojson)?;

        let style = js_sys::Object::new();
        js_sys::Reflect::set(&style, &JsValue::from_str("color"), &JsValue::from_str(&layer.color))?;
        js_sys::Reflect::set(&style, &JsValue::from_str("weight"), &JsValue::from_f64(layer.width))?;
        js_sys::Reflect::set(&style, &JsValue::from_str("opacity"), &JsValue::from_f64(layer.opacity))?;
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("style"), &style)?;
        js_sys::Reflect::set(&options, &JsValue::from_str("interactive"), &JsValue::from_bool(false))?;

        let geojson_layer = method(&l, "geoJSON")?.call2(&l, &data, &options)?;
        method(&geojson_layer, "addTo")?.call1(&geojson_layer, &self.map)?;
        Ok(())
    }

    fn try_project(&self, coord: LngLat) -> Result<ScreenPoint, JsValue> {
        let point = method(&self.map, "latLngToContainerPoint")?.call1(&self.map, &lat_lng_array(coord))?;
        let x = js_sys::Reflect::get(&point, &JsValue::from_str("x"))?.as_f64().ok_or("x not a number")?;
        let y = js_sys::Reflect::get(&point, &JsValue::from_str("y"))?.as_f64().ok_or("y not a number")?;
        Ok(ScreenPoint::new(x, y))
    }
}

impl MapProjection for LeafletMap {
    /// Off-map (NaN) when Leaflet cannot answer; such markers are neither painted nor hit
    fn project(&self, coord: LngLat) -> ScreenPoint {
        self.try_project(coord)
            .unwrap_or(ScreenPoint::new(f64::NAN, f64::NAN))
    }
}
