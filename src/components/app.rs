use leptos::{component, view, IntoView};
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use crate::components::traffic_map::TrafficMap;
use crate::config::MapConfig;

/// Element id of the optional inline JSON config block in index.html
const CONFIG_ELEMENT_ID: &str = "map-config";

fn load_config() -> MapConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    let Some(json) = inline else {
        return MapConfig::default();
    };
    MapConfig::from_json(&json).unwrap_or_else(|e| {
        leptos::logging::error!("{}; using defaults", e);
        MapConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/bike_traffic_map.css"/>
        <Title text="Bikewatching"/>

        <div class="app">
            <TrafficMap config=load_config() />
        </div>
    }
}
