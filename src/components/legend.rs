use leptos::{component, view, CollectView, IntoView};
use crate::overlay::flow_color;

const ENTRIES: [(&str, f64); 3] = [
    ("More departures", 1.0),
    ("Balanced", 0.5),
    ("More arrivals", 0.0),
];

/// Swatches for the three flow buckets
#[component]
#[must_use]
pub fn FlowLegend() -> impl IntoView {
    view! {
        <div class="legend">
            <span class="legend-title">"Legend:"</span>
            {ENTRIES
                .into_iter()
                .map(|(label, ratio)| view! {
                    <span class="legend-item">
                        <span class="legend-swatch" style=format!("background: {};", flow_color(ratio))></span>
                        {label}
                    </span>
                })
                .collect_view()}
        </div>
    }
}
