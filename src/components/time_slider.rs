use leptos::{component, event_target_value, view, IntoView, ReadSignal, SignalGet};
use crate::constants::{MINUTES_PER_DAY, SLIDER_ANY_TIME};
use crate::models::TimeFilter;

/// Parse the slider's text value, clamping into the slider's own range
fn slider_value(raw: &str) -> Option<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .map(|v| v.clamp(SLIDER_ANY_TIME, i32::from(MINUTES_PER_DAY) - 1))
}

#[component]
#[must_use]
pub fn TimeSlider(
    filter: ReadSignal<TimeFilter>,
    on_input: Box<dyn Fn(i32) + 'static>,
) -> impl IntoView {
    view! {
        <label class="time-filter">
            "Filter by time:"
            <input
                type="range"
                id="time-slider"
                min=SLIDER_ANY_TIME
                max=i32::from(MINUTES_PER_DAY) - 1
                prop:value=move || filter.get().to_slider_value()
                on:input=move |ev| {
                    if let Some(value) = slider_value(&event_target_value(&ev)) {
                        on_input(value);
                    }
                }
            />
            <time id="selected-time">{move || filter.get().label().unwrap_or_default()}</time>
            <em
                id="any-time"
                style=move || if filter.get().is_active() { "display: none;" } else { "display: inline;" }
            >
                "(any time)"
            </em>
        </label>
    }
}
