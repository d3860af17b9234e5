use leptos::{component, view, IntoView, ReadSignal, SignalGet};
use crate::interaction::Tooltip;

#[component]
#[must_use]
pub fn StationTooltip(
    tooltip: ReadSignal<Option<Tooltip>>,
) -> impl IntoView {
    view! {
        {move || {
            if let Some(tooltip) = tooltip.get() {
                let [total, departures, arrivals] = tooltip.content.lines();
                view! {
                    <div
                        class="station-tooltip"
                        style=format!("left: {}px; top: {}px;", tooltip.left, tooltip.top)
                    >
                        <b>{total}</b>
                        <br/>
                        {departures}
                        <br/>
                        {arrivals}
                    </div>
                }.into_view()
            } else {
                view! { <div class="station-tooltip-hidden"></div> }.into_view()
            }
        }}
    }
}
