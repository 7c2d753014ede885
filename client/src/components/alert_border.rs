//! Full-screen colored frame that escalates with the detector's alert level.

use leptos::prelude::*;

use crate::state::monitor::MonitorState;

#[component]
pub fn AlertBorder() -> impl IntoView {
    let monitor = expect_context::<RwSignal<MonitorState>>();
    view! { <div class=move || monitor.with(MonitorState::alert_border_class) aria-hidden="true"></div> }
}
