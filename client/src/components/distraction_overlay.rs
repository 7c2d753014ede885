//! Blocking overlay shown while a distraction episode is open.

use leptos::prelude::*;

use crate::state::monitor::MonitorState;

/// Shows the detector's reason and a "back to focus" button.
#[component]
pub fn DistractionOverlay(on_ack: Callback<()>) -> impl IntoView {
    let monitor = expect_context::<RwSignal<MonitorState>>();
    let reason = move || monitor.with(|m| m.overlay.clone());

    view! {
        <Show when=move || reason().is_some()>
            <div class="distraction-overlay">
                <div class="distraction-overlay__card">
                    <div class="distraction-overlay__icon">"😴"</div>
                    <h2>"注意力不集中"</h2>
                    <p class="distraction-overlay__reason">{move || reason().unwrap_or_default()}</p>
                    <button class="btn btn--primary" on:click=move |_| on_ack.run(())>
                        "我回来了，继续专注"
                    </button>
                </div>
            </div>
        </Show>
    }
}
