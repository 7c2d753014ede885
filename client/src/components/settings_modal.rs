//! Detector calibration modal on the start page.
//!
//! While open, the stream runs so the user can watch the live preview and
//! raw readings next to the threshold sliders. Closing (with or without
//! saving) stops the stream again.

use leptos::prelude::*;

use crate::state::monitor::MonitorState;
use crate::state::toasts::ToastState;
use crate::state::ui::{SLIDERS, StartPageState};
use crate::util::format;

/// Stop the preview stream and hide the modal.
fn close(page: RwSignal<StartPageState>) {
    page.update(StartPageState::close_settings);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        if let Err(e) = crate::net::api::stop_stream().await {
            leptos::logging::warn!("stop stream: {e}");
        }
    });
}

#[component]
pub fn SettingsModal(page: RwSignal<StartPageState>) -> impl IntoView {
    let monitor = expect_context::<RwSignal<MonitorState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let live = move |read: fn(&events::MonitorData) -> String| {
        move || monitor.with(|m| m.data.as_ref().map_or_else(|| "--".to_owned(), read))
    };

    let on_save = move |_| {
        let Some(patch) = page.with_untracked(|p| p.draft.to_patch()) else {
            page.update(|p| p.error = Some("参数格式不正确".to_owned()));
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_settings(&patch).await {
                Ok(()) => {
                    crate::util::notify::notify(toasts, crate::state::toasts::ToastKind::Success, "设置已保存");
                    close(page);
                }
                Err(e) => {
                    leptos::logging::warn!("save settings: {e}");
                    page.update(|p| p.error = Some(e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (patch, toasts);
        }
    };

    let sliders = SLIDERS
        .iter()
        .map(|slider| {
            let slider = *slider;
            view! {
                <div class="slider-row">
                    <label for=slider.field>{slider.label}</label>
                    <input
                        id=slider.field
                        type="range"
                        min=slider.min.to_string()
                        max=slider.max.to_string()
                        step=slider.step.to_string()
                        prop:value=move || page.with(|p| p.draft.value(slider.field))
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            page.update(|p| p.draft.set(slider.field, &value));
                        }
                    />
                    <span class="slider-row__value">{move || page.with(|p| p.draft.display(&slider))}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="modal active" on:click=move |_| close(page)>
            <div class="modal__content" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>"⚙️ 检测参数调试"</h2>
                    <button class="modal__close" on:click=move |_| close(page)>"×"</button>
                </div>
                <div class="modal__body">
                    <div class="debug-preview">
                        <Show
                            when=move || monitor.with(|m| m.latest_frame.is_some())
                            fallback=|| view! { <div class="debug-preview__placeholder">"摄像头启动中..."</div> }
                        >
                            <img alt="debug" src=move || monitor.with(|m| m.latest_frame.clone().unwrap_or_default())/>
                        </Show>
                        <div class="debug-preview__readouts">
                            <span>"EAR " <b>{live(|d| format::ear(d.ear))}</b></span>
                            <span>"Pitch " <b>{live(|d| format::degrees(d.pitch))}</b></span>
                            <span>"Yaw " <b>{live(|d| format::degrees(d.yaw))}</b></span>
                        </div>
                    </div>
                    <div class="sliders">{sliders}</div>
                    <Show when=move || page.with(|p| p.error.is_some())>
                        <p class="modal__error">{move || page.with(|p| p.error.clone().unwrap_or_default())}</p>
                    </Show>
                </div>
                <div class="modal__actions">
                    <button class="btn" on:click=move |_| close(page)>"关闭"</button>
                    <button class="btn btn--primary" on:click=on_save>"保存设置"</button>
                </div>
            </div>
        </div>
    }
}
