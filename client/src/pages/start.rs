//! Start page: pick a mode, optionally calibrate, then begin monitoring.

use events::Mode;
use leptos::prelude::*;

use crate::components::mode_card::ModeCard;
use crate::components::settings_modal::SettingsModal;
use crate::state::ui::{self, SettingsDraft, StartPageState};

#[component]
pub fn StartPage() -> impl IntoView {
    let page = RwSignal::new(StartPageState::default());

    // Storage is only readable after hydration.
    Effect::new(move |_| {
        let mode = ui::load_mode();
        page.update(|p| p.mode = mode);
    });

    let on_settings = move |_| {
        page.update(StartPageState::open_settings);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::start_stream().await {
                leptos::logging::warn!("start preview: {e}");
            }
            match crate::net::api::fetch_settings().await {
                Ok(settings) => page.update(|p| p.draft = SettingsDraft::from_settings(&settings)),
                Err(e) => page.update(|p| p.error = Some(e)),
            }
        });
    };

    let navigate = leptos_router::hooks::use_navigate();
    let on_start = move |_| {
        let mode = page.with_untracked(|p| p.mode);
        page.update(|p| p.select_mode(mode));
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::set_mode(mode).await {
                    leptos::logging::warn!("set mode: {e}");
                }
                navigate("/monitor", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    };

    view! {
        <div class="start-page">
            <header class="start-page__header">
                <h1>"🎯 专注助手"</h1>
                <p>"选择学习模式，开启专注之旅"</p>
            </header>
            <div class="mode-cards">
                <ModeCard mode=Mode::Study page=page/>
                <ModeCard mode=Mode::Homework page=page/>
            </div>
            <div class="start-page__actions">
                <button class="btn btn--large btn--primary" on:click=on_start>"开始专注"</button>
                <button class="btn" on:click=on_settings>"⚙️ 参数设置"</button>
                <a href="/history" class="btn">"📊 学习记录"</a>
            </div>
            <Show when=move || page.with(|p| p.settings_open)>
                <SettingsModal page=page/>
            </Show>
        </div>
    }
}
