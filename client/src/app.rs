//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_layer::ToastLayer;
use crate::pages::{history::HistoryPage, monitor::MonitorPage, start::StartPage};
use crate::state::{monitor::MonitorState, toasts::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the event socket: one connection feeds the shared `MonitorState`
/// for both the start page preview and the monitor page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let monitor = RwSignal::new(MonitorState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(monitor);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    Effect::new(move |started: Option<()>| {
        if started.is_none() {
            crate::net::monitor_client::spawn_monitor_client(monitor);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/focus-monitor.css"/>
        <Title text="专注助手"/>

        <Router>
            <Routes fallback=|| "页面不存在".into_view()>
                <Route path=StaticSegment("") view=StartPage/>
                <Route path=StaticSegment("monitor") view=MonitorPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
            </Routes>
        </Router>
        <ToastLayer/>
    }
}
