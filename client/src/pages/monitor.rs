//! Monitor page: live focus tracking with pomodoro, to-dos and scoring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app-level socket client feeds `MonitorState`. This page turns new
//! distraction episodes into penalties and notifications, runs the 1 Hz
//! ticker for the session clock and pomodoro, and writes a history record
//! when the user leaves through the back button.

use leptos::prelude::*;

use crate::components::alert_border::AlertBorder;
use crate::components::distraction_overlay::DistractionOverlay;
use crate::components::pip_panel::PipPanel;
use crate::components::pomodoro_panel::PomodoroPanel;
use crate::components::score_badge::ScoreBadge;
use crate::components::todo_panel::TodoPanel;
use crate::state::monitor::MonitorState;
use crate::state::pip::PipState;
use crate::state::pomodoro::{PhaseComplete, PomodoroState};
use crate::state::session::{self, SessionState};
use crate::state::toasts::{ToastKind, ToastState};
use crate::state::todos::TodoState;
use crate::state::{history, ui};
use crate::util::{clock, notify};

fn on_phase_complete(done: PhaseComplete, session: RwSignal<SessionState>, toasts: RwSignal<ToastState>) {
    if done == PhaseComplete::Focus {
        session.update(|s| {
            s.record_pomodoro();
        });
    }
    notify::notify(toasts, ToastKind::Success, done.message());
}

#[component]
pub fn MonitorPage() -> impl IntoView {
    let monitor = expect_context::<RwSignal<MonitorState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let session = RwSignal::new(SessionState::default());
    let pomodoro = RwSignal::new(PomodoroState::default());
    let todos = RwSignal::new(TodoState::default());
    let pip = RwSignal::new(PipState::default());
    let mode = RwSignal::new(events::Mode::Study);
    let elapsed = RwSignal::new(0_u64);

    // Episodes that happened before this page mounted are not ours to score,
    // and a latch left by the settings preview must not swallow the first one.
    monitor.update(MonitorState::begin_session);
    let seen_episodes = StoredValue::new(monitor.with_untracked(|m| m.episodes));
    let episodes = Memo::new(move |_| monitor.with(|m| m.episodes));

    Effect::new(move |_| {
        session.set(SessionState::load(clock::now_ms()));
        todos.set(TodoState::load());
        pip.set(PipState::load());
        mode.set(ui::load_mode());
        notify::request_permission();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            if let Err(e) = crate::net::api::start_stream().await {
                leptos::logging::warn!("start stream: {e}");
            }
        });
    });

    Effect::new(move |_| {
        let current = episodes.get();
        let seen = seen_episodes.get_value();
        if current <= seen {
            return;
        }
        seen_episodes.set_value(current);
        for _ in seen..current {
            session.update(|s| {
                s.record_distraction();
            });
        }
        let reason = monitor.with_untracked(|m| m.overlay.clone()).unwrap_or_default();
        notify::notify(toasts, ToastKind::Warning, &format!("⚠️ {reason}"));
    });

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                elapsed.set(session.with_untracked(|s| s.elapsed_secs(clock::now_ms())));
                let mut done = None;
                pomodoro.update(|p| done = p.tick());
                if let Some(done) = done {
                    on_phase_complete(done, session, toasts);
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_ack = Callback::new(move |()| {
        monitor.update(|m| m.acknowledge(clock::now_ms()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            if let Err(e) = crate::net::api::reset_distraction().await {
                leptos::logging::warn!("reset distraction: {e}");
            }
        });
    });

    let on_task_done = Callback::new(move |()| {
        session.update(|s| {
            s.record_task();
        });
        notify::notify(toasts, ToastKind::Success, "✅ 任务完成 +10");
    });

    let navigate = leptos_router::hooks::use_navigate();
    let on_back = move |_| {
        if let Some(record) = session.with_untracked(|s| s.to_record(clock::now_ms())) {
            history::persist_session(record);
        }
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::stop_stream().await {
                    leptos::logging::warn!("stop stream: {e}");
                }
                navigate("/", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    };

    view! {
        <div class="monitor-page">
            <AlertBorder/>
            <header class="monitor-header">
                <button class="btn monitor-header__back" on:click=on_back>"← 返回"</button>
                <span class="mode-badge">{move || mode.get().label()}</span>
                <ScoreBadge session=session/>
                <span class="session-timer">"⏱ " {move || session::format_clock(elapsed.get())}</span>
                <span class=move || monitor.with(|m| m.connection.class())>
                    {move || monitor.with(|m| m.connection.label())}
                </span>
            </header>
            <main class="monitor-main">
                <PomodoroPanel pomodoro=pomodoro/>
                <TodoPanel todos=todos on_completed=on_task_done/>
                <PipPanel pip=pip/>
            </main>
            <DistractionOverlay on_ack=on_ack/>
        </div>
    }
}
