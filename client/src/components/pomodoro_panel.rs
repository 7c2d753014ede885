//! Pomodoro timer: progress ring, start/pause, reset and duration inputs.
//!
//! The page owns the 1 Hz ticker and phase-complete handling; this panel
//! only renders the state and edits it on user input.

use leptos::prelude::*;

use crate::state::pomodoro::{self, PomodoroState, RING_CIRCUMFERENCE};

#[component]
pub fn PomodoroPanel(pomodoro: RwSignal<PomodoroState>) -> impl IntoView {
    let focus_input = RwSignal::new(pomodoro.get_untracked().focus_minutes.to_string());
    let break_input = RwSignal::new(pomodoro.get_untracked().break_minutes.to_string());

    let reset = move || {
        let (focus, brk) = (focus_input.get_untracked(), break_input.get_untracked());
        pomodoro.update(|p| p.reset(&focus, &brk));
    };

    view! {
        <section class="pomodoro">
            <h3 class="section-title">"🍅 番茄钟"</h3>
            <div class="pomodoro__ring">
                <svg viewBox="0 0 220 220" class="pomodoro__svg">
                    <circle class="pomodoro__track" cx="110" cy="110" r="100"/>
                    <circle
                        class="pomodoro__progress"
                        cx="110"
                        cy="110"
                        r="100"
                        stroke=move || pomodoro.with(|p| p.phase.ring_color())
                        stroke-dasharray=RING_CIRCUMFERENCE.to_string()
                        stroke-dashoffset=move || pomodoro.with(|p| p.ring_offset().to_string())
                    />
                </svg>
                <div class="pomodoro__center">
                    <div class="pomodoro__time">{move || pomodoro.with(|p| pomodoro::format_time(p.time_left_secs))}</div>
                    <div class="pomodoro__label">{move || pomodoro.with(|p| p.phase.label())}</div>
                </div>
            </div>
            <div class="pomodoro__controls">
                <button class="btn btn--primary" on:click=move |_| pomodoro.update(PomodoroState::toggle)>
                    {move || pomodoro.with(PomodoroState::button_text)}
                </button>
                <button class="btn" on:click=move |_| reset()>"↺ 重置"</button>
            </div>
            <div class="pomodoro__settings">
                <label>
                    "专注"
                    <input
                        type="number"
                        min="1"
                        max="1440"
                        prop:value=move || focus_input.get()
                        on:change=move |ev| {
                            focus_input.set(event_target_value(&ev));
                            reset();
                        }
                    />
                    "分钟"
                </label>
                <label>
                    "休息"
                    <input
                        type="number"
                        min="1"
                        max="1440"
                        prop:value=move || break_input.get()
                        on:change=move |ev| {
                            break_input.set(event_target_value(&ev));
                            reset();
                        }
                    />
                    "分钟"
                </label>
            </div>
            <div class="pomodoro__count">
                "已完成 " <strong>{move || pomodoro.with(|p| p.completed)}</strong> " 个番茄"
            </div>
        </section>
    }
}
