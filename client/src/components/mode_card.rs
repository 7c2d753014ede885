//! Selectable card for one monitoring mode on the start page.

use events::Mode;
use leptos::prelude::*;

use crate::state::ui::StartPageState;

#[component]
pub fn ModeCard(mode: Mode, page: RwSignal<StartPageState>) -> impl IntoView {
    let (icon, title, description) = match mode {
        Mode::Study => ("📖", "学习模式", "看屏幕学习，长时间低头会被提醒"),
        Mode::Homework => ("✍️", "作业模式", "伏案写作业，长时间抬头会被提醒"),
    };

    view! {
        <button
            class=move || page.with(|p| p.mode_card_class(mode))
            data-mode=mode.as_str()
            on:click=move |_| page.update(|p| p.select_mode(mode))
        >
            <span class="mode-card__icon">{icon}</span>
            <span class="mode-card__title">{title}</span>
            <span class="mode-card__desc">{description}</span>
        </button>
    }
}
