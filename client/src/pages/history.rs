//! History page: summary cards, heatmap, day detail with diary, session list.

use leptos::prelude::*;
use time::Month;

use crate::components::calendar_heatmap::CalendarHeatmap;
use crate::components::diary_editor::DiaryEditor;
use crate::components::history_list::HistoryList;
use crate::state::diary::DiaryState;
use crate::state::history::{self, HistoryState, SessionRecord};
use crate::util::clock;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let offset = clock::local_offset_minutes();
    let records = RwSignal::new(Vec::<SessionRecord>::new());
    let diary = RwSignal::new(DiaryState::default());
    let month = RwSignal::new((1970, Month::January));
    let selected = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        records.set(HistoryState::load().records);
        diary.set(DiaryState::load());
        month.set(history::current_month(clock::now_ms(), offset));
        selected.set(Some(clock::today_key()));
    });

    let summary = Memo::new(move |_| records.with(|r| history::summarize(r)));
    let day = Signal::derive(move || selected.get().unwrap_or_default());

    let day_sessions = move || {
        let key = day.get();
        records.with(|r| {
            history::records_on(r, &key, offset)
                .into_iter()
                .map(|rec| {
                    view! {
                        <li>
                            {history::display_date(rec, offset)} " · " {rec.duration} " 分钟 · "
                            {rec.score} " 分"
                        </li>
                    }
                })
                .collect_view()
        })
    };

    let on_clear = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("确定要清空所有学习记录吗？").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
        }
        let mut state = HistoryState { records: records.get_untracked() };
        state.clear();
        records.set(state.records);
    };

    view! {
        <div class="history-page">
            <header class="history-header">
                <a href="/" class="btn">"← 返回"</a>
                <h1>"📊 学习记录"</h1>
                <button class="btn btn--danger" on:click=on_clear>"清空记录"</button>
            </header>
            <div class="summary-cards">
                <div class="summary-card">
                    <span class="summary-card__value">{move || summary.get().sessions}</span>
                    <span class="summary-card__label">"学习次数"</span>
                </div>
                <div class="summary-card">
                    <span class="summary-card__value">{move || summary.get().total_minutes}</span>
                    <span class="summary-card__label">"总时长(分钟)"</span>
                </div>
                <div class="summary-card">
                    <span class="summary-card__value">{move || summary.get().pomodoros}</span>
                    <span class="summary-card__label">"番茄数"</span>
                </div>
                <div class="summary-card">
                    <span class="summary-card__value">{move || summary.get().tasks}</span>
                    <span class="summary-card__label">"完成任务"</span>
                </div>
                <div class="summary-card">
                    <span class="summary-card__value">{move || summary.get().distractions}</span>
                    <span class="summary-card__label">"走神次数"</span>
                </div>
                <div class="summary-card">
                    <span class="summary-card__value">{move || summary.get().average_score}</span>
                    <span class="summary-card__label">"平均积分"</span>
                </div>
            </div>
            <div class="history-body">
                <CalendarHeatmap records=records month=month selected=selected offset_minutes=offset/>
                <section class="day-detail">
                    <h3>{move || format!("{} 的学习", day.get())}</h3>
                    <ul class="day-detail__sessions">{day_sessions}</ul>
                    <DiaryEditor diary=diary day=day/>
                </section>
            </div>
            <HistoryList records=records offset_minutes=offset/>
        </div>
    }
}
