//! Paginated table of past sessions, newest first.

use leptos::prelude::*;

use crate::state::history::{self, PAGE_SIZE, SessionRecord};

#[component]
pub fn HistoryList(records: RwSignal<Vec<SessionRecord>>, offset_minutes: i32) -> impl IntoView {
    let index = RwSignal::new(0_usize);

    let rows = move || {
        records.with(|r| {
            let page = history::page(r, index.get(), PAGE_SIZE);
            page.items
                .iter()
                .map(|rec| {
                    view! {
                        <tr>
                            <td>{history::display_date(rec, offset_minutes)}</td>
                            <td>{format!("{} 分钟", rec.duration)}</td>
                            <td>{rec.score}</td>
                            <td>{rec.pomodoros}</td>
                            <td>{rec.tasks}</td>
                            <td>{rec.distractions}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };
    let total_pages = move || records.with(|r| history::page(r, 0, PAGE_SIZE).total_pages);
    let current = move || records.with(|r| history::page(r, index.get(), PAGE_SIZE).index);

    view! {
        <section class="history-list">
            <Show
                when=move || records.with(|r| !r.is_empty())
                fallback=|| view! { <p class="history-list__empty">"暂无学习记录"</p> }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"时间"</th>
                            <th>"时长"</th>
                            <th>"积分"</th>
                            <th>"番茄"</th>
                            <th>"任务"</th>
                            <th>"走神"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <div class="pagination">
                    <button class="btn" disabled=move || current() == 0 on:click=move |_| index.set(current().saturating_sub(1))>
                        "上一页"
                    </button>
                    <span>{move || format!("{} / {}", current() + 1, total_pages())}</span>
                    <button
                        class="btn"
                        disabled=move || current() + 1 >= total_pages()
                        on:click=move |_| index.set(current() + 1)
                    >
                        "下一页"
                    </button>
                </div>
            </Show>
        </section>
    }
}
