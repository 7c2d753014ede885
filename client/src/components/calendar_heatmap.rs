//! Month calendar shaded by minutes studied per day.

use leptos::prelude::*;
use time::Month;

use crate::state::history::{self, SessionRecord};

const WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// `selected` holds the `YYYY-MM-DD` key of the clicked day.
#[component]
pub fn CalendarHeatmap(
    records: RwSignal<Vec<SessionRecord>>,
    month: RwSignal<(i32, Month)>,
    selected: RwSignal<Option<String>>,
    offset_minutes: i32,
) -> impl IntoView {
    let grid = Memo::new(move |_| {
        let (year, m) = month.get();
        records.with(|r| history::month_grid(r, year, m, offset_minutes))
    });

    let prev = move |_| month.update(|(y, m)| (*y, *m) = history::prev_month(*y, *m));
    let next = move |_| month.update(|(y, m)| (*y, *m) = history::next_month(*y, *m));

    view! {
        <section class="heatmap">
            <div class="heatmap__nav">
                <button class="btn" on:click=prev>"‹"</button>
                <span class="heatmap__title">{move || grid.with(|g| g.as_ref().map(history::MonthGrid::title).unwrap_or_default())}</span>
                <button class="btn" on:click=next>"›"</button>
            </div>
            <div class="heatmap__grid">
                {WEEKDAYS.iter().map(|d| view! { <div class="heatmap__weekday">{*d}</div> }).collect_view()}
                {move || {
                    let Some(g) = grid.get() else {
                        return ().into_any();
                    };
                    let blanks = (0..g.leading_blanks).map(|_| view! { <div class="heatmap__cell blank"></div> }).collect_view();
                    let days = g
                        .days
                        .into_iter()
                        .map(|cell| {
                            let key = cell.key.clone();
                            let is_selected = {
                                let key = key.clone();
                                move || selected.with(|s| s.as_deref() == Some(key.as_str()))
                            };
                            let title = format!("{}: {} 分钟", cell.key, cell.minutes);
                            view! {
                                <div
                                    class=move || format!("heatmap__cell level-{}{}", cell.level, if is_selected() { " selected" } else { "" })
                                    title=title
                                    on:click=move |_| selected.set(Some(key.clone()))
                                >
                                    {cell.day}
                                </div>
                            }
                        })
                        .collect_view();
                    view! { {blanks} {days} }.into_any()
                }}
            </div>
            <div class="heatmap__legend">
                "少" {(0..=4).map(|l| view! { <span class=format!("heatmap__cell level-{l}")></span> }).collect_view()} "多"
            </div>
        </section>
    }
}
