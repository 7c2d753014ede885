//! Markdown diary for the selected day: rendered view plus an edit mode.

use leptos::prelude::*;

use crate::state::diary::DiaryState;
use crate::util::{clock, markdown};

#[component]
pub fn DiaryEditor(diary: RwSignal<DiaryState>, day: Signal<String>) -> impl IntoView {
    let editing = RwSignal::new(false);
    let draft = RwSignal::new(String::new());

    // Switching days leaves edit mode.
    Effect::new(move || {
        let key = day.get();
        editing.set(false);
        draft.set(diary.with_untracked(|d| d.text(&key)));
    });

    let on_edit = move |_| {
        draft.set(diary.with_untracked(|d| d.text(&day.get_untracked())));
        editing.set(true);
    };

    let on_save = move |_| {
        let key = day.get_untracked();
        let text = draft.get_untracked();
        let now = clock::rfc3339_from_ms(clock::now_ms());
        diary.update(|d| {
            d.write(&key, &text, now);
            d.save();
        });
        editing.set(false);
    };

    let rendered = move || {
        let key = day.get();
        diary.with(|d| d.get(&key).map(|e| markdown::render_html(&e.text)))
    };

    view! {
        <section class="diary">
            <div class="diary__header">
                <h3>{move || format!("📔 {} 日记", day.get())}</h3>
                <Show when=move || !editing.get()>
                    <button class="btn" on:click=on_edit>"编辑"</button>
                </Show>
            </div>
            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <Show
                            when=move || rendered().is_some()
                            fallback=|| view! { <p class="diary__empty">"这一天还没有写日记"</p> }
                        >
                            <div class="diary__content markdown" inner_html=move || rendered().unwrap_or_default()></div>
                        </Show>
                    }
                }
            >
                <textarea
                    class="diary__input"
                    rows="8"
                    placeholder="支持 Markdown"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <div class="diary__actions">
                    <button class="btn" on:click=move |_| editing.set(false)>"取消"</button>
                    <button class="btn btn--primary" on:click=on_save>"保存"</button>
                </div>
            </Show>
        </section>
    }
}
