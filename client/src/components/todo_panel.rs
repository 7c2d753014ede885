//! To-do list with add, toggle and delete.

use leptos::prelude::*;

use crate::state::todos::{EMPTY_TEXT, TodoState};

/// `on_completed` fires once per task that becomes done.
#[component]
pub fn TodoPanel(todos: RwSignal<TodoState>, on_completed: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let add = move || {
        let text = draft.get_untracked();
        let now = crate::util::clock::now_ms();
        let mut added = false;
        todos.update(|t| {
            added = t.add(&text, now);
            if added {
                t.save();
            }
        });
        if added {
            draft.set(String::new());
        }
    };

    let toggle = move |id: String| {
        let mut completed = false;
        todos.update(|t| {
            completed = t.toggle(&id);
            t.save();
        });
        if completed {
            on_completed.run(());
        }
    };

    let delete = move |id: String| {
        todos.update(|t| {
            t.delete(&id);
            t.save();
        });
    };

    view! {
        <section class="todos">
            <h3 class="section-title">
                "📝 待办事项 "
                <span class="todos__count">
                    {move || todos.with(|t| format!("{}/{}", t.completed_count(), t.total()))}
                </span>
            </h3>
            <div class="todos__input">
                <input
                    type="text"
                    placeholder="添加新任务..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| add()>"添加"</button>
            </div>
            <Show
                when=move || todos.with(|t| t.total() > 0)
                fallback=|| view! { <p class="todos__empty">{EMPTY_TEXT}</p> }
            >
                <ul class="todos__list">
                    <For
                        each=move || todos.get().items
                        key=|item| (item.id.clone(), item.done)
                        children=move |item| {
                            let toggle_id = item.id.clone();
                            let delete_id = item.id.clone();
                            view! {
                                <li class=if item.done { "todo-item done" } else { "todo-item" }>
                                    <input
                                        type="checkbox"
                                        prop:checked=item.done
                                        on:change=move |_| toggle(toggle_id.clone())
                                    />
                                    <span class="todo-item__text">{item.text}</span>
                                    <button class="todo-item__delete" title="删除" on:click=move |_| delete(delete_id.clone())>
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
