//! Stack of transient toasts in the corner of every page.

use leptos::prelude::*;

use crate::state::toasts::ToastState;

/// Renders the shared toast queue and expires entries on a short timer.
#[component]
pub fn ToastLayer() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            while alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                gloo_timers::future::sleep(std::time::Duration::from_millis(500)).await;
                let now = crate::util::clock::now_ms();
                if toasts.with_untracked(|t| t.items.iter().any(|toast| toast.expires_at_ms <= now)) {
                    toasts.update(|t| {
                        t.expire(now);
                    });
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="toast-layer" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
