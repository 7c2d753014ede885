//! Picture-in-picture camera panel with a dock slot.
//!
//! The panel element is rendered once. Docked, it sits in the dock slot's
//! flow; floating, it switches to `position: fixed` with inline offsets from
//! [`PipState::inline_style`]. Dragging uses pointer capture on the header so
//! mouse and touch share one code path.

use leptos::html;
use leptos::prelude::*;

use crate::state::monitor::MonitorState;
use crate::state::pip::PipState;
#[cfg(feature = "hydrate")]
use crate::state::pip::{PipPosition, Size};

#[cfg(feature = "hydrate")]
fn rect_of(node: &NodeRef<html::Div>) -> Option<(PipPosition, Size)> {
    let rect = node.get_untracked()?.get_bounding_client_rect();
    Some((PipPosition { left: rect.left(), top: rect.top() }, Size { width: rect.width(), height: rect.height() }))
}

#[cfg(feature = "hydrate")]
fn viewport() -> Size {
    let window = web_sys::window();
    let dim = |v: Option<Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>>| {
        v.and_then(Result::ok).and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Size {
        width: dim(window.as_ref().map(web_sys::Window::inner_width)),
        height: dim(window.as_ref().map(web_sys::Window::inner_height)),
    }
}

#[component]
pub fn PipPanel(pip: RwSignal<PipState>) -> impl IntoView {
    let monitor = expect_context::<RwSignal<MonitorState>>();
    let dock_ref = NodeRef::<html::Div>::new();
    let panel_ref = NodeRef::<html::Div>::new();

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            // Buttons in the header keep their own click behavior.
            let on_button = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| el.closest("button").ok().flatten().is_some());
            if on_button {
                return;
            }
            let Some((rect, _)) = rect_of(&panel_ref) else {
                return;
            };
            ev.prevent_default();
            if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
            pip.update(|p| p.begin_drag((f64::from(ev.client_x()), f64::from(ev.client_y())), rect));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if !pip.with_untracked(|p| p.dragging) {
                return;
            }
            let (Some((_, size)), Some((dock, _))) = (rect_of(&panel_ref), rect_of(&dock_ref)) else {
                return;
            };
            let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
            pip.update(|p| p.drag_to(pointer, viewport(), size, dock));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            let dock = rect_of(&dock_ref).map_or_else(PipPosition::default, |(p, _)| p);
            pip.update(|p| {
                p.end_drag(dock);
            });
        }
    };

    let on_toggle_dock = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let dock = rect_of(&dock_ref).map_or_else(PipPosition::default, |(p, _)| p);
            pip.update(|p| p.toggle_dock(dock));
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some((_, size)) = rect_of(&panel_ref) {
                pip.update(|p| p.on_resize(viewport(), size));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let panel_class = move || {
        pip.with(|p| {
            let mut class = String::from("pip-panel");
            if !p.docked {
                class.push_str(" floating");
            }
            if p.dragging {
                class.push_str(" dragging");
            }
            if p.minimized {
                class.push_str(" minimized");
            }
            class
        })
    };

    let dock_class = move || {
        pip.with(|p| match (p.docked, p.dock_highlight) {
            (true, _) => "pip-dock occupied",
            (false, true) => "pip-dock highlight",
            (false, false) => "pip-dock empty",
        })
    };

    view! {
        <div class=dock_class node_ref=dock_ref on:click=move |_| {
            if !pip.with_untracked(|p| p.docked || p.dragging) {
                pip.update(PipState::dock);
            }
        }>
            <Show when=move || !pip.with(|p| p.docked)>
                <span class="pip-dock__hint">"点击或拖回此处停靠"</span>
            </Show>
            <div
                class=panel_class
                node_ref=panel_ref
                style=move || pip.with(PipState::inline_style)
                on:click=|ev| ev.stop_propagation()
            >
                <div
                    class="pip-panel__header"
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointercancel=on_pointer_up
                >
                    <span class=move || monitor.with(|m| m.face_status.class())>
                        {move || monitor.with(|m| m.face_status.text())}
                    </span>
                    <span class="pip-panel__pose">{move || monitor.with(MonitorState::pose_text)}</span>
                    <span class="pip-panel__buttons">
                        <button title=move || pip.with(PipState::dock_title) on:click=on_toggle_dock>
                            {move || pip.with(PipState::dock_glyph)}
                        </button>
                        <button title="最小化" on:click=move |_| pip.update(PipState::toggle_minimized)>
                            {move || pip.with(PipState::minimize_glyph)}
                        </button>
                    </span>
                </div>
                <Show when=move || !pip.with(|p| p.minimized)>
                    <div class="pip-panel__video">
                        <Show
                            when=move || monitor.with(|m| m.latest_frame.is_some())
                            fallback=|| view! { <div class="pip-panel__placeholder">"等待画面..."</div> }
                        >
                            <img alt="camera" src=move || monitor.with(|m| m.latest_frame.clone().unwrap_or_default())/>
                        </Show>
                    </div>
                </Show>
            </div>
        </div>
    }
}
