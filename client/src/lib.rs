//! # client
//!
//! Leptos + WASM frontend for the focus monitor.
//!
//! This crate contains pages, components, application state, the REST
//! helpers and the websocket event client. Pure state logic lives in
//! `state/` and is unit-tested without a browser; everything that touches
//! `window` is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
