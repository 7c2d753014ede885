//! WebSocket client for the detector event stream.
//!
//! One connection is opened by the app shell and shared by every page: it
//! decodes `frame` / `monitor_data` events and applies them to the
//! `MonitorState` signal. Pages react to the state, never to the socket.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Undecodable messages are logged and skipped. Transport failures mark the
//! connection disconnected and the loop reconnects with exponential backoff.

#[cfg(test)]
#[path = "monitor_client_test.rs"]
mod monitor_client_test;

use events::Event;

use crate::state::monitor::{MonitorEffect, MonitorState};

pub const INITIAL_BACKOFF_MS: u32 = 1000;
pub const MAX_BACKOFF_MS: u32 = 10_000;

/// Socket URL for the page at `href` served from `host`.
pub fn ws_url(href: &str, host: &str) -> String {
    let proto = if href.starts_with("https") { "wss" } else { "ws" };
    format!("{proto}://{host}/api/ws")
}

pub fn next_backoff(current_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(MAX_BACKOFF_MS)
}

/// Handshake finished: show the connection as live and restart the backoff.
pub fn mark_open(monitor: &mut MonitorState, backoff_ms: &mut u32) {
    monitor.set_connection(crate::state::monitor::ConnectionStatus::Connected);
    *backoff_ms = INITIAL_BACKOFF_MS;
}

/// Apply one decoded event to the monitor state.
pub fn route_event(monitor: &mut MonitorState, event: Event, now_ms: f64) -> MonitorEffect {
    match event {
        Event::Frame(frame) => {
            monitor.apply_frame(&frame);
            MonitorEffect::None
        }
        Event::MonitorData(data) => monitor.apply_monitor_data(data, now_ms),
    }
}

/// Spawn the connection loop as a local async task.
#[cfg(feature = "hydrate")]
pub fn spawn_monitor_client(monitor: leptos::prelude::RwSignal<MonitorState>) {
    leptos::task::spawn_local(monitor_client_loop(monitor));
}

#[cfg(feature = "hydrate")]
async fn monitor_client_loop(monitor: leptos::prelude::RwSignal<MonitorState>) {
    use leptos::prelude::*;

    use crate::state::monitor::ConnectionStatus;

    let mut backoff_ms = INITIAL_BACKOFF_MS;

    loop {
        monitor.update(|m| m.set_connection(ConnectionStatus::Connecting));

        let href = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:5000".to_owned());
        let url = ws_url(&href, &host);

        match connect_and_run(&url, monitor, &mut backoff_ms).await {
            Ok(()) => leptos::logging::log!("event socket closed"),
            Err(e) => leptos::logging::warn!("event socket error: {e}"),
        }

        monitor.update(|m| m.set_connection(ConnectionStatus::Disconnected));

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff(backoff_ms);
    }
}

/// Connect and process messages until the socket closes.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    monitor: leptos::prelude::RwSignal<MonitorState>,
    backoff_ms: &mut u32,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, State};
    use leptos::prelude::*;

    let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;

    // `open` returns while the handshake is still pending.
    loop {
        match ws.state() {
            State::Open => break,
            State::Connecting => gloo_timers::future::sleep(std::time::Duration::from_millis(50)).await,
            State::Closing | State::Closed => return Err("closed before open".to_owned()),
        }
    }
    monitor.update(|m| mark_open(m, backoff_ms));

    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => match events::decode_event(&text) {
                Ok(event) => {
                    let now = crate::util::clock::now_ms();
                    monitor.update(|m| {
                        route_event(m, event, now);
                    });
                }
                Err(e) => leptos::logging::warn!("dropping event: {e}"),
            },
            Ok(Message::Bytes(_)) => {}
            Err(e) => return Err(e.to_string()),
        }
    }
    Ok(())
}
