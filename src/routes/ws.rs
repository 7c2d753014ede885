//! WebSocket handler: one-way event relay.
//!
//! DESIGN
//! ======
//! On upgrade, the connection subscribes to the stream's broadcast channel
//! and enters a `select!` loop:
//! - Broadcast events → forwarded as text messages
//! - Incoming client messages → ignored, except close
//!
//! A receiver that falls behind skips the dropped events and carries on
//! with the newest ones; video frames are only useful while fresh.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use std::sync::atomic::Ordering;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info};
use uuid::Uuid;

use crate::state::AppState;

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let mut rx = state.stream.subscribe();
    let clients = state.clients.fetch_add(1, Ordering::SeqCst) + 1;
    info!(%client_id, clients, "ws: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                if matches!(msg, Message::Close(_)) {
                    break;
                }
            }
            event = rx.recv() => {
                match event {
                    Ok(text) => {
                        if socket.send(Message::Text(text.as_ref().into())).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        debug!(%client_id, skipped, "ws: receiver lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    }

    let clients = state.clients.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
    info!(%client_id, clients, "ws: client disconnected");
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
