use super::*;
use std::sync::Arc;
use std::time::Duration;

use events::{Event, Sample, decode_event};
use futures::{SinkExt, StreamExt};
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message as WsMessage;

use crate::detector::{Detector, DetectorError};
use crate::routes::api_routes;
use crate::state::test_helpers;

struct FixedDetector;

#[async_trait::async_trait]
impl Detector for FixedDetector {
    async fn capture(&self) -> Result<Option<Sample>, DetectorError> {
        let mut sample = Sample { image: "cGl4ZWxz".into(), ..Sample::default() };
        sample.monitor_data.face_detected = true;
        Ok(Some(sample))
    }

    async fn configure(&self, _settings: &events::MonitorSettings) -> Result<(), DetectorError> {
        Ok(())
    }

    async fn reset_distraction(&self) -> Result<(), DetectorError> {
        Ok(())
    }
}

async fn spawn_app() -> (String, AppState) {
    let state = test_helpers::test_app_state(Arc::new(FixedDetector));
    let app = api_routes(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("ws://{addr}/api/ws"), state)
}

async fn wait_for_clients(state: &AppState, expected: usize) {
    timeout(Duration::from_millis(500), async {
        while state.client_count() != expected {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("client count did not settle");
}

async fn next_event<S>(ws: &mut S) -> Event
where
    S: futures::Stream<Item = Result<WsMessage, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    loop {
        let msg = timeout(Duration::from_millis(500), ws.next())
            .await
            .expect("event receive timed out")
            .expect("socket closed unexpectedly")
            .expect("socket error");
        if let WsMessage::Text(text) = msg {
            return decode_event(text.as_str()).expect("server should send valid events");
        }
    }
}

#[tokio::test]
async fn client_receives_frame_and_monitor_data() {
    let (url, state) = spawn_app().await;
    let (mut ws, _) = tokio_tungstenite::connect_async(&url).await.unwrap();
    wait_for_clients(&state, 1).await;

    state.stream.start(state.detector.clone());

    let mut saw_frame = false;
    let mut saw_data = false;
    for _ in 0..4 {
        match next_event(&mut ws).await {
            Event::Frame(frame) => {
                assert_eq!(frame.image, "cGl4ZWxz");
                saw_frame = true;
            }
            Event::MonitorData(data) => {
                assert!(data.face_detected);
                saw_data = true;
            }
        }
    }
    state.stream.stop();
    assert!(saw_frame && saw_data);
}

#[tokio::test]
async fn client_text_is_ignored() {
    let (url, state) = spawn_app().await;
    let (mut ws, _) = tokio_tungstenite::connect_async(&url).await.unwrap();
    wait_for_clients(&state, 1).await;

    ws.send(WsMessage::Text("hello".into())).await.unwrap();
    state.stream.start(state.detector.clone());
    let event = next_event(&mut ws).await;
    state.stream.stop();
    assert!(matches!(event, Event::Frame(_) | Event::MonitorData(_)));
    assert_eq!(state.client_count(), 1);
}

#[tokio::test]
async fn close_decrements_client_count() {
    let (url, state) = spawn_app().await;
    let (mut a, _) = tokio_tungstenite::connect_async(&url).await.unwrap();
    let (_b, _) = tokio_tungstenite::connect_async(&url).await.unwrap();
    wait_for_clients(&state, 2).await;

    a.close(None).await.unwrap();
    wait_for_clients(&state, 1).await;
}
