use super::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode as AxumStatus;
use axum::routing::{get, post};

#[derive(Clone, Default)]
struct Stub {
    pending: Arc<Mutex<Vec<Sample>>>,
    settings: Arc<Mutex<Option<MonitorSettings>>>,
    resets: Arc<Mutex<u32>>,
    fail_reset: bool,
}

async fn sample(State(stub): State<Stub>) -> axum::response::Response {
    use axum::response::IntoResponse;
    let next = stub.pending.lock().unwrap().pop();
    match next {
        Some(sample) => axum::Json(sample).into_response(),
        None => AxumStatus::NO_CONTENT.into_response(),
    }
}

async fn settings(State(stub): State<Stub>, axum::Json(body): axum::Json<MonitorSettings>) -> AxumStatus {
    *stub.settings.lock().unwrap() = Some(body);
    AxumStatus::OK
}

async fn reset(State(stub): State<Stub>) -> AxumStatus {
    if stub.fail_reset {
        return AxumStatus::INTERNAL_SERVER_ERROR;
    }
    *stub.resets.lock().unwrap() += 1;
    AxumStatus::OK
}

async fn spawn_stub(stub: Stub) -> String {
    let app = Router::new()
        .route("/sample", get(sample))
        .route("/settings", post(settings))
        .route("/reset_distraction", post(reset))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

fn timeouts() -> DetectorTimeouts {
    DetectorTimeouts { request: Duration::from_secs(2), connect: Duration::from_secs(1) }
}

#[tokio::test]
async fn capture_returns_none_on_no_content() {
    let base = spawn_stub(Stub::default()).await;
    let detector = RemoteDetector::new(&base, timeouts()).unwrap();
    assert!(detector.capture().await.unwrap().is_none());
}

#[tokio::test]
async fn capture_decodes_sample() {
    let stub = Stub::default();
    let mut row = Sample { image: "Zm9v".into(), ..Sample::default() };
    row.monitor_data.face_detected = true;
    row.monitor_data.alert_level = 2;
    stub.pending.lock().unwrap().push(row.clone());

    let base = spawn_stub(stub).await;
    let detector = RemoteDetector::new(&base, timeouts()).unwrap();
    let got = detector.capture().await.unwrap().unwrap();
    assert_eq!(got, row);
}

#[tokio::test]
async fn configure_posts_full_settings() {
    let stub = Stub::default();
    let base = spawn_stub(stub.clone()).await;
    let detector = RemoteDetector::new(&base, timeouts()).unwrap();

    let pushed = MonitorSettings { yaw_threshold: 45, ..MonitorSettings::default() };
    detector.configure(&pushed).await.unwrap();
    assert_eq!(stub.settings.lock().unwrap().clone(), Some(pushed));
}

#[tokio::test]
async fn reset_maps_failure_status() {
    let ok = Stub::default();
    let base = spawn_stub(ok.clone()).await;
    RemoteDetector::new(&base, timeouts()).unwrap().reset_distraction().await.unwrap();
    assert_eq!(*ok.resets.lock().unwrap(), 1);

    let failing = Stub { fail_reset: true, ..Stub::default() };
    let base = spawn_stub(failing).await;
    let err = RemoteDetector::new(&base, timeouts()).unwrap().reset_distraction().await.unwrap_err();
    assert!(matches!(err, DetectorError::Status(500)));
}

#[tokio::test]
async fn unreachable_service_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let detector = RemoteDetector::new(&format!("http://{addr}"), timeouts()).unwrap();
    assert!(matches!(detector.capture().await, Err(DetectorError::Http(_))));
}
