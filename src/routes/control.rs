//! Control routes: streaming, mode, settings and distraction acknowledgement.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use events::{Mode, ModeRequest, MonitorData, MonitorSettings, SettingsPatch, StatusReply};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::detector::DetectorError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub streaming: bool,
    pub mode: Mode,
    pub clients: usize,
    pub last: Option<MonitorData>,
}

/// `POST /api/start`: begin relaying detector samples.
pub async fn start(State(state): State<AppState>) -> Json<StatusReply> {
    state.stream.start(state.detector.clone());
    Json(StatusReply::ok())
}

/// `POST /api/stop`: stop the capture loop.
pub async fn stop(State(state): State<AppState>) -> Json<StatusReply> {
    state.stream.stop();
    Json(StatusReply::ok())
}

/// `POST /api/mode`: switch between study and homework mode.
pub async fn set_mode(State(state): State<AppState>, body: Bytes) -> Result<Json<StatusReply>, StatusCode> {
    let req: ModeRequest = parse_body(&body)?;
    let mode = req.resolve();
    let _push = state.settings_push.lock().await;
    let snapshot = {
        let mut settings = state.settings.write().await;
        settings.mode = mode;
        settings.clone()
    };
    info!(%mode, "mode changed");
    push_settings(&state, &snapshot).await;
    Ok(Json(StatusReply::ok()))
}

/// `GET /api/settings`: current detector settings.
pub async fn get_settings(State(state): State<AppState>) -> Json<MonitorSettings> {
    Json(state.settings.read().await.clone())
}

/// `POST /api/settings`: merge a partial update, validate, then push.
pub async fn update_settings(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatusReply>, StatusCode> {
    let patch: SettingsPatch = parse_body(&body)?;
    let _push = state.settings_push.lock().await;
    let snapshot = {
        let mut settings = state.settings.write().await;
        let mut next = settings.clone();
        next.apply(&patch);
        if let Err(e) = next.validate() {
            warn!(error = %e, "settings rejected");
            return Err(StatusCode::BAD_REQUEST);
        }
        *settings = next.clone();
        next
    };
    info!(mode = %snapshot.mode, ear = snapshot.ear_threshold, "settings updated");
    push_settings(&state, &snapshot).await;
    Ok(Json(StatusReply::ok()))
}

/// `POST /api/reset_distraction`: acknowledge the current episode.
pub async fn reset_distraction(State(state): State<AppState>) -> Result<Json<StatusReply>, StatusCode> {
    state
        .detector
        .reset_distraction()
        .await
        .map_err(detector_error_to_status)?;
    Ok(Json(StatusReply::ok()))
}

/// `GET /api/status`: stream state and the latest analysis.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let mode = state.settings.read().await.mode;
    Json(StatusResponse {
        streaming: state.stream.is_streaming(),
        mode,
        clients: state.client_count(),
        last: state.stream.last(),
    })
}

/// Local settings stay authoritative; a failed push is retried on the next change.
/// Callers hold `settings_push` across the commit and this call.
async fn push_settings(state: &AppState, settings: &MonitorSettings) {
    if let Err(e) = state.detector.configure(settings).await {
        warn!(error = %e, "detector settings push failed");
    }
}

/// Empty bodies decode as the type's default; malformed JSON is a 400.
fn parse_body<T>(body: &[u8]) -> Result<T, StatusCode>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "invalid request body");
        StatusCode::BAD_REQUEST
    })
}

pub(crate) fn detector_error_to_status(err: DetectorError) -> StatusCode {
    warn!(error = %err, "detector call failed");
    StatusCode::BAD_GATEWAY
}

#[cfg(test)]
#[path = "control_test.rs"]
mod tests;
