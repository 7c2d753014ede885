//! REST helpers for the detector control surface.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`; pages log or toast the message
//! and keep running. A stream that failed to start simply stays empty.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ModeRequest, MonitorSettings, SettingsPatch};
use events::Mode;

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn mode_request(mode: Mode) -> ModeRequest {
    ModeRequest { mode: Some(mode.as_str().to_owned()) }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn post_empty(url: &str, action: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(action, resp.status()));
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T, action: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(action, resp.status()));
    }
    Ok(())
}

/// Begin streaming detector output via `POST /api/start`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn start_stream() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty("/api/start", "start").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Stop streaming via `POST /api/stop`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn stop_stream() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty("/api/stop", "stop").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Select the monitoring mode via `POST /api/mode`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn set_mode(mode: Mode) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/mode", &mode_request(mode), "set mode").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
        unavailable()
    }
}

/// Fetch the detector settings from `GET /api/settings`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_settings() -> Result<MonitorSettings, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/settings")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("load settings", resp.status()));
        }
        resp.json::<MonitorSettings>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Send a settings patch via `POST /api/settings`.
///
/// # Errors
///
/// Returns an error string if the request fails or the host rejects the values.
pub async fn save_settings(patch: &SettingsPatch) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/settings", patch, "save settings").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = patch;
        unavailable()
    }
}

/// Tell the detector the current distraction was acknowledged.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn reset_distraction() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty("/api/reset_distraction", "reset distraction").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}
