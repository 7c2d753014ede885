//! HTTP adapter for a running detection service.
//!
//! Endpoints, relative to the configured base URL:
//! - `GET  /sample`            → 200 `Sample` JSON, 204 when no frame is ready
//! - `POST /settings`          ← full `MonitorSettings`
//! - `POST /reset_distraction`

use async_trait::async_trait;
use events::{MonitorSettings, Sample};
use reqwest::StatusCode;

use super::{Detector, DetectorError};
use crate::config::DetectorTimeouts;

pub struct RemoteDetector {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteDetector {
    /// # Errors
    ///
    /// Returns [`DetectorError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: DetectorTimeouts) -> Result<Self, DetectorError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

fn check_status(status: StatusCode) -> Result<(), DetectorError> {
    if status.is_success() { Ok(()) } else { Err(DetectorError::Status(status.as_u16())) }
}

#[async_trait]
impl Detector for RemoteDetector {
    async fn capture(&self) -> Result<Option<Sample>, DetectorError> {
        let resp = self.http.get(self.endpoint("sample")).send().await?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        check_status(resp.status())?;
        Ok(Some(resp.json::<Sample>().await?))
    }

    async fn configure(&self, settings: &MonitorSettings) -> Result<(), DetectorError> {
        let resp = self
            .http
            .post(self.endpoint("settings"))
            .json(settings)
            .send()
            .await?;
        check_status(resp.status())
    }

    async fn reset_distraction(&self) -> Result<(), DetectorError> {
        let resp = self.http.post(self.endpoint("reset_distraction")).send().await?;
        check_status(resp.status())
    }
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
