//! Detector seam: the external pose/attention service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host never inspects camera pixels. Every sample (JPEG frame plus the
//! analysis computed from it) comes from a [`Detector`], and settings or
//! distraction acknowledgements are forwarded to it verbatim. Adapters:
//! - [`remote::RemoteDetector`]: HTTP client for a running detection service
//! - [`replay::ReplayDetector`]: loops over a recorded JSONL session
//! - [`IdleDetector`]: placeholder when nothing is configured

pub mod remote;
pub mod replay;

use std::sync::Arc;

use async_trait::async_trait;
use events::{MonitorSettings, Sample};
use tracing::{info, warn};

use crate::config::{DetectorSource, DetectorTimeouts};

#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("detector request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("detector responded with status {0}")]
    Status(u16),
    #[error("failed to read recording: {0}")]
    Io(#[from] std::io::Error),
    #[error("recording line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("recording has no samples")]
    Empty,
}

/// Source of monitoring samples.
#[async_trait]
pub trait Detector: Send + Sync {
    /// Next sample, or `None` when no camera frame is available yet.
    async fn capture(&self) -> Result<Option<Sample>, DetectorError>;

    /// Push thresholds and mode to the detector.
    async fn configure(&self, settings: &MonitorSettings) -> Result<(), DetectorError>;

    /// Acknowledge the current distraction episode.
    async fn reset_distraction(&self) -> Result<(), DetectorError>;
}

/// Detector used when no source is configured.
pub struct IdleDetector;

#[async_trait]
impl Detector for IdleDetector {
    async fn capture(&self) -> Result<Option<Sample>, DetectorError> {
        Ok(None)
    }

    async fn configure(&self, _settings: &MonitorSettings) -> Result<(), DetectorError> {
        Ok(())
    }

    async fn reset_distraction(&self) -> Result<(), DetectorError> {
        Ok(())
    }
}

/// Construct the configured detector.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the recording
/// cannot be read or parsed.
pub async fn build(source: &DetectorSource, timeouts: DetectorTimeouts) -> Result<Arc<dyn Detector>, DetectorError> {
    match source {
        DetectorSource::Remote(base_url) => {
            info!(%base_url, "detector: remote");
            Ok(Arc::new(remote::RemoteDetector::new(base_url, timeouts)?))
        }
        DetectorSource::Replay(path) => {
            let detector = replay::ReplayDetector::load(path).await?;
            info!(path = %path.display(), samples = detector.len(), "detector: replay");
            Ok(Arc::new(detector))
        }
        DetectorSource::Idle => {
            warn!("no DETECTOR_URL or DETECTOR_REPLAY configured; stream will stay empty");
            Ok(Arc::new(IdleDetector))
        }
    }
}
