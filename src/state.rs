//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the detector, the authoritative settings with their push guard,
//! the stream controller and a count of connected websocket clients.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use events::MonitorSettings;
use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::detector::Detector;
use crate::services::stream::StreamController;

/// Shared application state. Clone is required by Axum; all inner fields
/// are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn Detector>,
    pub settings: Arc<RwLock<MonitorSettings>>,
    /// Held from settings commit until the detector push returns, so pushes
    /// reach the detector in commit order.
    pub settings_push: Arc<Mutex<()>>,
    pub stream: StreamController,
    pub clients: Arc<AtomicUsize>,
}

impl AppState {
    #[must_use]
    pub fn new(detector: Arc<dyn Detector>, config: &Config) -> Self {
        Self {
            detector,
            settings: Arc::new(RwLock::new(MonitorSettings::default())),
            settings_push: Arc::new(Mutex::new(())),
            stream: StreamController::new(config.stream, config.event_channel_capacity),
            clients: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[must_use]
    pub fn client_count(&self) -> usize {
        self.clients.load(Ordering::SeqCst)
    }
}
