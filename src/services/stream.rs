//! Stream service: the capture loop that relays detector samples.
//!
//! DESIGN
//! ======
//! A single background task pulls samples from the detector and publishes
//! each one as two encoded events (`frame`, then `monitor_data`) on a
//! broadcast channel. Every websocket connection holds its own receiver, so
//! one slow client never stalls the loop; it just lags and skips events.
//!
//! LIFECYCLE
//! =========
//! `start` flips the streaming flag and bumps an epoch counter before
//! spawning the loop. The loop exits as soon as the flag is cleared or the
//! epoch moves on, so a quick stop → start pair can never leave two loops
//! publishing at once.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use events::{MonitorData, Sample, encode_event};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::StreamTiming;
use crate::detector::Detector;

struct StreamInner {
    streaming: AtomicBool,
    epoch: AtomicU64,
    tx: broadcast::Sender<Arc<str>>,
    last: Mutex<Option<MonitorData>>,
    timing: StreamTiming,
}

/// Handle to the capture loop. Clones share the same loop and channel.
#[derive(Clone)]
pub struct StreamController {
    inner: Arc<StreamInner>,
}

impl StreamController {
    #[must_use]
    pub fn new(timing: StreamTiming, capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self {
            inner: Arc::new(StreamInner {
                streaming: AtomicBool::new(false),
                epoch: AtomicU64::new(0),
                tx,
                last: Mutex::new(None),
                timing,
            }),
        }
    }

    /// Start the capture loop. Returns `false` if a loop is already running.
    pub fn start(&self, detector: Arc<dyn Detector>) -> bool {
        self.spawn(detector).is_some()
    }

    /// Like [`StreamController::start`], but returns the loop handle.
    pub fn spawn(&self, detector: Arc<dyn Detector>) -> Option<JoinHandle<()>> {
        if self.inner.streaming.swap(true, Ordering::SeqCst) {
            return None;
        }
        let epoch = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        info!(epoch, "stream: started");
        let inner = Arc::clone(&self.inner);
        Some(tokio::spawn(run_loop(inner, detector, epoch)))
    }

    /// Stop the capture loop. The running loop exits at its next check.
    pub fn stop(&self) {
        if self.inner.streaming.swap(false, Ordering::SeqCst) {
            info!("stream: stopped");
        }
    }

    #[must_use]
    pub fn is_streaming(&self) -> bool {
        self.inner.streaming.load(Ordering::SeqCst)
    }

    /// New receiver for encoded events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<str>> {
        self.inner.tx.subscribe()
    }

    /// Most recent analysis published by the loop.
    #[must_use]
    pub fn last(&self) -> Option<MonitorData> {
        self.inner.last.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl StreamInner {
    fn is_current(&self, epoch: u64) -> bool {
        self.streaming.load(Ordering::SeqCst) && self.epoch.load(Ordering::SeqCst) == epoch
    }

    fn publish(&self, sample: Sample) {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(sample.monitor_data.clone());
        for event in sample.into_events() {
            // No subscribers is fine; the next client picks up from the next sample.
            let _ = self.tx.send(Arc::from(encode_event(&event)));
        }
    }
}

async fn run_loop(inner: Arc<StreamInner>, detector: Arc<dyn Detector>, epoch: u64) {
    while inner.is_current(epoch) {
        let delay = match detector.capture().await {
            Ok(Some(sample)) => {
                if !inner.is_current(epoch) {
                    break;
                }
                inner.publish(sample);
                inner.timing.interval
            }
            Ok(None) => inner.timing.idle,
            Err(e) => {
                warn!(error = %e, "stream: capture failed");
                inner.timing.idle
            }
        };
        tokio::time::sleep(delay).await;
    }
    debug!(epoch, "stream: loop exited");
}

#[cfg(test)]
#[path = "stream_test.rs"]
mod tests;
