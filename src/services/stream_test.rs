use super::*;
use std::sync::atomic::AtomicUsize;
use std::time::Duration;

use async_trait::async_trait;
use events::{Event, MonitorSettings, decode_event};
use tokio::time::timeout;

use crate::detector::DetectorError;

/// Yields an endless run of samples, numbering the image of each one.
#[derive(Default)]
struct CountingDetector {
    captures: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl Detector for CountingDetector {
    async fn capture(&self) -> Result<Option<Sample>, DetectorError> {
        let n = self.captures.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DetectorError::Status(503));
        }
        let mut sample = Sample { image: format!("img-{n}"), ..Sample::default() };
        sample.monitor_data.blink_count = u32::try_from(n).unwrap_or(u32::MAX);
        Ok(Some(sample))
    }

    async fn configure(&self, _settings: &MonitorSettings) -> Result<(), DetectorError> {
        Ok(())
    }

    async fn reset_distraction(&self) -> Result<(), DetectorError> {
        Ok(())
    }
}

fn fast_timing() -> StreamTiming {
    StreamTiming { interval: Duration::from_millis(5), idle: Duration::from_millis(5) }
}

async fn recv_event(rx: &mut broadcast::Receiver<Arc<str>>) -> Event {
    let text = timeout(Duration::from_millis(500), rx.recv())
        .await
        .expect("event receive timed out")
        .expect("event channel closed unexpectedly");
    decode_event(&text).expect("published event should decode")
}

#[tokio::test]
async fn frame_is_published_before_monitor_data() {
    let stream = StreamController::new(fast_timing(), 16);
    let mut rx = stream.subscribe();
    assert!(stream.start(Arc::new(CountingDetector::default())));

    let first = recv_event(&mut rx).await;
    let second = recv_event(&mut rx).await;
    stream.stop();

    let Event::Frame(frame) = first else { panic!("expected frame first, got {first:?}") };
    let Event::MonitorData(data) = second else { panic!("expected monitor_data second, got {second:?}") };
    let n: u32 = frame.image.trim_start_matches("img-").parse().unwrap();
    assert_eq!(data.blink_count, n);
}

#[tokio::test]
async fn start_is_idempotent() {
    let stream = StreamController::new(fast_timing(), 16);
    let detector: Arc<dyn Detector> = Arc::new(CountingDetector::default());
    assert!(stream.start(Arc::clone(&detector)));
    assert!(!stream.start(detector));
    assert!(stream.is_streaming());
    stream.stop();
    assert!(!stream.is_streaming());
}

#[tokio::test]
async fn stop_ends_the_loop() {
    let stream = StreamController::new(fast_timing(), 16);
    let handle = stream.spawn(Arc::new(CountingDetector::default())).unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    stream.stop();
    timeout(Duration::from_millis(500), handle)
        .await
        .expect("loop should exit after stop")
        .unwrap();
}

#[tokio::test]
async fn restart_leaves_a_single_loop() {
    let stream = StreamController::new(fast_timing(), 16);
    let first = stream.spawn(Arc::new(CountingDetector::default())).unwrap();
    stream.stop();
    let second = stream.spawn(Arc::new(CountingDetector::default())).unwrap();

    timeout(Duration::from_millis(500), first)
        .await
        .expect("superseded loop should exit")
        .unwrap();
    assert!(!second.is_finished());
    assert!(stream.is_streaming());
    stream.stop();
}

#[tokio::test]
async fn last_tracks_latest_monitor_data() {
    let stream = StreamController::new(fast_timing(), 16);
    assert!(stream.last().is_none());
    let mut rx = stream.subscribe();
    stream.start(Arc::new(CountingDetector::default()));
    recv_event(&mut rx).await;
    recv_event(&mut rx).await;
    stream.stop();
    assert!(stream.last().is_some());
}

#[tokio::test]
async fn capture_errors_keep_the_loop_alive() {
    let detector = Arc::new(CountingDetector { fail: true, ..CountingDetector::default() });
    let stream = StreamController::new(fast_timing(), 16);
    let mut rx = stream.subscribe();
    stream.start(detector.clone());
    tokio::time::sleep(Duration::from_millis(60)).await;
    stream.stop();

    assert!(detector.captures.load(Ordering::SeqCst) >= 2);
    assert!(rx.try_recv().is_err());
    assert!(stream.last().is_none());
}
