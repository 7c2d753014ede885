use super::*;

const RECORDING: &str = r#"
{"image":"AAA","monitor_data":{"face_detected":true,"is_distracted":false,"distraction_count":7}}

{"image":"BBB","monitor_data":{"face_detected":true,"is_distracted":true,"distraction_reason":"head down","alert_level":3,"timers":{"head_down":{"elapsed":130.0,"threshold":120.0}}}}
{"image":"CCC","monitor_data":{"face_detected":true,"is_distracted":true,"alert_level":3}}
{"image":"DDD","monitor_data":{"face_detected":true,"is_distracted":false}}
"#;

async fn next(detector: &ReplayDetector) -> Sample {
    detector.capture().await.unwrap().expect("replay should always yield a sample")
}

#[test]
fn blank_lines_are_skipped() {
    let detector = ReplayDetector::from_jsonl(RECORDING).unwrap();
    assert_eq!(detector.len(), 4);
    assert!(!detector.is_empty());
}

#[test]
fn malformed_line_reports_its_number() {
    let err = ReplayDetector::from_jsonl("{\"image\":\"A\"}\n\nnot json\n").err().unwrap();
    match err {
        DetectorError::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn empty_recording_is_rejected() {
    assert!(matches!(ReplayDetector::from_jsonl("\n  \n"), Err(DetectorError::Empty)));
}

#[tokio::test]
async fn rows_cycle_in_order() {
    let detector = ReplayDetector::from_jsonl(RECORDING).unwrap();
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(next(&detector).await.image);
    }
    assert_eq!(seen, ["AAA", "BBB", "CCC", "DDD", "AAA", "BBB"]);
}

#[tokio::test]
async fn configured_mode_is_stamped_on_every_row() {
    let detector = ReplayDetector::from_jsonl(RECORDING).unwrap();
    let settings = MonitorSettings { mode: Mode::Homework, ..MonitorSettings::default() };
    detector.configure(&settings).await.unwrap();

    for _ in 0..4 {
        assert_eq!(next(&detector).await.monitor_data.mode, Mode::Homework);
    }
}

#[tokio::test]
async fn reset_masks_distraction_until_recording_recovers() {
    let detector = ReplayDetector::from_jsonl(RECORDING).unwrap();

    let first = next(&detector).await;
    assert_eq!(first.monitor_data.distraction_count, 0);

    let distracted = next(&detector).await;
    assert!(distracted.monitor_data.is_distracted);
    assert_eq!(distracted.monitor_data.alert_level, 3);

    detector.reset_distraction().await.unwrap();

    let masked = next(&detector).await;
    assert_eq!(masked.image, "CCC");
    assert!(!masked.monitor_data.is_distracted);
    assert_eq!(masked.monitor_data.alert_level, 0);
    assert_eq!(masked.monitor_data.distraction_count, 1);

    let recovered = next(&detector).await;
    assert!(!recovered.monitor_data.is_distracted);

    next(&detector).await;
    let again = next(&detector).await;
    assert_eq!(again.image, "BBB");
    assert!(again.monitor_data.is_distracted, "mask ends once the recording leaves the distracted state");
    assert!(again.monitor_data.timers.contains_key("head_down"));
    assert_eq!(again.monitor_data.distraction_count, 1);
}

#[tokio::test]
async fn load_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("focus-monitor-replay-{}.jsonl", uuid::Uuid::new_v4()));
    tokio::fs::write(&path, RECORDING).await.unwrap();
    let detector = ReplayDetector::load(&path).await.unwrap();
    assert_eq!(detector.len(), 4);
    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("focus-monitor-replay-does-not-exist.jsonl");
    assert!(matches!(ReplayDetector::load(&path).await, Err(DetectorError::Io(_))));
}
