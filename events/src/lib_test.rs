use super::*;
use serde_json::json;

#[test]
fn mode_parse_treats_anything_but_study_as_homework() {
    assert_eq!(Mode::parse("STUDY"), Mode::Study);
    assert_eq!(Mode::parse("HOMEWORK"), Mode::Homework);
    assert_eq!(Mode::parse("study"), Mode::Homework);
    assert_eq!(Mode::parse(""), Mode::Homework);
}

#[test]
fn mode_serializes_as_uppercase_name() {
    assert_eq!(serde_json::to_value(Mode::Study).expect("serialize"), json!("STUDY"));
    assert_eq!(serde_json::to_value(Mode::Homework).expect("serialize"), json!("HOMEWORK"));
    assert_eq!(Mode::Homework.to_string(), "HOMEWORK");
}

#[test]
fn alert_level_saturates_at_critical() {
    assert_eq!(AlertLevel::from_level(0), AlertLevel::None);
    assert_eq!(AlertLevel::from_level(1), AlertLevel::Gentle);
    assert_eq!(AlertLevel::from_level(2), AlertLevel::Warning);
    assert_eq!(AlertLevel::from_level(3), AlertLevel::Critical);
    assert_eq!(AlertLevel::from_level(9), AlertLevel::Critical);
    assert_eq!(AlertLevel::Warning.as_level(), 2);
}

#[test]
fn frame_event_uses_envelope_shape() {
    let event = Event::Frame(VideoFrame { image: "QUJD".to_owned() });
    let value: serde_json::Value = serde_json::from_str(&encode_event(&event)).expect("json");
    assert_eq!(value, json!({ "event": "frame", "data": { "image": "QUJD" } }));
    assert_eq!(event.name(), "frame");
}

#[test]
fn monitor_data_decodes_partial_payload_with_defaults() {
    let text = r#"{"event":"monitor_data","data":{"pitch":-4.5,"face_detected":true,"is_distracted":true,"distraction_reason":"长时间低头","alert_level":3}}"#;
    let Event::MonitorData(data) = decode_event(text).expect("decode") else {
        panic!("expected monitor_data");
    };
    assert!((data.pitch + 4.5).abs() < f64::EPSILON);
    assert!(data.face_detected);
    assert!(data.is_distracted);
    assert_eq!(data.alert(), AlertLevel::Critical);
    assert_eq!(data.mode, Mode::Study);
    assert!(data.timers.is_empty());
    assert_eq!(data.ear_threshold, None);
}

#[test]
fn monitor_data_decodes_timers_map() {
    let text = r#"{"event":"monitor_data","data":{"timers":{"turn":{"elapsed":12.5,"threshold":30}}}}"#;
    let Event::MonitorData(data) = decode_event(text).expect("decode") else {
        panic!("expected monitor_data");
    };
    let turn = data.timers.get("turn").expect("turn timer");
    assert!((turn.elapsed - 12.5).abs() < f64::EPSILON);
    assert!((turn.threshold - 30.0).abs() < f64::EPSILON);
}

#[test]
fn decode_rejects_unknown_event_name() {
    assert!(decode_event(r#"{"event":"cursor","data":{}}"#).is_err());
    assert!(decode_event("not json").is_err());
}

#[test]
fn sample_splits_into_frame_then_monitor_data() {
    let sample = Sample {
        image: "AAAA".to_owned(),
        monitor_data: MonitorData { yaw: 12.0, ..MonitorData::default() },
    };
    let [first, second] = sample.into_events();
    assert_eq!(first, Event::Frame(VideoFrame { image: "AAAA".to_owned() }));
    assert!(matches!(second, Event::MonitorData(ref d) if (d.yaw - 12.0).abs() < f64::EPSILON));
}

#[test]
fn video_frame_data_url_prefixes_jpeg_mime() {
    let frame = VideoFrame { image: "xyz".to_owned() };
    assert_eq!(frame.data_url(), "data:image/jpeg;base64,xyz");
}

// =============================================================
// Settings
// =============================================================

#[test]
fn settings_defaults_match_detector_defaults() {
    let settings = MonitorSettings::default();
    assert!((settings.ear_threshold - 0.35).abs() < f64::EPSILON);
    assert_eq!(settings.pitch_head_down, 0);
    assert_eq!(settings.pitch_head_up, 2);
    assert_eq!(settings.yaw_threshold, 30);
    assert_eq!(settings.study_time, 120);
    assert_eq!(settings.homework_time, 120);
    assert_eq!(settings.drowsy_time, 30);
    assert_eq!(settings.turn_time, 30);
    assert_eq!(settings.mode, Mode::Study);
    assert!(settings.validate().is_ok());
}

#[test]
fn patch_accepts_numeric_strings_from_sliders() {
    let patch: SettingsPatch =
        serde_json::from_value(json!({ "ear_threshold": "0.28", "pitch_head_down": "-10", "study_time": 90 }))
            .expect("patch");
    assert_eq!(patch.ear_threshold, Some(0.28));
    assert_eq!(patch.pitch_head_down, Some(-10));
    assert_eq!(patch.study_time, Some(90));
    assert_eq!(patch.yaw_threshold, None);
}

#[test]
fn patch_ignores_unknown_keys() {
    let patch: SettingsPatch =
        serde_json::from_value(json!({ "pitch_extreme_low": "-20", "turn_time": 45.0 })).expect("patch");
    assert_eq!(patch.turn_time, Some(45));
    assert_eq!(patch, SettingsPatch { turn_time: Some(45), ..SettingsPatch::default() });
}

#[test]
fn patch_rejects_fractional_integer_fields() {
    let result = serde_json::from_value::<SettingsPatch>(json!({ "yaw_threshold": "30.5" }));
    assert!(result.is_err());
}

#[test]
fn patch_rejects_non_numeric_strings() {
    let result = serde_json::from_value::<SettingsPatch>(json!({ "ear_threshold": "abc" }));
    assert!(result.is_err());
}

#[test]
fn patch_mode_uses_lenient_parse() {
    let patch: SettingsPatch = serde_json::from_value(json!({ "mode": "anything" })).expect("patch");
    assert_eq!(patch.mode, Some(Mode::Homework));
}

#[test]
fn apply_overwrites_only_present_fields() {
    let mut settings = MonitorSettings::default();
    settings.apply(&SettingsPatch {
        yaw_threshold: Some(45),
        mode: Some(Mode::Homework),
        ..SettingsPatch::default()
    });
    assert_eq!(settings.yaw_threshold, 45);
    assert_eq!(settings.mode, Mode::Homework);
    assert_eq!(settings.turn_time, 30);
    assert!((settings.ear_threshold - 0.35).abs() < f64::EPSILON);
}

#[test]
fn validate_rejects_bad_thresholds() {
    let mut settings = MonitorSettings { ear_threshold: 0.0, ..MonitorSettings::default() };
    assert_eq!(settings.validate(), Err(SettingsError::EarThreshold(0.0)));

    settings = MonitorSettings { yaw_threshold: 200, ..MonitorSettings::default() };
    assert_eq!(settings.validate(), Err(SettingsError::YawThreshold(200)));

    settings = MonitorSettings { drowsy_time: -1, ..MonitorSettings::default() };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::NegativeDuration { field: "drowsy_time", value: -1 })
    );
}

#[test]
fn empty_patch_reports_empty() {
    assert!(SettingsPatch::default().is_empty());
    assert!(!SettingsPatch { drowsy_time: Some(1), ..SettingsPatch::default() }.is_empty());
}

#[test]
fn mode_request_defaults_to_study() {
    assert_eq!(ModeRequest::default().resolve(), Mode::Study);
    assert_eq!(ModeRequest { mode: Some("HOMEWORK".to_owned()) }.resolve(), Mode::Homework);
}

#[test]
fn status_reply_ok_shape() {
    assert_eq!(serde_json::to_value(StatusReply::ok()).expect("serialize"), json!({ "status": "ok" }));
}
