use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    Config::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_when_environment_is_empty() {
    let config = config_from(&[]);
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.detector, DetectorSource::Idle);
    assert_eq!(config.stream, StreamTiming::default());
    assert_eq!(config.event_channel_capacity, DEFAULT_EVENT_CHANNEL_CAPACITY);
    assert_eq!(config.detector_timeouts.request, Duration::from_secs(5));
    assert_eq!(config.detector_timeouts.connect, Duration::from_secs(2));
    assert_eq!(config.bind_addr(), "127.0.0.1:5000");
}

#[test]
fn detector_url_wins_over_replay() {
    let config = config_from(&[("DETECTOR_URL", "http://localhost:7000/"), ("DETECTOR_REPLAY", "rec.jsonl")]);
    assert_eq!(config.detector, DetectorSource::Remote("http://localhost:7000".to_owned()));
}

#[test]
fn replay_path_used_without_url() {
    let config = config_from(&[("DETECTOR_URL", "  "), ("DETECTOR_REPLAY", "fixtures/session.jsonl")]);
    assert_eq!(config.detector, DetectorSource::Replay(PathBuf::from("fixtures/session.jsonl")));
}

#[test]
fn numeric_overrides_parse_and_bad_values_fall_back() {
    let config = config_from(&[
        ("PORT", "8080"),
        ("STREAM_INTERVAL_MS", "25"),
        ("STREAM_IDLE_MS", "oops"),
        ("EVENT_CHANNEL_CAPACITY", "0"),
    ]);
    assert_eq!(config.port, 8080);
    assert_eq!(config.stream.interval, Duration::from_millis(25));
    assert_eq!(config.stream.idle, Duration::from_millis(DEFAULT_STREAM_IDLE_MS));
    assert_eq!(config.event_channel_capacity, 1);
}
