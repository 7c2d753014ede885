use super::*;

#[test]
fn score_never_drops_below_zero() {
    let mut session = SessionState::default();
    session.add_score(3, "test");
    session.record_distraction();
    assert_eq!(session.score, 0);
    assert_eq!(session.distraction_count, 1);
}

#[test]
fn score_changes_carry_increasing_seq() {
    let mut session = SessionState::default();
    let a = session.record_pomodoro();
    let b = session.record_task();
    assert_eq!(a.points, FOCUS_COMPLETE_POINTS);
    assert_eq!(b.points, TODO_COMPLETE_POINTS);
    assert!(b.seq > a.seq);
    assert_eq!(session.last_change, Some(b));
    assert_eq!(session.score, 35);
}

#[test]
fn counters_track_session_and_lifetime() {
    let mut session = SessionState::default();
    session.lifetime.pomodoros = 10;
    session.record_pomodoro();
    session.record_task();
    session.record_task();
    session.record_distraction();
    assert_eq!((session.pomodoros, session.tasks, session.distraction_count), (1, 2, 1));
    assert_eq!(session.lifetime, LifetimeStats { pomodoros: 11, tasks: 2, distractions: 1 });
    assert_eq!(session.score, 25 + 20 - 5);
}

#[test]
fn parse_score_falls_back_to_zero() {
    assert_eq!(parse_score(Some("120")), 120);
    assert_eq!(parse_score(Some(" 7 ")), 7);
    assert_eq!(parse_score(Some("abc")), 0);
    assert_eq!(parse_score(Some("-4")), 0);
    assert_eq!(parse_score(None), 0);
}

#[test]
fn format_clock_pads_each_field() {
    assert_eq!(format_clock(0), "00:00:00");
    assert_eq!(format_clock(59), "00:00:59");
    assert_eq!(format_clock(3661), "01:01:01");
    assert_eq!(format_clock(36_000 + 59 * 60), "10:59:00");
}

#[test]
fn elapsed_is_floored_and_non_negative() {
    let session = SessionState { started_ms: 10_000.0, ..SessionState::default() };
    assert_eq!(session.elapsed_secs(12_999.0), 2);
    assert_eq!(session.elapsed_secs(5_000.0), 0);
}

#[test]
fn short_sessions_produce_no_record() {
    let mut session = SessionState { started_ms: 0.0, ..SessionState::default() };
    assert!(session.to_record(59_999.0).is_none());

    session.record_pomodoro();
    let record = session.to_record(120_000.0).unwrap();
    assert_eq!(record.duration, 2);
    assert_eq!(record.score, 25);
    assert_eq!(record.pomodoros, 1);
}

#[test]
fn load_outside_browser_starts_clean() {
    let session = SessionState::load(5.0);
    assert!((session.started_ms - 5.0).abs() < f64::EPSILON);
    assert_eq!(session.score, 0);
    assert_eq!(session.lifetime, LifetimeStats::default());
}
