use super::*;

#[test]
fn write_trims_and_blank_deletes() {
    let mut diary = DiaryState::default();
    assert!(diary.write("2026-03-01", "  # 今天\n学了 Rust  \n", "2026-03-01T12:00:00Z".into()));
    assert_eq!(diary.text("2026-03-01"), "# 今天\n学了 Rust");
    assert_eq!(diary.get("2026-03-01").map(|e| e.updated_at.as_str()), Some("2026-03-01T12:00:00Z"));

    assert!(!diary.write("2026-03-01", "   \n", "2026-03-01T13:00:00Z".into()));
    assert!(diary.get("2026-03-01").is_none());
    assert_eq!(diary.text("2026-03-01"), "");
}

#[test]
fn days_are_newest_first() {
    let mut diary = DiaryState::default();
    diary.write("2026-03-01", "a", String::new());
    diary.write("2026-03-10", "b", String::new());
    diary.write("2026-02-20", "c", String::new());
    assert_eq!(diary.days(), vec!["2026-03-10", "2026-03-01", "2026-02-20"]);
    assert!(diary.delete("2026-03-01"));
    assert!(!diary.delete("2026-03-01"));
}

#[test]
fn stored_shape_uses_camel_case_timestamp() {
    let mut diary = DiaryState::default();
    diary.write("2026-03-01", "x", "t".into());
    let json = serde_json::to_value(&diary.entries).expect("serializes");
    assert_eq!(json["2026-03-01"]["updatedAt"], "t");

    let back: BTreeMap<String, DiaryEntry> =
        serde_json::from_str(r#"{"2026-03-02":{"text":"y"}}"#).expect("partial entry");
    assert_eq!(back["2026-03-02"].updated_at, "");
}
