use super::*;

#[test]
fn draft_mirrors_settings() {
    let draft = SettingsDraft::from_settings(&MonitorSettings::default());
    assert_eq!(draft.value("ear_threshold"), "0.35");
    assert_eq!(draft.value("yaw_threshold"), "30");
    assert_eq!(draft.value("study_time"), "120");
    assert_eq!(draft.value("nope"), "");
}

#[test]
fn display_appends_suffix() {
    let mut draft = SettingsDraft::default();
    draft.set("yaw_threshold", "45");
    assert_eq!(draft.display(&SLIDERS[3]), "45°");
    assert_eq!(draft.display(&SLIDERS[0]), "0.35");
}

#[test]
fn patch_parses_slider_strings() {
    let mut draft = SettingsDraft::default();
    draft.set("ear_threshold", "0.28");
    draft.set("pitch_head_down", "-12");
    let patch = draft.to_patch().expect("valid draft");
    assert_eq!(patch.ear_threshold, Some(0.28));
    assert_eq!(patch.pitch_head_down, Some(-12));
    assert_eq!(patch.turn_time, Some(30));
    assert_eq!(patch.mode, None);
}

#[test]
fn patch_rejects_garbage() {
    let mut draft = SettingsDraft::default();
    draft.set("yaw_threshold", "abc");
    assert!(draft.to_patch().is_none());
}

#[test]
fn unknown_field_is_ignored() {
    let mut draft = SettingsDraft::default();
    draft.set("pitch_extreme_low", "5");
    assert_eq!(draft, SettingsDraft::default());
}

#[test]
fn mode_cards_and_modal() {
    let mut page = StartPageState::default();
    assert_eq!(page.mode, Mode::Study);
    page.select_mode(Mode::Homework);
    assert_eq!(page.mode_card_class(Mode::Homework), "mode-card active");
    assert_eq!(page.mode_card_class(Mode::Study), "mode-card");

    page.error = Some("old".into());
    page.open_settings();
    assert!(page.settings_open);
    assert!(page.error.is_none());
    page.close_settings();
    assert!(!page.settings_open);
}

#[test]
fn stored_mode_defaults_to_study_without_browser() {
    assert_eq!(load_mode(), Mode::Study);
}
