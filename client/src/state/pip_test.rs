use super::*;

const VIEWPORT: Size = Size { width: 1200.0, height: 800.0 };
const PANEL: Size = Size { width: 240.0, height: 200.0 };
const DOCK: PipPosition = PipPosition { left: 900.0, top: 500.0 };

#[test]
fn clamp_keeps_panel_inside_viewport() {
    assert_eq!(clamp_position(-50.0, 0.0, VIEWPORT, PANEL), PipPosition { left: 10.0, top: 70.0 });
    assert_eq!(clamp_position(5000.0, 5000.0, VIEWPORT, PANEL), PipPosition { left: 950.0, top: 590.0 });
    assert_eq!(clamp_position(300.0, 200.0, VIEWPORT, PANEL), PipPosition { left: 300.0, top: 200.0 });
}

#[test]
fn clamp_prefers_margins_in_tiny_viewports() {
    let tiny = Size { width: 100.0, height: 100.0 };
    assert_eq!(clamp_position(500.0, 500.0, tiny, PANEL), PipPosition { left: 10.0, top: 70.0 });
}

#[test]
fn dragging_a_docked_panel_detaches_it_in_place() {
    let mut pip = PipState::default();
    pip.begin_drag((910.0, 505.0), DOCK);
    assert!(!pip.docked);
    assert!(pip.dragging);
    assert_eq!(pip.position, Some(DOCK));
    assert_eq!(pip.offset, (10.0, 5.0));
}

#[test]
fn drag_moves_and_highlights_near_dock() {
    let mut pip = PipState::default();
    pip.begin_drag((910.0, 505.0), DOCK);

    pip.drag_to((410.0, 305.0), VIEWPORT, PANEL, DOCK);
    assert_eq!(pip.position, Some(PipPosition { left: 400.0, top: 300.0 }));
    assert!(!pip.dock_highlight);

    pip.drag_to((950.0, 545.0), VIEWPORT, PANEL, DOCK);
    assert!(pip.dock_highlight);
}

#[test]
fn release_far_from_dock_keeps_floating() {
    let mut pip = PipState::default();
    pip.begin_drag((910.0, 505.0), DOCK);
    pip.drag_to((210.0, 205.0), VIEWPORT, PANEL, DOCK);
    assert!(!pip.end_drag(DOCK));
    assert!(!pip.docked);
    assert!(!pip.dragging);
    assert_eq!(pip.position, Some(PipPosition { left: 200.0, top: 200.0 }));
    assert_eq!(pip.inline_style(), "left: 200px; top: 200px;");
}

#[test]
fn release_near_dock_snaps_back() {
    let mut pip = PipState::default();
    pip.begin_drag((910.0, 505.0), DOCK);
    pip.drag_to((960.0, 545.0), VIEWPORT, PANEL, DOCK);
    assert!(pip.end_drag(DOCK));
    assert!(pip.docked);
    assert!(!pip.dock_highlight);
    assert_eq!(pip.inline_style(), "");
}

#[test]
fn end_drag_without_drag_is_ignored() {
    let mut pip = PipState::default();
    assert!(!pip.end_drag(DOCK));
    assert!(pip.docked);
}

#[test]
fn toggle_dock_restores_saved_position() {
    let mut pip = PipState::default();
    pip.toggle_dock(DOCK);
    assert!(!pip.docked);
    assert_eq!(pip.position, Some(DOCK));

    pip.position = Some(PipPosition { left: 40.0, top: 90.0 });
    pip.toggle_dock(DOCK);
    assert!(pip.docked);
    pip.toggle_dock(DOCK);
    assert_eq!(pip.position, Some(PipPosition { left: 40.0, top: 90.0 }));
}

#[test]
fn resize_reclamps_only_floating_panels() {
    let mut pip = PipState { docked: false, position: Some(PipPosition { left: 900.0, top: 600.0 }), ..PipState::default() };
    let small = Size { width: 800.0, height: 600.0 };
    pip.on_resize(small, PANEL);
    assert_eq!(pip.position, Some(PipPosition { left: 550.0, top: 390.0 }));

    let mut docked = PipState { position: Some(PipPosition { left: 900.0, top: 600.0 }), ..PipState::default() };
    docked.on_resize(small, PANEL);
    assert_eq!(docked.position, Some(PipPosition { left: 900.0, top: 600.0 }));
}

#[test]
fn button_glyphs_follow_state() {
    let mut pip = PipState::default();
    assert_eq!((pip.dock_glyph(), pip.dock_title()), ("⇲", "分离窗口"));
    assert_eq!(pip.minimize_glyph(), "−");
    pip.toggle_minimized();
    assert_eq!(pip.minimize_glyph(), "+");
    pip.docked = false;
    assert_eq!((pip.dock_glyph(), pip.dock_title()), ("⇱", "停靠窗口"));
}

#[test]
fn stored_state_defaults_to_docked() {
    assert!(PipState::from_stored("{}").docked);
    assert!(PipState::from_stored("not json").docked);

    let floating = PipState::from_stored(r#"{"docked":false,"position":{"left":12.5,"top":80}}"#);
    assert!(!floating.docked);
    assert_eq!(floating.position, Some(PipPosition { left: 12.5, top: 80.0 }));
    assert!(!floating.minimized);
}
