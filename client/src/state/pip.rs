//! Picture-in-picture video panel: docking, dragging and minimizing.
//!
//! DESIGN
//! ======
//! The panel lives in a dock slot in the page layout. Dragging its header
//! detaches it into a fixed-position floating window; releasing it within
//! [`DOCK_SNAP_DISTANCE`] of the dock slot snaps it back. All geometry is
//! passed in by the component (viewport, panel size, dock origin), so the
//! state machine here has no DOM access.
//!
//! Only `{docked, position}` is persisted; drag and minimize state are
//! per page view.

#[cfg(test)]
#[path = "pip_test.rs"]
mod pip_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

pub const DOCK_SNAP_DISTANCE: f64 = 80.0;
pub const EDGE_MARGIN: f64 = 10.0;
/// Keeps the floating panel below the page header.
pub const TOP_MARGIN: f64 = 70.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipPosition {
    pub left: f64,
    pub top: f64,
}

impl PipPosition {
    fn distance_to(self, other: PipPosition) -> f64 {
        (self.left - other.left).hypot(self.top - other.top)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PipState {
    pub docked: bool,
    pub position: Option<PipPosition>,
    pub dragging: bool,
    /// Pointer position relative to the panel's top-left corner.
    pub offset: (f64, f64),
    pub minimized: bool,
    pub dock_highlight: bool,
}

impl Default for PipState {
    fn default() -> Self {
        Self { docked: true, position: None, dragging: false, offset: (0.0, 0.0), minimized: false, dock_highlight: false }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedPip {
    #[serde(default = "docked_by_default")]
    docked: bool,
    #[serde(default)]
    position: Option<PipPosition>,
}

fn docked_by_default() -> bool {
    true
}

/// Keep a floating panel inside the viewport and below the header. When the
/// viewport is too small the top/left margins win.
pub fn clamp_position(left: f64, top: f64, viewport: Size, size: Size) -> PipPosition {
    let max_left = viewport.width - size.width - EDGE_MARGIN;
    let max_top = viewport.height - size.height - EDGE_MARGIN;
    PipPosition { left: left.min(max_left).max(EDGE_MARGIN), top: top.min(max_top).max(TOP_MARGIN) }
}

impl PipState {
    pub fn load() -> Self {
        storage::load_raw(storage::PIP_STATE_KEY)
            .map(|raw| Self::from_stored(&raw))
            .unwrap_or_default()
    }

    /// Restore from a stored document; anything corrupt means docked.
    pub fn from_stored(raw: &str) -> Self {
        match storage::decode_json::<PersistedPip>(raw) {
            Some(saved) => Self { docked: saved.docked, position: saved.position, ..Self::default() },
            None => Self::default(),
        }
    }

    pub fn save(&self) {
        storage::save_json(storage::PIP_STATE_KEY, &PersistedPip { docked: self.docked, position: self.position });
    }

    /// Pointer down on the header. A docked panel is detached in place.
    pub fn begin_drag(&mut self, pointer: (f64, f64), pip_rect: PipPosition) {
        if self.docked {
            self.position = Some(pip_rect);
            self.docked = false;
        }
        let origin = *self.position.get_or_insert(pip_rect);
        self.offset = (pointer.0 - origin.left, pointer.1 - origin.top);
        self.dragging = true;
    }

    /// Pointer move while dragging.
    pub fn drag_to(&mut self, pointer: (f64, f64), viewport: Size, size: Size, dock_origin: PipPosition) {
        if !self.dragging {
            return;
        }
        let next = clamp_position(pointer.0 - self.offset.0, pointer.1 - self.offset.1, viewport, size);
        self.position = Some(next);
        self.dock_highlight = next.distance_to(dock_origin) < DOCK_SNAP_DISTANCE;
    }

    /// Pointer up. Returns `true` if the panel snapped back into the dock.
    pub fn end_drag(&mut self, dock_origin: PipPosition) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        self.dock_highlight = false;
        let near_dock = self.position.is_some_and(|p| p.distance_to(dock_origin) < DOCK_SNAP_DISTANCE);
        if near_dock {
            self.dock();
        } else {
            self.save();
        }
        near_dock
    }

    pub fn dock(&mut self) {
        self.docked = true;
        self.save();
    }

    /// Detach to the last floating position, or over the dock slot.
    pub fn undock(&mut self, dock_origin: PipPosition) {
        self.docked = false;
        self.position.get_or_insert(dock_origin);
        self.save();
    }

    pub fn toggle_dock(&mut self, dock_origin: PipPosition) {
        if self.docked {
            self.undock(dock_origin);
        } else {
            self.dock();
        }
    }

    /// Re-clamp a floating panel after the window was resized.
    pub fn on_resize(&mut self, viewport: Size, size: Size) {
        if self.docked {
            return;
        }
        if let Some(p) = self.position {
            self.position = Some(clamp_position(p.left, p.top, viewport, size));
        }
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn dock_glyph(&self) -> &'static str {
        if self.docked { "⇲" } else { "⇱" }
    }

    pub fn dock_title(&self) -> &'static str {
        if self.docked { "分离窗口" } else { "停靠窗口" }
    }

    pub fn minimize_glyph(&self) -> &'static str {
        if self.minimized { "+" } else { "−" }
    }

    /// Inline style for the floating panel; empty when docked.
    pub fn inline_style(&self) -> String {
        match (self.docked, self.position) {
            (false, Some(p)) => format!("left: {}px; top: {}px;", p.left, p.top),
            _ => String::new(),
        }
    }
}
