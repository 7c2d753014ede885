//! Transient toast messages.
//!
//! DESIGN
//! ======
//! Toasts replace blocking `alert()` dialogs: the monitor page keeps running
//! while a message is on screen. The queue is bounded and each toast expires
//! on its own; the page ticker calls [`ToastState::expire`].

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

pub const TOAST_TTL_MS: f64 = 4000.0;
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Warning => "toast toast--warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub expires_at_ms: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id. The oldest toast is evicted when
    /// the queue is full.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now_ms: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into(), expires_at_ms: now_ms + TOAST_TTL_MS });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    /// Drop expired toasts. Returns whether anything was removed.
    pub fn expire(&mut self, now_ms: f64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.expires_at_ms > now_ms);
        self.items.len() != before
    }
}
