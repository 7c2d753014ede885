//! Live monitoring state fed by the event socket.
//!
//! DESIGN
//! ======
//! Each `monitor_data` event updates the readouts and may start a
//! distraction episode. An episode is latched: only its first distracted
//! sample returns [`MonitorEffect::ShowDistraction`], so the penalty is
//! applied once per episode. The latch clears when the detector reports
//! focus again or the user acknowledges the overlay.
//!
//! After an acknowledgement, distracted samples are ignored for
//! [`ACK_GRACE_MS`]; a sample already in flight when the user clicked must
//! not open a second episode.
//!
//! The state lives as long as the socket, so the monitor page calls
//! [`MonitorState::begin_session`] on mount to drop a latch left over from
//! the settings preview or an earlier visit.

#[cfg(test)]
#[path = "monitor_test.rs"]
mod monitor_test;

use events::{AlertLevel, MonitorData};

use crate::util::format;

pub const ACK_GRACE_MS: f64 = 2000.0;
pub const DEFAULT_DISTRACTION_REASON: &str = "请保持专注";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionStatus {
    pub fn class(self) -> &'static str {
        match self {
            Self::Disconnected => "status-indicator status-indicator--offline",
            Self::Connecting => "status-indicator status-indicator--connecting",
            Self::Connected => "status-indicator status-indicator--online",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "未连接",
            Self::Connecting => "连接中",
            Self::Connected => "已连接",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FaceStatus {
    #[default]
    Unknown,
    Focused,
    Distracted,
    NotDetected,
}

impl FaceStatus {
    pub fn text(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Focused => "😊 专注中",
            Self::Distracted => "😴 走神了",
            Self::NotDetected => "❓ 未检测到",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Distracted | Self::NotDetected => "face-status warning",
            Self::Unknown | Self::Focused => "face-status",
        }
    }
}

/// What the page must do after a sample was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MonitorEffect {
    None,
    /// A new episode began: count it, apply the penalty, show the overlay.
    ShowDistraction(String),
    /// The user is focused again.
    HideDistraction,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonitorState {
    pub connection: ConnectionStatus,
    /// `data:` URL of the newest frame.
    pub latest_frame: Option<String>,
    pub data: Option<MonitorData>,
    pub face_status: FaceStatus,
    pub alert_level: AlertLevel,
    /// Reason shown on the distraction overlay while it is open.
    pub overlay: Option<String>,
    pub distraction_latched: bool,
    pub acked_at_ms: Option<f64>,
    /// Episodes started since the socket client was created. Pages compare
    /// it with the value they last saw, so coalesced updates are not lost.
    pub episodes: u64,
}

impl MonitorState {
    /// Forget any episode seen outside the monitor page, so the first
    /// distracted sample of a new session is scored.
    pub fn begin_session(&mut self) {
        self.overlay = None;
        self.distraction_latched = false;
        self.acked_at_ms = None;
    }

    pub fn set_connection(&mut self, status: ConnectionStatus) {
        self.connection = status;
    }

    pub fn apply_frame(&mut self, frame: &events::VideoFrame) {
        self.latest_frame = Some(frame.data_url());
    }

    pub fn apply_monitor_data(&mut self, data: MonitorData, now_ms: f64) -> MonitorEffect {
        self.alert_level = data.alert();
        let effect = if data.face_detected {
            if data.is_distracted {
                self.face_status = FaceStatus::Distracted;
                if self.distraction_latched || self.in_grace(now_ms) {
                    MonitorEffect::None
                } else {
                    self.distraction_latched = true;
                    self.episodes += 1;
                    let reason = if data.distraction_reason.trim().is_empty() {
                        DEFAULT_DISTRACTION_REASON.to_owned()
                    } else {
                        data.distraction_reason.clone()
                    };
                    self.overlay = Some(reason.clone());
                    MonitorEffect::ShowDistraction(reason)
                }
            } else {
                self.face_status = FaceStatus::Focused;
                let was_shown = self.distraction_latched || self.overlay.is_some();
                self.distraction_latched = false;
                self.overlay = None;
                if was_shown { MonitorEffect::HideDistraction } else { MonitorEffect::None }
            }
        } else {
            self.face_status = FaceStatus::NotDetected;
            MonitorEffect::None
        };
        self.data = Some(data);
        effect
    }

    /// "Back to focus" clicked on the overlay.
    pub fn acknowledge(&mut self, now_ms: f64) {
        self.overlay = None;
        self.distraction_latched = false;
        self.acked_at_ms = Some(now_ms);
    }

    fn in_grace(&self, now_ms: f64) -> bool {
        self.acked_at_ms.is_some_and(|at| now_ms - at < ACK_GRACE_MS)
    }

    /// Pose readout for the pip panel.
    pub fn pose_text(&self) -> String {
        self.data.as_ref().map_or_else(|| format::pose(0.0, 0.0), |d| format::pose(d.pitch, d.yaw))
    }

    /// Class list for the full-screen alert border.
    pub fn alert_border_class(&self) -> &'static str {
        alert_border_class(self.alert_level)
    }
}

pub fn alert_border_class(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::None => "alert-border",
        AlertLevel::Gentle => "alert-border gentle",
        AlertLevel::Warning => "alert-border warning",
        AlertLevel::Critical => "alert-border critical",
    }
}
