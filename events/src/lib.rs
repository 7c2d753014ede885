//! Shared wire schema for the focus monitor realtime stream.
//!
//! This crate owns the event envelope pushed from the host to browsers
//! (`frame`, `monitor_data`) and the settings payloads of the REST control
//! surface. Both `focus-monitor` (host) and `client` depend on it so the JSON
//! shape cannot drift between the two sides.
//!
//! WIRE FORMAT
//! ===========
//! One websocket text message carries one event:
//!
//! ```text
//! {"event": "frame",        "data": {"image": "<base64 jpeg>"}}
//! {"event": "monitor_data", "data": {"pitch": 3.5, "yaw": -1.0, ...}}
//! ```

mod settings;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use settings::{ModeRequest, MonitorSettings, SettingsError, SettingsPatch, StatusReply};

/// Error returned by [`decode_event`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text is not a well-formed event envelope.
    #[error("failed to decode event: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Monitoring posture the detector evaluates against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// Screen work: head up is normal, a long head-down spell is a distraction.
    #[default]
    Study,
    /// Desk work: head down is normal, a long head-up spell is a distraction.
    Homework,
}

impl Mode {
    /// Parse a mode name. Only `"STUDY"` selects study mode; anything else is homework.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "STUDY" { Self::Study } else { Self::Homework }
    }

    /// Wire name (`"STUDY"` / `"HOMEWORK"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Study => "STUDY",
            Self::Homework => "HOMEWORK",
        }
    }

    /// Badge text shown in the page header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Study => "📖 学习模式",
            Self::Homework => "✍️ 作业模式",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escalation level reported with each `monitor_data` sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertLevel {
    #[default]
    None,
    Gentle,
    Warning,
    Critical,
}

impl AlertLevel {
    /// Map the numeric wire level; anything at or above 3 is critical.
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Self::None,
            1 => Self::Gentle,
            2 => Self::Warning,
            _ => Self::Critical,
        }
    }

    /// Numeric wire level.
    #[must_use]
    pub fn as_level(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Gentle => 1,
            Self::Warning => 2,
            Self::Critical => 3,
        }
    }
}

/// One running distraction timer (seconds).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTimer {
    pub elapsed: f64,
    pub threshold: f64,
}

/// Payload of the `monitor_data` event.
///
/// Every field defaults so partial payloads from older detector builds still decode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorData {
    /// Head pitch in degrees (negative is head down).
    pub pitch: f64,
    /// Head yaw in degrees.
    pub yaw: f64,
    /// Head roll in degrees.
    pub roll: f64,
    /// Smoothed eye aspect ratio.
    pub ear: f64,
    pub face_detected: bool,
    /// Whether the per-user EAR baseline has been collected.
    pub calibrated: bool,
    /// Calibration progress in percent.
    pub calibration_progress: f64,
    pub is_distracted: bool,
    pub distraction_reason: String,
    /// Numeric [`AlertLevel`].
    pub alert_level: u8,
    pub mode: Mode,
    /// Distraction episodes acknowledged this detector session.
    pub distraction_count: u32,
    /// Detector session clock, `H:MM:SS`.
    pub session_duration: String,
    pub blink_count: u32,
    /// Running timers keyed by kind (`drowsy`, `turn`, `head_down`, `head_up`).
    pub timers: BTreeMap<String, PhaseTimer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ear_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch_down_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch_up_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaw_threshold: Option<f64>,
}

impl MonitorData {
    /// Typed view of [`MonitorData::alert_level`].
    #[must_use]
    pub fn alert(&self) -> AlertLevel {
        AlertLevel::from_level(self.alert_level)
    }
}

/// Payload of the `frame` event: one JPEG camera frame, base64 encoded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFrame {
    pub image: String,
}

impl VideoFrame {
    /// `data:` URL suitable for an `<img src>`.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.image)
    }
}

/// One detector output: the camera frame and the analysis computed from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub image: String,
    #[serde(default)]
    pub monitor_data: MonitorData,
}

impl Sample {
    /// Split into the two events published for this sample, frame first.
    #[must_use]
    pub fn into_events(self) -> [Event; 2] {
        [
            Event::Frame(VideoFrame { image: self.image }),
            Event::MonitorData(self.monitor_data),
        ]
    }
}

/// A single message on the realtime stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Event {
    Frame(VideoFrame),
    MonitorData(MonitorData),
}

impl Event {
    /// Wire name of the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Frame(_) => "frame",
            Self::MonitorData(_) => "monitor_data",
        }
    }
}

/// Encode an event as a websocket text payload.
#[must_use]
pub fn encode_event(event: &Event) -> String {
    // Every field is a string, number, bool or map with string keys, so
    // serialization cannot fail.
    serde_json::to_string(event).unwrap_or_default()
}

/// Decode a websocket text payload into an event.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON, unknown event names, or
/// payloads with the wrong shape.
pub fn decode_event(text: &str) -> Result<Event, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
