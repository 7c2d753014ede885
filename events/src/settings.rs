//! Detector settings exchanged over the REST control surface.
//!
//! Browsers post range-slider values, which arrive as strings (`"0.32"`), so
//! [`SettingsPatch`] accepts numbers in either form. Keys the detector does not
//! know are ignored rather than rejected.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::Mode;

/// Validation failure for [`MonitorSettings::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("ear_threshold must be a positive finite number, got {0}")]
    EarThreshold(f64),
    #[error("yaw_threshold must be within 0..=180, got {0}")]
    YawThreshold(i64),
    #[error("{field} must not be negative, got {value}")]
    NegativeDuration { field: &'static str, value: i64 },
}

/// Full detector configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonitorSettings {
    /// Eyes count as closed below this eye aspect ratio.
    pub ear_threshold: f64,
    /// Study mode: pitch below this counts as head down.
    pub pitch_head_down: i64,
    /// Homework mode: pitch above this counts as head up.
    pub pitch_head_up: i64,
    /// Absolute yaw above this counts as a turned head.
    pub yaw_threshold: i64,
    /// Seconds of head-down before study mode flags a distraction.
    pub study_time: i64,
    /// Seconds of head-up before homework mode flags a distraction.
    pub homework_time: i64,
    /// Seconds of closed eyes before drowsiness is flagged.
    pub drowsy_time: i64,
    /// Seconds of turned head before a distraction is flagged.
    pub turn_time: i64,
    pub mode: Mode,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            ear_threshold: 0.35,
            pitch_head_down: 0,
            pitch_head_up: 2,
            yaw_threshold: 30,
            study_time: 120,
            homework_time: 120,
            drowsy_time: 30,
            turn_time: 30,
            mode: Mode::Study,
        }
    }
}

impl MonitorSettings {
    /// Overwrite the fields present in `patch`.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(v) = patch.ear_threshold {
            self.ear_threshold = v;
        }
        if let Some(v) = patch.pitch_head_down {
            self.pitch_head_down = v;
        }
        if let Some(v) = patch.pitch_head_up {
            self.pitch_head_up = v;
        }
        if let Some(v) = patch.yaw_threshold {
            self.yaw_threshold = v;
        }
        if let Some(v) = patch.study_time {
            self.study_time = v;
        }
        if let Some(v) = patch.homework_time {
            self.homework_time = v;
        }
        if let Some(v) = patch.drowsy_time {
            self.drowsy_time = v;
        }
        if let Some(v) = patch.turn_time {
            self.turn_time = v;
        }
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
    }

    /// Check that every threshold is usable by the detector.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.ear_threshold.is_finite() || self.ear_threshold <= 0.0 {
            return Err(SettingsError::EarThreshold(self.ear_threshold));
        }
        if !(0..=180).contains(&self.yaw_threshold) {
            return Err(SettingsError::YawThreshold(self.yaw_threshold));
        }
        for (field, value) in [
            ("study_time", self.study_time),
            ("homework_time", self.homework_time),
            ("drowsy_time", self.drowsy_time),
            ("turn_time", self.turn_time),
        ] {
            if value < 0 {
                return Err(SettingsError::NegativeDuration { field, value });
            }
        }
        Ok(())
    }
}

/// Partial settings update posted to `/api/settings`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub ear_threshold: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub pitch_head_down: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub pitch_head_up: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub yaw_threshold: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub study_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub homework_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub drowsy_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub turn_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient_mode", skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

impl SettingsPatch {
    /// True when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Body of `POST /api/mode`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRequest {
    #[serde(default)]
    pub mode: Option<String>,
}

impl ModeRequest {
    /// Requested mode; a missing field means study mode.
    #[must_use]
    pub fn resolve(&self) -> Mode {
        self.mode.as_deref().map_or(Mode::Study, Mode::parse)
    }
}

/// Acknowledgement body returned by every control endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    pub status: String,
}

impl StatusReply {
    #[must_use]
    pub fn ok() -> Self {
        Self { status: "ok".to_owned() }
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("number out of range")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a number, got {s:?}"))),
        other => Err(D::Error::custom(format!("expected a number, got {other}"))),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = lenient_f64(deserializer)? else {
        return Ok(None);
    };
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(D::Error::custom(format!("expected an integer, got {value}")));
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(D::Error::custom(format!("integer {value} out of range")));
    }
    Ok(Some(value as i64))
}

fn lenient_mode<'de, D>(deserializer: D) -> Result<Option<Mode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|raw| Mode::parse(&raw)))
}
