//! Start page state: mode selection and the detector settings modal.
//!
//! DESIGN
//! ======
//! Slider values are kept as the strings the range inputs report, so the
//! readout next to each slider shows exactly what will be posted. The patch
//! is built by handing those strings to [`SettingsPatch`]'s lenient decoder,
//! the same path the host uses for form-style bodies.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use events::{Mode, MonitorSettings, SettingsPatch};

use crate::util::storage;

/// One range input in the settings modal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    /// Settings field name, also the JSON key.
    pub field: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub suffix: &'static str,
}

pub const SLIDERS: [SliderSpec; 8] = [
    SliderSpec { field: "ear_threshold", label: "闭眼阈值 (EAR)", min: 0.15, max: 0.45, step: 0.01, suffix: "" },
    SliderSpec { field: "pitch_head_down", label: "低头角度", min: -40.0, max: 20.0, step: 1.0, suffix: "°" },
    SliderSpec { field: "pitch_head_up", label: "抬头角度", min: -20.0, max: 40.0, step: 1.0, suffix: "°" },
    SliderSpec { field: "yaw_threshold", label: "转头角度", min: 10.0, max: 90.0, step: 1.0, suffix: "°" },
    SliderSpec { field: "study_time", label: "学习模式低头时长", min: 10.0, max: 600.0, step: 10.0, suffix: " 秒" },
    SliderSpec { field: "homework_time", label: "作业模式抬头时长", min: 10.0, max: 600.0, step: 10.0, suffix: " 秒" },
    SliderSpec { field: "drowsy_time", label: "闭眼时长", min: 5.0, max: 120.0, step: 5.0, suffix: " 秒" },
    SliderSpec { field: "turn_time", label: "转头时长", min: 5.0, max: 120.0, step: 5.0, suffix: " 秒" },
];

/// Current slider values, one per entry of [`SLIDERS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsDraft {
    values: Vec<String>,
}

impl Default for SettingsDraft {
    fn default() -> Self {
        Self::from_settings(&MonitorSettings::default())
    }
}

impl SettingsDraft {
    pub fn from_settings(settings: &MonitorSettings) -> Self {
        let values = SLIDERS
            .iter()
            .map(|slider| match slider.field {
                "ear_threshold" => format!("{:.2}", settings.ear_threshold),
                "pitch_head_down" => settings.pitch_head_down.to_string(),
                "pitch_head_up" => settings.pitch_head_up.to_string(),
                "yaw_threshold" => settings.yaw_threshold.to_string(),
                "study_time" => settings.study_time.to_string(),
                "homework_time" => settings.homework_time.to_string(),
                "drowsy_time" => settings.drowsy_time.to_string(),
                "turn_time" => settings.turn_time.to_string(),
                _ => String::new(),
            })
            .collect();
        Self { values }
    }

    pub fn value(&self, field: &str) -> String {
        slider_index(field).and_then(|i| self.values.get(i)).cloned().unwrap_or_default()
    }

    /// Record an input event. Unknown fields are ignored.
    pub fn set(&mut self, field: &str, value: &str) {
        if let Some(slot) = slider_index(field).and_then(|i| self.values.get_mut(i)) {
            value.clone_into(slot);
        }
    }

    /// Readout text next to a slider, e.g. `30°`.
    pub fn display(&self, slider: &SliderSpec) -> String {
        crate::util::format::slider_value(&self.value(slider.field), slider.suffix)
    }

    /// Patch for `POST /api/settings`. `None` if a value does not parse.
    pub fn to_patch(&self) -> Option<SettingsPatch> {
        let body: serde_json::Map<String, serde_json::Value> = SLIDERS
            .iter()
            .zip(&self.values)
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(s, v)| (s.field.to_owned(), serde_json::Value::String(v.clone())))
            .collect();
        serde_json::from_value(serde_json::Value::Object(body)).ok()
    }
}

fn slider_index(field: &str) -> Option<usize> {
    SLIDERS.iter().position(|s| s.field == field)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartPageState {
    pub mode: Mode,
    pub settings_open: bool,
    pub draft: SettingsDraft,
    /// Last save/load failure shown inside the modal.
    pub error: Option<String>,
}

impl StartPageState {
    pub fn load() -> Self {
        Self { mode: load_mode(), ..Self::default() }
    }

    /// Pick a mode card; the choice is remembered for the monitor page.
    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
        storage::save_raw(storage::MODE_KEY, mode.as_str());
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
        self.error = None;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    pub fn mode_card_class(&self, mode: Mode) -> &'static str {
        if self.mode == mode { "mode-card active" } else { "mode-card" }
    }
}

/// Mode stored by the start page; study mode when absent.
pub fn load_mode() -> Mode {
    storage::load_raw(storage::MODE_KEY).map_or(Mode::Study, |raw| Mode::parse(raw.trim()))
}
