//! Wire types shared with the host, re-exported from the `events` crate.

pub use events::{AlertLevel, Event, Mode, ModeRequest, MonitorData, MonitorSettings, SettingsPatch, VideoFrame};
