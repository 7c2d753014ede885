//! Replay adapter: loops over a recorded JSONL session.
//!
//! Each non-blank line is one `Sample`. Rows are emitted in order and the
//! cursor wraps at the end, so a short recording drives the UI indefinitely.
//! Acknowledging a distraction behaves like the live detector: the flag is
//! cleared until the recording itself leaves the distracted state, and the
//! episode counter goes up by one.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use events::{Mode, MonitorSettings, Sample};

use super::{Detector, DetectorError};

#[derive(Debug, Default)]
struct Cursor {
    next: usize,
    mode: Mode,
    masked: bool,
    acknowledged: u32,
}

pub struct ReplayDetector {
    rows: Vec<Sample>,
    cursor: Mutex<Cursor>,
}

impl ReplayDetector {
    /// Read and parse a recording from disk.
    ///
    /// # Errors
    ///
    /// Returns [`DetectorError::Io`] if the file cannot be read, and see
    /// [`ReplayDetector::from_jsonl`] for parse errors.
    pub async fn load(path: &Path) -> Result<Self, DetectorError> {
        let text = tokio::fs::read_to_string(path).await?;
        Self::from_jsonl(&text)
    }

    /// Parse a recording held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`DetectorError::Parse`] with the 1-based line number of the
    /// first malformed row, or [`DetectorError::Empty`] if no rows remain
    /// after skipping blank lines.
    pub fn from_jsonl(text: &str) -> Result<Self, DetectorError> {
        let mut rows = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let sample = serde_json::from_str::<Sample>(line)
                .map_err(|source| DetectorError::Parse { line: idx + 1, source })?;
            rows.push(sample);
        }
        if rows.is_empty() {
            return Err(DetectorError::Empty);
        }
        Ok(Self { rows, cursor: Mutex::new(Cursor::default()) })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cursor> {
        self.cursor.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl Detector for ReplayDetector {
    async fn capture(&self) -> Result<Option<Sample>, DetectorError> {
        let mut cursor = self.lock();
        let Some(row) = self.rows.get(cursor.next % self.rows.len()) else {
            return Ok(None);
        };
        cursor.next = (cursor.next + 1) % self.rows.len();

        let mut sample = row.clone();
        let data = &mut sample.monitor_data;
        if cursor.masked {
            if data.is_distracted {
                data.is_distracted = false;
                data.distraction_reason = String::new();
                data.alert_level = 0;
                data.timers.clear();
            } else {
                cursor.masked = false;
            }
        }
        data.mode = cursor.mode;
        data.distraction_count = cursor.acknowledged;
        Ok(Some(sample))
    }

    async fn configure(&self, settings: &MonitorSettings) -> Result<(), DetectorError> {
        self.lock().mode = settings.mode;
        Ok(())
    }

    async fn reset_distraction(&self) -> Result<(), DetectorError> {
        let mut cursor = self.lock();
        cursor.masked = true;
        cursor.acknowledged += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod tests;
