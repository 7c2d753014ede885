//! Score and per-session counters for the monitor page.
//!
//! DESIGN
//! ======
//! The score is the one value every widget touches: pomodoros and finished
//! tasks add to it, distractions take from it. It never drops below zero
//! and is persisted after every change. Lifetime totals are kept separately
//! under the stats key so they survive history trimming.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::state::history::SessionRecord;
use crate::util::{clock, storage};

pub const FOCUS_COMPLETE_POINTS: i64 = 25;
pub const TODO_COMPLETE_POINTS: i64 = 10;
pub const DISTRACTION_POINTS: i64 = -5;

/// Last score delta; `seq` changes on every update so the flash re-triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreChange {
    pub points: i64,
    pub seq: u64,
}

/// Running totals across all sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeStats {
    pub pomodoros: u32,
    pub tasks: u32,
    pub distractions: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub started_ms: f64,
    pub score: i64,
    pub distraction_count: u32,
    pub pomodoros: u32,
    pub tasks: u32,
    pub last_change: Option<ScoreChange>,
    pub lifetime: LifetimeStats,
    change_seq: u64,
}

impl SessionState {
    /// Fresh session starting at `now_ms`, with the persisted score.
    pub fn load(now_ms: f64) -> Self {
        Self {
            started_ms: now_ms,
            score: parse_score(storage::load_raw(storage::SCORE_KEY).as_deref()),
            lifetime: storage::load_json(storage::STATS_KEY).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Apply a score delta, clamped at zero, and persist it.
    pub fn add_score(&mut self, points: i64, reason: &str) -> ScoreChange {
        self.score = (self.score + points).max(0);
        self.change_seq += 1;
        let change = ScoreChange { points, seq: self.change_seq };
        self.last_change = Some(change);
        leptos::logging::log!("score {} ({reason})", crate::util::format::signed(points));
        storage::save_raw(storage::SCORE_KEY, &self.score.to_string());
        change
    }

    pub fn record_pomodoro(&mut self) -> ScoreChange {
        self.pomodoros += 1;
        self.lifetime.pomodoros += 1;
        self.save_stats();
        self.add_score(FOCUS_COMPLETE_POINTS, "完成番茄钟")
    }

    pub fn record_task(&mut self) -> ScoreChange {
        self.tasks += 1;
        self.lifetime.tasks += 1;
        self.save_stats();
        self.add_score(TODO_COMPLETE_POINTS, "完成任务")
    }

    pub fn record_distraction(&mut self) -> ScoreChange {
        self.distraction_count += 1;
        self.lifetime.distractions += 1;
        self.save_stats();
        self.add_score(DISTRACTION_POINTS, "走神扣分")
    }

    pub fn elapsed_secs(&self, now_ms: f64) -> u64 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let secs = ((now_ms - self.started_ms).max(0.0) / 1000.0).floor() as u64;
        secs
    }

    /// History entry for this session, or `None` when it lasted under a minute.
    pub fn to_record(&self, now_ms: f64) -> Option<SessionRecord> {
        let minutes = u32::try_from(self.elapsed_secs(now_ms) / 60).unwrap_or(u32::MAX);
        if minutes == 0 {
            return None;
        }
        Some(SessionRecord {
            date: clock::rfc3339_from_ms(now_ms),
            duration: minutes,
            score: self.score,
            pomodoros: self.pomodoros,
            tasks: self.tasks,
            distractions: self.distraction_count,
        })
    }

    fn save_stats(&self) {
        storage::save_json(storage::STATS_KEY, &self.lifetime);
    }
}

/// Stored score; anything unparsable or negative reads as zero.
pub fn parse_score(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(0).max(0)
}

/// Session clock: `HH:MM:SS`, zero-padded.
pub fn format_clock(elapsed_secs: u64) -> String {
    let hours = elapsed_secs / 3600;
    let minutes = (elapsed_secs % 3600) / 60;
    let seconds = elapsed_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
