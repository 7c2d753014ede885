//! Study session history: records, pagination, summary and the month heatmap.
//!
//! DESIGN
//! ======
//! Records are stored newest first as a JSON array and capped at
//! [`MAX_RECORDS`]. Everything the history page shows is derived from that
//! array on demand; nothing else is persisted.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::util::{clock, storage};

pub const MAX_RECORDS: usize = 100;
pub const PAGE_SIZE: usize = 10;

/// One finished monitoring session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRecord {
    /// RFC 3339 timestamp of when the session ended.
    pub date: String,
    /// Whole minutes.
    pub duration: u32,
    pub score: i64,
    pub pomodoros: u32,
    pub tasks: u32,
    pub distractions: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryState {
    pub records: Vec<SessionRecord>,
}

impl HistoryState {
    pub fn load() -> Self {
        Self { records: storage::load_json(storage::HISTORY_KEY).unwrap_or_default() }
    }

    pub fn save(&self) {
        storage::save_json(storage::HISTORY_KEY, &self.records);
    }

    pub fn clear(&mut self) {
        self.records.clear();
        storage::remove(storage::HISTORY_KEY);
    }
}

/// Prepend a record. Sessions shorter than a minute are dropped. Returns
/// whether the record was kept.
pub fn record_session(history: &mut Vec<SessionRecord>, record: SessionRecord) -> bool {
    if record.duration < 1 {
        return false;
    }
    history.insert(0, record);
    history.truncate(MAX_RECORDS);
    true
}

/// Load, prepend and persist in one step (used when leaving the monitor page).
pub fn persist_session(record: SessionRecord) -> bool {
    let mut history = HistoryState::load();
    let kept = record_session(&mut history.records, record);
    if kept {
        history.save();
    }
    kept
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page<'a> {
    pub items: &'a [SessionRecord],
    pub index: usize,
    pub total_pages: usize,
}

/// Slice of records for page `index`; out-of-range indexes clamp to the last page.
pub fn page(records: &[SessionRecord], index: usize, size: usize) -> Page<'_> {
    let size = size.max(1);
    let total_pages = records.len().div_ceil(size).max(1);
    let index = index.min(total_pages - 1);
    let start = (index * size).min(records.len());
    let end = (start + size).min(records.len());
    Page { items: &records[start..end], index, total_pages }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub sessions: usize,
    pub total_minutes: u64,
    pub pomodoros: u64,
    pub tasks: u64,
    pub distractions: u64,
    pub average_score: i64,
}

pub fn summarize(records: &[SessionRecord]) -> Summary {
    let mut summary = Summary { sessions: records.len(), ..Summary::default() };
    let mut score_total: i64 = 0;
    for r in records {
        summary.total_minutes += u64::from(r.duration);
        summary.pomodoros += u64::from(r.pomodoros);
        summary.tasks += u64::from(r.tasks);
        summary.distractions += u64::from(r.distractions);
        score_total += r.score;
    }
    if let Ok(count) = i64::try_from(records.len()) {
        if count > 0 {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let avg = (score_total as f64 / count as f64).round() as i64;
            summary.average_score = avg;
        }
    }
    summary
}

/// Heat level for a day's total minutes: 0 none, then <25, <60, <120, 120+.
pub fn heat_level(minutes: u32) -> u8 {
    match minutes {
        0 => 0,
        1..25 => 1,
        25..60 => 2,
        60..120 => 3,
        _ => 4,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub day: u8,
    pub key: String,
    pub minutes: u32,
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: Month,
    /// Empty cells before day 1 so weeks start on Sunday.
    pub leading_blanks: u8,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        format!("{}年{}月", self.year, u8::from(self.month))
    }
}

/// Total minutes per local `YYYY-MM-DD`. Unparsable dates are skipped.
pub fn minutes_by_day(records: &[SessionRecord], offset_minutes: i32) -> BTreeMap<String, u32> {
    let mut totals = BTreeMap::new();
    for r in records {
        let Some(local) = clock::parse_local(&r.date, offset_minutes) else {
            continue;
        };
        *totals.entry(clock::date_key(local.date())).or_insert(0) += r.duration;
    }
    totals
}

/// Records whose local date is `key`.
pub fn records_on<'a>(records: &'a [SessionRecord], key: &str, offset_minutes: i32) -> Vec<&'a SessionRecord> {
    records
        .iter()
        .filter(|r| {
            clock::parse_local(&r.date, offset_minutes).is_some_and(|local| clock::date_key(local.date()) == key)
        })
        .collect()
}

pub fn month_grid(records: &[SessionRecord], year: i32, month: Month, offset_minutes: i32) -> Option<MonthGrid> {
    let first = Date::from_calendar_date(year, month, 1).ok()?;
    let totals = minutes_by_day(records, offset_minutes);
    let days = (1..=time::util::days_in_year_month(year, month))
        .filter_map(|day| Date::from_calendar_date(year, month, day).ok())
        .map(|date| {
            let key = clock::date_key(date);
            let minutes = totals.get(&key).copied().unwrap_or(0);
            DayCell { day: date.day(), key, minutes, level: heat_level(minutes) }
        })
        .collect();
    Some(MonthGrid { year, month, leading_blanks: first.weekday().number_days_from_sunday(), days })
}

pub fn prev_month(year: i32, month: Month) -> (i32, Month) {
    if month == Month::January { (year - 1, Month::December) } else { (year, month.previous()) }
}

pub fn next_month(year: i32, month: Month) -> (i32, Month) {
    if month == Month::December { (year + 1, Month::January) } else { (year, month.next()) }
}

/// Local `(year, month)` of an epoch-millisecond instant.
pub fn current_month(now_ms: f64, offset_minutes: i32) -> (i32, Month) {
    clock::datetime_from_ms(now_ms)
        .and_then(|dt| Some(dt.to_offset(time::UtcOffset::from_whole_seconds(offset_minutes * 60).ok()?)))
        .map_or((1970, Month::January), |dt| (dt.year(), dt.month()))
}

/// Display form of a record's date: `YYYY-MM-DD HH:MM` in local time.
pub fn display_date(record: &SessionRecord, offset_minutes: i32) -> String {
    clock::parse_local(&record.date, offset_minutes).map_or_else(
        || record.date.clone(),
        |dt| format!("{} {:02}:{:02}", clock::date_key(dt.date()), dt.hour(), dt.minute()),
    )
}
