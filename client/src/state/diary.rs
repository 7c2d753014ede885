//! Per-day study diary, keyed by local `YYYY-MM-DD`.

#[cfg(test)]
#[path = "diary_test.rs"]
mod diary_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::util::storage;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiaryEntry {
    pub text: String,
    /// RFC 3339 timestamp of the last save.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiaryState {
    pub entries: BTreeMap<String, DiaryEntry>,
}

impl DiaryState {
    pub fn load() -> Self {
        Self { entries: storage::load_json(storage::DIARY_KEY).unwrap_or_default() }
    }

    pub fn save(&self) {
        storage::save_json(storage::DIARY_KEY, &self.entries);
    }

    pub fn get(&self, key: &str) -> Option<&DiaryEntry> {
        self.entries.get(key)
    }

    /// Markdown source for a day, empty when nothing was written.
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(|e| e.text.clone()).unwrap_or_default()
    }

    /// Store trimmed text for a day; blank text deletes the entry. Returns
    /// `true` when an entry remains.
    pub fn write(&mut self, key: &str, text: &str, updated_at: String) -> bool {
        let text = text.trim();
        if text.is_empty() {
            self.entries.remove(key);
            return false;
        }
        self.entries.insert(key.to_owned(), DiaryEntry { text: text.to_owned(), updated_at });
        true
    }

    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Days that have an entry, newest first.
    pub fn days(&self) -> Vec<String> {
        self.entries.keys().rev().cloned().collect()
    }
}
