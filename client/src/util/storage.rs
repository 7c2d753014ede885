//! Browser `localStorage` helpers and the app's key namespace.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every widget persists through these helpers so pages never repeat
//! web-sys glue. Reads of missing or corrupt values return `None` and
//! callers fall back to their defaults. Outside the browser all reads miss
//! and all writes are dropped.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const SCORE_KEY: &str = "focus-monitor-score";
pub const STATS_KEY: &str = "focus-monitor-stats";
pub const TODOS_KEY: &str = "focus-monitor-todos";
pub const HISTORY_KEY: &str = "focus-monitor-history";
pub const PIP_STATE_KEY: &str = "focus-monitor-pip-state";
pub const DIARY_KEY: &str = "focus-monitor-diary";
pub const MODE_KEY: &str = "study-mode";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a plain string from `localStorage` for `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a plain string to `localStorage` for `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    decode_json(&load_raw(key)?)
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_raw(key, &raw);
}

/// Decode a stored JSON document, treating corruption as absence.
pub fn decode_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
