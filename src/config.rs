//! Host configuration parsed from environment variables.
//!
//! `main` calls [`Config::from_env`] after `dotenvy` has loaded any `.env`
//! file. Parsing goes through [`Config::from_lookup`] so tests can feed a map
//! instead of mutating the process environment.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STREAM_INTERVAL_MS: u64 = 40;
pub const DEFAULT_STREAM_IDLE_MS: u64 = 100;
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;
pub const DEFAULT_DETECTOR_REQUEST_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_DETECTOR_CONNECT_TIMEOUT_SECS: u64 = 2;

/// Where samples come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectorSource {
    /// External detection service at this base URL.
    Remote(String),
    /// JSONL recording replayed in a loop.
    Replay(PathBuf),
    /// No detector configured; the stream never yields samples.
    Idle,
}

/// Pacing of the capture loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamTiming {
    /// Delay after a sample was published.
    pub interval: Duration,
    /// Delay after an empty or failed capture.
    pub idle: Duration,
}

impl Default for StreamTiming {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_STREAM_INTERVAL_MS),
            idle: Duration::from_millis(DEFAULT_STREAM_IDLE_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub detector: DetectorSource,
    pub stream: StreamTiming,
    pub event_channel_capacity: usize,
    pub detector_timeouts: DetectorTimeouts,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST` (default `127.0.0.1`), `PORT` (default `5000`)
    /// - `DETECTOR_URL`: base URL of the detection service
    /// - `DETECTOR_REPLAY`: JSONL recording, used when `DETECTOR_URL` is absent
    /// - `STREAM_INTERVAL_MS` (40), `STREAM_IDLE_MS` (100)
    /// - `EVENT_CHANNEL_CAPACITY` (64)
    /// - `DETECTOR_REQUEST_TIMEOUT_SECS` (5), `DETECTOR_CONNECT_TIMEOUT_SECS` (2)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let detector = if let Some(url) = non_empty("DETECTOR_URL") {
            DetectorSource::Remote(url.trim_end_matches('/').to_owned())
        } else if let Some(path) = non_empty("DETECTOR_REPLAY") {
            DetectorSource::Replay(PathBuf::from(path))
        } else {
            DetectorSource::Idle
        };

        let stream = StreamTiming {
            interval: Duration::from_millis(parse_or(&lookup, "STREAM_INTERVAL_MS", DEFAULT_STREAM_INTERVAL_MS)),
            idle: Duration::from_millis(parse_or(&lookup, "STREAM_IDLE_MS", DEFAULT_STREAM_IDLE_MS)),
        };

        let detector_timeouts = DetectorTimeouts {
            request: Duration::from_secs(parse_or(
                &lookup,
                "DETECTOR_REQUEST_TIMEOUT_SECS",
                DEFAULT_DETECTOR_REQUEST_TIMEOUT_SECS,
            )),
            connect: Duration::from_secs(parse_or(
                &lookup,
                "DETECTOR_CONNECT_TIMEOUT_SECS",
                DEFAULT_DETECTOR_CONNECT_TIMEOUT_SECS,
            )),
        };

        Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            detector,
            stream,
            event_channel_capacity: parse_or(&lookup, "EVENT_CHANNEL_CAPACITY", DEFAULT_EVENT_CHANNEL_CAPACITY).max(1),
            detector_timeouts,
        }
    }

    /// `host:port` for the listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
