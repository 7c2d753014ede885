//! Wall-clock access for the browser.
//!
//! State modules take `now_ms` as an argument; only pages and the socket
//! client read the clock, through these helpers.

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// Milliseconds since the Unix epoch. Zero outside the browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Local timezone offset east of UTC, in minutes.
pub fn local_offset_minutes() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        // getTimezoneOffset is UTC minus local, so flip the sign.
        #[allow(clippy::cast_possible_truncation)]
        let offset = -(js_sys::Date::new_0().get_timezone_offset() as i32);
        offset
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// UTC instant for an epoch-millisecond timestamp.
pub fn datetime_from_ms(ms: f64) -> Option<OffsetDateTime> {
    #[allow(clippy::cast_possible_truncation)]
    let nanos = (ms * 1_000_000.0) as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
}

/// RFC 3339 UTC timestamp for an epoch-millisecond instant.
pub fn rfc3339_from_ms(ms: f64) -> String {
    datetime_from_ms(ms)
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .unwrap_or_default()
}

/// Parse an RFC 3339 timestamp and shift it to a fixed local offset.
pub fn parse_local(raw: &str, offset_minutes: i32) -> Option<OffsetDateTime> {
    let offset = UtcOffset::from_whole_seconds(offset_minutes.checked_mul(60)?).ok()?;
    Some(OffsetDateTime::parse(raw, &Rfc3339).ok()?.to_offset(offset))
}

/// `YYYY-MM-DD` key for a calendar date.
pub fn date_key(date: time::Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Today's `YYYY-MM-DD` in local time.
pub fn today_key() -> String {
    let offset = local_offset_minutes();
    datetime_from_ms(now_ms())
        .and_then(|dt| Some(dt.to_offset(UtcOffset::from_whole_seconds(offset * 60).ok()?)))
        .map(|dt| date_key(dt.date()))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;
