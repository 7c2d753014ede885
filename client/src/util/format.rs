//! Text formatting for live sensor readouts.

/// Degrees rounded to the nearest whole number, e.g. `-12°`.
pub fn degrees(value: f64) -> String {
    format!("{}°", round_i64(value))
}

/// Eye aspect ratio with three decimals.
pub fn ear(value: f64) -> String {
    format!("{value:.3}")
}

/// Compact pose readout for the pip panel: `P:12° Y:-3°`.
pub fn pose(pitch: f64, yaw: f64) -> String {
    format!("P:{}° Y:{}°", round_i64(pitch), round_i64(yaw))
}

/// Slider value with an optional unit suffix.
pub fn slider_value(value: &str, suffix: &str) -> String {
    format!("{value}{suffix}")
}

/// Signed score delta: `+25`, `-5`.
pub fn signed(points: i64) -> String {
    if points > 0 { format!("+{points}") } else { points.to_string() }
}

#[allow(clippy::cast_possible_truncation)]
fn round_i64(value: f64) -> i64 {
    if value.is_finite() { value.round() as i64 } else { 0 }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
