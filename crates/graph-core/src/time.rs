// File: crates/graph-core/src/time.rs
// Summary: Timestamp parsing and formatting helpers for CSV time columns.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Shift a UTC epoch-millisecond timestamp into local wall time.
///
/// `offset_min` is the timezone offset in minutes behind UTC (positive west
/// of Greenwich, the JS `getTimezoneOffset` convention). Parameterized so a
/// long-lived session can re-query the offset across DST changes. Not wired
/// into the default pipeline; the X axis plots UTC.
pub fn utc_to_local(utc_ms: i64, offset_min: i32) -> i64 {
    utc_ms - i64::from(offset_min) * 60_000
}

/// Parse a CSV time cell into epoch seconds.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (taken as UTC), and raw epoch
/// seconds or milliseconds. Returns None for anything else; callers skip
/// such rows rather than fail.
pub fn parse_timestamp(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.timestamp_millis() as f64 / 1000.0);
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(t.and_utc().timestamp() as f64);
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) {
            return Some(n as f64 / 1000.0); // epoch ms -> sec
        }
        return Some(n as f64);
    }
    None
}

/// Format an X tick for display: clock time for short spans, month-day
/// once the visible range covers multiple days.
pub fn format_tick(epoch_sec: f64, span_sec: f64) -> String {
    match DateTime::<Utc>::from_timestamp(epoch_sec as i64, 0) {
        Some(dt) if span_sec >= 2.0 * 86_400.0 => dt.format("%m-%d").to_string(),
        Some(dt) => dt.format("%H:%M").to_string(),
        None => format!("{epoch_sec:.0}"),
    }
}
