//! Time utilities: parsing HH:MM[:SS], duration text, formatting durations.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]` or a bare date (midnight).
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    crate::utils::date::parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Elapsed time since midnight.
pub fn since_midnight(t: NaiveTime) -> Duration {
    Duration::seconds(t.num_seconds_from_midnight() as i64)
}

/// Parse durations written as `1h59m`, `2h`, `45m`, `30s`, `1h0m59s` or `HH:MM`.
pub fn parse_duration(s: &str) -> AppResult<Duration> {
    let raw = s.trim().to_lowercase();
    let invalid = || AppError::InvalidDuration(s.to_string());

    if raw.is_empty() {
        return Err(invalid());
    }

    if let Some((h, m)) = raw.split_once(':') {
        let hours: i64 = h.parse().map_err(|_| invalid())?;
        let minutes: i64 = m.parse().map_err(|_| invalid())?;
        if !(0..60).contains(&minutes) {
            return Err(invalid());
        }
        return Duration::try_hours(hours)
            .and_then(|h| h.checked_add(&Duration::minutes(minutes)))
            .ok_or_else(invalid);
    }

    let mut total = Duration::zero();
    let mut digits = String::new();
    let mut saw_unit = false;

    for c in raw.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let value: i64 = digits.parse().map_err(|_| invalid())?;
        digits.clear();
        let part = match c {
            'h' => Duration::try_hours(value),
            'm' => Duration::try_minutes(value),
            's' => Duration::try_seconds(value),
            _ => return Err(invalid()),
        };
        total = part
            .and_then(|p| total.checked_add(&p))
            .ok_or_else(invalid)?;
        saw_unit = true;
    }

    if !digits.is_empty() || !saw_unit {
        return Err(invalid());
    }

    Ok(total)
}

/// `HH:MM:SS`, signed, hours unbounded.
pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}
