//! Human-readable renderings for terminal tables.

use chrono::Duration;

/// `02h 25m`; negative spans get a leading `-`. Seconds are dropped.
pub fn duration2readable(d: Duration) -> String {
    let mins = d.num_minutes();
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

