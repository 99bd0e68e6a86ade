use super::clock_event::{ClockEvent, EmployeeId};
use super::leave::PermissionKind;
use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};
use std::collections::BTreeMap;

/// A valid punch with its allowed window and punctuality outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEvent {
    pub event: ClockEvent,
    pub weekday: Weekday,
    pub allowed_start: NaiveDateTime,
    pub allowed_end: NaiveDateTime,
    pub is_late_start: bool,
    pub is_early_end: bool,
    pub late_time: Duration,
    pub early_time: Duration,
}

/// Lunch time for one employee/day and how much of it exceeds the limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunchOverage {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub interval: Duration,
    pub exceeding: Duration,
}

/// Sum of timing penalties for one employee over one pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctualitySummary {
    pub period_label: String,
    pub employee_id: EmployeeId,
    pub name: String,
    pub late_time: Duration,
    pub early_time: Duration,
    pub exceeding_lunch_time: Duration,
}

/// Leave totals for one employee over one pay period.
///
/// `days` holds every day-based kind except vacation; `times` holds every
/// time-based kind. Kinds without records are present with zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveSummary {
    pub period_label: String,
    pub employee_id: EmployeeId,
    pub name: String,
    pub vacation_days: i64,
    pub days: BTreeMap<PermissionKind, i64>,
    pub times: BTreeMap<PermissionKind, Duration>,
}

impl LeaveSummary {
    pub fn zeroed(period_label: &str, employee_id: EmployeeId, name: &str) -> Self {
        Self {
            period_label: period_label.to_string(),
            employee_id,
            name: name.to_string(),
            vacation_days: 0,
            days: PermissionKind::DAY_KINDS.iter().map(|k| (*k, 0)).collect(),
            times: PermissionKind::TIME_KINDS
                .iter()
                .map(|k| (*k, Duration::zero()))
                .collect(),
        }
    }

    pub fn day_total(&self, kind: PermissionKind) -> i64 {
        self.days.get(&kind).copied().unwrap_or(0)
    }

    pub fn time_total(&self, kind: PermissionKind) -> Duration {
        self.times.get(&kind).copied().unwrap_or_else(Duration::zero)
    }
}
