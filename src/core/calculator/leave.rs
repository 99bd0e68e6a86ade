//! Day and time accounting for leave records over pay periods.

use crate::core::context::NameRegistry;
use crate::models::calendar::{HolidayCalendar, RestDayCalendar};
use crate::models::leave::{LeaveRecord, PermissionCategory, PermissionKind};
use crate::models::metrics::LeaveSummary;
use crate::models::period::PayPeriodSchema;
use crate::models::EmployeeId;
use chrono::{Datelike, Duration, NaiveTime};
use std::collections::HashMap;

/// Amount a single record contributes to its permission total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveAmount {
    Days(i64),
    Time(Duration),
}

impl PermissionCategory {
    /// Days: inclusive calendar days minus rest days (holidays stay in).
    /// Time: raw elapsed time between start and end.
    pub fn aggregate(&self, record: &LeaveRecord, rest: &RestDayCalendar) -> LeaveAmount {
        match self {
            PermissionCategory::Days => {
                LeaveAmount::Days(record.total_days() - count_rest_days(record, rest))
            }
            PermissionCategory::Time => LeaveAmount::Time(record.end - record.start),
        }
    }
}

pub fn count_rest_days(record: &LeaveRecord, rest: &RestDayCalendar) -> i64 {
    record
        .days()
        .filter(|d| rest.is_rest_day(record.employee_id, d.weekday()))
        .count() as i64
}

pub fn count_holidays(record: &LeaveRecord, holidays: &HolidayCalendar) -> i64 {
    record.days().filter(|d| holidays.contains(*d)).count() as i64
}

/// Vacation days: total − rest days − holidays. `None` for other kinds.
pub fn count_vacation_days(
    record: &LeaveRecord,
    rest: &RestDayCalendar,
    holidays: &HolidayCalendar,
) -> Option<i64> {
    if record.kind != PermissionKind::Vacation {
        return None;
    }
    Some(record.total_days() - count_rest_days(record, rest) - count_holidays(record, holidays))
}

/// A record belongs to a period if it starts or ends inside it, or spans it.
pub fn overlaps(record: &LeaveRecord, schema: &PayPeriodSchema) -> bool {
    let (start, end) = (record.start_date(), record.end_date());
    schema.contains(start)
        || schema.contains(end)
        || (start < schema.start_date && end > schema.end_date)
}

/// Truncate the record to the period. An early start becomes the period's
/// first day at midnight. A late end becomes the period's last day at
/// midnight for day kinds (whole dates are counted) and the midnight closing
/// that day for time kinds, so elapsed time never goes negative.
pub fn clip_to_period(record: &LeaveRecord, schema: &PayPeriodSchema) -> LeaveRecord {
    let mut clipped = record.clone();
    if record.start_date() < schema.start_date {
        clipped.start = schema.start_date.and_time(NaiveTime::MIN);
    }
    if record.end_date() > schema.end_date {
        let last = match record.kind.category() {
            PermissionCategory::Days => schema.end_date,
            PermissionCategory::Time => schema.end_date.succ_opt().unwrap_or(schema.end_date),
        };
        clipped.end = last.and_time(NaiveTime::MIN).max(clipped.start);
    }
    clipped
}

/// Records touching the period, already clipped to it.
pub fn records_in_period(records: &[LeaveRecord], schema: &PayPeriodSchema) -> Vec<LeaveRecord> {
    records
        .iter()
        .filter(|r| overlaps(r, schema))
        .map(|r| clip_to_period(r, schema))
        .collect()
}

/// One summary per employee on the period's pay frequency, zero-filled,
/// in registry order.
pub fn summarize_period(
    records: &[LeaveRecord],
    schema: &PayPeriodSchema,
    names: &NameRegistry,
    rest: &RestDayCalendar,
    holidays: &HolidayCalendar,
) -> Vec<LeaveSummary> {
    let mut rows: Vec<LeaveSummary> = names
        .roster(schema.frequency)
        .map(|(id, name)| LeaveSummary::zeroed(&schema.label, id, name))
        .collect();
    let slot: HashMap<EmployeeId, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (r.employee_id, i))
        .collect();

    for record in records_in_period(records, schema) {
        let Some(&i) = slot.get(&record.employee_id) else {
            continue;
        };
        let row = &mut rows[i];

        if let Some(days) = count_vacation_days(&record, rest, holidays) {
            row.vacation_days += days;
            continue;
        }

        match record.kind.category().aggregate(&record, rest) {
            LeaveAmount::Days(n) => *row.days.entry(record.kind).or_insert(0) += n,
            LeaveAmount::Time(t) => {
                let total = row.times.entry(record.kind).or_insert_with(Duration::zero);
                *total += t;
            }
        }
    }

    rows
}
