//! Per (employee, day) integrity rules over the reconciled punch stream.

use crate::models::day_bucket::{DailyBucket, DayChecks, ValidatedEvent, Validity};
use crate::models::{ClockEvent, EmployeeId, EventKind};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Evaluate the three rules from per-kind counts.
pub fn evaluate(check_in: u32, break_out: u32, break_in: u32, check_out: u32) -> DayChecks {
    DayChecks {
        complete: check_in > 0 && break_out > 0 && break_in > 0 && check_out > 0,
        break_pairs: break_out == break_in && break_out > 0 && break_in > 0,
        unique_start_and_end: check_in == 1 && check_out == 1,
    }
}

/// Count punches per kind for every (employee, date) present in `events`.
pub fn build_buckets(events: &[ClockEvent]) -> BTreeMap<(EmployeeId, NaiveDate), DailyBucket> {
    let mut buckets: BTreeMap<(EmployeeId, NaiveDate), DailyBucket> = BTreeMap::new();

    for ev in events {
        let bucket = buckets
            .entry((ev.employee_id, ev.date))
            .or_insert_with(|| DailyBucket::empty(ev.employee_id, ev.date));

        match ev.kind {
            EventKind::CheckIn => bucket.check_in += 1,
            EventKind::BreakOut => bucket.break_out += 1,
            EventKind::BreakIn => bucket.break_in += 1,
            EventKind::CheckOut => bucket.check_out += 1,
            EventKind::Undefined => {}
        }
    }

    for bucket in buckets.values_mut() {
        bucket.checks = evaluate(
            bucket.check_in,
            bucket.break_out,
            bucket.break_in,
            bucket.check_out,
        );
    }

    buckets
}

/// Join each punch with its bucket's checks. Input order is preserved.
pub fn validate(events: &[ClockEvent]) -> Vec<ValidatedEvent> {
    let buckets = build_buckets(events);

    events
        .iter()
        .map(|ev| ValidatedEvent {
            event: ev.clone(),
            checks: buckets
                .get(&(ev.employee_id, ev.date))
                .map(|b| b.checks)
                .unwrap_or_default(),
        })
        .collect()
}

/// Keep the punches whose combined checks match `by`, minus `excluded`
/// employees.
pub fn filter_by_validity(
    events: &[ValidatedEvent],
    by: Validity,
    excluded: &BTreeSet<EmployeeId>,
) -> Vec<ValidatedEvent> {
    let want_valid = by == Validity::Valid;

    events
        .iter()
        .filter(|ev| ev.is_valid() == want_valid)
        .filter(|ev| !excluded.contains(&ev.event.employee_id))
        .cloned()
        .collect()
}
