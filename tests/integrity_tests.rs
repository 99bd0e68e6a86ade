mod common;
use common::{date, full_day, punch};
use punchroll::core::integrity::{build_buckets, evaluate, filter_by_validity, validate};
use punchroll::models::EventKind;
use punchroll::models::day_bucket::Validity;
use std::collections::BTreeSet;

#[test]
fn test_complete_iff_every_kind_present() {
    for ci in 0..3 {
        for bo in 0..3 {
            for bi in 0..3 {
                for co in 0..3 {
                    let checks = evaluate(ci, bo, bi, co);
                    assert_eq!(checks.complete, ci > 0 && bo > 0 && bi > 0 && co > 0);
                    if checks.break_pairs {
                        assert_eq!(bi, bo);
                        assert!(bi > 0);
                    }
                    assert_eq!(checks.unique_start_and_end, ci == 1 && co == 1);
                }
            }
        }
    }
}

#[test]
fn test_bucket_counts_match_every_counted_kind() {
    let mut events = full_day(1, "2026-01-05", ["09:00", "13:00", "14:00", "18:00"]);
    events.push(punch(1, "2026-01-05", "16:00", EventKind::BreakOut));

    let buckets = build_buckets(&events);
    let bucket = &buckets[&(1, date("2026-01-05"))];

    for kind in EventKind::COUNTED {
        let expected = events.iter().filter(|e| e.kind == kind).count() as u32;
        assert_eq!(bucket.count(kind), expected);
    }
    assert!(bucket.checks.complete);
    assert!(!bucket.checks.break_pairs);
}

#[test]
fn test_valid_day_passes_every_rule() {
    let events = full_day(1, "2026-01-05", ["09:00", "13:00", "14:00", "18:00"]);
    let validated = validate(&events);

    assert_eq!(validated.len(), 4);
    assert!(validated.iter().all(|v| v.is_valid()));
}

#[test]
fn test_every_punch_inherits_its_bucket_outcome() {
    let mut events = full_day(1, "2026-01-05", ["09:00", "13:00", "14:00", "18:00"]);
    events.extend(vec![
        punch(2, "2026-01-05", "09:00", EventKind::CheckIn),
        punch(2, "2026-01-05", "13:00", EventKind::BreakOut),
        punch(2, "2026-01-05", "18:00", EventKind::CheckOut),
    ]);

    let validated = validate(&events);

    for v in &validated {
        if v.event.employee_id == 2 {
            assert!(!v.is_valid());
            assert!(!v.checks.complete);
            assert!(!v.checks.break_pairs);
            assert!(v.checks.unique_start_and_end);
        } else {
            assert!(v.is_valid());
        }
    }
}

#[test]
fn test_second_check_in_breaks_uniqueness() {
    let mut events = full_day(1, "2026-01-05", ["09:00", "13:00", "14:00", "18:00"]);
    events.push(punch(1, "2026-01-05", "09:30", EventKind::CheckIn));

    let validated = validate(&events);
    assert!(validated.iter().all(|v| !v.checks.unique_start_and_end));
}

#[test]
fn test_undefined_punches_are_not_counted_but_inherit_checks() {
    let mut events = full_day(1, "2026-01-05", ["09:00", "13:00", "14:00", "18:00"]);
    events.push(punch(1, "2026-01-05", "11:00", EventKind::Undefined));

    let buckets = build_buckets(&events);
    assert!(buckets[&(1, date("2026-01-05"))].checks.all_valid());

    let validated = validate(&events);
    let undefined = validated
        .iter()
        .find(|v| v.event.kind == EventKind::Undefined)
        .expect("undefined punch kept");
    assert!(undefined.is_valid());
}

#[test]
fn test_filter_by_validity_partitions_and_excludes() {
    let mut events = full_day(1, "2026-01-05", ["09:00", "13:00", "14:00", "18:00"]);
    events.push(punch(2, "2026-01-05", "09:00", EventKind::CheckIn));
    events.push(punch(3, "2026-01-05", "09:00", EventKind::CheckIn));
    let validated = validate(&events);

    let none = BTreeSet::new();
    let valid = filter_by_validity(&validated, Validity::Valid, &none);
    let invalid = filter_by_validity(&validated, Validity::Invalid, &none);
    assert_eq!(valid.len(), 4);
    assert_eq!(invalid.len(), 2);
    assert_eq!(valid.len() + invalid.len(), validated.len());

    let excluded: BTreeSet<u32> = [3].into_iter().collect();
    let invalid = filter_by_validity(&validated, Validity::Invalid, &excluded);
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].event.employee_id, 2);
}
