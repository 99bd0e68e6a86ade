mod common;
use common::{correction, date, punch, time, write_file};
use punchroll::core::reconcile::{
    DedupPolicy, discard_duplicates, mark_duplicates, overlay_corrections, reconcile,
};
use punchroll::core::sources::CorrectionSource;
use punchroll::db::corrections::{CsvCorrections, read_corrections};
use punchroll::errors::AppError;
use punchroll::models::EventKind;

#[test]
fn test_earliest_check_in_wins() {
    let raw = vec![
        punch(7, "2026-01-05", "09:10", EventKind::CheckIn),
        punch(7, "2026-01-05", "08:55", EventKind::CheckIn),
        punch(7, "2026-01-05", "09:00", EventKind::CheckIn),
    ];

    let marked = mark_duplicates(raw.clone(), DedupPolicy::default());
    let dupes: Vec<_> = marked
        .iter()
        .filter(|e| e.is_duplicate)
        .map(|e| e.time)
        .collect();
    assert_eq!(dupes.len(), 2);
    assert!(!dupes.contains(&time("08:55")));

    let kept = discard_duplicates(raw, DedupPolicy::default());
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].time, time("08:55"));
    assert!(!kept[0].is_duplicate);
}

#[test]
fn test_latest_check_out_wins() {
    let raw = vec![
        punch(7, "2026-01-05", "17:58", EventKind::CheckOut),
        punch(7, "2026-01-05", "18:04", EventKind::CheckOut),
    ];

    let kept = discard_duplicates(raw, DedupPolicy::default());
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].time, time("18:04"));
}

#[test]
fn test_break_dedup_follows_policy() {
    let raw = vec![
        punch(7, "2026-01-05", "13:00", EventKind::BreakOut),
        punch(7, "2026-01-05", "13:02", EventKind::BreakOut),
        punch(7, "2026-01-05", "14:00", EventKind::BreakIn),
        punch(7, "2026-01-05", "14:01", EventKind::BreakIn),
    ];

    let kept = discard_duplicates(raw.clone(), DedupPolicy::default());
    let times: Vec<_> = kept.iter().map(|e| e.time).collect();
    assert_eq!(times, vec![time("13:00"), time("14:01")]);

    let kept = discard_duplicates(raw, DedupPolicy { dedup_breaks: false });
    assert_eq!(kept.len(), 4);
}

#[test]
fn test_dedup_is_per_employee_and_day() {
    let raw = vec![
        punch(1, "2026-01-05", "09:00", EventKind::CheckIn),
        punch(2, "2026-01-05", "09:05", EventKind::CheckIn),
        punch(1, "2026-01-06", "09:07", EventKind::CheckIn),
    ];

    assert_eq!(discard_duplicates(raw, DedupPolicy::default()).len(), 3);
}

#[test]
fn test_correction_replaces_matching_punch() {
    let raw = vec![
        punch(3, "2026-01-05", "09:00", EventKind::CheckIn),
        punch(3, "2026-01-05", "18:00", EventKind::CheckOut),
    ];
    let corrections = vec![correction(3, "2026-01-05", "09:00", EventKind::CheckIn)];

    let out = reconcile(raw, &corrections, DedupPolicy::default());

    let check_ins: Vec<_> = out
        .iter()
        .filter(|e| e.kind == EventKind::CheckIn)
        .collect();
    assert_eq!(check_ins.len(), 1);
    assert!(check_ins[0].is_correction);
    assert_eq!(check_ins[0].device, "manual");
    assert_eq!(out.len(), 2);
}

#[test]
fn test_corrections_outside_the_punch_span_are_ignored() {
    let raw = vec![
        punch(3, "2026-01-05", "09:00", EventKind::CheckIn),
        punch(3, "2026-01-06", "18:00", EventKind::CheckOut),
    ];
    let corrections = vec![
        correction(3, "2026-01-06", "13:00", EventKind::BreakOut),
        correction(3, "2026-01-20", "09:00", EventKind::CheckIn),
    ];

    let out = overlay_corrections(raw, &corrections);

    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|e| e.date <= date("2026-01-06")));
}

#[test]
fn test_output_is_chronological_with_kind_tie_break() {
    let raw = vec![
        punch(1, "2026-01-05", "18:00", EventKind::CheckOut),
        punch(1, "2026-01-05", "13:00", EventKind::BreakIn),
        punch(1, "2026-01-05", "13:00", EventKind::BreakOut),
        punch(1, "2026-01-05", "09:00", EventKind::CheckIn),
    ];

    let out = reconcile(raw, &[], DedupPolicy::default());
    let kinds: Vec<_> = out.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::CheckIn,
            EventKind::BreakOut,
            EventKind::BreakIn,
            EventKind::CheckOut
        ]
    );
}

#[test]
fn test_correction_file_flags_default_to_false() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "corrections-2026-01.csv",
        "employee_id,date,time,kind\n\
         4,2026-01-05,09:00,check_in\n\
         4,2026-01-05,18:00,\n",
    );

    let rows = read_corrections(std::path::Path::new(&path)).expect("read corrections");

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|e| e.is_correction && !e.is_duplicate));
    assert_eq!(rows[0].kind, EventKind::CheckIn);
    assert_eq!(rows[1].kind, EventKind::Undefined);
}

#[test]
fn test_missing_correction_month_is_recoverable() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(
        dir.path(),
        "corrections-2026-01.csv",
        "employee_id,date,time,kind,device,is_correction,is_duplicate\n\
         4,2026-01-05,09:00,checkIn,desk,,\n",
    );
    let source = CsvCorrections::new(dir.path());

    let jan = source.corrections(2026, 1).expect("january present");
    assert_eq!(jan.len(), 1);

    match source.corrections(2026, 2) {
        Err(e @ AppError::MissingData(_)) => assert!(e.is_recoverable()),
        other => panic!("expected MissingData, got {:?}", other.map(|v| v.len())),
    }
}
