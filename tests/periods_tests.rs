mod common;
use common::date;
use punchroll::config::{Config, PeriodRules};
use punchroll::core::periods::{biweekly_schemas, generate_schemas, min_start, weekly_schemas};
use punchroll::errors::AppError;
use punchroll::models::period::PayFrequency;
use punchroll::utils::date::{month_end, months_between};

fn bounds(s: &punchroll::models::period::PayPeriodSchema) -> (String, String, String) {
    (
        s.label.clone(),
        s.start_date.to_string(),
        s.end_date.to_string(),
    )
}

#[test]
fn test_generation_is_idempotent() {
    let rules = PeriodRules::default();
    let a = generate_schemas(date("2026-03-18"), &rules);
    let b = generate_schemas(date("2026-03-18"), &rules);
    assert_eq!(a, b);
    assert!(!a.is_empty());
}

#[test]
fn test_biweekly_first_half_only_before_day_16() {
    let rules = PeriodRules::default();
    let out = biweekly_schemas(date("2026-01-15"), &rules);

    assert_eq!(out.len(), 1);
    assert_eq!(
        bounds(&out[0]),
        ("biweekly-1".into(), "2026-01-01".into(), "2026-01-15".into())
    );
}

#[test]
fn test_biweekly_second_half_from_day_16() {
    let rules = PeriodRules::default();
    let out = biweekly_schemas(date("2026-02-16"), &rules);

    assert_eq!(out.len(), 2);
    assert_eq!(
        bounds(&out[1]),
        ("biweekly-2".into(), "2026-02-16".into(), "2026-02-28".into())
    );
}

#[test]
fn test_biweekly_december_ends_on_the_31st() {
    let out = biweekly_schemas(date("2025-12-20"), &PeriodRules::default());
    assert_eq!(out[1].end_date, date("2025-12-31"));
}

#[test]
fn test_weekly_cycles_cross_the_year_boundary() {
    // 2026-01-01 is a Thursday; first Friday on or after it is 2026-01-02
    let out = weekly_schemas(date("2026-01-10"), &PeriodRules::default());

    let got: Vec<_> = out.iter().map(bounds).collect();
    assert_eq!(
        got,
        vec![
            ("weekly-1".into(), "2025-12-27".into(), "2026-01-02".into()),
            ("weekly-2".into(), "2026-01-03".into(), "2026-01-09".into()),
            ("weekly-3".into(), "2026-01-10".into(), "2026-01-16".into()),
        ]
    );
}

#[test]
fn test_weekly_no_extra_cycle_when_reference_closes_one() {
    // 2026-01-09 is a Friday
    let out = weekly_schemas(date("2026-01-09"), &PeriodRules::default());

    assert_eq!(out.len(), 2);
    assert_eq!(out[1].end_date, date("2026-01-09"));
}

#[test]
fn test_weekly_cycles_are_contiguous_seven_day_windows() {
    let out = weekly_schemas(date("2025-12-30"), &PeriodRules::default());

    for s in &out {
        assert_eq!(s.len_days(), 7);
        assert_eq!(s.frequency, PayFrequency::Weekly);
    }
    for pair in out.windows(2) {
        assert_eq!(pair[0].end_date.succ_opt(), Some(pair[1].start_date));
    }
    assert!(out.last().is_some_and(|s| s.contains(date("2025-12-30"))));
}

#[test]
fn test_custom_week_end_day() {
    let rules = PeriodRules {
        week_period_end: chrono::Weekday::Sun,
        ..PeriodRules::default()
    };
    // 2026-02-01 is a Sunday: the first cycle is the week ending on it
    let out = weekly_schemas(date("2026-02-03"), &rules);

    assert_eq!(out[0].start_date, date("2026-01-26"));
    assert_eq!(out[0].end_date, date("2026-02-01"));
    assert_eq!(out.len(), 2);
}

#[test]
fn test_biweekly_first_then_weekly_and_min_start() {
    let out = generate_schemas(date("2026-01-10"), &PeriodRules::default());

    assert_eq!(out[0].frequency, PayFrequency::Biweekly);
    assert_eq!(out.last().map(|s| s.frequency), Some(PayFrequency::Weekly));
    assert_eq!(min_start(&out), Some(date("2025-12-27")));
}

#[test]
fn test_month_helpers_roll_over() {
    assert_eq!(month_end(date("2025-12-05")), date("2025-12-31"));
    assert_eq!(month_end(date("2024-02-10")), date("2024-02-29"));
    assert_eq!(
        months_between(date("2025-12-27"), date("2026-01-09")),
        vec![(2025, 12), (2026, 1)]
    );
}

#[test]
fn test_malformed_period_constants_are_config_errors() {
    let cfg = Config {
        first_half_end_day: 15,
        second_half_start_day: 20,
        ..Config::default()
    };
    assert!(matches!(cfg.settings(), Err(AppError::Config(_))));

    let cfg = Config {
        week_period_end: "Caturday".into(),
        ..Config::default()
    };
    assert!(matches!(cfg.settings(), Err(AppError::Config(_))));

    let cfg = Config {
        lunch_duration_limit: "soon".into(),
        ..Config::default()
    };
    assert!(matches!(cfg.settings(), Err(AppError::Config(_))));
}

#[test]
fn test_oversized_durations_are_rejected_not_panicking() {
    for limit in ["99999999999999999h", "9223372036854775807s", "99999999999999:00"] {
        let cfg = Config {
            lunch_duration_limit: limit.into(),
            ..Config::default()
        };
        assert!(
            matches!(cfg.settings(), Err(AppError::Config(_))),
            "{limit} should be a configuration error"
        );
    }
}
