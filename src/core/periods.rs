//! Pay-period windows active as of a reference date.
//!
//! Biweekly periods split the reference month at a fixed day; weekly
//! periods are 7-day cycles ending on a fixed weekday, starting with the
//! cycle that contains the first day of the month.

use crate::config::PeriodRules;
use crate::models::period::{PayFrequency, PayPeriodSchema};
use crate::utils::date::{day_of_month, month_end, month_start, next_weekday_on_or_after};
use chrono::{Datelike, Duration, NaiveDate};

pub fn biweekly_label(n: usize) -> String {
    format!("biweekly-{}", n)
}

pub fn weekly_label(n: usize) -> String {
    format!("weekly-{}", n)
}

/// Biweekly first, then weekly, each oldest first.
pub fn generate_schemas(reference: NaiveDate, rules: &PeriodRules) -> Vec<PayPeriodSchema> {
    let mut schemas = biweekly_schemas(reference, rules);
    schemas.extend(weekly_schemas(reference, rules));
    schemas
}

pub fn biweekly_schemas(reference: NaiveDate, rules: &PeriodRules) -> Vec<PayPeriodSchema> {
    let mut out = vec![PayPeriodSchema::new(
        PayFrequency::Biweekly,
        month_start(reference),
        day_of_month(reference, rules.first_half_end_day),
        biweekly_label(1),
    )];

    if reference.day() >= rules.second_half_start_day {
        out.push(PayPeriodSchema::new(
            PayFrequency::Biweekly,
            day_of_month(reference, rules.second_half_start_day),
            month_end(reference),
            biweekly_label(2),
        ));
    }

    out
}

/// Completed cycles since the first of the month, then the in-progress
/// cycle unless the reference date closes one.
pub fn weekly_schemas(reference: NaiveDate, rules: &PeriodRules) -> Vec<PayPeriodSchema> {
    let mut end = next_weekday_on_or_after(month_start(reference), rules.week_period_end);
    let mut start = end - Duration::days(6);
    let mut out = Vec::new();
    let mut n = 1;

    loop {
        out.push(PayPeriodSchema::new(
            PayFrequency::Weekly,
            start,
            end,
            weekly_label(n),
        ));
        if reference <= end {
            break;
        }
        n += 1;
        start += Duration::days(7);
        end += Duration::days(7);
    }

    out
}

/// Earliest start date across the schemas (the run's data window start).
pub fn min_start(schemas: &[PayPeriodSchema]) -> Option<NaiveDate> {
    schemas.iter().map(|s| s.start_date).min()
}

