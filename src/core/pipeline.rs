//! One batch run: periods → reconciliation → validation → accounting.

use crate::core::calculator::leave::summarize_period;
use crate::core::calculator::lunch::lunch_overages;
use crate::core::calculator::punctuality::time_events;
use crate::core::calculator::summary::punctuality_summary;
use crate::core::context::RunContext;
use crate::core::integrity::{filter_by_validity, validate};
use crate::core::periods::{generate_schemas, min_start};
use crate::core::reconcile::{reconcile, DedupPolicy};
use crate::core::sources::Sources;
use crate::errors::{AppError, AppResult};
use crate::models::day_bucket::{ValidatedEvent, Validity};
use crate::models::employee::EmployeeDirectory;
use crate::models::metrics::{LeaveSummary, LunchOverage, PunctualitySummary, TimedEvent};
use crate::models::period::PayPeriodSchema;
use crate::models::ClockEvent;
use crate::utils::date::months_between;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Everything a run hands to report sinks.
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    pub schemas: Vec<PayPeriodSchema>,
    /// Punches from days that failed at least one integrity rule.
    pub invalid: Vec<ValidatedEvent>,
    pub timed: Vec<TimedEvent>,
    pub lunch: Vec<LunchOverage>,
    pub punctuality: Vec<PunctualitySummary>,
    pub leave: Vec<LeaveSummary>,
}

/// Corrections for every month in `[start, end]`. Months without a
/// corrections file are logged and skipped.
pub fn load_corrections(
    sources: &Sources<'_>,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<ClockEvent>> {
    let mut all = Vec::new();

    for (year, month) in months_between(start, end) {
        match sources.corrections.corrections(year, month) {
            Ok(rows) => {
                debug!(year, month, rows = rows.len(), "corrections loaded");
                all.extend(rows);
            }
            Err(e) if e.is_recoverable() => {
                warn!(year, month, "{}", e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(all)
}

/// Drop punches of employees missing from the directory.
pub fn drop_unknown(events: Vec<ClockEvent>, directory: &EmployeeDirectory) -> Vec<ClockEvent> {
    let before = events.len();
    let kept: Vec<ClockEvent> = events
        .into_iter()
        .filter(|e| directory.contains(e.employee_id))
        .collect();

    if kept.len() < before {
        debug!(dropped = before - kept.len(), "punches of unknown employees dropped");
    }
    kept
}

pub fn run_pipeline(ctx: &mut RunContext, sources: &Sources<'_>) -> AppResult<RunOutput> {
    let settings = ctx.settings.clone();
    let reference = ctx.reference_date;

    let schemas = generate_schemas(reference, &settings.periods);
    let Some(first_day) = min_start(&schemas) else {
        return Err(AppError::Other("no pay periods generated".into()));
    };
    info!(
        reference = %reference,
        periods = schemas.len(),
        from = %first_day,
        "pay periods generated"
    );

    let directory = sources.reference.employees()?;
    if directory.is_empty() {
        return Err(AppError::MissingSource("employee directory is empty".into()));
    }
    ctx.register_names(&directory);

    let raw = sources.punches.punches(first_day, reference)?;
    let corrections = load_corrections(sources, first_day, reference)?;
    info!(punches = raw.len(), corrections = corrections.len(), "sources loaded");

    let raw = drop_unknown(raw, &directory);
    let corrections = drop_unknown(corrections, &directory);

    let policy = DedupPolicy {
        dedup_breaks: settings.dedup_breaks,
    };
    let canonical = reconcile(raw, &corrections, policy);
    let validated = validate(&canonical);

    let invalid = filter_by_validity(&validated, Validity::Invalid, &settings.excluded_employees);
    let valid = filter_by_validity(&validated, Validity::Valid, &settings.excluded_employees);
    info!(valid = valid.len(), invalid = invalid.len(), "punches validated");

    let schedule = sources.reference.work_schedule()?;
    let offsets = sources.reference.schedule_offsets()?;
    let timed = time_events(&valid, &schedule, &offsets);
    let lunch = lunch_overages(
        valid.iter().map(|v| &v.event),
        settings.lunch_duration_limit,
    );

    let holidays = sources.reference.holidays()?;
    let rest = sources.reference.rest_days(&settings.default_rest_days)?;
    let leaves = sources.leaves.leaves(&settings.permission_labels)?;

    let mut punctuality = Vec::new();
    let mut leave = Vec::new();
    for schema in &schemas {
        punctuality.extend(punctuality_summary(&timed, &lunch, schema, &ctx.names));
        leave.extend(summarize_period(&leaves, schema, &ctx.names, &rest, &holidays));
    }

    Ok(RunOutput {
        schemas,
        invalid,
        timed,
        lunch,
        punctuality,
        leave,
    })
}
