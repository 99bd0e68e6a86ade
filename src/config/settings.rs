//! Typed, validated view of the configuration used by the pipeline.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::models::EmployeeId;
use crate::models::leave::{PermissionKind, PermissionLabels};
use crate::utils::date::parse_weekday;
use crate::utils::time::parse_duration;
use chrono::{Duration, Weekday};
use std::collections::BTreeSet;

/// Calendar constants for the period generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRules {
    pub first_half_end_day: u32,
    pub second_half_start_day: u32,
    pub week_period_end: Weekday,
}

impl Default for PeriodRules {
    fn default() -> Self {
        Self {
            first_half_end_day: 15,
            second_half_start_day: 16,
            week_period_end: Weekday::Fri,
        }
    }
}

impl PeriodRules {
    pub fn validate(&self) -> AppResult<()> {
        // day 28 exists in every month; the first half must end before it
        if !(1..=27).contains(&self.first_half_end_day) {
            return Err(AppError::Config(format!(
                "first_half_end_day must be within 1..=27, got {}",
                self.first_half_end_day
            )));
        }
        if self.second_half_start_day != self.first_half_end_day + 1 {
            return Err(AppError::Config(format!(
                "second_half_start_day must follow first_half_end_day ({} then {})",
                self.first_half_end_day, self.second_half_start_day
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub periods: PeriodRules,
    pub lunch_duration_limit: Duration,
    pub dedup_breaks: bool,
    pub excluded_employees: BTreeSet<EmployeeId>,
    pub default_rest_days: Vec<Weekday>,
    pub permission_labels: PermissionLabels,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            periods: PeriodRules::default(),
            lunch_duration_limit: Duration::hours(1) + Duration::minutes(59),
            dedup_breaks: true,
            excluded_employees: BTreeSet::new(),
            default_rest_days: vec![Weekday::Sun],
            permission_labels: PermissionLabels::new(),
        }
    }
}

impl Settings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let week_period_end = parse_weekday(&cfg.week_period_end).ok_or_else(|| {
            AppError::Config(format!("unknown week_period_end '{}'", cfg.week_period_end))
        })?;

        let periods = PeriodRules {
            first_half_end_day: cfg.first_half_end_day,
            second_half_start_day: cfg.second_half_start_day,
            week_period_end,
        };
        periods.validate()?;

        let lunch_duration_limit = parse_duration(&cfg.lunch_duration_limit)
            .map_err(|e| AppError::Config(format!("lunch_duration_limit: {}", e)))?;
        if lunch_duration_limit < Duration::zero() {
            return Err(AppError::Config(
                "lunch_duration_limit must not be negative".to_string(),
            ));
        }

        let default_rest_days = cfg
            .default_rest_days
            .iter()
            .map(|d| {
                parse_weekday(d)
                    .ok_or_else(|| AppError::Config(format!("unknown rest day '{}'", d)))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let mut permission_labels = PermissionLabels::new();
        for (label, canonical) in &cfg.permission_labels {
            let kind = PermissionKind::from_canonical(canonical.trim()).ok_or_else(|| {
                AppError::Config(format!(
                    "permission_labels['{}'] maps to unknown permission '{}'",
                    label, canonical
                ))
            })?;
            permission_labels.insert(label, kind);
        }

        Ok(Self {
            periods,
            lunch_duration_limit,
            dedup_breaks: cfg.dedup_breaks,
            excluded_employees: cfg.excluded_employees.iter().copied().collect(),
            default_rest_days,
            permission_labels,
        })
    }
}
