// src/export/model.rs

use crate::core::context::NameRegistry;
use crate::models::day_bucket::ValidatedEvent;
use crate::models::leave::PermissionKind;
use crate::models::metrics::{LeaveSummary, PunctualitySummary};
use crate::models::period::PayPeriodSchema;
use crate::utils::time::format_duration;
use serde::Serialize;

/// Flat row for a punch of an invalid day.
#[derive(Serialize, Clone, Debug)]
pub struct InvalidEventRow {
    pub employee_id: u32,
    pub name: String,
    pub warehouse: String,
    pub job: String,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub device: String,
    pub is_correction: bool,
    pub complete: bool,
    pub break_pairs: bool,
    pub unique_start_and_end: bool,
}

impl InvalidEventRow {
    pub fn from_event(v: &ValidatedEvent, names: &NameRegistry) -> Self {
        let (warehouse, job) = names.workplace(v.event.employee_id).unwrap_or_default();
        Self {
            employee_id: v.event.employee_id,
            name: names.name(v.event.employee_id).unwrap_or_default().to_string(),
            warehouse: warehouse.to_string(),
            job: job.to_string(),
            date: v.event.date_str(),
            time: v.event.time_str(),
            kind: v.event.kind.to_db_str().to_string(),
            device: v.event.device.clone(),
            is_correction: v.event.is_correction,
            complete: v.checks.complete,
            break_pairs: v.checks.break_pairs,
            unique_start_and_end: v.checks.unique_start_and_end,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PunctualityRow {
    pub period: String,
    pub employee_id: u32,
    pub name: String,
    pub warehouse: String,
    pub job: String,
    pub late_time: String,
    pub early_time: String,
    pub exceeding_lunch_time: String,
}

impl PunctualityRow {
    pub fn from_summary(s: &PunctualitySummary, names: &NameRegistry) -> Self {
        let (warehouse, job) = names.workplace(s.employee_id).unwrap_or_default();
        Self {
            period: s.period_label.clone(),
            employee_id: s.employee_id,
            name: s.name.clone(),
            warehouse: warehouse.to_string(),
            job: job.to_string(),
            late_time: format_duration(s.late_time),
            early_time: format_duration(s.early_time),
            exceeding_lunch_time: format_duration(s.exceeding_lunch_time),
        }
    }
}

/// One column per permission kind so the CSV header stays fixed.
#[derive(Serialize, Clone, Debug)]
pub struct LeaveRow {
    pub period: String,
    pub employee_id: u32,
    pub name: String,
    pub vacation_days: i64,
    pub sick_general: i64,
    pub work_risk: i64,
    pub maternity: i64,
    pub unjustified_absence: i64,
    pub unpaid_extra_absence: i64,
    pub holiday_absence: i64,
    pub holiday_compensation: i64,
    pub hours_permission: String,
    pub overtime: String,
    pub meal_break_missing: String,
    pub meal_break_compensation: String,
}

impl From<&LeaveSummary> for LeaveRow {
    fn from(s: &LeaveSummary) -> Self {
        let t = |k| format_duration(s.time_total(k));
        Self {
            period: s.period_label.clone(),
            employee_id: s.employee_id,
            name: s.name.clone(),
            vacation_days: s.vacation_days,
            sick_general: s.day_total(PermissionKind::SickGeneral),
            work_risk: s.day_total(PermissionKind::WorkRisk),
            maternity: s.day_total(PermissionKind::Maternity),
            unjustified_absence: s.day_total(PermissionKind::UnjustifiedAbsence),
            unpaid_extra_absence: s.day_total(PermissionKind::UnpaidExtraAbsence),
            holiday_absence: s.day_total(PermissionKind::HolidayAbsence),
            holiday_compensation: s.day_total(PermissionKind::HolidayCompensation),
            hours_permission: t(PermissionKind::HoursPermission),
            overtime: t(PermissionKind::Overtime),
            meal_break_missing: t(PermissionKind::MealBreakMissing),
            meal_break_compensation: t(PermissionKind::MealBreakCompensation),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PeriodRow {
    pub label: String,
    pub frequency: String,
    pub start_date: String,
    pub end_date: String,
    pub days: i64,
}

impl From<&PayPeriodSchema> for PeriodRow {
    fn from(p: &PayPeriodSchema) -> Self {
        Self {
            label: p.label.clone(),
            frequency: p.frequency.as_str().to_string(),
            start_date: p.start_date.format("%Y-%m-%d").to_string(),
            end_date: p.end_date.format("%Y-%m-%d").to_string(),
            days: p.len_days(),
        }
    }
}
