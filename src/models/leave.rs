use super::clock_event::EmployeeId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Closed set of permission kinds a leave record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKind {
    Vacation,
    SickGeneral,
    WorkRisk,
    Maternity,
    UnjustifiedAbsence,
    UnpaidExtraAbsence,
    HolidayAbsence,
    HolidayCompensation,
    HoursPermission,
    Overtime,
    MealBreakMissing,
    MealBreakCompensation,
}

/// How a permission is measured. Each category owns its aggregation
/// (see `core::calculator::leave`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionCategory {
    Days,
    Time,
}

impl PermissionKind {
    pub const ALL: [PermissionKind; 12] = [
        PermissionKind::Vacation,
        PermissionKind::SickGeneral,
        PermissionKind::WorkRisk,
        PermissionKind::Maternity,
        PermissionKind::UnjustifiedAbsence,
        PermissionKind::UnpaidExtraAbsence,
        PermissionKind::HolidayAbsence,
        PermissionKind::HolidayCompensation,
        PermissionKind::HoursPermission,
        PermissionKind::Overtime,
        PermissionKind::MealBreakMissing,
        PermissionKind::MealBreakCompensation,
    ];

    /// Day-based kinds aggregated by the generic day rule (vacation has its
    /// own rule and is reported separately).
    pub const DAY_KINDS: [PermissionKind; 7] = [
        PermissionKind::SickGeneral,
        PermissionKind::WorkRisk,
        PermissionKind::Maternity,
        PermissionKind::UnjustifiedAbsence,
        PermissionKind::UnpaidExtraAbsence,
        PermissionKind::HolidayAbsence,
        PermissionKind::HolidayCompensation,
    ];

    pub const TIME_KINDS: [PermissionKind; 4] = [
        PermissionKind::HoursPermission,
        PermissionKind::Overtime,
        PermissionKind::MealBreakMissing,
        PermissionKind::MealBreakCompensation,
    ];

    pub fn category(&self) -> PermissionCategory {
        match self {
            PermissionKind::HoursPermission
            | PermissionKind::Overtime
            | PermissionKind::MealBreakMissing
            | PermissionKind::MealBreakCompensation => PermissionCategory::Time,
            _ => PermissionCategory::Days,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionKind::Vacation => "vacation",
            PermissionKind::SickGeneral => "sick_general",
            PermissionKind::WorkRisk => "work_risk",
            PermissionKind::Maternity => "maternity",
            PermissionKind::UnjustifiedAbsence => "unjustified_absence",
            PermissionKind::UnpaidExtraAbsence => "unpaid_extra_absence",
            PermissionKind::HolidayAbsence => "holiday_absence",
            PermissionKind::HolidayCompensation => "holiday_compensation",
            PermissionKind::HoursPermission => "hours_permission",
            PermissionKind::Overtime => "overtime",
            PermissionKind::MealBreakMissing => "meal_break_missing",
            PermissionKind::MealBreakCompensation => "meal_break_compensation",
        }
    }

    pub fn from_canonical(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps free-text labels coming from the leave source to the closed set.
///
/// Canonical snake_case names always resolve; extra labels come from
/// configuration. Matching ignores surrounding whitespace and case.
#[derive(Debug, Clone, Default)]
pub struct PermissionLabels {
    labels: BTreeMap<String, PermissionKind>,
}

impl PermissionLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str, kind: PermissionKind) {
        self.labels.insert(Self::fold(label), kind);
    }

    pub fn resolve(&self, label: &str) -> Option<PermissionKind> {
        let folded = Self::fold(label);
        PermissionKind::from_canonical(&folded).or_else(|| self.labels.get(&folded).copied())
    }

    fn fold(label: &str) -> String {
        label.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveRecord {
    pub employee_id: EmployeeId,
    pub kind: PermissionKind,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl LeaveRecord {
    pub fn new(
        employee_id: EmployeeId,
        kind: PermissionKind,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            employee_id,
            kind,
            start,
            end,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Calendar days in `[start_date, end_date]`; empty when reversed.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end_date();
        self.start_date().iter_days().take_while(move |d| *d <= end)
    }

    pub fn total_days(&self) -> i64 {
        let span = (self.end_date() - self.start_date()).num_days() + 1;
        span.max(0)
    }
}
