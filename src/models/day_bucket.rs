use super::clock_event::{ClockEvent, EmployeeId};
use super::event_kind::EventKind;
use chrono::NaiveDate;
use serde::Serialize;

/// Outcome of the three daily integrity rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayChecks {
    pub complete: bool,
    pub break_pairs: bool,
    pub unique_start_and_end: bool,
}

impl DayChecks {
    pub fn all_valid(&self) -> bool {
        self.complete && self.break_pairs && self.unique_start_and_end
    }
}

/// Per (employee, date) punch counts. Undefined punches are not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub check_in: u32,
    pub break_out: u32,
    pub break_in: u32,
    pub check_out: u32,
    pub checks: DayChecks,
}

impl DailyBucket {
    pub fn empty(employee_id: EmployeeId, date: NaiveDate) -> Self {
        Self {
            employee_id,
            date,
            check_in: 0,
            break_out: 0,
            break_in: 0,
            check_out: 0,
            checks: DayChecks::default(),
        }
    }

    pub fn count(&self, kind: EventKind) -> u32 {
        match kind {
            EventKind::CheckIn => self.check_in,
            EventKind::BreakOut => self.break_out,
            EventKind::BreakIn => self.break_in,
            EventKind::CheckOut => self.check_out,
            EventKind::Undefined => 0,
        }
    }
}

/// A reconciled punch with its bucket's checks joined onto it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedEvent {
    #[serde(flatten)]
    pub event: ClockEvent,
    #[serde(flatten)]
    pub checks: DayChecks,
}

impl ValidatedEvent {
    pub fn is_valid(&self) -> bool {
        self.checks.all_valid()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}
