//! Collaborator seams between the pipeline and whatever stores the data.

use crate::errors::AppResult;
use crate::models::calendar::{HolidayCalendar, RestDayCalendar};
use crate::models::employee::EmployeeDirectory;
use crate::models::leave::{LeaveRecord, PermissionLabels};
use crate::models::schedule::{ScheduleOffsets, WorkSchedule};
use crate::models::ClockEvent;
use chrono::{NaiveDate, Weekday};

/// Raw device punches.
pub trait PunchSource {
    /// Punches dated within `[start, end]`, in any order.
    fn punches(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<ClockEvent>>;
}

/// Manual corrections, published one month at a time.
pub trait CorrectionSource {
    /// `Err(AppError::MissingData)` when the month has no corrections file.
    fn corrections(&self, year: i32, month: u32) -> AppResult<Vec<ClockEvent>>;
}

pub trait LeaveSource {
    /// Leave rows with their free-text permission normalized through `labels`.
    fn leaves(&self, labels: &PermissionLabels) -> AppResult<Vec<LeaveRecord>>;
}

pub trait ReferenceStore {
    fn employees(&self) -> AppResult<EmployeeDirectory>;
    fn work_schedule(&self) -> AppResult<WorkSchedule>;
    fn schedule_offsets(&self) -> AppResult<ScheduleOffsets>;
    fn holidays(&self) -> AppResult<HolidayCalendar>;
    fn rest_days(&self, default_days: &[Weekday]) -> AppResult<RestDayCalendar>;
}

/// Everything one pipeline run reads from.
pub struct Sources<'a> {
    pub punches: &'a dyn PunchSource,
    pub corrections: &'a dyn CorrectionSource,
    pub leaves: &'a dyn LeaveSource,
    pub reference: &'a dyn ReferenceStore,
}

/// A correction source with nothing published.
pub struct NoCorrections;

impl CorrectionSource for NoCorrections {
    fn corrections(&self, year: i32, month: u32) -> AppResult<Vec<ClockEvent>> {
        Err(crate::errors::AppError::MissingData(format!(
            "no corrections for {:04}-{:02}",
            year, month
        )))
    }
}
