use super::clock_event::EmployeeId;
use crate::errors::{AppError, AppResult};
use chrono::{Duration, Weekday};
use std::collections::HashMap;

/// Start/end offsets from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    pub start: Duration,
    pub end: Duration,
}

impl Default for ShiftWindow {
    fn default() -> Self {
        Self {
            start: Duration::zero(),
            end: Duration::zero(),
        }
    }
}

impl ShiftWindow {
    /// Largest offset from midnight, in either direction (`24:00`).
    pub const MAX_MINUTES: i64 = 24 * 60;

    pub fn from_minutes(start: i64, end: i64) -> AppResult<Self> {
        Ok(Self {
            start: Self::offset(start)?,
            end: Self::offset(end)?,
        })
    }

    fn offset(minutes: i64) -> AppResult<Duration> {
        if minutes.abs() > Self::MAX_MINUTES {
            return Err(AppError::InvalidDuration(format!(
                "{} minutes is outside ±{}",
                minutes,
                Self::MAX_MINUTES
            )));
        }
        Ok(Duration::minutes(minutes))
    }
}

/// Base schedule, one row per weekday. Always exhaustive once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSchedule {
    days: [ShiftWindow; 7],
}

impl WorkSchedule {
    /// Build from `(weekday, window)` rows; every weekday must appear.
    pub fn from_rows<I>(rows: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (Weekday, ShiftWindow)>,
    {
        let mut slots: [Option<ShiftWindow>; 7] = [None; 7];
        for (weekday, window) in rows {
            slots[weekday.num_days_from_monday() as usize] = Some(window);
        }

        let mut days = [ShiftWindow::default(); 7];
        for (idx, slot) in slots.iter().enumerate() {
            days[idx] = slot.ok_or_else(|| {
                AppError::MissingSource(format!(
                    "work schedule has no row for weekday {}",
                    idx
                ))
            })?;
        }
        Ok(Self { days })
    }

    /// Same window every day.
    pub fn uniform(window: ShiftWindow) -> Self {
        Self { days: [window; 7] }
    }

    pub fn window(&self, weekday: Weekday) -> ShiftWindow {
        self.days[weekday.num_days_from_monday() as usize]
    }
}

/// Per-employee, per-weekday adjustments. Absent pairs mean no offset.
#[derive(Debug, Clone, Default)]
pub struct ScheduleOffsets {
    offsets: HashMap<(EmployeeId, Weekday), ShiftWindow>,
}

impl ScheduleOffsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, employee_id: EmployeeId, weekday: Weekday, offset: ShiftWindow) {
        self.offsets.insert((employee_id, weekday), offset);
    }

    /// Explicit lookup; `None` when no adjustment was configured.
    pub fn get(&self, employee_id: EmployeeId, weekday: Weekday) -> Option<ShiftWindow> {
        self.offsets.get(&(employee_id, weekday)).copied()
    }

    /// Lookup with the zero-duration fill applied.
    pub fn get_or_zero(&self, employee_id: EmployeeId, weekday: Weekday) -> ShiftWindow {
        self.get(employee_id, weekday).unwrap_or_default()
    }
}

impl FromIterator<(EmployeeId, Weekday, ShiftWindow)> for ScheduleOffsets {
    fn from_iter<T: IntoIterator<Item = (EmployeeId, Weekday, ShiftWindow)>>(iter: T) -> Self {
        let mut out = ScheduleOffsets::new();
        for (id, wd, w) in iter {
            out.insert(id, wd, w);
        }
        out
    }
}
