use super::event_kind::EventKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

pub type EmployeeId = u32;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClockEvent {
    pub employee_id: EmployeeId, // ⇔ punches.employee_id
    pub date: NaiveDate,         // ⇔ punches.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,         // ⇔ punches.time (TEXT "HH:MM:SS")
    pub kind: EventKind,         // ⇔ punches.kind
    pub device: String,          // ⇔ punches.device (TEXT, default '')
    pub is_correction: bool,
    pub is_duplicate: bool,
}

impl ClockEvent {
    /// Raw punch as delivered by the clock device: neither a correction
    /// nor (yet) known to be a duplicate.
    pub fn punch(
        employee_id: EmployeeId,
        date: NaiveDate,
        time: NaiveTime,
        kind: EventKind,
        device: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            date,
            time,
            kind,
            device: device.into(),
            is_correction: false,
            is_duplicate: false,
        }
    }

    /// Manually entered replacement punch.
    pub fn correction(
        employee_id: EmployeeId,
        date: NaiveDate,
        time: NaiveTime,
        kind: EventKind,
        device: impl Into<String>,
    ) -> Self {
        Self {
            is_correction: true,
            ..Self::punch(employee_id, date, time, kind, device)
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Key used to match a punch against a correction.
    pub fn correction_key(&self) -> (EmployeeId, NaiveDate, NaiveTime) {
        (self.employee_id, self.date, self.time)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}
