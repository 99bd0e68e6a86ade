//! CSV files → SQLite tables.
//!
//! Every table has a flat record type read with `csv` + serde. Rows are
//! validated while converting, and a file is imported inside a single
//! transaction: one bad row rejects the whole file.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::period::PayFrequency;
use crate::models::schedule::ShiftWindow;
use crate::models::{ClockEvent, EmployeeId, EventKind};
use crate::utils::date::parse_date;
use crate::utils::time::{parse_datetime, parse_time};
use chrono::Weekday;
use clap::ValueEnum;
use csv::ReaderBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImportTable {
    Employees,
    Punches,
    Leaves,
    Schedules,
    Offsets,
    Holidays,
    RestDays,
}

impl ImportTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportTable::Employees => "employees",
            ImportTable::Punches => "punches",
            ImportTable::Leaves => "leaves",
            ImportTable::Schedules => "schedules",
            ImportTable::Offsets => "schedule_offsets",
            ImportTable::Holidays => "holidays",
            ImportTable::RestDays => "rest_days",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub pay_frequency: String,
    #[serde(default)]
    pub warehouse: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Shape shared by device punches and correction files. Flags missing from
/// the file read as `None`.
#[derive(Debug, Deserialize)]
pub struct PunchRecord {
    pub employee_id: EmployeeId,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub is_correction: Option<bool>,
    #[serde(default)]
    pub is_duplicate: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct LeaveRow {
    pub employee_id: EmployeeId,
    pub permission: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleRecord {
    pub weekday: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct OffsetRecord {
    pub employee_id: EmployeeId,
    pub weekday: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct HolidayRecord {
    pub date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct RestDayRecord {
    pub employee_id: EmployeeId,
    pub weekday: String,
}

/// Read every row of a headed CSV file.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut out = Vec::new();
    for result in reader.deserialize() {
        out.push(result?);
    }
    Ok(out)
}

impl PunchRecord {
    /// Punch with both flags defaulted to `false` when absent.
    pub fn into_event(self) -> AppResult<ClockEvent> {
        let date = parse_date(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))?;
        let time = parse_time(&self.time).ok_or_else(|| AppError::InvalidTime(self.time.clone()))?;
        let kind = EventKind::parse_loose(&self.kind)
            .ok_or_else(|| AppError::InvalidEventKind(self.kind.clone()))?;

        Ok(ClockEvent {
            employee_id: self.employee_id,
            date,
            time,
            kind,
            device: self.device,
            is_correction: self.is_correction.unwrap_or(false),
            is_duplicate: self.is_duplicate.unwrap_or(false),
        })
    }
}

fn weekday(raw: &str) -> AppResult<Weekday> {
    crate::utils::date::parse_weekday(raw)
        .ok_or_else(|| AppError::InvalidDate(format!("weekday '{}'", raw)))
}

/// Signed minutes from `HH:MM`, or a plain (possibly negative) minute count
/// no further than a day from midnight.
pub fn minutes(raw: &str) -> AppResult<i64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        if n.abs() > ShiftWindow::MAX_MINUTES {
            return Err(AppError::InvalidDuration(format!("{} minutes", n)));
        }
        return Ok(n);
    }

    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let t = parse_time(body).ok_or_else(|| AppError::InvalidTime(raw.to_string()))?;
    let m = crate::utils::time::since_midnight(t).num_minutes();
    Ok(if negative { -m } else { m })
}

/// Import `path` into `table`; returns the number of rows written.
pub fn import_file(pool: &mut DbPool, table: ImportTable, path: &Path) -> AppResult<usize> {
    pool.with_transaction(|tx| match table {
        ImportTable::Employees => {
            let rows: Vec<EmployeeRecord> = read_records(path)?;
            for r in &rows {
                let pay_frequency = PayFrequency::from_db_str(&r.pay_frequency)
                    .ok_or_else(|| AppError::InvalidFrequency(r.pay_frequency.clone()))?;
                let employee = Employee {
                    id: r.id,
                    name: r.name.clone(),
                    pay_frequency,
                    warehouse: r.warehouse.clone(),
                    job: r.job.clone(),
                };
                queries::upsert_employee(tx, &employee, r.active.unwrap_or(true))?;
            }
            Ok(rows.len())
        }
        ImportTable::Punches => {
            let rows: Vec<PunchRecord> = read_records(path)?;
            let n = rows.len();
            for r in rows {
                queries::insert_punch(tx, &r.into_event()?)?;
            }
            Ok(n)
        }
        ImportTable::Leaves => {
            let rows: Vec<LeaveRow> = read_records(path)?;
            for r in &rows {
                let start = parse_datetime(&r.start)
                    .ok_or_else(|| AppError::InvalidDate(r.start.clone()))?;
                let end =
                    parse_datetime(&r.end).ok_or_else(|| AppError::InvalidDate(r.end.clone()))?;
                queries::insert_leave(tx, r.employee_id, &r.permission, start, end)?;
            }
            Ok(rows.len())
        }
        ImportTable::Schedules => {
            let rows: Vec<ScheduleRecord> = read_records(path)?;
            for r in &rows {
                queries::upsert_schedule(tx, weekday(&r.weekday)?, minutes(&r.start)?, minutes(&r.end)?)?;
            }
            Ok(rows.len())
        }
        ImportTable::Offsets => {
            let rows: Vec<OffsetRecord> = read_records(path)?;
            for r in &rows {
                queries::upsert_offset(
                    tx,
                    r.employee_id,
                    weekday(&r.weekday)?,
                    minutes(&r.start)?,
                    minutes(&r.end)?,
                )?;
            }
            Ok(rows.len())
        }
        ImportTable::Holidays => {
            let rows: Vec<HolidayRecord> = read_records(path)?;
            for r in &rows {
                let date = parse_date(&r.date).ok_or_else(|| AppError::InvalidDate(r.date.clone()))?;
                queries::upsert_holiday(tx, date, &r.description)?;
            }
            Ok(rows.len())
        }
        ImportTable::RestDays => {
            let rows: Vec<RestDayRecord> = read_records(path)?;
            for r in &rows {
                queries::insert_rest_day(tx, r.employee_id, weekday(&r.weekday)?)?;
            }
            Ok(rows.len())
        }
    })
}
