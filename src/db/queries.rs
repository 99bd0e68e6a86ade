use crate::core::sources::{LeaveSource, PunchSource, ReferenceStore};
use crate::errors::{AppError, AppResult};
use crate::models::calendar::{HolidayCalendar, RestDayCalendar};
use crate::models::employee::{Employee, EmployeeDirectory};
use crate::models::leave::{LeaveRecord, PermissionLabels};
use crate::models::period::PayFrequency;
use crate::models::schedule::{ScheduleOffsets, ShiftWindow, WorkSchedule};
use crate::models::{ClockEvent, EmployeeId, EventKind};
use crate::utils::date::{parse_date, weekday_from_index};
use crate::utils::time::{parse_datetime, parse_time};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rusqlite::params;
use rusqlite::{Connection, Result, Row};
use tracing::warn;

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn date_col(row: &Row, idx: usize) -> Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    parse_date(&raw).ok_or_else(|| conversion_error(idx, AppError::InvalidDate(raw)))
}

fn time_col(row: &Row, idx: usize) -> Result<NaiveTime> {
    let raw: String = row.get(idx)?;
    parse_time(&raw).ok_or_else(|| conversion_error(idx, AppError::InvalidTime(raw)))
}

fn datetime_col(row: &Row, idx: usize) -> Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    parse_datetime(&raw).ok_or_else(|| conversion_error(idx, AppError::InvalidDate(raw)))
}

fn weekday_col(row: &Row, idx: usize) -> Result<Weekday> {
    let raw: i64 = row.get(idx)?;
    weekday_from_index(raw)
        .ok_or_else(|| conversion_error(idx, AppError::InvalidDate(format!("weekday {}", raw))))
}

/// Start and end minute columns at `idx` and `idx + 1`.
fn window_cols(row: &Row, idx: usize) -> Result<ShiftWindow> {
    ShiftWindow::from_minutes(row.get(idx)?, row.get(idx + 1)?)
        .map_err(|e| conversion_error(idx, e))
}

pub fn weekday_index(weekday: Weekday) -> i64 {
    weekday.num_days_from_monday() as i64
}

// ---------------------------
// Loaders
// ---------------------------

/// Active employees only; inactive ones are treated as unknown.
pub fn load_employees(conn: &Connection) -> AppResult<EmployeeDirectory> {
    let mut stmt = conn.prepare(
        "SELECT id, name, pay_frequency, warehouse, job
         FROM employees
         WHERE active = 1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let freq: String = row.get(2)?;
        let pay_frequency = PayFrequency::from_db_str(&freq)
            .ok_or_else(|| conversion_error(2, AppError::InvalidFrequency(freq)))?;
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            pay_frequency,
            warehouse: row.get(3)?,
            job: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(EmployeeDirectory::new(out))
}

pub fn map_punch(row: &Row) -> Result<ClockEvent> {
    let kind_str: String = row.get(3)?;
    let kind = EventKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidEventKind(kind_str)))?;

    Ok(ClockEvent::punch(
        row.get(0)?,
        date_col(row, 1)?,
        time_col(row, 2)?,
        kind,
        row.get::<_, String>(4)?,
    ))
}

pub fn load_punches(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare(
        "SELECT employee_id, date, time, kind, device
         FROM punches
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, time ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_punch,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Leave rows with their permission label resolved. Unknown labels are
/// skipped with a warning.
pub fn load_leaves(conn: &Connection, labels: &PermissionLabels) -> AppResult<Vec<LeaveRecord>> {
    let mut stmt = conn.prepare(
        "SELECT employee_id, permission, start_at, end_at
         FROM leaves
         ORDER BY employee_id ASC, start_at ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, EmployeeId>(0)?,
            row.get::<_, String>(1)?,
            datetime_col(row, 2)?,
            datetime_col(row, 3)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (employee_id, label, start, end) = r?;
        match labels.resolve(&label) {
            Some(kind) => out.push(LeaveRecord::new(employee_id, kind, start, end)),
            None => warn!(employee_id, label = %label, "unknown permission label, leave skipped"),
        }
    }
    Ok(out)
}

pub fn load_work_schedule(conn: &Connection) -> AppResult<WorkSchedule> {
    let mut stmt = conn.prepare(
        "SELECT weekday, start_minutes, end_minutes FROM schedules ORDER BY weekday ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            weekday_col(row, 0)?,
            window_cols(row, 1)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    WorkSchedule::from_rows(out)
}

pub fn load_schedule_offsets(conn: &Connection) -> AppResult<ScheduleOffsets> {
    let mut stmt = conn.prepare(
        "SELECT employee_id, weekday, start_minutes, end_minutes FROM schedule_offsets",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, EmployeeId>(0)?,
            weekday_col(row, 1)?,
            window_cols(row, 2)?,
        ))
    })?;

    let mut out = ScheduleOffsets::new();
    for r in rows {
        let (id, weekday, window) = r?;
        out.insert(id, weekday, window);
    }
    Ok(out)
}

pub fn load_holidays(conn: &Connection) -> AppResult<HolidayCalendar> {
    let mut stmt = conn.prepare("SELECT date FROM holidays")?;
    let rows = stmt.query_map([], |row| date_col(row, 0))?;

    let mut out = HolidayCalendar::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

pub fn load_rest_days(conn: &Connection, default_days: &[Weekday]) -> AppResult<RestDayCalendar> {
    let mut stmt =
        conn.prepare("SELECT employee_id, weekday FROM rest_days ORDER BY employee_id, weekday")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, EmployeeId>(0)?, weekday_col(row, 1)?))
    })?;

    let mut out = RestDayCalendar::new(default_days.to_vec());
    for r in rows {
        let (id, weekday) = r?;
        out.add_override(id, weekday);
    }
    Ok(out)
}

/// Row counts per table, for `init` and `import` summaries.
pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}

// ---------------------------
// Writers
// ---------------------------

pub fn upsert_employee(conn: &Connection, e: &Employee, active: bool) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employees (id, name, pay_frequency, warehouse, job, active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            pay_frequency = excluded.pay_frequency,
            warehouse = excluded.warehouse,
            job = excluded.job,
            active = excluded.active",
        params![
            e.id,
            e.name,
            e.pay_frequency.as_str(),
            e.warehouse,
            e.job,
            active as i32
        ],
    )?;
    Ok(())
}

pub fn insert_punch(conn: &Connection, ev: &ClockEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO punches (employee_id, date, time, kind, device)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ev.employee_id,
            ev.date_str(),
            ev.time_str(),
            ev.kind.to_db_str(),
            ev.device
        ],
    )?;
    Ok(())
}

/// Stores the free-text label as given; it is resolved on load.
pub fn insert_leave(
    conn: &Connection,
    employee_id: EmployeeId,
    permission: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO leaves (employee_id, permission, start_at, end_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            employee_id,
            permission,
            start.format("%Y-%m-%d %H:%M:%S").to_string(),
            end.format("%Y-%m-%d %H:%M:%S").to_string()
        ],
    )?;
    Ok(())
}

pub fn upsert_schedule(conn: &Connection, weekday: Weekday, start: i64, end: i64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO schedules (weekday, start_minutes, end_minutes)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(weekday) DO UPDATE SET
            start_minutes = excluded.start_minutes,
            end_minutes = excluded.end_minutes",
        params![weekday_index(weekday), start, end],
    )?;
    Ok(())
}

pub fn upsert_offset(
    conn: &Connection,
    employee_id: EmployeeId,
    weekday: Weekday,
    start: i64,
    end: i64,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO schedule_offsets (employee_id, weekday, start_minutes, end_minutes)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(employee_id, weekday) DO UPDATE SET
            start_minutes = excluded.start_minutes,
            end_minutes = excluded.end_minutes",
        params![employee_id, weekday_index(weekday), start, end],
    )?;
    Ok(())
}

pub fn upsert_holiday(conn: &Connection, date: NaiveDate, description: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO holidays (date, description) VALUES (?1, ?2)
         ON CONFLICT(date) DO UPDATE SET description = excluded.description",
        params![date.format("%Y-%m-%d").to_string(), description],
    )?;
    Ok(())
}

pub fn insert_rest_day(conn: &Connection, employee_id: EmployeeId, weekday: Weekday) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO rest_days (employee_id, weekday) VALUES (?1, ?2)",
        params![employee_id, weekday_index(weekday)],
    )?;
    Ok(())
}

// ---------------------------
// Store adapter
// ---------------------------

/// SQLite-backed punches, leaves and reference tables.
pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl PunchSource for SqliteStore<'_> {
    fn punches(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<ClockEvent>> {
        load_punches(self.conn, start, end)
            .map_err(|e| AppError::MissingSource(format!("clock events: {}", e)))
    }
}

impl LeaveSource for SqliteStore<'_> {
    fn leaves(&self, labels: &PermissionLabels) -> AppResult<Vec<LeaveRecord>> {
        load_leaves(self.conn, labels)
    }
}

impl ReferenceStore for SqliteStore<'_> {
    fn employees(&self) -> AppResult<EmployeeDirectory> {
        load_employees(self.conn)
            .map_err(|e| AppError::MissingSource(format!("employee directory: {}", e)))
    }

    fn work_schedule(&self) -> AppResult<WorkSchedule> {
        load_work_schedule(self.conn)
    }

    fn schedule_offsets(&self) -> AppResult<ScheduleOffsets> {
        load_schedule_offsets(self.conn)
    }

    fn holidays(&self) -> AppResult<HolidayCalendar> {
        load_holidays(self.conn)
    }

    fn rest_days(&self, default_days: &[Weekday]) -> AppResult<RestDayCalendar> {
        load_rest_days(self.conn, default_days)
    }
}
