#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use punchroll::models::{ClockEvent, EmployeeId, EventKind};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn pr() -> Command {
    cargo_bin_cmd!("punchroll")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchroll.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture file");
    path.to_string_lossy().to_string()
}

/// A database plus a config file pointing at it, both inside `dir`.
pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub db: String,
    pub config: String,
    pub corrections: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("punchroll.sqlite").to_string_lossy().to_string();
        let corrections = dir.path().join("corrections");
        fs::create_dir_all(&corrections).expect("corrections dir");

        let yaml = format!(
            "database: '{}'\ncorrections_dir: '{}'\n",
            db,
            corrections.to_string_lossy()
        );
        let config = write_file(dir.path(), "punchroll.conf", &yaml);

        Self {
            dir,
            db,
            config,
            corrections,
        }
    }

    /// Command with `--config-file` already set.
    pub fn cmd(&self) -> Command {
        let mut cmd = pr();
        cmd.args(["--config-file", &self.config]);
        cmd
    }

    pub fn import(&self, table: &str, file_name: &str, content: &str) {
        let file = write_file(self.dir.path(), file_name, content);
        self.cmd()
            .args(["import", "--table", table, "--file", &file])
            .assert()
            .success();
    }

    /// Two employees, a Mon-Sat 09:00-18:00 schedule, one valid and one
    /// incomplete day in January 2026.
    pub fn seeded() -> Self {
        let fx = Self::new();
        fx.cmd().arg("init").assert().success();

        fx.import(
            "employees",
            "employees.csv",
            "id,name,pay_frequency,warehouse,job\n\
             1,Ana,weekly,North,picker\n\
             2,Luis,biweekly,South,driver\n",
        );
        fx.import(
            "schedules",
            "schedules.csv",
            "weekday,start,end\n\
             Monday,09:00,18:00\n\
             Tuesday,09:00,18:00\n\
             Wednesday,09:00,18:00\n\
             Thursday,09:00,18:00\n\
             Friday,09:00,18:00\n\
             Saturday,09:00,14:00\n\
             Sunday,0,0\n",
        );
        fx.import(
            "punches",
            "punches.csv",
            "employee_id,date,time,kind,device\n\
             1,2026-01-05,09:10:00,checkIn,gate\n\
             1,2026-01-05,13:00:00,breakOut,gate\n\
             1,2026-01-05,15:10:00,breakIn,gate\n\
             1,2026-01-05,18:00:00,checkOut,gate\n\
             2,2026-01-06,09:00:00,checkIn,gate\n\
             2,2026-01-06,13:00:00,breakOut,gate\n\
             2,2026-01-06,18:00:00,checkOut,gate\n",
        );
        fx
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

pub fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime")
}

pub fn punch(id: EmployeeId, d: &str, t: &str, kind: EventKind) -> ClockEvent {
    ClockEvent::punch(id, date(d), time(t), kind, "dev")
}

pub fn correction(id: EmployeeId, d: &str, t: &str, kind: EventKind) -> ClockEvent {
    ClockEvent::correction(id, date(d), time(t), kind, "manual")
}

/// A complete, valid day: in, lunch out/in, out.
pub fn full_day(id: EmployeeId, d: &str, times: [&str; 4]) -> Vec<ClockEvent> {
    vec![
        punch(id, d, times[0], EventKind::CheckIn),
        punch(id, d, times[1], EventKind::BreakOut),
        punch(id, d, times[2], EventKind::BreakIn),
        punch(id, d, times[3], EventKind::CheckOut),
    ]
}
