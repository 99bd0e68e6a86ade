mod common;
use common::{Fixture, pr, setup_test_db, temp_out, write_file};
use predicates::str::contains;
use std::fs;

const DATE: &str = "2026-01-10";

#[test]
fn test_init_creates_config_and_database() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("punchroll.conf");
    let db = setup_test_db("init_creates");

    pr()
        .args(["--config-file", config.to_str().expect("utf8 path")])
        .args(["--db", &db, "init"])
        .assert()
        .success()
        .stdout(contains("Config file created"))
        .stdout(contains("Database initialized"));

    assert!(config.exists());
    assert!(std::path::Path::new(&db).exists());

    // second run keeps the existing file
    pr()
        .args(["--config-file", config.to_str().expect("utf8 path")])
        .args(["--db", &db, "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_periods_for_processing_date() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["--date", DATE, "periods"])
        .assert()
        .success()
        .stdout(contains("Pay periods as of 2026-01-09"))
        .stdout(contains("biweekly-1"))
        .stdout(contains("weekly-2"))
        .stdout(contains("2025-12-27"));
}

#[test]
fn test_bad_processing_date_is_rejected() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["--date", "10/01/2026", "periods"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_config_check_reports_bad_constants() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_file(
        dir.path(),
        "bad.conf",
        "first_half_end_day: 15\nsecond_half_start_day: 20\n",
    );

    pr()
        .args(["--config-file", &config, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));

    let good = write_file(dir.path(), "good.conf", "lunch_duration_limit: '1h30m'\n");
    pr()
        .args(["--config-file", &good, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}

#[test]
fn test_config_print_shows_effective_values() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("first_half_end_day: 15"))
        .stdout(contains("corrections_dir"));
}

#[test]
fn test_check_lists_incomplete_days() {
    let fx = Fixture::seeded();

    fx.cmd()
        .args(["--date", DATE, "check"])
        .assert()
        .success()
        .stdout(contains("3 punches on days failing an integrity rule"))
        .stdout(contains("Luis"))
        .stdout(contains("breakOut"));
}

#[test]
fn test_check_can_focus_on_one_day() {
    let fx = Fixture::seeded();

    fx.cmd()
        .args(["--date", DATE, "check", "--day", "2026-01-05"])
        .assert()
        .success()
        .stdout(contains("No invalid punches on 2026-01-05"));

    let out = fx.dir.path().join("day.csv");
    let out = out.to_str().expect("utf8 path");
    fx.cmd()
        .args(["--date", DATE, "check", "--day", "2026-01-06", "--file", out])
        .assert()
        .success()
        .stdout(contains("3 punches on days failing an integrity rule"))
        .stdout(contains("South"));

    let body = fs::read_to_string(out).expect("read export");
    assert_eq!(body.lines().skip(1).count(), 3);
    assert!(body.lines().skip(1).all(|l| l.contains(",2026-01-06,")));

    fx.cmd()
        .args(["--date", DATE, "check", "--day", "06/01/2026"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_correction_file_repairs_the_day() {
    let fx = Fixture::seeded();
    write_file(
        &fx.corrections,
        "corrections-2026-01.csv",
        "employee_id,date,time,kind,device\n\
         2,2026-01-06,14:00,breakIn,manual\n",
    );

    fx.cmd()
        .args(["--date", DATE, "check"])
        .assert()
        .success()
        .stdout(contains("No invalid punches up to 2026-01-09"));
}

#[test]
fn test_check_can_export_invalid_punches() {
    let fx = Fixture::seeded();
    let out = fx.dir.path().join("invalid.csv");
    let out = out.to_str().expect("utf8 path");

    fx.cmd()
        .args(["--date", DATE, "check", "--format", "csv", "--file", out])
        .assert()
        .success()
        .stdout(contains("CSV export completed (3 rows)"));

    let body = fs::read_to_string(out).expect("read export");
    assert!(body.starts_with("employee_id,name,warehouse,job,date,time,kind"));
    assert!(body.contains("2,Luis,South,driver,2026-01-06,13:00:00,breakOut"));
}

#[test]
fn test_export_punctuality_csv() {
    let fx = Fixture::seeded();
    let out = temp_out("punctuality_csv", "csv");

    fx.cmd()
        .args(["--date", DATE, "export", "--what", "punctuality", "--file", &out])
        .assert()
        .success();

    let body = fs::read_to_string(&out).expect("read export");
    assert!(body.starts_with(
        "period,employee_id,name,warehouse,job,late_time,early_time,exceeding_lunch_time"
    ));
    assert!(body.contains("weekly-2,1,Ana,North,picker,00:10:00,00:00:00,00:11:00"));
    // Luis is biweekly: one row, zero-filled since his day is invalid
    assert!(body.contains("biweekly-1,2,Luis,South,driver,00:00:00,00:00:00,00:00:00"));
    fs::remove_file(&out).ok();
}

#[test]
fn test_export_leave_json() {
    let fx = Fixture::seeded();
    fx.import(
        "leaves",
        "leaves.csv",
        "employee_id,permission,start,end\n\
         2,vacation,2026-01-07,2026-01-09\n",
    );
    let out = fx.dir.path().join("leave.json");
    let out = out.to_str().expect("utf8 path");

    fx.cmd()
        .args([
            "--date", DATE, "export", "--what", "leave", "--format", "json", "--file", out,
        ])
        .assert()
        .success();

    let body = fs::read_to_string(out).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&body).expect("valid json");
    let luis = rows
        .as_array()
        .and_then(|a| a.iter().find(|r| r["period"] == "biweekly-1"))
        .expect("biweekly-1 row");
    assert_eq!(luis["name"], "Luis");
    assert_eq!(luis["vacation_days"], 3);
}

#[test]
fn test_export_refuses_relative_paths() {
    let fx = Fixture::seeded();

    fx.cmd()
        .args(["--date", DATE, "export", "--what", "periods", "--file", "periods.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_needs_force_to_overwrite() {
    let fx = Fixture::seeded();
    let out = write_file(fx.dir.path(), "periods.csv", "old");

    fx.cmd()
        .args(["--date", DATE, "export", "--what", "periods", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    fx.cmd()
        .args(["--date", DATE, "export", "--what", "periods", "--file", &out, "--force"])
        .assert()
        .success();

    let body = fs::read_to_string(&out).expect("read export");
    assert!(body.contains("weekly-2,weekly,2026-01-03,2026-01-09"));
    assert!(!body.starts_with("old"));
}

#[test]
fn test_report_filters_one_period() {
    let fx = Fixture::seeded();

    fx.cmd()
        .args(["--date", DATE, "report", "--period", "weekly-2"])
        .assert()
        .success()
        .stdout(contains("weekly-2"))
        .stdout(contains("Ana"));

    fx.cmd()
        .args(["--date", DATE, "report", "--period", "monthly-9"])
        .assert()
        .failure()
        .stderr(contains("unknown period"));
}

#[test]
fn test_import_rejects_bad_event_kind() {
    let fx = Fixture::seeded();
    let file = write_file(
        fx.dir.path(),
        "bad_punches.csv",
        "employee_id,date,time,kind\n1,2026-01-07,09:00,coffee\n",
    );

    fx.cmd()
        .args(["import", "--table", "punches", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("Invalid event kind"));
}

#[test]
fn test_log_records_operations() {
    let fx = Fixture::seeded();
    fx.cmd().args(["--date", DATE, "check"]).assert().success();

    fx.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("import"))
        .stdout(contains("check"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_import_rejects_out_of_range_schedule_minutes() {
    let fx = Fixture::seeded();
    let file = write_file(
        fx.dir.path(),
        "bad_offsets.csv",
        "employee_id,weekday,start,end\n1,Monday,99999999999999,0\n",
    );

    fx.cmd()
        .args(["import", "--table", "offsets", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));
}
