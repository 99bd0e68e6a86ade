use rusqlite::{Connection, OptionalExtension, Result};
use tracing::info;

/// Ensure that the `log` table exists. Migrations record themselves here.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260105_0001_reference_tables",
        description: "Created employees, schedules, schedule_offsets, holidays, rest_days",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employees (
            id             INTEGER PRIMARY KEY,
            name           TEXT NOT NULL,
            pay_frequency  TEXT NOT NULL CHECK(pay_frequency IN ('weekly','biweekly')),
            warehouse      TEXT NOT NULL DEFAULT '',
            job            TEXT NOT NULL DEFAULT '',
            active         INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS schedules (
            weekday        INTEGER PRIMARY KEY CHECK(weekday BETWEEN 0 AND 6),
            start_minutes  INTEGER NOT NULL,
            end_minutes    INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS schedule_offsets (
            employee_id    INTEGER NOT NULL,
            weekday        INTEGER NOT NULL CHECK(weekday BETWEEN 0 AND 6),
            start_minutes  INTEGER NOT NULL DEFAULT 0,
            end_minutes    INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (employee_id, weekday)
        );

        CREATE TABLE IF NOT EXISTS holidays (
            date         TEXT PRIMARY KEY,
            description  TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS rest_days (
            employee_id  INTEGER NOT NULL,
            weekday      INTEGER NOT NULL CHECK(weekday BETWEEN 0 AND 6),
            PRIMARY KEY (employee_id, weekday)
        );
        "#,
    },
    Migration {
        version: "20260105_0002_punches",
        description: "Created punches table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS punches (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL,
            date         TEXT NOT NULL,
            time         TEXT NOT NULL,
            kind         TEXT NOT NULL DEFAULT 'undefined'
                         CHECK(kind IN ('undefined','checkIn','breakOut','breakIn','checkOut')),
            device       TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_punches_date ON punches(date, time);
        CREATE INDEX IF NOT EXISTS idx_punches_employee ON punches(employee_id, date);
        "#,
    },
    Migration {
        version: "20260105_0003_leaves",
        description: "Created leaves table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS leaves (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL,
            permission   TEXT NOT NULL,
            start_at     TEXT NOT NULL,
            end_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_leaves_employee ON leaves(employee_id);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations, each one at most once.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch(m.sql)?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.version, m.description],
        )?;

        info!(version = m.version, "{}", m.description);
    }

    Ok(())
}
