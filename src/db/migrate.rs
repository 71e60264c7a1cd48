//! Schema creation and versioned migrations.
//!
//! Applied migrations are recorded in the `log` table with
//! `operation = 'migration_applied'` and the version as `target`.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
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

/// Create the `work_sessions` table. `(user_id, date)` is the natural key
/// that upserts target.
fn create_work_sessions_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_sessions (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id          TEXT NOT NULL,
            date             TEXT NOT NULL,
            start_time       TEXT,
            end_time         TEXT,
            worked_time_real REAL,
            status           TEXT NOT NULL DEFAULT 'sem_registro'
                             CHECK(status IN ('sem_registro','incompleta','completa')),
            manual_edit      INTEGER NOT NULL DEFAULT 0,
            created_at       TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now')),
            updated_at       TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now')),
            UNIQUE(user_id, date)
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

const MIGRATIONS: &[Migration] = &[Migration {
    version: "20250301_0001_idx_sessions_user_date",
    description: "Index work_sessions by user and date for monthly history",
    sql: "CREATE INDEX IF NOT EXISTS idx_sessions_user_date ON work_sessions(user_id, date DESC);",
}];

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tracing::info!(version = m.version, "migration applied");
    Ok(())
}

/// Public entry point: create missing tables and run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    create_work_sessions_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}
