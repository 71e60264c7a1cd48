use crate::errors::{AppError, AppResult};
use crate::models::session::{CreateSessionData, SessionPatch, SessionStatus, WorkSession};
use crate::utils::date::{DATE_FMT, format_date};
use crate::utils::time::{TIME_FMT, format_time};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

const COLUMNS: &str =
    "id, user_id, date, start_time, end_time, worked_time_real, status, manual_edit, created_at, updated_at";

const NOW_SQL: &str = "strftime('%Y-%m-%dT%H:%M:%SZ','now')";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_time(idx: usize, raw: Option<String>) -> rusqlite::Result<Option<NaiveTime>> {
    raw.filter(|s| !s.is_empty())
        .map(|s| {
            crate::utils::time::parse_time(&s).ok_or_else(|| conversion_error(idx, AppError::InvalidTime(s)))
        })
        .transpose()
}

pub fn map_row(row: &Row) -> rusqlite::Result<WorkSession> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FMT)
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = SessionStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(6, AppError::Conflict(format!("Invalid status: {}", status_str)))
    })?;

    Ok(WorkSession {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        start_time: parse_db_time(3, row.get("start_time")?)?,
        end_time: parse_db_time(4, row.get("end_time")?)?,
        worked_time_real: row.get("worked_time_real")?,
        status,
        manual_edit: row.get("manual_edit")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Translate write failures into the backend error kinds.
pub fn map_write_error(e: rusqlite::Error) -> AppError {
    let text = e.to_string();

    if text.contains("ON CONFLICT clause does not match") {
        return AppError::ConstraintMisconfigured(text);
    }

    if let rusqlite::Error::SqliteFailure(err, _) = &e
        && err.code == rusqlite::ErrorCode::ConstraintViolation
    {
        return AppError::Conflict(text);
    }

    AppError::Db(e)
}

fn time_value(t: Option<NaiveTime>) -> Option<String> {
    t.map(|t| t.format(TIME_FMT).to_string())
}

pub fn find_session(conn: &Connection, user_id: &str, date: NaiveDate) -> AppResult<Option<WorkSession>> {
    let sql = format!("SELECT {COLUMNS} FROM work_sessions WHERE user_id = ?1 AND date = ?2");
    let row = conn
        .query_row(&sql, params![user_id, format_date(&date)], map_row)
        .optional()?;
    Ok(row)
}

pub fn upsert_session(conn: &Connection, data: &CreateSessionData) -> AppResult<WorkSession> {
    let sql = format!(
        "INSERT INTO work_sessions
            (user_id, date, start_time, end_time, worked_time_real, status, manual_edit)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(user_id, date) DO UPDATE SET
            start_time       = excluded.start_time,
            end_time         = excluded.end_time,
            worked_time_real = excluded.worked_time_real,
            status           = excluded.status,
            manual_edit      = excluded.manual_edit,
            updated_at       = {NOW_SQL}
         RETURNING {COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            data.user_id,
            format_date(&data.date),
            time_value(data.start_time),
            time_value(data.end_time),
            data.worked_time_real,
            data.status.to_db_str(),
            data.manual_edit,
        ],
        map_row,
    )
    .map_err(map_write_error)
}

pub fn update_session(
    conn: &Connection,
    user_id: &str,
    date: NaiveDate,
    patch: &SessionPatch,
) -> AppResult<Option<WorkSession>> {
    if patch.is_empty() {
        return find_session(conn, user_id, date);
    }

    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(t) = patch.start_time {
        sets.push("start_time");
        values.push(Value::Text(format_time(&t)));
    }
    if let Some(t) = patch.end_time {
        sets.push("end_time");
        values.push(Value::Text(format_time(&t)));
    }
    if let Some(h) = patch.worked_time_real {
        sets.push("worked_time_real");
        values.push(Value::Real(h));
    }
    if let Some(s) = patch.status {
        sets.push("status");
        values.push(Value::Text(s.to_db_str().to_string()));
    }
    if let Some(m) = patch.manual_edit {
        sets.push("manual_edit");
        values.push(Value::Integer(i64::from(m)));
    }

    let assignments: Vec<String> = sets
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{col} = ?{}", i + 1))
        .collect();
    let n = values.len();

    let sql = format!(
        "UPDATE work_sessions SET {}, updated_at = {NOW_SQL}
         WHERE user_id = ?{} AND date = ?{}
         RETURNING {COLUMNS}",
        assignments.join(", "),
        n + 1,
        n + 2
    );

    values.push(Value::Text(user_id.to_string()));
    values.push(Value::Text(format_date(&date)));

    conn.query_row(&sql, params_from_iter(values), map_row)
        .optional()
        .map_err(map_write_error)
}

/// Returns the number of deleted rows.
pub fn delete_session(conn: &Connection, user_id: &str, date: NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM work_sessions WHERE user_id = ?1 AND date = ?2",
        params![user_id, format_date(&date)],
    )?;
    Ok(n)
}

pub fn load_period(
    conn: &Connection,
    user_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<WorkSession>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM work_sessions
         WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![user_id, format_date(&start), format_date(&end)],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_period_page(
    conn: &Connection,
    user_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    offset: usize,
    limit: usize,
) -> AppResult<(Vec<WorkSession>, usize)> {
    let (s, e) = (format_date(&start), format_date(&end));

    let total: i64 = conn.query_row(
        "SELECT COUNT(*) FROM work_sessions
         WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3",
        params![user_id, s, e],
        |row| row.get(0),
    )?;

    let sql = format!(
        "SELECT {COLUMNS} FROM work_sessions
         WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date DESC
         LIMIT ?4 OFFSET ?5"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![user_id, s, e, limit as i64, offset as i64],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok((out, total as usize))
}
