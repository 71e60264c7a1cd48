mod common;
use common::day;
use rtimecard::core::business::WorkSessionBusiness;
use rtimecard::db::backend::SessionBackend;
use rtimecard::db::log::load_log;
use rtimecard::db::pool::DbPool;
use rtimecard::db::sqlite::SqliteBackend;
use rtimecard::errors::AppError;
use rtimecard::models::session::{SessionPatch, SessionStatus};
use rtimecard::utils::time::parse_time;
use rusqlite::Connection;

fn backend() -> SqliteBackend {
    SqliteBackend::new(DbPool::in_memory().unwrap(), Some("ana".into()))
}

#[test]
fn current_user_requires_a_signed_in_user() {
    assert_eq!(backend().current_user_id().unwrap(), "ana");

    for user in [None, Some("   ".to_string())] {
        let b = SqliteBackend::new(DbPool::in_memory().unwrap(), user);
        let err = b.current_user_id().unwrap_err();
        assert!(matches!(err, AppError::NotAuthenticated));
        assert_eq!(err.kind(), "auth.notAuthenticated");
    }
}

#[test]
fn upsert_keeps_one_session_per_user_and_day() {
    let b = backend();
    let d = day("2024-02-01");

    let first = b
        .upsert_session(&WorkSessionBusiness::create_clock_in_data("ana", d, "09:00").unwrap())
        .unwrap();
    assert_eq!(first.status, SessionStatus::Incomplete);
    assert!(!first.created_at.is_empty());

    let second = b
        .upsert_session(
            &WorkSessionBusiness::create_manual_edit_data("ana", d, "08:00", Some("16:30")).unwrap(),
        )
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.status, SessionStatus::Complete);
    assert_eq!(second.worked_time_real, Some(8.5));
    assert!(second.manual_edit);

    let all = b.find_sessions_by_user_and_period("ana", d, d).unwrap();
    assert_eq!(all.len(), 1);

    // another user on the same day is a separate session
    let bob = b
        .upsert_session(&WorkSessionBusiness::create_clock_in_data("bob", d, "10:00").unwrap())
        .unwrap();
    assert_ne!(bob.id, first.id);
}

#[test]
fn update_patches_only_given_fields() {
    let b = backend();
    let d = day("2024-02-01");
    b.upsert_session(&WorkSessionBusiness::create_manual_edit_data("ana", d, "09:00", None).unwrap())
        .unwrap();

    let patch = SessionPatch {
        end_time: parse_time("17:00"),
        worked_time_real: Some(8.0),
        status: Some(SessionStatus::Complete),
        ..SessionPatch::default()
    };
    let s = b.update_session("ana", d, &patch).unwrap();

    assert_eq!(s.start_time, parse_time("09:00"));
    assert_eq!(s.end_time, parse_time("17:00"));
    assert_eq!(s.status, SessionStatus::Complete);
    assert!(s.manual_edit, "untouched field keeps its value");
}

#[test]
fn update_and_delete_report_missing_sessions() {
    let b = backend();
    let d = day("2024-02-01");

    let patch = SessionPatch {
        status: Some(SessionStatus::Complete),
        ..SessionPatch::default()
    };
    assert!(matches!(
        b.update_session("ana", d, &patch),
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        b.update_session("ana", d, &SessionPatch::default()),
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        b.delete_session("ana", d),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn delete_removes_the_session() {
    let b = backend();
    let d = day("2024-02-01");
    b.upsert_session(&WorkSessionBusiness::create_clock_in_data("ana", d, "09:00").unwrap())
        .unwrap();

    b.delete_session("ana", d).unwrap();
    assert!(b.find_session("ana", d).unwrap().is_none());
}

#[test]
fn period_queries_are_bounded_and_ordered() {
    let b = backend();
    for date in ["2024-01-31", "2024-02-01", "2024-02-15", "2024-02-29", "2024-03-01"] {
        b.upsert_session(
            &WorkSessionBusiness::create_clock_in_data("ana", day(date), "09:00").unwrap(),
        )
        .unwrap();
    }

    let (start, end) = (day("2024-02-01"), day("2024-02-29"));

    let all = b.find_sessions_by_user_and_period("ana", start, end).unwrap();
    let dates: Vec<String> = all.iter().map(|s| s.date_str()).collect();
    assert_eq!(dates, ["2024-02-01", "2024-02-15", "2024-02-29"]);

    let (page, total) = b
        .find_sessions_by_user_and_period_paged("ana", start, end, 0, 2)
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(page[0].date_str(), "2024-02-29");
    assert_eq!(page[1].date_str(), "2024-02-15");

    let (page, total) = b
        .find_sessions_by_user_and_period_paged("ana", start, end, 2, 2)
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].date_str(), "2024-02-01");

    assert!(b
        .find_sessions_by_user_and_period("bob", start, end)
        .unwrap()
        .is_empty());
}

#[test]
fn missing_uniqueness_constraint_is_reported_distinctly() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE work_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            date TEXT NOT NULL,
            start_time TEXT,
            end_time TEXT,
            worked_time_real REAL,
            status TEXT NOT NULL DEFAULT 'sem_registro',
            manual_edit INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT '',
            updated_at TEXT NOT NULL DEFAULT ''
        );",
    )
    .unwrap();

    let b = SqliteBackend::new(DbPool::from_connection(conn).unwrap(), Some("ana".into()));
    let data = WorkSessionBusiness::create_clock_in_data("ana", day("2024-02-01"), "09:00").unwrap();

    let err = b.upsert_session(&data).unwrap_err();
    assert!(matches!(err, AppError::ConstraintMisconfigured(_)), "{err:?}");
    assert_eq!(err.kind(), "database.constraintError");
}

#[test]
fn constraint_violations_are_conflicts() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE work_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            date TEXT NOT NULL,
            start_time TEXT,
            end_time TEXT,
            worked_time_real REAL CHECK(worked_time_real IS NULL OR worked_time_real <= 12),
            status TEXT NOT NULL DEFAULT 'sem_registro',
            manual_edit INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT '',
            updated_at TEXT NOT NULL DEFAULT '',
            UNIQUE(user_id, date)
        );",
    )
    .unwrap();

    let b = SqliteBackend::new(DbPool::from_connection(conn).unwrap(), Some("ana".into()));
    let data =
        WorkSessionBusiness::create_manual_edit_data("ana", day("2024-02-01"), "06:00", Some("22:00"))
            .unwrap();

    let err = b.upsert_session(&data).unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");
}

#[test]
fn writes_leave_an_audit_trail() {
    let b = backend();
    let d = day("2024-02-01");
    b.upsert_session(&WorkSessionBusiness::create_clock_in_data("ana", d, "09:00").unwrap())
        .unwrap();
    b.delete_session("ana", d).unwrap();

    let ops: Vec<String> = load_log(&b.pool().conn, 10)
        .unwrap()
        .into_iter()
        .map(|r| r.operation)
        .collect();

    assert_eq!(&ops[..2], ["delete", "upsert"]);
}
