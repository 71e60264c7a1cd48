#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimecard::core::cache::{QueryCache, TtlCache};
use rtimecard::core::service::WorkSessionService;
use rtimecard::db::pool::DbPool;
use rtimecard::db::sqlite::SqliteBackend;
use rtimecard::models::session::{SessionStatus, WorkSession};
use rtimecard::utils::time::parse_time;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Binary under test, with HOME pointed at a private directory so the
/// user's real configuration is never read.
pub fn rtc() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rtimecard_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rtimecard");
    cmd.env("HOME", &home).env("RUST_LOG", "off");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimecard.sqlite", name));
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

/// Initialize a test DB through the CLI
pub fn init_db(db_path: &str) {
    rtc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Init DB and register a few February 2024 days for user `ana`
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for (date, start, end) in [
        ("2024-02-01", "09:00", Some("17:00")),
        ("2024-02-02", "09:00", Some("17:15")),
        ("2024-02-05", "08:30", None),
    ] {
        let mut args = vec!["--db", db_path, "--user", "ana", "add", date, "--in", start];
        if let Some(e) = end {
            args.extend(["--out", e]);
        }
        rtc().args(&args).assert().success();
    }
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// In-memory service signed in as `user` (or nobody).
pub fn service_for(user: Option<&str>) -> WorkSessionService {
    service_with_cache(user, Arc::new(TtlCache::new()))
}

pub fn service_with_cache(user: Option<&str>, cache: Arc<dyn QueryCache>) -> WorkSessionService {
    let pool = DbPool::in_memory().expect("in-memory db");
    let backend = SqliteBackend::new(pool, user.map(str::to_string));
    WorkSessionService::new(Box::new(backend), cache, Duration::from_secs(60))
}

/// Session fixture for pure-logic tests.
pub fn session(
    date: &str,
    start: Option<&str>,
    end: Option<&str>,
    worked: Option<f64>,
    status: SessionStatus,
) -> WorkSession {
    WorkSession {
        id: 0,
        user_id: "ana".into(),
        date: day(date),
        start_time: start.and_then(parse_time),
        end_time: end.and_then(parse_time),
        worked_time_real: worked,
        status,
        manual_edit: false,
        created_at: String::new(),
        updated_at: String::new(),
    }
}
