use predicates::prelude::*;
mod common;
use common::{init_db, init_db_with_data, rtc, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rtc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"))
        .stdout(predicate::str::contains("No user configured"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_init_in_test_mode_leaves_config_untouched() {
    let db_path = setup_test_db("init_test_mode");
    let conf = std::env::temp_dir()
        .join("rtimecard_test_home")
        .join(".rtimecard")
        .join("rtimecard.conf");

    rtc()
        .args(["--db", &db_path, "--user", "ana", "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file:").not());

    assert!(!conf.exists());
}

#[test]
fn test_add_and_list_month() {
    let db_path = setup_test_db("add_list");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "list", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024"))
        .stdout(predicate::str::contains("2024-02-01"))
        .stdout(predicate::str::contains("2024-02-05"))
        .stdout(predicate::str::contains("3 session(s)"));
}

#[test]
fn test_list_is_paged() {
    let db_path = setup_test_db("list_paged");
    init_db_with_data(&db_path);

    rtc()
        .args([
            "--db", &db_path, "--user", "ana", "list", "--month", "2024-02", "--per-page", "2",
            "--page", "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-01"))
        .stdout(predicate::str::contains("2024-02-05").not())
        .stdout(predicate::str::contains("Page 2/2"));
}

#[test]
fn test_list_rejects_oversized_pages() {
    let db_path = setup_test_db("list_oversized");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "list", "--month", "2024-02", "--per-page", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page size must be between 1 and 100"));
}

#[test]
fn test_list_rejects_out_of_range_page() {
    let db_path = setup_test_db("list_huge_page");
    init_db(&db_path);

    rtc()
        .args([
            "--db", &db_path, "--user", "ana", "list", "--month", "2024-02", "--page",
            "18446744073709551615",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_times_with_seconds_are_rejected() {
    let db_path = setup_test_db("times_seconds");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "in", "--date", "2024-03-04", "--at", "09:00:30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn test_complete_day_needs_out_when_revised() {
    let db_path = setup_test_db("revise_complete");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "add", "2024-02-01", "--in", "08:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pass --out"));
}

#[test]
fn test_sessions_are_per_user() {
    let db_path = setup_test_db("per_user");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "bruno", "list", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions for 2024-02"));
}

#[test]
fn test_clock_in_and_out() {
    let db_path = setup_test_db("clock_in_out");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "in", "--date", "2024-03-04", "--at", "09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clocked in at 09:00"))
        .stdout(predicate::str::contains("incomplete"));

    rtc()
        .args(["--db", &db_path, "--user", "ana", "in", "--date", "2024-03-04", "--at", "09:30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already clocked in"));

    rtc()
        .args(["--db", &db_path, "--user", "ana", "out", "--date", "2024-03-04", "--at", "17:15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clocked out at 17:15"))
        .stdout(predicate::str::contains("worked 07h 15m"))
        .stdout(predicate::str::contains("incomplete").not());
}

#[test]
fn test_clock_out_before_clock_in_fails() {
    let db_path = setup_test_db("clock_reversed");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "in", "--date", "2024-03-04", "--at", "17:00"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "--user", "ana", "out", "--date", "2024-03-04", "--at", "08:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be later than"));
}

#[test]
fn test_clock_out_without_session_fails() {
    let db_path = setup_test_db("clock_out_missing");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "out", "--date", "2024-03-04", "--at", "17:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No session recorded on 2024-03-04"));
}

#[test]
fn test_invalid_input_is_rejected() {
    let db_path = setup_test_db("invalid_input");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "add", "2024-02-30", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    rtc()
        .args(["--db", &db_path, "--user", "ana", "add", "2024-02-01", "--in", "25:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));

    rtc()
        .args(["--db", &db_path, "--user", "ana", "stats", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn test_commands_require_a_user() {
    let db_path = setup_test_db("no_user");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "add", "2024-02-01", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user is signed in"));
}

#[test]
fn test_manual_add_revises_the_day() {
    let db_path = setup_test_db("manual_revise");
    init_db_with_data(&db_path);

    rtc()
        .args([
            "--db", &db_path, "--user", "ana", "add", "2024-02-05", "--in", "08:30", "--out",
            "12:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manual entry saved for 2024-02-05"))
        .stdout(predicate::str::contains("04h 00m"))
        .stdout(predicate::str::contains("(manual)"));
}

#[test]
fn test_stats_for_month() {
    let db_path = setup_test_db("stats_month");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "stats", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics for February 2024"))
        .stdout(predicate::str::contains("16h 15m"))
        .stdout(predicate::str::contains("66.7%"));
}

#[test]
fn test_delete_with_yes() {
    let db_path = setup_test_db("delete_yes");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "del", "2024-02-01", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    rtc()
        .args(["--db", &db_path, "--user", "ana", "list", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-01").not())
        .stdout(predicate::str::contains("2 session(s)"));

    rtc()
        .args(["--db", &db_path, "--user", "ana", "del", "2024-02-01", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No session recorded on 2024-02-01"));
}

#[test]
fn test_delete_cancelled_without_confirmation() {
    let db_path = setup_test_db("delete_cancel");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "--user", "ana", "del", "2024-02-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled"));
}

#[test]
fn test_log_records_writes() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("upsert"))
        .stdout(predicate::str::contains("migration_applied"));
}

#[test]
fn test_config_print() {
    let db_path = setup_test_db("config_print");

    rtc()
        .args(["--db", &db_path, "--user", "ana", "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size: 10"))
        .stdout(predicate::str::contains("user: ana"));
}
