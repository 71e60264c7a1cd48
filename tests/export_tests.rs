use predicates::prelude::*;
mod common;
use common::{init_db, init_db_with_data, rtc, setup_test_db, temp_out};
use std::fs;

fn export(db_path: &str, format: &str, out: &str) -> assert_cmd::assert::Assert {
    rtc()
        .args([
            "--db", db_path, "--user", "ana", "export", "--format", format, "--file", out,
            "--month", "2024-02", "--force",
        ])
        .assert()
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv", "csv");

    export(&db_path, "csv", &out)
        .success()
        .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,weekday,start_time,end_time,worked_hours,status,manual_edit")
    );
    assert!(content.contains("2024-02-01,Thu,09:00,17:00,8.0,completa,true"));
    assert!(content.contains("2024-02-05,Mon,08:30,--:--,,incompleta,true"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);
    let out = temp_out("export_json", "json");

    export(&db_path, "json", &out).success();

    let content = fs::read_to_string(&out).expect("json written");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(doc["month"], "2024-02");
    assert_eq!(doc["end_date"], "2024-02-29");
    assert_eq!(doc["sessions"].as_array().map(Vec::len), Some(3));
    assert_eq!(doc["sessions"][0]["date"], "2024-02-01");
    assert_eq!(doc["sessions"][0]["status"], "completa");
    assert_eq!(doc["summary"]["statistics"]["complete_days"], 2);
}

#[test]
fn test_export_pdf() {
    let db_path = setup_test_db("export_pdf");
    init_db_with_data(&db_path);
    let out = temp_out("export_pdf", "pdf");

    export(&db_path, "pdf", &out)
        .success()
        .stdout(predicate::str::contains("PDF export completed"));

    let bytes = fs::read(&out).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_empty_month_warns() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);
    let out = temp_out("export_empty", "pdf");

    export(&db_path, "pdf", &out)
        .success()
        .stdout(predicate::str::contains("No sessions recorded in February 2024"));

    assert!(fs::metadata(&out).is_ok());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    export(&db_path, "csv", "relative_out.csv")
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    rtc()
        .args([
            "--db", &db_path, "--user", "ana", "export", "--format", "csv", "--file", &out,
            "--month", "2024-02",
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("existing file not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}
