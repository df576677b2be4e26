mod common;
use common::{hr, import_period, init_db, init_db_with_july, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

fn db_with_two_months(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db_with_july(&db_path);
    import_period(
        &db_path,
        "2026-08",
        &[("Bob", false), ("Carol", false), ("Alice", false)],
    );
    db_path
}

#[test]
fn test_export_csv_header_and_rows() {
    let db_path = db_with_two_months("export_csv");
    let out = temp_out("export_csv", "csv");

    hr().args([
        "--db",
        &db_path,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--include-current",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    let header = lines.next().expect("header");
    assert!(header.starts_with("Username,Tenure,Active,In Danger,Just Dropped"));
    assert!(header.ends_with("Month Statuses"));

    let dave = content
        .lines()
        .find(|l| l.starts_with("Dave,"))
        .expect("dave row");
    assert!(dave.starts_with("Dave,2,false,false,false,0,2,0.0,"));
}

#[test]
fn test_export_json_months_filter() {
    let db_path = db_with_two_months("export_json");
    let out = temp_out("export_json", "json");

    hr().args([
        "--db",
        &db_path,
        "--test",
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--include-current",
        "--months",
        "1",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");

    // Dave is not in August's queue and was never seen in the window
    assert_eq!(rows.len(), 3);
    let alice = rows
        .iter()
        .find(|r| r["Username"] == "Alice")
        .expect("alice");
    assert_eq!(alice["Tenure"], 1);
    assert_eq!(alice["Total Missed"], 1);
    assert_eq!(alice["Last Watched?"], "Never");
    assert!(alice["Watch %"].is_number());
}

#[test]
fn test_export_xlsx_writes_a_workbook() {
    let db_path = db_with_two_months("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    hr().args([
        "--db", &db_path, "--test", "export", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read xlsx");
    // xlsx is a zip archive
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = db_with_two_months("export_relative");

    hr().args([
        "--db",
        &db_path,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let db_path = db_with_two_months("export_existing");
    let out = temp_out("export_existing", "csv");
    fs::write(&out, "keep me").expect("seed file");

    hr().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .write_stdin("n\n")
    .assert()
    .failure()
    .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    hr().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("Username"));
}

#[test]
fn test_export_empty_database_is_a_no_op() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);
    let out = temp_out("export_empty", "csv");

    hr().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}
