#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hostrota::models::{Period, RawPeriod, RawRow};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hr() -> Command {
    cargo_bin_cmd!("hostrota")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hostrota.sqlite", name));
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

/// Write a `member,highlighted` CSV and return its path.
pub fn write_queue_csv(name: &str, rows: &[(&str, bool)]) -> String {
    let path = temp_out(name, "csv");
    let mut body = String::from("member,highlighted\n");
    for (member, greened) in rows {
        body.push_str(&format!("{},{}\n", member, if *greened { "1" } else { "" }));
    }
    fs::write(&path, body).expect("write queue csv");
    path
}

/// Initialize a test DB.
pub fn init_db(db_path: &str) {
    hr().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Import one period through the CLI.
pub fn import_period(db_path: &str, period: &str, rows: &[(&str, bool)]) {
    let csv = write_queue_csv(&format!("{}_{}", db_path.replace(['/', '\\', ':'], "_"), period), rows);
    hr().args(["--db", db_path, "--test", "import", period, "--file", &csv])
        .assert()
        .success();
}

/// July 2026: Alice chooses, Bob sits behind her, Carol greened, Dave missed.
pub fn init_db_with_july(db_path: &str) {
    init_db(db_path);
    import_period(
        db_path,
        "2026-07",
        &[
            ("Alice", false),
            ("Bob", false),
            ("Carol", true),
            ("Dave", false),
        ],
    );
}

/// In-memory period from `(name, greened)` pairs.
pub fn raw_period(year: i32, month: u32, rows: &[(&str, bool)]) -> RawPeriod {
    RawPeriod::new(
        Period::new(year, month).expect("valid period"),
        rows.iter().map(|(m, g)| RawRow::new(m, *g)).collect(),
    )
}
