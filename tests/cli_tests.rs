mod common;
use common::{hr, import_period, init_db, init_db_with_july, setup_test_db, write_queue_csv};
use predicates::str::contains;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    hr().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized at"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_import_reports_members_and_greens() {
    let db_path = setup_test_db("import_reports");
    init_db(&db_path);
    let csv = write_queue_csv(
        "import_reports",
        &[("Alice", false), ("Bob", false), ("Carol", true), ("Dave", false)],
    );

    hr().args(["--db", &db_path, "--test", "import", "July 2026", "--file", &csv])
        .assert()
        .success()
        .stdout(contains("Imported July 2026: 4 members, 3 greened"));
}

#[test]
fn test_import_existing_period_needs_force() {
    let db_path = setup_test_db("import_force");
    init_db_with_july(&db_path);
    let csv = write_queue_csv("import_force", &[("Alice", false), ("Bob", true)]);

    hr().args(["--db", &db_path, "--test", "import", "2026-07", "--file", &csv])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    hr().args([
        "--db", &db_path, "--test", "import", "2026-07", "--file", &csv, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("2 members"));
}

#[test]
fn test_import_rejects_malformed_period() {
    let db_path = setup_test_db("import_malformed");
    init_db(&db_path);
    let csv = write_queue_csv("import_malformed", &[("Alice", true)]);

    hr().args(["--db", &db_path, "--test", "import", "2026-07", "--file", &csv])
        .assert()
        .failure()
        .stderr(contains("Malformed period July 2026"));
}

#[test]
fn test_import_rejects_bad_period() {
    let db_path = setup_test_db("import_bad_period");
    init_db(&db_path);
    let csv = write_queue_csv("import_bad_period", &[("Alice", true), ("Bob", true)]);

    hr().args(["--db", &db_path, "--test", "import", "2026-13", "--file", &csv])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_queue_shows_chooser() {
    let db_path = setup_test_db("queue_shows_chooser");
    init_db_with_july(&db_path);

    hr().args(["--db", &db_path, "--test", "queue"])
        .assert()
        .success()
        .stdout(contains("Queue for July 2026"))
        .stdout(contains("Carol"))
        .stdout(contains("chooses this month"));
}

#[test]
fn test_green_and_undo() {
    let db_path = setup_test_db("green_and_undo");
    init_db_with_july(&db_path);

    hr().args(["--db", &db_path, "--test", "green", "dave", "--period", "2026-07"])
        .assert()
        .success()
        .stdout(contains("dave greened for July 2026"));

    hr().args(["--db", &db_path, "--test", "green", "Dave", "--undo"])
        .assert()
        .success()
        .stdout(contains("un-greened"));

    hr().args(["--db", &db_path, "--test", "green", "Zoe"])
        .assert()
        .failure()
        .stderr(contains("Member 'Zoe' not found in July 2026"));
}

#[test]
fn test_advance_dry_run_saves_nothing() {
    let db_path = setup_test_db("advance_dry_run");
    init_db_with_july(&db_path);

    hr().args(["--db", &db_path, "--test", "advance", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("July 2026 → August 2026"))
        .stdout(contains("Dave is inactive"))
        .stdout(contains("Dry run"));

    hr().args(["--db", &db_path, "--test", "queue", "--period", "2026-08"])
        .assert()
        .failure()
        .stderr(contains("Period not found"));
}

#[test]
fn test_advance_stores_next_queue() {
    let db_path = setup_test_db("advance_stores");
    init_db_with_july(&db_path);

    hr().args(["--db", &db_path, "--test", "advance"])
        .assert()
        .success()
        .stdout(contains("Queue for August 2026 saved (3 members)"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let stored =
        hostrota::db::queries::load_period(&conn, hostrota::models::Period::new(2026, 8).unwrap())
            .expect("query")
            .expect("august stored");
    let order: Vec<&str> = stored.rows.iter().map(|r| r.member.as_str()).collect();
    assert_eq!(order, ["Bob", "Carol", "Alice"]);
    assert_eq!(stored.rows[0].previous_position, Some(1));
    assert!(stored.rows.iter().all(|r| !r.highlighted));

    // August can be advanced in turn
    hr().args(["--db", &db_path, "--test", "advance"])
        .assert()
        .success()
        .stdout(contains("September 2026"));
}

#[test]
fn test_advance_without_periods_fails() {
    let db_path = setup_test_db("advance_empty");
    init_db(&db_path);

    hr().args(["--db", &db_path, "--test", "advance"])
        .assert()
        .failure()
        .stderr(contains("No periods stored"));
}

#[test]
fn test_stats_table_and_member_detail() {
    let db_path = setup_test_db("stats_table");
    init_db_with_july(&db_path);
    import_period(
        &db_path,
        "2026-08",
        &[("Bob", false), ("Carol", false), ("Alice", true), ("Dave", false)],
    );

    hr().args(["--db", &db_path, "--test", "stats"])
        .assert()
        .success()
        .stdout(contains("Attendance over 1 period(s)"))
        .stdout(contains("Watch %"));

    hr().args(["--db", &db_path, "--test", "stats", "--include-current"])
        .assert()
        .success()
        .stdout(contains("Attendance over 2 period(s)"));

    hr().args([
        "--db",
        &db_path,
        "--test",
        "stats",
        "--include-current",
        "--member",
        "carol",
    ])
    .assert()
    .success()
    .stdout(contains("Carol"))
    .stdout(contains("August 2026::green"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db_with_july(&db_path);

    hr().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("2026-07"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_july(&db_path);

    hr().args(["--db", &db_path, "--test", "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Periods:"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Every stored queue is consistent"));
}

#[test]
fn test_config_print_shows_defaults() {
    hr().args(["--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("inactive_after_misses: 12"))
        .stdout(contains("chooser_placement: last"));
}
