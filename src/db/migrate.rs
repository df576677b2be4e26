use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migration bookkeeping lives there.
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

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `periods` and `period_rows` tables.
fn create_rotation_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS periods (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            year        INTEGER NOT NULL,
            month       INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            label       TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            UNIQUE(year, month)
        );

        CREATE TABLE IF NOT EXISTS period_rows (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            period_id    INTEGER NOT NULL REFERENCES periods(id) ON DELETE CASCADE,
            position     INTEGER NOT NULL,
            member       TEXT NOT NULL DEFAULT '',
            highlighted  INTEGER NOT NULL DEFAULT 0,
            UNIQUE(period_id, position)
        );

        CREATE INDEX IF NOT EXISTS idx_period_rows_member ON period_rows(member);
        "#,
    )?;
    Ok(())
}

/// Track the slot each member held in the previous queue.
fn add_previous_position(conn: &Connection) -> Result<()> {
    conn.execute(
        "ALTER TABLE period_rows ADD COLUMN previous_position INTEGER",
        [],
    )?;
    Ok(())
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

const MIGRATIONS: &[Migration] = &[
    (
        "20260901_0001_create_rotation_tables",
        "Created periods and period_rows tables",
        create_rotation_tables,
    ),
    (
        "20261005_0002_add_previous_position",
        "Added previous_position to period_rows",
        add_previous_position,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Called whenever a pool is opened and by `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        apply(&tx)?;
        mark_applied(&tx, version, message)?;
        tx.commit()?;

        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}
