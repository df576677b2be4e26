use crate::errors::{AppError, AppResult};
use crate::models::{Member, Period, RawPeriod, RawRow};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// A row of `period_rows`.
#[derive(Debug, Clone)]
pub struct StoredRow {
    pub position: usize,
    pub member: String,
    pub highlighted: bool,
    pub previous_position: Option<usize>,
}

/// A period with its rows in queue order.
#[derive(Debug, Clone)]
pub struct StoredPeriod {
    pub id: i64,
    pub period: Period,
    pub rows: Vec<StoredRow>,
}

impl StoredPeriod {
    pub fn to_raw(&self) -> RawPeriod {
        let rows = self
            .rows
            .iter()
            .map(|r| RawRow {
                member: Some(r.member.clone()).filter(|m| !m.trim().is_empty()),
                highlighted: r.highlighted,
            })
            .collect();
        RawPeriod::new(self.period, rows)
    }
}

/// Row to insert for a new period.
#[derive(Debug, Clone)]
pub struct NewRow {
    pub member: String,
    pub highlighted: bool,
    pub previous_position: Option<usize>,
}

fn map_period(row: &Row) -> rusqlite::Result<(i64, Period)> {
    let year: i32 = row.get("year")?;
    let month: u32 = row.get("month")?;
    let period = Period::new(year, month).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Integer, Box::new(e))
    })?;
    Ok((row.get("id")?, period))
}

fn map_row(row: &Row) -> rusqlite::Result<StoredRow> {
    Ok(StoredRow {
        position: row.get::<_, i64>("position")? as usize,
        member: row.get("member")?,
        highlighted: row.get::<_, i32>("highlighted")? == 1,
        previous_position: row
            .get::<_, Option<i64>>("previous_position")?
            .map(|p| p as usize),
    })
}

fn load_rows(conn: &Connection, period_id: i64) -> AppResult<Vec<StoredRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT position, member, highlighted, previous_position
         FROM period_rows
         WHERE period_id = ?1
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([period_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All stored periods, oldest first.
pub fn load_periods(conn: &Connection) -> AppResult<Vec<StoredPeriod>> {
    let headers: Vec<(i64, Period)> = {
        let mut stmt =
            conn.prepare("SELECT id, year, month FROM periods ORDER BY year ASC, month ASC")?;
        let rows = stmt.query_map([], map_period)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        out
    };

    let mut periods = Vec::with_capacity(headers.len());
    for (id, period) in headers {
        periods.push(StoredPeriod {
            id,
            period,
            rows: load_rows(conn, id)?,
        });
    }
    Ok(periods)
}

pub fn load_period(conn: &Connection, period: Period) -> AppResult<Option<StoredPeriod>> {
    let header = conn
        .query_row(
            "SELECT id, year, month FROM periods WHERE year = ?1 AND month = ?2",
            params![period.year, period.month],
            map_period,
        )
        .optional()?;

    match header {
        Some((id, period)) => Ok(Some(StoredPeriod {
            id,
            period,
            rows: load_rows(conn, id)?,
        })),
        None => Ok(None),
    }
}

pub fn latest_period(conn: &Connection) -> AppResult<Option<Period>> {
    let header = conn
        .query_row(
            "SELECT id, year, month FROM periods ORDER BY year DESC, month DESC LIMIT 1",
            [],
            map_period,
        )
        .optional()?;
    Ok(header.map(|(_, p)| p))
}

/// Resolve `--period`, falling back to the newest stored period.
pub fn resolve_period(conn: &Connection, period: Option<&str>) -> AppResult<StoredPeriod> {
    let target = match period {
        Some(p) => Period::parse(p)?,
        None => latest_period(conn)?.ok_or(AppError::NoPeriods)?,
    };

    load_period(conn, target)?.ok_or_else(|| AppError::PeriodNotFound(target.label()))
}

pub fn delete_period(conn: &Connection, period: Period) -> AppResult<usize> {
    conn.execute(
        "DELETE FROM period_rows WHERE period_id IN
            (SELECT id FROM periods WHERE year = ?1 AND month = ?2)",
        params![period.year, period.month],
    )?;
    let n = conn.execute(
        "DELETE FROM periods WHERE year = ?1 AND month = ?2",
        params![period.year, period.month],
    )?;
    Ok(n)
}

/// Insert a period and its rows; `rows` are stored in the given order.
pub fn insert_period(conn: &Connection, period: Period, rows: &[NewRow]) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO periods (year, month, label, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            period.year,
            period.month,
            period.label(),
            Local::now().to_rfc3339()
        ],
    )?;
    let period_id = conn.last_insert_rowid();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO period_rows (period_id, position, member, highlighted, previous_position)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    for (position, row) in rows.iter().enumerate() {
        stmt.execute(params![
            period_id,
            position as i64,
            row.member.trim(),
            if row.highlighted { 1 } else { 0 },
            row.previous_position.map(|p| p as i64),
        ])?;
    }

    Ok(period_id)
}

/// Set the highlight of a member's row(s).
///
/// Names are matched in Rust with [`Member::is_same`]: SQLite's `lower()`
/// only folds ASCII.
pub fn set_highlight(
    conn: &Connection,
    period_id: i64,
    member: &str,
    highlighted: bool,
) -> AppResult<usize> {
    let positions: Vec<usize> = load_rows(conn, period_id)?
        .into_iter()
        .filter(|r| !r.member.trim().is_empty() && Member::new(&r.member).is_same(member))
        .map(|r| r.position)
        .collect();

    let mut stmt = conn.prepare_cached(
        "UPDATE period_rows SET highlighted = ?1
         WHERE period_id = ?2 AND position = ?3",
    )?;
    let mut n = 0;
    for position in positions {
        n += stmt.execute(params![
            if highlighted { 1 } else { 0 },
            period_id,
            position as i64
        ])?;
    }
    Ok(n)
}
