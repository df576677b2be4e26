use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) PERIODS / ROWS / MEMBERS
    //
    let periods: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM periods", [], |row| row.get(0))?;
    let rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM period_rows", [], |row| row.get(0))?;
    let members: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT lower(trim(member))) FROM period_rows WHERE trim(member) <> ''",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Periods:{} {}{}{}", CYAN, RESET, GREEN, periods, RESET);
    println!("{}• Queue rows:{} {}", CYAN, RESET, rows);
    println!("{}• Distinct members:{} {}", CYAN, RESET, members);

    //
    // 3) PERIOD RANGE
    //
    let stored = crate::db::queries::load_periods(&pool.conn)?;
    let fmt_first = stored
        .first()
        .map(|p| p.period.label())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = stored
        .last()
        .map(|p| p.period.label())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Period range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    if periods > 0 {
        let avg = rows as f64 / periods as f64;
        println!("{}• Average queue length:{} {:.1}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
