use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::{StoredPeriod, load_periods};
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use std::collections::HashSet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // opening the pool already applies pending migrations
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&pool.conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
            }

            let problems: Vec<String> = load_periods(&pool.conn)?
                .iter()
                .flat_map(queue_problems)
                .collect();
            if problems.is_empty() {
                println!("{}✔ Every stored queue is consistent.{}\n", GREEN, RESET);
            } else {
                for p in &problems {
                    println!("{}• {}{}", YELLOW, p, RESET);
                }
                println!();
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}

/// Gaps in positions and members listed twice within one period.
fn queue_problems(stored: &StoredPeriod) -> Vec<String> {
    let label = stored.period.label();
    let mut out = Vec::new();

    for (expected, row) in stored.rows.iter().enumerate() {
        if row.position != expected {
            out.push(format!(
                "{label}: position {} found where {} was expected",
                row.position, expected
            ));
            break;
        }
    }

    let mut seen = HashSet::new();
    for row in &stored.rows {
        let key = row.member.trim().to_lowercase();
        if !key.is_empty() && !seen.insert(key) {
            out.push(format!("{label}: {} is listed more than once", row.member));
        }
    }

    out
}
