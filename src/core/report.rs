//! Terminal views over stored periods: the queue of one period and the
//! attendance table.

use crate::core::advance::AdvanceLogic;
use crate::core::history::{HistoryScan, MemberStats, ScanOptions, ScanResult};
use crate::core::rules::Rules;
use crate::db::pool::DbPool;
use crate::db::queries::{load_periods, resolve_period};
use crate::errors::{AppError, AppResult};
use crate::models::RawPeriod;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, color_for_watch, colorize_optional};
use crate::utils::formatting::{bold, describe_streak};
use crate::utils::table::{Column, Table};
use crate::utils::{describe_status, pct};

pub struct ReportLogic;

impl ReportLogic {
    fn scan(pool: &DbPool, options: &ScanOptions, rules: &Rules) -> AppResult<ScanResult> {
        let stored = load_periods(&pool.conn)?;
        if stored.is_empty() {
            return Err(AppError::NoPeriods);
        }
        let raw: Vec<RawPeriod> = stored.iter().map(|p| p.to_raw()).collect();
        let scan = HistoryScan::run(&raw, options, rules);
        for skipped in &scan.skipped {
            warning(format!("Skipping period: {}", skipped));
        }
        Ok(scan)
    }

    /// Print one period's queue with each member's standing at that point.
    pub fn print_queue(
        pool: &DbPool,
        period: Option<&str>,
        rules: &Rules,
        separator: &str,
    ) -> AppResult<()> {
        let stored = resolve_period(&pool.conn, period)?;
        let queue = AdvanceLogic::current_queue(&stored.to_raw(), rules)?;

        let upto: Vec<RawPeriod> = load_periods(&pool.conn)?
            .iter()
            .filter(|p| p.period <= stored.period)
            .map(|p| p.to_raw())
            .collect();
        let scan = HistoryScan::run(
            &upto,
            &ScanOptions {
                months: None,
                include_current: true,
            },
            rules,
        );

        header(format!("Queue for {}", stored.period.label()));

        let mut table = Table::new(vec![
            Column::right("Slot"),
            Column::left("Member"),
            Column::left("Green"),
            Column::left("Status"),
        ]);
        for entry in &queue {
            let status = scan
                .find(&entry.member.name)
                .map(|m| describe_status(&m.status).0)
                .unwrap_or_else(|| "New".into());
            table.add_row(vec![
                entry.slot.to_string(),
                entry.member.name.clone(),
                if entry.greened { "yes" } else { "no" }.to_string(),
                status,
            ]);
        }
        print!("{}", table.render(separator));

        if let Some(chooser) = queue.first() {
            info(format!("{} chooses this month", bold(&chooser.member.name)));
        }
        Ok(())
    }

    /// Print the attendance table, or one member's detail with `member`.
    pub fn print_stats(
        pool: &DbPool,
        options: &ScanOptions,
        member: Option<&str>,
        rules: &Rules,
        separator: &str,
    ) -> AppResult<()> {
        let scan = Self::scan(pool, options, rules)?;

        if let Some(name) = member {
            let stats = scan.find(name).ok_or_else(|| AppError::MemberNotFound {
                member: name.to_string(),
                period: format!("the last {} period(s)", scan.scanned),
            })?;
            print_member(stats);
            return Ok(());
        }

        if scan.members.is_empty() {
            warning("No members found for the selected periods.");
            return Ok(());
        }

        header(format!("Attendance over {} period(s)", scan.scanned));

        let mut table = Table::new(vec![
            Column::left("Member"),
            Column::right("Tenure"),
            Column::right("Greens"),
            Column::right("Missed"),
            Column::right("Watch %"),
            Column::left("Streak"),
            Column::left("Last watched"),
            Column::left("Status"),
        ]);
        for m in &scan.members {
            let s = &m.status;
            table.add_row(vec![
                m.member.name.clone(),
                s.tenure.to_string(),
                s.total_watched.to_string(),
                s.total_missed.to_string(),
                pct(s.watch_percentage()),
                describe_streak(s),
                s.last_watched_label(),
                describe_status(s).0,
            ]);
        }
        print!("{}", table.render(separator));

        let active = scan.members.iter().filter(|m| m.status.active).count();
        let danger = scan.members.iter().filter(|m| m.status.in_danger).count();
        let dropped = scan
            .members
            .iter()
            .filter(|m| m.status.just_dropped)
            .count();
        println!(
            "\n{} active, {} in danger, {} just dropped",
            active, danger, dropped
        );
        Ok(())
    }
}

fn print_member(stats: &MemberStats) {
    let s = &stats.status;
    let (label, color) = describe_status(s);

    header(&stats.member.name);
    println!("• Status:         {}{}{}", color, label, RESET);
    println!("• Tenure:         {}", s.tenure);
    println!("• Greens:         {}", s.total_watched);
    println!("• Missed:         {}", s.total_missed);
    println!("• Watch %:        {}", colorize_optional(&pct(s.watch_percentage())));
    println!("• Current streak: {}", colorize_optional(&describe_streak(s)));
    println!("• Longest greens: {}", s.longest_watch_streak);
    println!("• Longest misses: {}", s.longest_miss_streak);
    println!("• Last watched:   {}", colorize_optional(&s.last_watched_label()));

    if !stats.history.is_empty() {
        println!("• History:");
        for rec in &stats.history {
            println!(
                "    {}{}{}",
                color_for_watch(rec.watched),
                rec.state_label(),
                RESET
            );
        }
    }
}
