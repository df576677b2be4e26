use crate::core::history::{HistoryScan, ScanOptions};
use crate::core::normalizer::normalize;
use crate::core::rotation::{Advance, RotationLogic};
use crate::core::rules::Rules;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{NewRow, insert_period, load_period, load_periods};
use crate::errors::{AppError, AppResult};
use crate::models::{Period, QueueEntry, RawPeriod};
use crate::ui::messages::{error, header, info, note, success, warning};
use crate::utils::table::{Column, Table};
use rusqlite::Connection;

/// Next period's queue, ready to print or store.
pub struct AdvancePlan {
    pub from: Period,
    pub to: Period,
    pub advance: Advance,
}

pub struct AdvanceLogic;

impl AdvanceLogic {
    /// Queue of a stored period: normalized members in row order with their
    /// watched flags.
    pub fn current_queue(raw: &RawPeriod, rules: &Rules) -> AppResult<Vec<QueueEntry>> {
        Ok(normalize(raw, rules)?
            .into_iter()
            .enumerate()
            .map(|(slot, rec)| QueueEntry::new(rec.member, slot, rec.watched))
            .collect())
    }

    /// Compute the queue that follows the newest stored period.
    pub fn plan(pool: &DbPool, rules: &Rules) -> AppResult<AdvancePlan> {
        let stored = load_periods(&pool.conn)?;
        let newest = stored.last().ok_or(AppError::NoPeriods)?;

        let to = newest.period.next();
        if load_period(&pool.conn, to)?.is_some() {
            return Err(AppError::PeriodExists(to.label()));
        }

        let raw: Vec<RawPeriod> = stored.iter().map(|p| p.to_raw()).collect();
        let scan = HistoryScan::run(
            &raw,
            &ScanOptions {
                months: None,
                include_current: true,
            },
            rules,
        );
        for skipped in &scan.skipped {
            warning(format!("Skipping period: {}", skipped));
        }

        let current = Self::current_queue(&newest.to_raw(), rules)?;
        let advance = RotationLogic::advance(&current, &scan.status_table(), rules)?;

        Ok(AdvancePlan {
            from: newest.period,
            to,
            advance,
        })
    }

    /// Print the plan and, unless `dry_run`, store it as the next period.
    pub fn run(
        pool: &mut DbPool,
        rules: &Rules,
        dry_run: bool,
        separator: &str,
    ) -> AppResult<AdvancePlan> {
        let plan = Self::plan(pool, rules).inspect_err(|e| report_abort(&pool.conn, e))?;
        print_plan(&plan, separator);

        if dry_run {
            info("Dry run: nothing was saved.");
            return Ok(plan);
        }

        let rows: Vec<NewRow> = plan
            .advance
            .next_queue
            .iter()
            .map(|e| NewRow {
                member: e.member.name.clone(),
                highlighted: false,
                previous_position: e.previous_slot,
            })
            .collect();

        pool.with_tx(|tx| {
            insert_period(tx, plan.to, &rows)?;
            Ok(())
        })?;

        success(format!(
            "Queue for {} saved ({} members)",
            plan.to.label(),
            rows.len()
        ));

        let removed: Vec<&str> = plan
            .advance
            .removed
            .iter()
            .map(|e| e.member.name.as_str())
            .collect();
        ttlog_soft(
            &pool.conn,
            "advance",
            &plan.to.key(),
            &format!(
                "{} -> {}: {} members, removed [{}]",
                plan.from.key(),
                plan.to.key(),
                rows.len(),
                removed.join(", ")
            ),
        );

        Ok(plan)
    }
}

/// Announce and log a rotation stopped by a broken invariant. Nothing has
/// been written at that point.
fn report_abort(conn: &Connection, err: &AppError) {
    if !err.is_fatal_invariant() {
        return;
    }
    error("Scheduling aborted: nothing was saved.");
    ttlog_soft(conn, "advance_aborted", "", &err.to_string());
}

fn print_plan(plan: &AdvancePlan, separator: &str) {
    header(format!("{} → {}", plan.from.label(), plan.to.label()));

    let advance = &plan.advance;
    if let Some(chooser) = &advance.chooser {
        info(format!("{} chose this month and goes to the back", chooser.member));
    }
    for gone in &advance.removed {
        warning(format!("{} is inactive and leaves the rotation", gone.member));
    }
    for p in advance.placements.iter().filter(|p| p.assigned != p.desired) {
        note(format!(
            "{} wanted slot {} (taken), placed at {}",
            p.member, p.desired, p.assigned
        ));
    }

    if advance.next_queue.is_empty() {
        warning("No active members left in the rotation.");
        return;
    }

    let mut table = Table::new(vec![
        Column::right("Slot"),
        Column::left("Member"),
        Column::right("Was"),
        Column::left("Move"),
    ]);
    for entry in &advance.next_queue {
        let was = entry.previous_slot;
        let moved = match was {
            Some(w) if w > entry.slot => format!("up {}", w - entry.slot),
            Some(w) if w < entry.slot => format!("down {}", entry.slot - w),
            Some(_) => "=".to_string(),
            None => "new".to_string(),
        };
        table.add_row(vec![
            entry.slot.to_string(),
            entry.member.name.clone(),
            was.map(|w| w.to_string()).unwrap_or_else(|| "--".into()),
            moved,
        ]);
    }
    print!("{}", table.render(separator));
}
