use crate::core::normalizer::normalize;
use crate::core::rules::Rules;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{NewRow, delete_period, insert_period, load_period};
use crate::errors::{AppError, AppResult};
use crate::models::{Period, RawPeriod, RawRow};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Read a `member,highlighted` CSV. Row order is queue order.
    pub fn read_csv(path: &Path) -> AppResult<Vec<RawRow>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)?;

        let mut rows = Vec::new();
        for rec in rdr.deserialize::<RawRow>() {
            rows.push(rec?);
        }
        Ok(rows)
    }

    /// Store one period. The rows must normalize cleanly; an existing
    /// period is only replaced with `force`.
    pub fn import(
        pool: &mut DbPool,
        period: &str,
        file: &str,
        rules: &Rules,
        force: bool,
    ) -> AppResult<usize> {
        let period = Period::parse(period)?;
        let rows = Self::read_csv(Path::new(file))?;
        let raw = RawPeriod::new(period, rows);

        let records = normalize(&raw, rules)?;
        let blanks = raw.rows.iter().filter(|r| r.name().is_none()).count();
        if blanks > 0 {
            warning(format!("{} row(s) without a member name", blanks));
        }

        let exists = load_period(&pool.conn, period)?.is_some();
        if exists && !force {
            return Err(AppError::PeriodExists(period.label()));
        }

        let new_rows: Vec<NewRow> = raw
            .rows
            .iter()
            .map(|r| NewRow {
                member: r.name().unwrap_or_default().to_string(),
                highlighted: r.highlighted,
                previous_position: None,
            })
            .collect();

        pool.with_tx(|tx| {
            if exists {
                delete_period(tx, period)?;
                info(format!("Replacing {}", period.label()));
            }
            insert_period(tx, period, &new_rows)?;
            Ok(())
        })?;

        let greens = records.iter().filter(|r| r.watched).count();
        success(format!(
            "Imported {}: {} members, {} greened",
            period.label(),
            records.len(),
            greens
        ));

        ttlog_soft(
            &pool.conn,
            "import",
            &period.key(),
            &format!("{} rows from {}", new_rows.len(), file),
        );

        Ok(records.len())
    }
}
