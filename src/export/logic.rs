// src/export/logic.rs

use crate::core::history::{HistoryScan, ScanOptions};
use crate::core::rules::Rules;
use crate::db::pool::DbPool;
use crate::db::queries::load_periods;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, require_absolute};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::StatsExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;

/// High-level export of the per-member attendance table.
pub struct ExportLogic;

impl ExportLogic {
    /// Scan stored periods and write one row per member.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path
    /// - `options`: which periods the scan covers
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        options: &ScanOptions,
        rules: &Rules,
        force: bool,
    ) -> AppResult<()> {
        let path = require_absolute(file)?;
        if !format.matches_extension(path) {
            warning(format!(
                "'{}' does not end in .{}; writing {} anyway",
                path.display(),
                format.as_str(),
                format.as_str()
            ));
        }
        ensure_writable(path, force)?;

        let stored = load_periods(&pool.conn)?;
        let raw: Vec<_> = stored.iter().map(|p| p.to_raw()).collect();
        let scan = HistoryScan::run(&raw, options, rules);

        for skipped in &scan.skipped {
            warning(format!("Skipping period: {}", skipped));
        }

        if scan.members.is_empty() {
            warning("No members found for the selected periods. Nothing to export.");
            return Ok(());
        }

        let rows: Vec<StatsExport> = scan.members.iter().map(StatsExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        crate::db::log::ttlog_soft(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} members as {}", rows.len(), format.as_str()),
        );

        Ok(())
    }
}
