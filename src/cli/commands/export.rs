use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::ScanOptions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        months,
        include_current,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let options = ScanOptions {
            months: *months,
            include_current: *include_current,
        };
        ExportLogic::export(&mut pool, format, file, &options, &cfg.rules(), *force)?;
    }
    Ok(())
}
