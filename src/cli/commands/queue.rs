use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Queue { period } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        ReportLogic::print_queue(&pool, period.as_deref(), &cfg.rules(), &cfg.separator_char)?;
    }
    Ok(())
}
