use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::advance::AdvanceLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Advance { dry_run } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        AdvanceLogic::run(&mut pool, &cfg.rules(), *dry_run, &cfg.separator_char)?;
    }
    Ok(())
}
