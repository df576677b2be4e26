use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::green::GreenLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Green {
        member,
        period,
        undo,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        GreenLogic::set(&mut pool, member, period.as_deref(), *undo)?;
    }
    Ok(())
}
