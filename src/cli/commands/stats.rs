use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::ScanOptions;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        months,
        include_current,
        member,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let options = ScanOptions {
            months: *months,
            include_current: *include_current,
        };
        ReportLogic::print_stats(
            &pool,
            &options,
            member.as_deref(),
            &cfg.rules(),
            &cfg.separator_char,
        )?;
    }
    Ok(())
}
