use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{resolve_period, set_highlight};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub struct GreenLogic;

impl GreenLogic {
    /// Mark (or with `undo`, unmark) a member's row as watched.
    pub fn set(
        pool: &mut DbPool,
        member: &str,
        period: Option<&str>,
        undo: bool,
    ) -> AppResult<()> {
        let stored = resolve_period(&pool.conn, period)?;

        let n = set_highlight(&pool.conn, stored.id, member, !undo)?;
        if n == 0 {
            return Err(AppError::MemberNotFound {
                member: member.to_string(),
                period: stored.period.label(),
            });
        }

        let verb = if undo { "un-greened" } else { "greened" };
        success(format!("{} {} for {}", member.trim(), verb, stored.period.label()));

        ttlog_soft(
            &pool.conn,
            if undo { "ungreen" } else { "green" },
            &stored.period.key(),
            member.trim(),
        );

        Ok(())
    }
}
