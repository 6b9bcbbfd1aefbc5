use crate::cli::commands::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop { username, now } = cmd {
        let now = resolve_now(now)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let user = db::users::require_user(&pool.conn, username)?;

        match SessionLogic::stop(&mut pool, &user, now)? {
            Some(entry) => {
                success(format!(
                    "Clocked out {} at {} (worked {}).",
                    user.username,
                    now.format("%H:%M"),
                    format_clock(entry.duration)
                ));
            }
            None => {
                warning(format!(
                    "No active session for {}, nothing to do.",
                    user.username
                ));
            }
        }
    }
    Ok(())
}
