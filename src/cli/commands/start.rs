use crate::cli::commands::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        username,
        location,
        now,
    } = cmd
    {
        let now = resolve_now(now)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let user = db::users::require_user(&pool.conn, username)?;

        let outcome = SessionLogic::start(
            &mut pool,
            &user,
            location.as_deref().unwrap_or(""),
            now,
        )?;

        if outcome.replaced > 0 {
            warning(format!(
                "Closed {} session(s) left open for {}.",
                outcome.replaced, user.username
            ));
        }

        success(format!(
            "Clocked in {} at {}.",
            user.username,
            now.format("%H:%M")
        ));
    }
    Ok(())
}
