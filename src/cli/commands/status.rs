use crate::cli::commands::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { now } = cmd {
        let now = resolve_now(now)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let active = SessionLogic::active_overview(&mut pool)?;

        if active.is_empty() {
            info("No active sessions.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("User"),
            Column::new("Started"),
            Column::new("Elapsed"),
            Column::new("Location"),
        ]);

        for (session, username) in &active {
            table.add_row(vec![
                username.clone(),
                session.start_time.format("%Y-%m-%d %H:%M").to_string(),
                format_clock(session.elapsed_seconds(now)),
                if session.location.is_empty() {
                    "-".to_string()
                } else {
                    session.location.clone()
                },
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
