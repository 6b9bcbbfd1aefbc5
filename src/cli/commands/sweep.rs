use crate::cli::commands::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::autostop::run_sweep;
use crate::core::sweeper;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sweep { watch, now } = cmd {
        if *watch {
            return sweeper::run_forever(cfg);
        }

        let now = resolve_now(now)?;
        let cutoff = cfg.cutoff()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let outcome = run_sweep(&mut pool.conn, cutoff, now)?;

        if outcome.failures > 0 {
            warning(format!(
                "{} session(s) could not be stopped.",
                outcome.failures
            ));
        }

        if outcome.stopped > 0 {
            success(format!("Auto-stopped {} session(s).", outcome.stopped));
        } else {
            info("No expired sessions.");
        }
    }
    Ok(())
}
