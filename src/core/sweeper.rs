//! Blocking interval runner for the auto-stop sweep.
//!
//! The hosting process owns this loop explicitly (`sweep --watch`); there
//! is no module-level timer state. Tick failures are reported and never
//! kill the loop.

use crate::config::Config;
use crate::core::autostop::run_sweep;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, info};
use chrono::Local;
use std::thread;
use std::time::Duration;

pub fn run_forever(cfg: &Config) -> AppResult<()> {
    let cutoff = cfg.cutoff()?;
    let interval = Duration::from_secs(cfg.sweep_interval_minutes.max(1) * 60);

    let mut pool = DbPool::new(&cfg.database)?;

    info(format!(
        "Sweeper running: cutoff {}, every {} min",
        cfg.auto_stop_cutoff, cfg.sweep_interval_minutes
    ));

    loop {
        let now = Local::now().naive_local();

        match run_sweep(&mut pool.conn, cutoff, now) {
            Ok(outcome) if outcome.stopped > 0 => {
                info(format!(
                    "Auto-stopped {} session(s) at {}",
                    outcome.stopped,
                    now.format("%Y-%m-%d %H:%M")
                ));
            }
            Ok(_) => {}
            Err(e) => error(format!("Sweep pass failed: {}", e)),
        }

        thread::sleep(interval);
    }
}
