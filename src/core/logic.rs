use crate::config::Config;
use crate::core::calculator::consolidate::consolidate;
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::models::entry::TimeEntry;

pub struct Core;

impl Core {
    /// Consolidate raw entries under the configured window and duration
    /// policy. Single source of truth: every report view and export goes
    /// through here.
    pub fn day_summaries(cfg: &Config, entries: &[TimeEntry]) -> AppResult<Vec<DaySummary>> {
        let window = cfg.work_window()?;
        Ok(consolidate(entries, &window, cfg.duration_policy))
    }
}
