use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::{parse_time, seconds_between};

/// Record a completed entry directly (both clock times known upfront).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        username,
        date,
        time_in,
        time_out,
        location,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse clock times
        //
        let t_in =
            parse_time(time_in).ok_or_else(|| AppError::InvalidTime(time_in.to_string()))?;
        let t_out =
            parse_time(time_out).ok_or_else(|| AppError::InvalidTime(time_out.to_string()))?;

        if t_out <= t_in {
            return Err(AppError::InvalidTime(format!(
                "--out {} is not after --in {}",
                time_out, time_in
            )));
        }

        let duration = seconds_between(d.and_time(t_in), d.and_time(t_out));

        //
        // 3. Resolve user and write
        //
        let pool = DbPool::new(&cfg.database)?;
        let user = db::users::require_user(&pool.conn, username)?;

        let entry = TimeEntry::new(
            user.id,
            d,
            t_in,
            Some(t_out),
            duration,
            location.clone().unwrap_or_default(),
            "cli",
        );
        db::queries::insert_entry(&pool.conn, &entry)?;
        db::log::record(
            &pool.conn,
            "add",
            &user.username,
            &format!("Entry added for {} ({} - {})", date, time_in, time_out),
        )?;

        success(format!(
            "Entry recorded for {} on {}: {} - {}",
            user.username, date, time_in, time_out
        ));
    }
    Ok(())
}
