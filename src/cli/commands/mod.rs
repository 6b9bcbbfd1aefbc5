pub mod add;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod report;
pub mod start;
pub mod status;
pub mod stop;
pub mod sweep;
pub mod team;
pub mod user;

use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_datetime;
use chrono::NaiveDateTime;

/// Resolve the effective "current instant": the hidden `--now` override
/// when present (deterministic tests), the wall clock otherwise.
pub(crate) fn resolve_now(now: &Option<String>) -> AppResult<NaiveDateTime> {
    match now {
        Some(s) => parse_datetime(s).ok_or_else(|| AppError::InvalidTime(s.clone())),
        None => Ok(chrono::Local::now().naive_local()),
    }
}
