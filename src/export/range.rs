//! Date-range expressions for exports.
//!
//! Accepted forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and colon-joined
//! ranges of any two of them (`2025-01:2025-06`).

use crate::errors::{AppError, AppResult};
use crate::utils::date::last_day_of_month;
use chrono::NaiveDate;

/// Bounds of a single period expression.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        use chrono::Datelike;
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        return Ok((first, last));
    }

    Err(AppError::InvalidDate(p.to_string()))
}

pub fn parse_range(expr: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((a, b)) = expr.split_once(':') {
        let (start, _) = period_bounds(a)?;
        let (_, end) = period_bounds(b)?;
        if end < start {
            return Err(AppError::InvalidDate(format!(
                "range end before start: {expr}"
            )));
        }
        return Ok((start, end));
    }

    period_bounds(expr)
}
