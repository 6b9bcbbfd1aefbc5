//! Report assembly: range filtering, consolidation, sorting, pagination
//! and the synthetic live row.

use crate::config::Config;
use crate::core::calculator::totals::total_seconds;
use crate::core::logic::Core;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::models::user::User;
use crate::utils::date::month_bounds;
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recent day first.
    #[default]
    Latest,
    Oldest,
}

impl SortOrder {
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "oldest" => Ok(Self::Oldest),
            other => Err(AppError::InvalidSort(other.to_string())),
        }
    }
}

/// Thin parameter object narrowing the aggregator's input; the public
/// contract surface callers depend on.
#[derive(Debug, Clone)]
pub struct ReportFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub sort: SortOrder,
    pub page: usize,
    pub per_page: usize,
}

impl ReportFilter {
    /// Missing bounds default to the month containing `today`.
    pub fn resolved_bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let (month_start, month_end) = month_bounds(today);
        (
            self.start.unwrap_or(month_start),
            self.end.unwrap_or(month_end),
        )
    }
}

#[derive(Debug)]
pub struct Report {
    /// Rows of the requested page only.
    pub rows: Vec<DaySummary>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    /// Aggregate over the whole filtered result set, not just the page.
    pub total_seconds: i64,
}

/// Consolidated per-day report for one user. When the range covers today,
/// the user is mid-session and no completed entry exists for today yet, a
/// synthetic open row carries the elapsed time so far.
pub fn build_user_report(
    pool: &mut DbPool,
    cfg: &Config,
    user: &User,
    filter: &ReportFilter,
    now: NaiveDateTime,
) -> AppResult<Report> {
    let bounds = filter.resolved_bounds(now.date());

    let entries = db::queries::load_entries_for_user(pool, user.id, Some(bounds))?;
    let mut summaries = Core::day_summaries(cfg, &entries)?;

    if let Some(live) = live_row(pool, user, bounds, now)? {
        summaries.push(live);
    }

    Ok(assemble(summaries, filter, false))
}

/// Consolidated team report across all users, optionally narrowed to one
/// username. Rows carry the username as the secondary identity key.
pub fn build_team_report(
    pool: &mut DbPool,
    cfg: &Config,
    username: Option<&str>,
    filter: &ReportFilter,
    now: NaiveDateTime,
) -> AppResult<Report> {
    let bounds = filter.resolved_bounds(now.date());

    let entries = match username {
        Some(name) => {
            let user = db::users::require_user(&pool.conn, name)?;
            db::queries::load_entries_for_user(pool, user.id, Some(bounds))?
        }
        None => db::queries::load_entries_between(pool, Some(bounds))?,
    };

    let usernames = db::users::username_index(&pool.conn)?;
    let mut summaries = Core::day_summaries(cfg, &entries)?;
    for s in &mut summaries {
        s.username = usernames.get(&s.user_id).cloned();
    }

    Ok(assemble(summaries, filter, true))
}

fn live_row(
    pool: &mut DbPool,
    user: &User,
    bounds: (NaiveDate, NaiveDate),
    now: NaiveDateTime,
) -> AppResult<Option<DaySummary>> {
    let today = now.date();
    if today < bounds.0 || today > bounds.1 {
        return Ok(None);
    }

    let Some(session) = db::sessions::load_active_session(&pool.conn, user.id)? else {
        return Ok(None);
    };

    if db::queries::has_completed_entry(&pool.conn, user.id, today)? {
        return Ok(None);
    }

    Ok(Some(DaySummary {
        user_id: user.id,
        username: Some(user.username.clone()),
        date: today,
        time_in: session.start_time.time(),
        time_out: None,
        total_seconds: session.elapsed_seconds(now),
        open: true,
    }))
}

fn assemble(mut summaries: Vec<DaySummary>, filter: &ReportFilter, team: bool) -> Report {
    match (filter.sort, team) {
        (SortOrder::Latest, false) => summaries.sort_by(|a, b| b.date.cmp(&a.date)),
        (SortOrder::Oldest, false) => summaries.sort_by(|a, b| a.date.cmp(&b.date)),
        (SortOrder::Latest, true) => {
            summaries.sort_by(|a, b| b.date.cmp(&a.date).then(a.username.cmp(&b.username)))
        }
        (SortOrder::Oldest, true) => {
            summaries.sort_by(|a, b| a.date.cmp(&b.date).then(a.username.cmp(&b.username)))
        }
    }

    let total = total_seconds(&summaries);
    let total_rows = summaries.len();

    let per_page = filter.per_page.max(1);
    let total_pages = total_rows.div_ceil(per_page).max(1);
    let page = filter.page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let rows: Vec<DaySummary> = summaries
        .into_iter()
        .skip(start)
        .take(per_page)
        .collect();

    Report {
        rows,
        page,
        total_pages,
        total_rows,
        total_seconds: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveTime};

    fn summary(date: (i32, u32, u32), user_id: i64) -> DaySummary {
        DaySummary {
            user_id,
            username: None,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            time_out: Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
            total_seconds: 28800,
            open: false,
        }
    }

    fn filter(sort: SortOrder, page: usize, per_page: usize) -> ReportFilter {
        ReportFilter {
            start: None,
            end: None,
            sort,
            page,
            per_page,
        }
    }

    #[test]
    fn latest_sorts_descending() {
        let rows = vec![
            summary((2025, 3, 10), 1),
            summary((2025, 3, 12), 1),
            summary((2025, 3, 11), 1),
        ];
        let report = assemble(rows, &filter(SortOrder::Latest, 1, 30), false);
        let dates: Vec<u32> = report.rows.iter().map(|r| r.date.day()).collect();
        assert_eq!(dates, vec![12, 11, 10]);
    }

    #[test]
    fn pagination_clamps_and_slices() {
        let rows: Vec<DaySummary> = (1..=5).map(|d| summary((2025, 3, d), 1)).collect();

        let page1 = assemble(rows.clone(), &filter(SortOrder::Oldest, 1, 2), false);
        assert_eq!(page1.total_pages, 3);
        assert_eq!(page1.rows.len(), 2);
        assert_eq!(page1.total_rows, 5);

        // out-of-range page snaps to the last one
        let page9 = assemble(rows, &filter(SortOrder::Oldest, 9, 2), false);
        assert_eq!(page9.page, 3);
        assert_eq!(page9.rows.len(), 1);
    }

    #[test]
    fn totals_cover_all_pages() {
        let rows: Vec<DaySummary> = (1..=4).map(|d| summary((2025, 3, d), 1)).collect();
        let report = assemble(rows, &filter(SortOrder::Latest, 1, 2), false);
        assert_eq!(report.total_seconds, 4 * 28800);
    }

    #[test]
    fn default_bounds_are_current_month() {
        let f = filter(SortOrder::Latest, 1, 30);
        let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let (start, end) = f.resolved_bounds(today);
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }
}
