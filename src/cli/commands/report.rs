use crate::cli::commands::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{Report, ReportFilter, SortOrder, build_user_report};
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_clock, to_12h};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        username,
        raw,
        from,
        to,
        sort,
        page,
        per_page,
        now,
    } = cmd
    {
        let now = resolve_now(now)?;
        let filter = build_filter(cfg, from, to, sort, page, per_page)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let user = db::users::require_user(&pool.conn, username)?;

        if *raw {
            return print_raw_entries(&mut pool, &user, &filter, now);
        }

        let report = build_user_report(&mut pool, cfg, &user, &filter, now)?;

        if report.total_rows == 0 {
            info("No entries for the selected range.");
            return Ok(());
        }

        println!(
            "Timesheet for {} (page {}/{})\n",
            user.username, report.page, report.total_pages
        );

        let mut table = Table::new(vec![
            Column::new("Date"),
            Column::new("Time In"),
            Column::new("Time Out"),
            Column::new("Duration"),
        ]);
        for row in &report.rows {
            table.add_row(summary_row(row, false));
        }
        print!("{}", table.render());

        print_footer(&report);
    }
    Ok(())
}

/// Raw per-entry listing. Entries that consolidation would discard (open
/// clock-outs, times outside the working window) still show up here.
fn print_raw_entries(
    pool: &mut DbPool,
    user: &crate::models::user::User,
    filter: &ReportFilter,
    now: chrono::NaiveDateTime,
) -> AppResult<()> {
    let bounds = filter.resolved_bounds(now.date());
    let entries = db::queries::load_entries_for_user(pool, user.id, Some(bounds))?;

    if entries.is_empty() {
        info("No entries for the selected range.");
        return Ok(());
    }

    println!("Raw entries for {}\n", user.username);

    let mut table = Table::new(vec![
        Column::new("Date"),
        Column::new("Time In"),
        Column::new("Time Out"),
        Column::new("Duration"),
        Column::new("Location"),
        Column::new("Source"),
    ]);
    for e in &entries {
        table.add_row(vec![
            e.date_str(),
            to_12h(e.time_in),
            e.time_out.map(to_12h).unwrap_or_else(|| "--:--".to_string()),
            format_clock(e.duration),
            if e.location.is_empty() {
                "-".to_string()
            } else {
                e.location.clone()
            },
            e.source.clone(),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}

/// Shared by report and team: filter construction from raw CLI values.
pub(crate) fn build_filter(
    cfg: &Config,
    from: &Option<String>,
    to: &Option<String>,
    sort: &Option<String>,
    page: &Option<usize>,
    per_page: &Option<usize>,
) -> AppResult<ReportFilter> {
    let start = match from {
        Some(s) => Some(parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
        None => None,
    };
    let end = match to {
        Some(s) => Some(parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
        None => None,
    };
    let sort = match sort {
        Some(s) => SortOrder::parse(s)?,
        None => SortOrder::default(),
    };

    Ok(ReportFilter {
        start,
        end,
        sort,
        page: page.unwrap_or(1),
        per_page: per_page.unwrap_or(cfg.default_page_size),
    })
}

/// One rendered table row. The live row shows no clock-out and is marked.
pub(crate) fn summary_row(row: &DaySummary, team: bool) -> Vec<String> {
    let mut cells = Vec::new();
    if team {
        cells.push(row.username.clone().unwrap_or_else(|| "-".to_string()));
    }
    cells.push(row.date.format("%Y-%m-%d").to_string());
    cells.push(to_12h(row.time_in));
    cells.push(match row.time_out {
        Some(t) => to_12h(t),
        None => "--:--".to_string(),
    });
    cells.push(if row.open {
        format!("{} (live)", format_clock(row.total_seconds))
    } else {
        format_clock(row.total_seconds)
    });
    cells
}

pub(crate) fn print_footer(report: &Report) {
    println!(
        "Days: {}   Total: {}",
        report.total_rows,
        format_clock(report.total_seconds)
    );
}
