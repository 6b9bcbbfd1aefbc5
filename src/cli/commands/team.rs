use crate::cli::commands::report::{build_filter, print_footer, summary_row};
use crate::cli::commands::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::build_team_report;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Team {
        user,
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
        let report = build_team_report(&mut pool, cfg, user.as_deref(), &filter, now)?;

        if report.total_rows == 0 {
            info("No entries for the selected range.");
            return Ok(());
        }

        println!(
            "Team report (page {}/{})\n",
            report.page, report.total_pages
        );

        let mut table = Table::new(vec![
            Column::new("User"),
            Column::new("Date"),
            Column::new("Time In"),
            Column::new("Time Out"),
            Column::new("Duration"),
        ]);
        for row in &report.rows {
            table.add_row(summary_row(row, true));
        }
        print!("{}", table.render());

        print_footer(&report);
    }
    Ok(())
}
