use crate::config::Config;
use crate::core::logic::Core;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::SummaryExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export consolidated day summaries.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or an expression like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - any `A:B` combination of the above
    /// - `username`: narrow to one user; team-wide otherwise
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        username: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_summaries(pool, cfg, date_bounds, username)?;

        if rows.is_empty() {
            warning("⚠️  No entries found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}

/// Load and consolidate the entries the export covers.
fn load_summaries(
    pool: &mut DbPool,
    cfg: &Config,
    bounds: Option<(NaiveDate, NaiveDate)>,
    username: Option<&str>,
) -> AppResult<Vec<SummaryExport>> {
    let entries = match username {
        Some(name) => {
            let user = db::users::require_user(&pool.conn, name)?;
            db::queries::load_entries_for_user(pool, user.id, bounds)?
        }
        None => db::queries::load_entries_between(pool, bounds)?,
    };

    let usernames = db::users::username_index(&pool.conn)?;
    let mut summaries = Core::day_summaries(cfg, &entries)?;
    for s in &mut summaries {
        s.username = usernames.get(&s.user_id).cloned();
    }

    // Exports read oldest-first
    summaries.sort_by(|a, b| a.date.cmp(&b.date).then(a.username.cmp(&b.username)));

    Ok(summaries.iter().map(SummaryExport::from_summary).collect())
}
