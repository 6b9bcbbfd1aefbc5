pub mod excel_date;
pub mod fs_utils;
pub mod json_csv;
pub mod logic;
pub mod model;
pub mod range;
pub mod xlsx;

pub use model::SummaryExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

pub(crate) fn notify_export_success(kind: &str, path: &Path) {
    success(format!("{} export written to {}", kind, path.display()));
}
