use crate::models::day_summary::DaySummary;
use crate::utils::formatting::secs2readable;
use crate::utils::time::to_12h;
use serde::Serialize;

/// Flat row shape for exports. One row per consolidated day.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub user: String,
    pub date: String,
    pub time_in: String,
    pub time_out: String,
    pub duration_seconds: i64,
    pub duration: String,
}

impl SummaryExport {
    pub fn from_summary(s: &DaySummary) -> Self {
        Self {
            user: s.username.clone().unwrap_or_default(),
            date: s.date.format("%Y-%m-%d").to_string(),
            time_in: to_12h(s.time_in),
            time_out: s.time_out.map(to_12h).unwrap_or_else(|| "-".to_string()),
            duration_seconds: s.total_seconds,
            duration: secs2readable(s.total_seconds, false),
        }
    }
}

/// Header for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "user",
        "date",
        "time_in",
        "time_out",
        "duration_seconds",
        "duration",
    ]
}

pub(crate) fn summary_to_row(s: &SummaryExport) -> Vec<String> {
    vec![
        s.user.clone(),
        s.date.clone(),
        s.time_in.clone(),
        s.time_out.clone(),
        s.duration_seconds.to_string(),
        s.duration.clone(),
    ]
}
