use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// One recorded clock-in/clock-out pair.
///
/// Entries are written when a work session ends (manual stop, auto-stop or
/// a direct `add`) and are immutable afterwards. Several entries may exist
/// for the same (user, date) when a day is fragmented into multiple
/// sessions.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: i64,          // ⇔ entries.user_id
    pub date: NaiveDate,       // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub time_in: NaiveTime,    // ⇔ entries.time_in (TEXT "HH:MM")
    pub time_out: Option<NaiveTime>, // ⇔ entries.time_out (NULL while open)
    pub duration: i64,         // ⇔ entries.duration (seconds)
    pub location: String,      // ⇔ entries.location (free text)
    pub source: String,        // ⇔ entries.source ('cli' | 'auto-stop')
    pub created_at: String,    // ⇔ entries.created_at (TEXT, ISO8601)
}

impl TimeEntry {
    /// High-level constructor for entries produced by this process.
    /// Sets `created_at = now()` in ISO8601.
    pub fn new(
        user_id: i64,
        date: NaiveDate,
        time_in: NaiveTime,
        time_out: Option<NaiveTime>,
        duration: i64,
        location: String,
        source: &str,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            date,
            time_in,
            time_out,
            duration,
            location,
            source: source.to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_in_str(&self) -> String {
        self.time_in.format("%H:%M").to_string()
    }

    pub fn time_out_str(&self) -> Option<String> {
        self.time_out.map(|t| t.format("%H:%M").to_string())
    }
}
