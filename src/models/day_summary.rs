use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Consolidated view of one (user, day): the earliest clock-in, the latest
/// clock-out, and the total worked seconds under the configured duration
/// policy. Derived on demand, never persisted.
///
/// An `open` summary is the synthetic live row injected while a session is
/// running and the day has no completed entry yet; its `time_out` is `None`
/// and its total is the elapsed seconds so far.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub user_id: i64,
    pub username: Option<String>, // filled for team views
    pub date: NaiveDate,
    pub time_in: NaiveTime,
    pub time_out: Option<NaiveTime>,
    pub total_seconds: i64,
    pub open: bool,
}
