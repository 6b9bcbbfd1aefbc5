use chrono::{NaiveDate, NaiveDateTime};

/// Storage format for session instants.
pub const SESSION_DT_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// The live, not-yet-finalized tracking state between clock-in and
/// clock-out. At most one active session exists per user; the invariant is
/// enforced by closing any prior active session before opening a new one.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub start_time: NaiveDateTime, // ⇔ sessions.start_time
    pub end_time: Option<NaiveDateTime>, // ⇔ sessions.end_time (NULL while active)
    pub is_active: bool,           // ⇔ sessions.is_active (0 | 1)
    pub location: String,          // ⇔ sessions.location
}

impl Session {
    /// Calendar day the session was opened on. Auto-stop always finalizes
    /// against this day, not the day the sweep runs.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Authoritative elapsed time: always derived from `now - start_time`,
    /// never cached or ticked.
    pub fn elapsed_seconds(&self, now: NaiveDateTime) -> i64 {
        (now - self.start_time).num_seconds().max(0)
    }
}
