//! Time utilities: parsing HH:MM, duration computations, clock formatting.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse a full instant ("YYYY-MM-DD HH:MM" or "YYYY-MM-DD HH:MM:SS").
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .ok()
}

/// Minutes since midnight, the unit the working-window bounds are
/// expressed in (06:00 = 360, 22:00 = 1320).
pub fn minute_of_day(t: NaiveTime) -> u32 {
    t.num_seconds_from_midnight() / 60
}

pub fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds()
}

/// Seconds → "HH:MM:SS" clock display, the format the timer face uses.
pub fn format_clock(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// 12-hour display form ("09:00 AM"), used in reports and exports.
pub fn to_12h(t: NaiveTime) -> String {
    t.format("%I:%M %p").to_string()
}
