use crate::models::day_summary::DaySummary;

/// Aggregate total over a set of consolidated rows. The live row counts:
/// its total is the elapsed seconds of the in-progress session.
pub fn total_seconds(summaries: &[DaySummary]) -> i64 {
    summaries.iter().map(|s| s.total_seconds).sum()
}
