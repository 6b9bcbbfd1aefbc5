use crate::core::calculator::window::WorkWindow;
use crate::models::day_summary::DaySummary;
use crate::models::entry::TimeEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a consolidated day total is computed.
///
/// Historically the two strategies coexisted in different views; here one
/// policy is chosen in the config and applied uniformly everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationPolicy {
    /// latest clock-out - earliest clock-in, as the consolidated report
    /// view displays. The default.
    #[default]
    Span,
    /// Sum of each entry's individually recorded duration.
    Sum,
}

/// Merge fragmented same-day entries into one logical span per
/// (user, date).
///
/// Entries whose clock-in or clock-out falls outside the working window
/// (including entries with no clock-out at all) are discarded. Within each
/// remaining group the displayed span is min(time_in) / max(time_out), and
/// the total follows `policy`. The reduction is invariant to input order;
/// output is ordered by (user_id, date) ascending, callers re-sort for
/// presentation.
pub fn consolidate(
    entries: &[TimeEntry],
    window: &WorkWindow,
    policy: DurationPolicy,
) -> Vec<DaySummary> {
    let mut groups: BTreeMap<(i64, NaiveDate), Vec<&TimeEntry>> = BTreeMap::new();

    for entry in entries.iter().filter(|e| window.admits(e)) {
        groups.entry((entry.user_id, entry.date)).or_default().push(entry);
    }

    groups
        .into_iter()
        .map(|((user_id, date), group)| {
            let earliest_in = group.iter().map(|e| e.time_in).min().unwrap();
            // admits() guarantees time_out is present on every group member
            let latest_out = group.iter().filter_map(|e| e.time_out).max().unwrap();

            let total_seconds = match policy {
                DurationPolicy::Span => {
                    (date.and_time(latest_out) - date.and_time(earliest_in)).num_seconds()
                }
                DurationPolicy::Sum => group.iter().map(|e| e.duration).sum(),
            };

            DaySummary {
                user_id,
                username: None,
                date,
                time_in: earliest_in,
                time_out: Some(latest_out),
                total_seconds,
                open: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn window() -> WorkWindow {
        WorkWindow::new(
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn entry(
        user_id: i64,
        date: (i32, u32, u32),
        time_in: (u32, u32),
        time_out: (u32, u32),
        duration: i64,
    ) -> TimeEntry {
        TimeEntry::new(
            user_id,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            NaiveTime::from_hms_opt(time_in.0, time_in.1, 0).unwrap(),
            Some(NaiveTime::from_hms_opt(time_out.0, time_out.1, 0).unwrap()),
            duration,
            String::new(),
            "cli",
        )
    }

    #[test]
    fn fragmented_day_reduces_to_one_span() {
        // 09:00-12:00 plus 13:00-17:00: span 8h, sum of parts 7h
        let entries = vec![
            entry(1, (2025, 3, 10), (9, 0), (12, 0), 10800),
            entry(1, (2025, 3, 10), (13, 0), (17, 0), 14400),
        ];

        let span = consolidate(&entries, &window(), DurationPolicy::Span);
        assert_eq!(span.len(), 1);
        assert_eq!(span[0].time_in, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(span[0].time_out, Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()));
        assert_eq!(span[0].total_seconds, 28800);

        let sum = consolidate(&entries, &window(), DurationPolicy::Sum);
        assert_eq!(sum[0].total_seconds, 25200);
    }

    #[test]
    fn reduction_is_order_invariant() {
        let mut entries = vec![
            entry(1, (2025, 3, 10), (13, 0), (17, 0), 14400),
            entry(1, (2025, 3, 10), (9, 0), (12, 0), 10800),
            entry(1, (2025, 3, 10), (10, 30), (11, 0), 1800),
        ];
        let forward = consolidate(&entries, &window(), DurationPolicy::Span);
        entries.reverse();
        let backward = consolidate(&entries, &window(), DurationPolicy::Span);

        assert_eq!(forward[0].time_in, backward[0].time_in);
        assert_eq!(forward[0].time_out, backward[0].time_out);
        assert_eq!(forward[0].total_seconds, backward[0].total_seconds);
    }

    #[test]
    fn out_of_window_entries_never_join_a_span() {
        let entries = vec![
            entry(1, (2025, 3, 10), (5, 59), (12, 0), 0),
            entry(1, (2025, 3, 10), (9, 0), (22, 1), 0),
            entry(1, (2025, 3, 10), (10, 0), (11, 0), 3600),
        ];
        let out = consolidate(&entries, &window(), DurationPolicy::Span);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].time_in, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(out[0].total_seconds, 3600);
    }

    #[test]
    fn boundary_times_are_admitted() {
        let entries = vec![entry(1, (2025, 3, 10), (6, 0), (22, 0), 0)];
        let out = consolidate(&entries, &window(), DurationPolicy::Span);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].total_seconds, 16 * 3600);
    }

    #[test]
    fn users_and_days_stay_separate() {
        let entries = vec![
            entry(1, (2025, 3, 10), (9, 0), (17, 0), 0),
            entry(2, (2025, 3, 10), (8, 0), (16, 0), 0),
            entry(1, (2025, 3, 11), (9, 0), (17, 0), 0),
        ];
        let out = consolidate(&entries, &window(), DurationPolicy::Span);
        assert_eq!(out.len(), 3);
    }
}
