use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::utils::time::minute_of_day;
use chrono::NaiveTime;

/// Valid working window, expressed as an inclusive time-of-day interval.
///
/// Membership is evaluated on whole minutes since midnight: the default
/// 06:00-22:00 window spans minutes 360-1320 and both bounds are inside it.
#[derive(Debug, Clone, Copy)]
pub struct WorkWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::Config(format!(
                "work window end {} is not after start {}",
                end.format("%H:%M"),
                start.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, t: NaiveTime) -> bool {
        let m = minute_of_day(t);
        m >= minute_of_day(self.start) && m <= minute_of_day(self.end)
    }

    /// An entry is admitted to consolidation only when both its clock-in
    /// and its clock-out fall inside the window. An entry still missing its
    /// clock-out is never admitted; it stays visible in raw listings only.
    pub fn admits(&self, entry: &TimeEntry) -> bool {
        self.contains(entry.time_in) && entry.time_out.is_some_and(|t| self.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn window() -> WorkWindow {
        WorkWindow::new(
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn entry(time_in: (u32, u32), time_out: Option<(u32, u32)>) -> TimeEntry {
        TimeEntry::new(
            1,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            NaiveTime::from_hms_opt(time_in.0, time_in.1, 0).unwrap(),
            time_out.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            0,
            String::new(),
            "cli",
        )
    }

    #[test]
    fn bounds_are_inclusive() {
        let w = window();
        assert!(w.contains(NaiveTime::from_hms_opt(6, 0, 0).unwrap()));
        assert!(w.contains(NaiveTime::from_hms_opt(22, 0, 0).unwrap()));
        assert!(!w.contains(NaiveTime::from_hms_opt(5, 59, 0).unwrap()));
        assert!(!w.contains(NaiveTime::from_hms_opt(22, 1, 0).unwrap()));
    }

    #[test]
    fn entry_outside_window_is_rejected() {
        let w = window();
        assert!(w.admits(&entry((9, 0), Some((17, 0)))));
        assert!(!w.admits(&entry((5, 59), Some((17, 0)))));
        assert!(!w.admits(&entry((9, 0), Some((22, 1)))));
    }

    #[test]
    fn open_entry_is_rejected() {
        assert!(!window().admits(&entry((9, 0), None)));
    }

    #[test]
    fn inverted_window_is_refused() {
        let r = WorkWindow::new(
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        );
        assert!(r.is_err());
    }
}
