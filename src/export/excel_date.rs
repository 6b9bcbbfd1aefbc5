use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Interpret a cell value as a date or 12-hour time, returning the Excel
/// serial plus its number format. Anything else stays a plain string.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = d.and_hms_opt(0, 0, 0).unwrap();
        let serial = naive_datetime_to_excel_serial(&dt);
        return Some(("yyyy-mm-dd", serial));
    }

    // Report times come through as "09:00 AM"
    if let Ok(t) = NaiveTime::parse_from_str(s, "%I:%M %p") {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm AM/PM", seconds / 86400.0));
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}
