//! Auto-stop sweep: force-terminates stale sessions at the daily cutoff.
//!
//! A session is stopped when its start day has passed, or when it started
//! today and the wall clock has passed the cutoff. The terminal entry is
//! always pinned to the cutoff on the session's start date, so a swept
//! session never contributes time beyond the cutoff.

use crate::db;
use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::models::session::Session;
use crate::ui::messages::error;
use chrono::{NaiveDateTime, NaiveTime};
use rusqlite::Connection;

#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub stopped: usize,
    pub failures: usize,
}

/// The sweep rule. Past-day sessions are stopped unconditionally; a
/// today session only once the cutoff has passed. A session that crosses
/// midnight without reaching the cutoff is therefore left alone until the
/// date actually changes.
pub fn is_expired(start: NaiveDateTime, cutoff: NaiveTime, now: NaiveDateTime) -> bool {
    let day = start.date();
    day < now.date() || (day == now.date() && now.time() >= cutoff)
}

/// One sweep pass over every active session. Idempotent: only
/// `is_active` rows are touched. A failure on one session is reported and
/// skipped; the rest of the sweep continues.
pub fn run_sweep(
    conn: &mut Connection,
    cutoff: NaiveTime,
    now: NaiveDateTime,
) -> AppResult<SweepOutcome> {
    let usernames = db::users::username_index(conn)?;
    let sessions = db::sessions::load_all_active(conn)?;

    let mut outcome = SweepOutcome::default();

    for session in sessions {
        if !is_expired(session.start_time, cutoff, now) {
            continue;
        }

        let username = usernames
            .get(&session.user_id)
            .cloned()
            .unwrap_or_else(|| format!("user#{}", session.user_id));

        match stop_expired(conn, &session, &username, cutoff) {
            Ok(()) => outcome.stopped += 1,
            Err(e) => {
                error(format!(
                    "Auto-stop failed for {} (session {}): {}",
                    username, session.id, e
                ));
                outcome.failures += 1;
            }
        }
    }

    Ok(outcome)
}

fn stop_expired(
    conn: &mut Connection,
    session: &Session,
    username: &str,
    cutoff: NaiveTime,
) -> AppResult<()> {
    let end = session.start_date().and_time(cutoff);
    // A session opened after the cutoff would otherwise go negative
    let duration = (end - session.start_time).num_seconds().max(0);

    let tx = conn.transaction()?;

    let entry = TimeEntry::new(
        session.user_id,
        session.start_date(),
        session.start_time.time(),
        Some(cutoff),
        duration,
        session.location.clone(),
        "auto-stop",
    );
    db::queries::insert_entry(&tx, &entry)?;
    db::sessions::close_session(&tx, session.id, end)?;
    db::log::record(
        &tx,
        "auto-stop",
        username,
        &format!(
            "Session automatically stopped at {}",
            cutoff.format("%H:%M")
        ),
    )?;

    tx.commit()?;
    Ok(())
}
