//! Session lifecycle: clock-in, clock-out, active overview.

use crate::db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::models::session::Session;
use crate::models::user::User;
use chrono::NaiveDateTime;

pub struct StartOutcome {
    /// Sessions that were still open and got closed first. Normally 0;
    /// anything else means a stop was missed.
    pub replaced: usize,
}

pub struct SessionLogic;

impl SessionLogic {
    /// Clock in. Any prior active session is closed first, inside the same
    /// transaction, so exactly one active session exists afterwards.
    pub fn start(
        pool: &mut DbPool,
        user: &User,
        location: &str,
        now: NaiveDateTime,
    ) -> AppResult<StartOutcome> {
        let tx = pool.conn.transaction()?;

        let replaced = db::sessions::close_active_sessions(&tx, user.id, now)?;
        db::sessions::open_session(&tx, user.id, location, now)?;
        db::log::record(
            &tx,
            "start",
            &user.username,
            &format!("Session started at {}", now.format("%Y-%m-%d %H:%M")),
        )?;

        tx.commit()?;
        Ok(StartOutcome { replaced })
    }

    /// Clock out. Returns the completed entry, or `None` when the user has
    /// no active session (a no-op, not an error).
    ///
    /// The entry is dated by the stop instant; its duration is derived
    /// from `now - start_time` at the moment of the call.
    pub fn stop(pool: &mut DbPool, user: &User, now: NaiveDateTime) -> AppResult<Option<TimeEntry>> {
        let tx = pool.conn.transaction()?;

        let Some(session) = db::sessions::load_active_session(&tx, user.id)? else {
            return Ok(None);
        };

        db::sessions::close_session(&tx, session.id, now)?;

        let entry = TimeEntry::new(
            user.id,
            now.date(),
            session.start_time.time(),
            Some(now.time()),
            session.elapsed_seconds(now),
            session.location.clone(),
            "cli",
        );
        db::queries::insert_entry(&tx, &entry)?;

        db::log::record(
            &tx,
            "stop",
            &user.username,
            &format!("Session stopped at {}", now.format("%Y-%m-%d %H:%M")),
        )?;

        tx.commit()?;
        Ok(Some(entry))
    }

    /// All active sessions with their owners, for the `status` command.
    pub fn active_overview(pool: &mut DbPool) -> AppResult<Vec<(Session, String)>> {
        let usernames = db::users::username_index(&pool.conn)?;
        let sessions = db::sessions::load_all_active(&pool.conn)?;

        Ok(sessions
            .into_iter()
            .map(|s| {
                let name = usernames
                    .get(&s.user_id)
                    .cloned()
                    .unwrap_or_else(|| format!("user#{}", s.user_id));
                (s, name)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use chrono::NaiveDate;

    fn pool_with_user() -> (DbPool, User) {
        let pool = DbPool::open_in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        let user = db::users::insert_user(&pool.conn, "alice").unwrap();
        (pool, user)
    }

    fn at(date: (i32, u32, u32), h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn start_while_active_leaves_one_active_session() {
        let (mut pool, user) = pool_with_user();

        SessionLogic::start(&mut pool, &user, "office", at((2025, 3, 10), 9, 0)).unwrap();
        let outcome =
            SessionLogic::start(&mut pool, &user, "office", at((2025, 3, 10), 10, 0)).unwrap();

        assert_eq!(outcome.replaced, 1);
        let active = db::sessions::load_all_active(&pool.conn).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].start_time, at((2025, 3, 10), 10, 0));
    }

    #[test]
    fn stop_writes_entry_with_elapsed_duration() {
        let (mut pool, user) = pool_with_user();

        SessionLogic::start(&mut pool, &user, "remote", at((2025, 3, 10), 9, 0)).unwrap();
        let entry = SessionLogic::stop(&mut pool, &user, at((2025, 3, 10), 17, 30))
            .unwrap()
            .unwrap();

        assert_eq!(entry.duration, 8 * 3600 + 30 * 60);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(entry.location, "remote");
        assert!(db::sessions::load_all_active(&pool.conn).unwrap().is_empty());
    }

    #[test]
    fn stop_without_session_is_a_noop() {
        let (mut pool, user) = pool_with_user();
        let out = SessionLogic::stop(&mut pool, &user, at((2025, 3, 10), 17, 0)).unwrap();
        assert!(out.is_none());
    }
}
