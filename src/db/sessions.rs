//! Session queries: open/close/scan. Callers wrap state transitions in a
//! transaction so close-before-open is atomic.

use crate::errors::{AppError, AppResult};
use crate::models::session::{SESSION_DT_FMT, Session};
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn parse_instant(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, SESSION_DT_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(s.to_string())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<Session> {
    let start_str: String = row.get("start_time")?;
    let end_str: Option<String> = row.get("end_time")?;

    let end_time = match end_str {
        None => None,
        Some(s) => Some(parse_instant(&s)?),
    };

    Ok(Session {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        start_time: parse_instant(&start_str)?,
        end_time,
        is_active: row.get::<_, i64>("is_active")? == 1,
        location: row.get("location")?,
    })
}

/// Close every active session for the user, returning how many were open.
pub fn close_active_sessions(
    conn: &Connection,
    user_id: i64,
    end_time: NaiveDateTime,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE sessions SET is_active = 0, end_time = ?1
         WHERE user_id = ?2 AND is_active = 1",
        params![end_time.format(SESSION_DT_FMT).to_string(), user_id],
    )?;
    Ok(n)
}

pub fn open_session(
    conn: &Connection,
    user_id: i64,
    location: &str,
    start_time: NaiveDateTime,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO sessions (user_id, start_time, end_time, is_active, location, created_at)
         VALUES (?1, ?2, NULL, 1, ?3, ?4)",
        params![
            user_id,
            start_time.format(SESSION_DT_FMT).to_string(),
            location,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn close_session(conn: &Connection, id: i64, end_time: NaiveDateTime) -> AppResult<()> {
    conn.execute(
        "UPDATE sessions SET is_active = 0, end_time = ?1 WHERE id = ?2",
        params![end_time.format(SESSION_DT_FMT).to_string(), id],
    )?;
    Ok(())
}

pub fn load_active_session(conn: &Connection, user_id: i64) -> AppResult<Option<Session>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM sessions WHERE user_id = ?1 AND is_active = 1
         ORDER BY start_time DESC LIMIT 1",
    )?;
    let session = stmt.query_row(params![user_id], map_row).optional()?;
    Ok(session)
}

/// Every active session across all users, oldest first: the sweep's scan
/// set.
pub fn load_all_active(conn: &Connection) -> AppResult<Vec<Session>> {
    let mut stmt = conn
        .prepare("SELECT * FROM sessions WHERE is_active = 1 ORDER BY start_time ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
