//! Entry queries: row mapping, inserts, range loads.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<TimeEntry> {
    let date_str: String = row.get("date")?;
    let time_in_str: String = row.get("time_in")?;
    let time_out_str: Option<String> = row.get("time_out")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time_in = NaiveTime::parse_from_str(&time_in_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_in_str.clone())),
        )
    })?;

    let time_out = match time_out_str {
        None => None,
        Some(s) => Some(NaiveTime::parse_from_str(&s, "%H:%M").map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(s.clone())),
            )
        })?),
    };

    Ok(TimeEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        time_in,
        time_out,
        duration: row.get("duration")?,
        location: row.get("location")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (user_id, date, time_in, time_out, duration, location, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            entry.user_id,
            entry.date_str(),
            entry.time_in_str(),
            entry.time_out_str(),
            entry.duration,
            entry.location,
            entry.source,
            entry.created_at,
        ],
    )?;
    Ok(())
}

/// Entries for one user, optionally narrowed to a date range, ordered
/// chronologically.
pub fn load_entries_for_user(
    pool: &mut DbPool,
    user_id: i64,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<TimeEntry>> {
    let mut sql = String::from("SELECT * FROM entries WHERE user_id = ?1");
    if bounds.is_some() {
        sql.push_str(" AND date >= ?2 AND date <= ?3");
    }
    sql.push_str(" ORDER BY date ASC, time_in ASC");

    let mut stmt = pool.conn.prepare(&sql)?;

    let mut out = Vec::new();
    match bounds {
        Some((start, end)) => {
            let rows = stmt.query_map(
                params![
                    user_id,
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let rows = stmt.query_map(params![user_id], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// All entries inside a date range regardless of user (team views).
pub fn load_entries_between(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<TimeEntry>> {
    let mut sql = String::from("SELECT * FROM entries");
    if bounds.is_some() {
        sql.push_str(" WHERE date >= ?1 AND date <= ?2");
    }
    sql.push_str(" ORDER BY date ASC, time_in ASC");

    let mut stmt = pool.conn.prepare(&sql)?;

    let mut out = Vec::new();
    match bounds {
        Some((start, end)) => {
            let rows = stmt.query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// Whether the user already has at least one completed entry for the day.
/// Gates the injection of the synthetic live row.
pub fn has_completed_entry(conn: &Connection, user_id: i64, date: NaiveDate) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM entries
         WHERE user_id = ?1 AND date = ?2 AND time_out IS NOT NULL
         LIMIT 1",
    )?;
    let exists = stmt.exists(params![user_id, date.format("%Y-%m-%d").to_string()])?;
    Ok(exists)
}
