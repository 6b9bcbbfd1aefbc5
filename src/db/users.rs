use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::HashMap;

pub fn map_row(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_user(conn: &Connection, username: &str) -> AppResult<User> {
    if find_by_username(conn, username)?.is_some() {
        return Err(AppError::DuplicateUser(username.to_string()));
    }

    let created_at = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO users (username, created_at) VALUES (?1, ?2)",
        params![username, created_at],
    )?;

    Ok(User {
        id: conn.last_insert_rowid(),
        username: username.to_string(),
        created_at,
    })
}

pub fn find_by_username(conn: &Connection, username: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM users WHERE username = ?1")?;
    let user = stmt.query_row(params![username], map_row).optional()?;
    Ok(user)
}

/// Resolve a username or fail with UnknownUser.
pub fn require_user(conn: &Connection, username: &str) -> AppResult<User> {
    find_by_username(conn, username)?
        .ok_or_else(|| AppError::UnknownUser(username.to_string()))
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users ORDER BY username ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// id → username map, used to label team rows and sweep log lines.
pub fn username_index(conn: &Connection) -> AppResult<HashMap<i64, String>> {
    let users = load_all(conn)?;
    Ok(users.into_iter().map(|u| (u.id, u.username)).collect())
}
