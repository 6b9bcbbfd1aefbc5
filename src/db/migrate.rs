//! Schema migration engine.
//!
//! Migrations are feature-detecting: each one probes sqlite_master /
//! PRAGMA table_info and applies itself only when needed, so running the
//! full chain on any database version is safe.

use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Ensure that the `users` table exists.
fn ensure_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            username   TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `entries` table exists with the modern schema.
fn ensure_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    INTEGER NOT NULL REFERENCES users(id),
            date       TEXT NOT NULL,
            time_in    TEXT NOT NULL,
            time_out   TEXT,
            duration   INTEGER NOT NULL DEFAULT 0,
            location   TEXT NOT NULL DEFAULT '',
            source     TEXT NOT NULL DEFAULT 'cli' CHECK(source IN ('cli','auto-stop')),
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_user_date ON entries(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        "#,
    )?;
    Ok(())
}

/// Ensure that the `sessions` table exists.
fn ensure_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    INTEGER NOT NULL REFERENCES users(id),
            start_time TEXT NOT NULL,
            end_time   TEXT,
            is_active  INTEGER NOT NULL DEFAULT 1,
            location   TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_user_active ON sessions(user_id, is_active);
        "#,
    )?;
    Ok(())
}

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-0.3 `entries` table to include the `location` column.
fn migrate_add_location_to_entries(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "entries")? {
        return Ok(()); // fresh database, ensure_entries_table covers it
    }

    if table_has_column(conn, "entries", "location")? {
        return Ok(());
    }

    warning("Adding 'location' column to entries table...");

    // Snapshot the file before touching an existing table
    let db_path: String = conn
        .query_row("PRAGMA database_list;", [], |row| row.get(2))
        .unwrap_or_else(|_| "".to_string());

    if !db_path.is_empty() {
        backup_before_migration(&db_path)?;
    }

    conn.execute_batch(
        r#"
        ALTER TABLE entries ADD COLUMN location TEXT NOT NULL DEFAULT '';
        "#,
    )?;

    success("'location' column added.");
    Ok(())
}

fn backup_before_migration(db_path: &str) -> Result<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_migration.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = std::path::Path::new(db_path)
        .parent()
        .unwrap_or_else(|| std::path::Path::new("."))
        .join(&backup_name);

    let file = File::create(&backup_path).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::new(
            e.kind(),
            format!("Backup failed (create): {}", e),
        )))
    })?;

    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (start_file): {}",
            e
        ))))
    })?;

    let db_content = fs::read(db_path).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (read): {}",
            e
        ))))
    })?;

    zip.write_all(&db_content).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (write): {}",
            e
        ))))
    })?;

    zip.finish().map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (finish): {}",
            e
        ))))
    })?;

    success(format!("Database backed up to {}", backup_path.display()));
    Ok(())
}

/// Run every pending migration in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_users_table(conn)?;
    migrate_add_location_to_entries(conn)?;
    ensure_entries_table(conn)?;
    ensure_sessions_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
