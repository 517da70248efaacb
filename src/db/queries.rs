//! Plain SQL helpers for the session key/value table and the list cursors.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn get_session_value(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM session WHERE key = ?1")?;
    let value = stmt
        .query_row([key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

pub fn set_session_value(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO session (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}

pub fn delete_session_value(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM session WHERE key = ?1", [key])?;
    Ok(())
}

/// Load the saved `(current_page, total_pages)` for a list view.
pub fn load_cursor(conn: &Connection, view: &str) -> AppResult<Option<(u32, u32)>> {
    let mut stmt =
        conn.prepare_cached("SELECT current_page, total_pages FROM cursor WHERE view = ?1")?;
    let row = stmt
        .query_row([view], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, u32>(1)?)))
        .optional()?;
    Ok(row)
}

pub fn save_cursor(conn: &Connection, view: &str, current_page: u32, total_pages: u32) -> AppResult<()> {
    conn.execute(
        "INSERT INTO cursor (view, current_page, total_pages) VALUES (?1, ?2, ?3)
         ON CONFLICT(view) DO UPDATE SET current_page = excluded.current_page,
                                         total_pages = excluded.total_pages",
        params![view, current_page, total_pages],
    )?;
    Ok(())
}

pub fn clear_cursors(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM cursor", [])?;
    Ok(())
}
