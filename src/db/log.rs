use crate::errors::AppResult;
use crate::ui::messages::warning;
use ansi_term::Colour;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Same as [`ttlog`] but never fails: a broken log must not hide the
/// outcome of the operation being logged.
pub fn record(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// Colour for an operation name in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" | "signup" => Colour::Green,
        "logout" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        other if other.ends_with("_failed") => Colour::Red,
        other if other.starts_with("delete_") || other.starts_with("cancel_") => Colour::Red,
        other if other.starts_with("update_") => Colour::Yellow,
        other if other.starts_with("create_") || other.starts_with("add_") => Colour::Green,
        _ => Colour::White,
    }
}

const OP_MAX_WIDTH: usize = 60;

/// Print the whole `log` table, oldest first.
pub fn print_log(conn: &Connection) -> AppResult<()> {
    let mut stmt =
        conn.prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        let id: i64 = row.get(0)?;
        let date: String = row.get(1)?;
        let operation: String = row.get(2)?;
        let target: Option<String> = row.get(3)?;
        let message: String = row.get(4)?;
        Ok((id, date, operation, target.unwrap_or_default(), message))
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }

    if entries.is_empty() {
        println!("📜 Internal log is empty.");
        return Ok(());
    }

    let id_w = entries
        .iter()
        .map(|(id, ..)| id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = entries
        .iter()
        .map(|(_, date, ..)| date.len())
        .max()
        .unwrap_or(10);

    println!("📜 Internal log:\n");

    for (id, date, operation, target, message) in entries {
        let color = color_for_operation(&operation);
        let mut line = color.paint(operation.as_str()).to_string();
        if !target.is_empty() {
            line.push_str(&format!(" ({})", target));
        }

        // cut on the visible text, then colour the operation again
        let visible = strip_ansi(&line);
        let shown = if visible.chars().count() > OP_MAX_WIDTH {
            let mut s: String = visible.chars().take(OP_MAX_WIDTH - 3).collect();
            s.push_str("...");
            s
        } else {
            visible
        };
        let recolored = match shown.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(shown.as_str()).to_string(),
        };
        let padding = " ".repeat(OP_MAX_WIDTH.saturating_sub(strip_ansi(&recolored).chars().count()));

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            id,
            date,
            recolored,
            padding,
            message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
