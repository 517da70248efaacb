//! Conversions from raw command-line values to typed form fields.

use crate::errors::{AppError, AppResult};
use crate::models::catalog::Catalog;
use crate::models::employee::{DaySchedule, weekday_from_key};
use chrono::Weekday;

/// Comma separated catalogue values; missing means empty.
pub fn catalog_list<C: Catalog>(raw: Option<&String>) -> AppResult<Vec<C>> {
    match raw {
        Some(s) => C::parse_list(s),
        None => Ok(Vec::new()),
    }
}

/// `MONDAY=09:00-17:00`, or `MONDAY=off` for a free day.
pub fn schedule_entry(entry: &str) -> AppResult<(Weekday, DaySchedule)> {
    let invalid = || {
        AppError::Validation(format!(
            "Invalid schedule entry '{}': expected DAY=HH:MM-HH:MM or DAY=off",
            entry
        ))
    };
    let (day, hours) = entry.split_once('=').ok_or_else(invalid)?;
    let day = weekday_from_key(day).ok_or_else(invalid)?;
    if hours.trim().eq_ignore_ascii_case("off") {
        return Ok((day, DaySchedule::default()));
    }
    let (start, end) = hours.split_once('-').ok_or_else(invalid)?;
    Ok((day, DaySchedule::new(start.trim(), end.trim())))
}
