use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::{AppError, AppResult};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `YYYY-MM-DD` argument, failing on malformed input.
pub fn parse_optional_date(s: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match s {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => parse_date(v)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(v.to_string())),
    }
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Parse the date-time strings the backend sends (`2025-06-01T10:00:00`,
/// with or without seconds, fraction or offset). Offsets are dropped and
/// the wall-clock value is kept.
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Build the booking slot string `YYYY-MM-DDTHH:MM` from a day and an
/// hour as listed by the availability endpoint (seconds are cut).
pub fn slot(date: &str, hour: &str) -> String {
    let hhmm: String = hour.trim().chars().take(5).collect();
    format!("{}T{}", date.trim(), hhmm)
}

/// "June 1, 2025"
pub fn long_date(dt: &NaiveDateTime) -> String {
    dt.format("%B %-d, %Y").to_string()
}

/// "10:00 AM"
pub fn short_time(dt: &NaiveDateTime) -> String {
    dt.format("%I:%M %p").to_string()
}

/// "June 1, 2025 at 10:00 AM", or the raw string when it cannot be parsed.
pub fn describe_date_time(raw: &str) -> String {
    match parse_date_time(raw) {
        Some(dt) => format!("{} at {}", long_date(&dt), short_time(&dt)),
        None => raw.to_string(),
    }
}
