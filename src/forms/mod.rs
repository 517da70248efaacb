//! Client-side checks run before a request is built, and the single
//! outcome string each form displays afterwards.
//!
//! The first failing check wins and no request is sent. After a call, the
//! outcome is the server's message on success, or the failure collapsed
//! through [`AppError::user_message`].

pub mod account;
pub mod auth;
pub mod booking;
pub mod cart;
pub mod employee;
pub mod history;
pub mod product;
pub mod statistics;

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const SHORT_USERNAME: &str = "Username must be at least 3 characters long";
pub const SHORT_PASSWORD: &str = "Password must be at least 4 characters long";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    pub message: String,
    pub success: bool,
}

impl FormOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    pub fn from_result(result: AppResult<String>) -> Self {
        match result {
            Ok(message) => Self::ok(message),
            Err(e) => Self::fail(e.user_message()),
        }
    }
}

/// Fail with `message` unless `condition` holds.
pub fn ensure(condition: bool, message: &str) -> AppResult<()> {
    if condition {
        Ok(())
    } else {
        Err(AppError::Validation(message.to_string()))
    }
}

/// At least `min` characters once surrounding whitespace is dropped.
pub fn has_min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

pub fn is_valid_email(value: &str) -> bool {
    match &*EMAIL_RE {
        Ok(re) => re.is_match(value.trim()),
        Err(_) => false,
    }
}
