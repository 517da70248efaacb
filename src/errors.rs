//! Unified application error type.
//! Every module (api, forms, views, session, db, cli) returns AppError so
//! the CLI can collapse any failure into a single inline message.

use crate::session::Route;
use std::io;
use thiserror::Error;

/// Message shown for network failures and unreadable payloads.
pub const GENERIC_ERROR: &str = "An unexpected error occurred.";

/// Message used when a success envelope lacks the expected field.
pub const UNEXPECTED_FORMAT: &str = "Unexpected response format";

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / local storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("{0}")]
    Api(String),

    #[error("{}", UNEXPECTED_FORMAT)]
    UnexpectedFormat,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    // ---------------------------
    // Client-side checks
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid {kind}: '{value}'")]
    InvalidCatalogValue { kind: &'static str, value: String },

    #[error("No item #{0} on the current page")]
    InvalidSelection(usize),

    // ---------------------------
    // Session / navigation
    // ---------------------------
    #[error("{0} requires a session, redirected to {login}", login = Route::Login)]
    NotAuthenticated(Route),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// The string a screen displays for this failure.
    ///
    /// Validation and server errors carry their own message; a malformed
    /// success payload gets the fixed format message; transport and parse
    /// failures degrade to the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Api(msg) => msg.clone(),
            AppError::UnexpectedFormat => UNEXPECTED_FORMAT.to_string(),
            AppError::Network(_) | AppError::Decode(_) => GENERIC_ERROR.to_string(),
            other => other.to_string(),
        }
    }

    /// True for failures that happened before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::InvalidDate(_)
                | AppError::InvalidCatalogValue { .. }
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
