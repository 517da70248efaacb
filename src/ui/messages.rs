use crate::forms::FormOutcome;
use crate::session::Navigation;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_SALON: &str = "✂️";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Dashboard header line.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}\n", FG_BLUE, BOLD, ICON_SALON, msg, RESET);
}

/// Print a form's result: green on success, red otherwise.
pub fn outcome(result: &FormOutcome) {
    if result.success {
        success(&result.message);
    } else {
        error(&result.message);
    }
}

/// Report where the guard sent the user.
pub fn navigation(nav: Navigation) {
    match nav {
        Navigation::Render(route) => info(format!("Rendering {}", route)),
        Navigation::Redirect(route) => warning(format!("Redirected to {}", route)),
    }
}
