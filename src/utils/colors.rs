/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Appointment status color:
/// cancelled → red, completed → grey, anything else (booked, pending) → green
pub fn color_for_status(status: &str) -> &'static str {
    match status.to_uppercase().as_str() {
        "CANCELLED" | "CANCELED" => RED,
        "COMPLETED" | "DONE" => GREY,
        "" => RESET,
        _ => GREEN,
    }
}

/// Stock color: out of stock red, low stock yellow.
pub fn color_for_stock(stock: i64) -> &'static str {
    if stock <= 0 {
        RED
    } else if stock < 5 {
        YELLOW
    } else {
        RESET
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
