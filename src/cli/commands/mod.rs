pub mod admin;
pub mod args;
pub mod client;
pub mod config;
pub mod context;
pub mod init;
pub mod listing;
pub mod log;
pub mod session;
