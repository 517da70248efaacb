//! jokisalon library root.
//! Exposes the CLI parser, the high-level run() function, and the typed
//! API client, session, views and forms used by the terminal screens.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod forms;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;
pub mod views;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Status
        | Commands::Open { .. }
        | Commands::Login { .. }
        | Commands::Signup { .. }
        | Commands::Logout
        | Commands::Recover { .. }
        | Commands::About => cli::commands::session::handle(&cli.command, cfg),
        Commands::Admin { .. } => cli::commands::admin::handle(&cli.command, cfg),
        Commands::Client { .. } => cli::commands::client::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once, then command-line overrides are applied
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }
    if let Some(url) = &cli.base_url {
        cfg.base_url = url.clone();
    }

    dispatch(&cli, &cfg)
}
