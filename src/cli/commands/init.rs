use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with every pending migration
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.base_url.clone(), cli.test)?;

    println!("⚙️  Initializing jokisalon…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);
    println!("🌐 Backend    : {}", &cfg.base_url);

    let pool = DbPool::new(&cfg.database)?;
    let applied = crate::db::migrate::run_pending_migrations(&pool.conn)?;
    if applied > 0 {
        success(format!("Applied {} migration(s)", applied));
    }

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("jokisalon initialization completed!");
    Ok(())
}
