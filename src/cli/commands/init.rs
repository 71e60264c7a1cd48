use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.user.clone(), cli.test)?;

    if let Some(dir) = std::path::Path::new(&cfg.database).parent() {
        std::fs::create_dir_all(dir)?;
    }

    let pool = DbPool::new(&cfg.database)?;

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        &cfg.database,
        "Database initialized",
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Database initialized at {}", cfg.database));
    if cfg.user.is_none() {
        warning("No user configured: pass --user or set 'user' in the configuration.");
    }
    Ok(())
}
