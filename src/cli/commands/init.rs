use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (written with defaults when missing)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = cli
        .config_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    if path.exists() {
        info(format!("Config file already present: {}", path.display()));
    } else {
        cfg.save_to(&path)?;
        success(format!("Config file created: {}", path.display()));
    }

    let db_path = cfg.database_path();
    let pool = DbPool::new(&db_path)?;
    success(format!("Database initialized at {}", db_path.display()));

    audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    );

    Ok(())
}
