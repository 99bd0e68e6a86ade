use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::import::import_file;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::count_rows;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { table, file } = &cli.command {
        let mut pool = DbPool::new(&cfg.database_path())?;
        let path = expand_tilde(file);

        let n = import_file(&mut pool, *table, &path)?;
        let total = count_rows(&pool.conn, table.as_str())?;

        success(format!(
            "Imported {} rows into {} ({} total)",
            n,
            table.as_str(),
            total
        ));

        audit(
            &pool.conn,
            "import",
            table.as_str(),
            &format!("{} rows from {}", n, path.display()),
        );
    }

    Ok(())
}
