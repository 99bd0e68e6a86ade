use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::recent;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print: true, limit } = &cli.command {
        let pool = DbPool::new(&cfg.database_path())?;
        let lines = recent(&pool.conn, *limit)?;

        if lines.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        let mut table = Table::new(&["date", "operation", "target", "message"]);
        for l in lines {
            let date = chrono::DateTime::parse_from_rfc3339(&l.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(l.date);
            table.add_row(vec![date, l.operation, l.target, l.message]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
