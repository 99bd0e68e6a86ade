pub mod check;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod periods;
pub mod report;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::context::RunContext;
use crate::core::pipeline::{RunOutput, run_pipeline};
use crate::core::sources::Sources;
use crate::db::corrections::CsvCorrections;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::SqliteStore;
use crate::errors::AppResult;

/// Context for this invocation: validated settings plus the processing date.
pub(crate) fn build_context(cli: &Cli, cfg: &Config) -> AppResult<RunContext> {
    let settings = cfg.settings()?;
    RunContext::from_cli_date(cli.date.as_deref(), settings)
}

/// Full pipeline run against the configured database and corrections dir.
pub(crate) fn execute_run(
    cli: &Cli,
    cfg: &Config,
    operation: &str,
) -> AppResult<(RunContext, RunOutput)> {
    let mut ctx = build_context(cli, cfg)?;
    let pool = DbPool::new(&cfg.database_path())?;

    let store = SqliteStore::new(&pool.conn);
    let corrections = CsvCorrections::new(cfg.corrections_path());
    let sources = Sources {
        punches: &store,
        corrections: &corrections,
        leaves: &store,
        reference: &store,
    };

    let output = run_pipeline(&mut ctx, &sources)?;

    audit(
        &pool.conn,
        operation,
        &ctx.reference_date.to_string(),
        &format!(
            "{} periods, {} invalid punches, {} timed punches",
            output.schemas.len(),
            output.invalid.len(),
            output.timed.len()
        ),
    );

    Ok((ctx, output))
}
