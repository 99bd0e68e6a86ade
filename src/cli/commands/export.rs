use crate::cli::commands::execute_run;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        what,
        format,
        file,
        force,
    } = &cli.command
    {
        let (ctx, output) = execute_run(cli, cfg, "export")?;
        ExportLogic::export(&output, &ctx.names, *what, *format, file, *force)?;
    }
    Ok(())
}
