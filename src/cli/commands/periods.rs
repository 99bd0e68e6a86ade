use crate::cli::commands::build_context;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::periods::generate_schemas;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::Table;

/// Periods are a pure function of the date: no database access.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let ctx = build_context(cli, cfg)?;
    let schemas = generate_schemas(ctx.reference_date, &ctx.settings.periods);

    header(format!("Pay periods as of {}", ctx.reference_date));

    let mut table = Table::new(&["label", "frequency", "start", "end", "days"]);
    for s in &schemas {
        table.add_row(vec![
            s.label.clone(),
            s.frequency.to_string(),
            s.start_date.to_string(),
            s.end_date.to_string(),
            s.len_days().to_string(),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
