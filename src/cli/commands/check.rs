use crate::cli::commands::execute_run;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic, ExportTarget, InvalidEventRow};
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_date;
use crate::utils::formatting::yes_no;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        day,
        format,
        file,
        force,
    } = &cli.command
    {
        let day = day
            .as_deref()
            .map(|raw| {
                parse_date(raw)
                    .ok_or_else(|| AppError::Config(format!("unparsable day '{}'", raw)))
            })
            .transpose()?;
        let (ctx, mut output) = execute_run(cli, cfg, "check")?;
        if let Some(day) = day {
            output.invalid.retain(|v| v.event.date == day);
        }

        if output.invalid.is_empty() {
            match day {
                Some(day) => success(format!("No invalid punches on {}.", day)),
                None => success(format!("No invalid punches up to {}.", ctx.reference_date)),
            }
        } else {
            warning(format!(
                "{} punches on days failing an integrity rule:",
                output.invalid.len()
            ));

            let mut table = Table::new(&[
                "id",
                "name",
                "warehouse",
                "job",
                "date",
                "time",
                "kind",
                "corr",
                "complete",
                "pairs",
                "unique",
            ]);
            for v in &output.invalid {
                let row = InvalidEventRow::from_event(v, &ctx.names);
                table.add_row(vec![
                    row.employee_id.to_string(),
                    row.name,
                    row.warehouse,
                    row.job,
                    row.date,
                    row.time,
                    row.kind,
                    yes_no(row.is_correction).to_string(),
                    yes_no(row.complete).to_string(),
                    yes_no(row.break_pairs).to_string(),
                    yes_no(row.unique_start_and_end).to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        if let Some(file) = file {
            let format = format.unwrap_or(ExportFormat::Csv);
            ExportLogic::export(
                &output,
                &ctx.names,
                ExportTarget::Invalid,
                format,
                file,
                *force,
            )?;
        }
    }

    Ok(())
}
