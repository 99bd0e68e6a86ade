use crate::cli::commands::execute_run;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::leave::PermissionKind;
use crate::ui::messages::header;
use crate::utils::formatting::duration2readable;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { period } = &cli.command {
        let (_ctx, output) = execute_run(cli, cfg, "report")?;

        let schemas: Vec<_> = output
            .schemas
            .iter()
            .filter(|s| period.as_ref().is_none_or(|p| &s.label == p))
            .collect();
        if let Some(p) = period
            && schemas.is_empty()
        {
            return Err(AppError::Other(format!("unknown period '{}'", p)));
        }

        for schema in schemas {
            header(schema);

            let mut punctuality = Table::new(&["id", "name", "late", "early", "lunch over"]);
            for s in output
                .punctuality
                .iter()
                .filter(|s| s.period_label == schema.label)
            {
                punctuality.add_row(vec![
                    s.employee_id.to_string(),
                    s.name.clone(),
                    duration2readable(s.late_time),
                    duration2readable(s.early_time),
                    duration2readable(s.exceeding_lunch_time),
                ]);
            }
            print!("{}", punctuality.render());
            println!();

            let mut leave = Table::new(&["id", "name", "vacation", "other days", "time"]);
            for s in output.leave.iter().filter(|s| s.period_label == schema.label) {
                let other_days: i64 = PermissionKind::DAY_KINDS
                    .iter()
                    .map(|k| s.day_total(*k))
                    .sum();
                let time = PermissionKind::TIME_KINDS
                    .iter()
                    .fold(chrono::Duration::zero(), |acc, k| acc + s.time_total(*k));
                leave.add_row(vec![
                    s.employee_id.to_string(),
                    s.name.clone(),
                    s.vacation_days.to_string(),
                    other_days.to_string(),
                    duration2readable(time),
                ]);
            }
            print!("{}", leave.render());
            println!();
        }
    }

    Ok(())
}
