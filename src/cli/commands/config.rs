use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::formatting::{duration2readable, yes_no};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli
            .config_file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::config_file);

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            let settings = cfg.settings()?;
            success("Configuration is valid.");
            println!(
                "  biweekly split      : 1-{} / {}-end",
                settings.periods.first_half_end_day, settings.periods.second_half_start_day
            );
            println!("  week period end     : {}", settings.periods.week_period_end);
            println!(
                "  lunch limit         : {}",
                duration2readable(settings.lunch_duration_limit)
            );
            println!("  dedup breaks        : {}", yes_no(settings.dedup_breaks));
            println!(
                "  excluded employees  : {}",
                settings.excluded_employees.len()
            );
        }

        if *edit_config {
            edit(&path, editor)?;
        }
    }

    Ok(())
}

fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });
    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            Ok(())
        }
        _ if editor_to_use != default_editor => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));
            let status = Command::new(&default_editor)
                .arg(path)
                .status()
                .map_err(|e| AppError::Config(e.to_string()))?;
            if status.success() {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            } else {
                Err(AppError::Config(format!(
                    "editor '{}' exited with {}",
                    default_editor, status
                )))
            }
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file using '{}'",
            editor_to_use
        ))),
    }
}
