// src/export/logic.rs

use crate::core::context::NameRegistry;
use crate::core::pipeline::RunOutput;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{InvalidEventRow, LeaveRow, PeriodRow, PunctualityRow};
use crate::export::{ExportFormat, ExportTarget};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High-level export of one run output.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `what` from `output` to the absolute path `file`.
    pub fn export(
        output: &RunOutput,
        names: &NameRegistry,
        what: ExportTarget,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        match what {
            ExportTarget::Invalid => {
                let rows: Vec<InvalidEventRow> = output
                    .invalid
                    .iter()
                    .map(|v| InvalidEventRow::from_event(v, names))
                    .collect();
                write_rows(&rows, format, path)
            }
            ExportTarget::Punctuality => {
                let rows: Vec<PunctualityRow> = output
                    .punctuality
                    .iter()
                    .map(|s| PunctualityRow::from_summary(s, names))
                    .collect();
                write_rows(&rows, format, path)
            }
            ExportTarget::Leave => {
                let rows: Vec<LeaveRow> = output.leave.iter().map(LeaveRow::from).collect();
                write_rows(&rows, format, path)
            }
            ExportTarget::Periods => {
                let rows: Vec<PeriodRow> = output.schemas.iter().map(PeriodRow::from).collect();
                write_rows(&rows, format, path)
            }
        }
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No rows to export; writing an empty file.");
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }

    Ok(rows.len())
}
