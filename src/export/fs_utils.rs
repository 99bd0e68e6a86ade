// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::Path;

/// Check that `path` may be written.
///
/// - relative path → error
/// - file missing → Ok
/// - file present and `force` → Ok (overwritten)
/// - file present without `force` → error
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {}",
            path.display()
        )));
    }

    if !path.exists() {
        return Ok(());
    }

    if force {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::Export(format!(
        "The file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}
