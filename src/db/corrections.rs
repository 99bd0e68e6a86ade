use crate::core::sources::CorrectionSource;
use crate::db::import::{PunchRecord, read_records};
use crate::errors::{AppError, AppResult};
use crate::models::ClockEvent;
use std::path::{Path, PathBuf};

/// Monthly correction files `corrections-YYYY-MM.csv` inside one directory.
pub struct CsvCorrections {
    dir: PathBuf,
}

impl CsvCorrections {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn file_name(year: i32, month: u32) -> String {
        format!("corrections-{:04}-{:02}.csv", year, month)
    }

    pub fn path_for(&self, year: i32, month: u32) -> PathBuf {
        self.dir.join(Self::file_name(year, month))
    }
}

/// Rows of one correction file, all tagged as corrections.
pub fn read_corrections(path: &Path) -> AppResult<Vec<ClockEvent>> {
    let rows: Vec<PunchRecord> = read_records(path)?;
    rows.into_iter()
        .map(|r| {
            r.into_event().map(|mut ev| {
                ev.is_correction = true;
                ev.is_duplicate = false;
                ev
            })
        })
        .collect()
}

impl CorrectionSource for CsvCorrections {
    fn corrections(&self, year: i32, month: u32) -> AppResult<Vec<ClockEvent>> {
        let path = self.path_for(year, month);
        if !path.exists() {
            return Err(AppError::MissingData(format!(
                "corrections file not found: {}",
                path.display()
            )));
        }
        read_corrections(&path)
    }
}
