//! Unified application error type.
//! Every layer (db, core, cli, export) returns AppError so a run either
//! degrades through a recoverable variant or aborts with a single message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    #[error("Invalid pay frequency: {0}")]
    InvalidFrequency(String),

    // ---------------------------
    // Source errors
    // ---------------------------
    /// An optional source has nothing for the requested slice (e.g. a
    /// month without a corrections file). Callers may skip it.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// A source the run cannot proceed without.
    #[error("Required source unavailable: {0}")]
    MissingSource(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for failures a run is allowed to log and continue past.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::MissingData(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
