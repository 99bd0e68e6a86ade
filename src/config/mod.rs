use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod settings;

pub use settings::{PeriodRules, Settings};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_corrections_dir")]
    pub corrections_dir: String,
    #[serde(default = "default_first_half_end")]
    pub first_half_end_day: u32,
    #[serde(default = "default_second_half_start")]
    pub second_half_start_day: u32,
    #[serde(default = "default_week_period_end")]
    pub week_period_end: String,
    #[serde(default = "default_lunch_limit")]
    pub lunch_duration_limit: String,
    #[serde(default = "default_true")]
    pub dedup_breaks: bool,
    #[serde(default)]
    pub excluded_employees: Vec<u32>,
    #[serde(default = "default_rest_days")]
    pub default_rest_days: Vec<String>,
    /// Free-text leave label → canonical permission name.
    #[serde(default)]
    pub permission_labels: BTreeMap<String, String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_corrections_dir() -> String {
    Config::config_dir()
        .join("corrections")
        .to_string_lossy()
        .to_string()
}
fn default_first_half_end() -> u32 {
    15
}
fn default_second_half_start() -> u32 {
    16
}
fn default_week_period_end() -> String {
    "Friday".to_string()
}
fn default_lunch_limit() -> String {
    "1h59m".to_string()
}
fn default_true() -> bool {
    true
}
fn default_rest_days() -> Vec<String> {
    vec!["Sunday".to_string()]
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            corrections_dir: default_corrections_dir(),
            first_half_end_day: default_first_half_end(),
            second_half_start_day: default_second_half_start(),
            week_period_end: default_week_period_end(),
            lunch_duration_limit: default_lunch_limit(),
            dedup_breaks: true,
            excluded_employees: Vec::new(),
            default_rest_days: default_rest_days(),
            permission_labels: BTreeMap::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchroll")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchroll")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchroll.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchroll.sqlite")
    }

    /// Load configuration from the default file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn corrections_path(&self) -> PathBuf {
        expand_tilde(&self.corrections_dir)
    }

    /// Validate and convert into typed run settings.
    pub fn settings(&self) -> AppResult<Settings> {
        Settings::from_config(self)
    }
}
