//! Run-scoped state threaded through the pipeline.

use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::models::employee::EmployeeDirectory;
use crate::models::period::PayFrequency;
use crate::models::EmployeeId;
use crate::utils::date::parse_date;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct RosterEntry {
    id: EmployeeId,
    name: String,
    frequency: PayFrequency,
    warehouse: String,
    job: String,
}

/// Known employee names, fixed once when the directory loads. Every
/// per-employee output is ordered by this registry.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    entries: Vec<RosterEntry>,
    index: HashMap<EmployeeId, usize>,
}

impl NameRegistry {
    pub fn from_directory(directory: &EmployeeDirectory) -> Self {
        let entries: Vec<RosterEntry> = directory
            .iter()
            .map(|e| RosterEntry {
                id: e.id,
                name: e.name.clone(),
                frequency: e.pay_frequency,
                warehouse: e.warehouse.clone(),
                job: e.job.clone(),
            })
            .collect();
        let index = entries.iter().enumerate().map(|(i, e)| (e.id, i)).collect();

        Self { entries, index }
    }

    pub fn name(&self, id: EmployeeId) -> Option<&str> {
        self.index.get(&id).map(|&i| self.entries[i].name.as_str())
    }

    /// `(warehouse, job)` of a registered employee.
    pub fn workplace(&self, id: EmployeeId) -> Option<(&str, &str)> {
        self.index.get(&id).map(|&i| {
            let e = &self.entries[i];
            (e.warehouse.as_str(), e.job.as_str())
        })
    }

    /// `(id, name)` of every employee on `frequency`, in registry order.
    pub fn roster(&self, frequency: PayFrequency) -> impl Iterator<Item = (EmployeeId, &str)> {
        self.entries
            .iter()
            .filter(move |e| e.frequency == frequency)
            .map(|e| (e.id, e.name.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RunContext {
    pub processing_date: NaiveDate,
    /// Most recent date with complete data: the day before processing.
    pub reference_date: NaiveDate,
    pub settings: Settings,
    pub names: NameRegistry,
}

impl RunContext {
    pub fn new(processing_date: NaiveDate, settings: Settings) -> Self {
        Self {
            processing_date,
            reference_date: processing_date - Duration::days(1),
            settings,
            names: NameRegistry::default(),
        }
    }

    /// Context from an optional `YYYY-MM-DD` processing date (default today).
    pub fn from_cli_date(date: Option<&str>, settings: Settings) -> AppResult<Self> {
        let processing = match date {
            Some(raw) => parse_date(raw).ok_or_else(|| {
                AppError::Config(format!("unparsable processing date '{}'", raw))
            })?,
            None => crate::utils::date::today(),
        };
        Ok(Self::new(processing, settings))
    }

    /// Attach the run's name registry. Only the first call has an effect.
    pub fn register_names(&mut self, directory: &EmployeeDirectory) {
        if self.names.is_empty() {
            self.names = NameRegistry::from_directory(directory);
        }
    }
}
