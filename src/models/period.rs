use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Weekly,
    Biweekly,
}

impl PayFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::Biweekly => "biweekly",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Some(PayFrequency::Weekly),
            "biweekly" => Some(PayFrequency::Biweekly),
            _ => None,
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named pay-period window, both bounds inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayPeriodSchema {
    pub frequency: PayFrequency,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub label: String,
}

impl PayPeriodSchema {
    pub fn new(
        frequency: PayFrequency,
        start_date: NaiveDate,
        end_date: NaiveDate,
        label: impl Into<String>,
    ) -> Self {
        debug_assert!(start_date <= end_date);
        Self {
            frequency,
            start_date,
            end_date,
            label: label.into(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days covered.
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl fmt::Display for PayPeriodSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} → {}",
            self.label, self.frequency, self.start_date, self.end_date
        )
    }
}
