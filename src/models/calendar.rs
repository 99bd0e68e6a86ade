use super::clock_event::EmployeeId;
use chrono::{NaiveDate, Weekday};
use std::collections::{BTreeSet, HashMap};

/// Rest weekdays per employee, with a shared default for everyone else.
#[derive(Debug, Clone)]
pub struct RestDayCalendar {
    default_days: Vec<Weekday>,
    overrides: HashMap<EmployeeId, Vec<Weekday>>,
}

impl Default for RestDayCalendar {
    fn default() -> Self {
        Self::new(vec![Weekday::Sun])
    }
}

impl RestDayCalendar {
    pub fn new(default_days: Vec<Weekday>) -> Self {
        Self {
            default_days,
            overrides: HashMap::new(),
        }
    }

    /// Add one rest weekday to an employee's override set.
    pub fn add_override(&mut self, employee_id: EmployeeId, weekday: Weekday) {
        let days = self.overrides.entry(employee_id).or_default();
        if !days.contains(&weekday) {
            days.push(weekday);
        }
    }

    pub fn rest_days(&self, employee_id: EmployeeId) -> &[Weekday] {
        self.overrides
            .get(&employee_id)
            .map(Vec::as_slice)
            .unwrap_or(&self.default_days)
    }

    pub fn is_rest_day(&self, employee_id: EmployeeId, weekday: Weekday) -> bool {
        self.rest_days(employee_id).contains(&weekday)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
