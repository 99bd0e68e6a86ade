use super::clock_event::EmployeeId;
use super::period::PayFrequency;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub pay_frequency: PayFrequency,
    pub warehouse: String,
    pub job: String,
}

/// Active employees keyed by id, iterated in id order.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    by_id: BTreeMap<EmployeeId, Employee>,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            by_id: employees.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
