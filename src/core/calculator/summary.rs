use crate::core::context::NameRegistry;
use crate::models::EmployeeId;
use crate::models::metrics::{LunchOverage, PunctualitySummary, TimedEvent};
use crate::models::period::PayPeriodSchema;
use chrono::Duration;
use std::collections::HashMap;

/// Late, early and lunch-overage totals over the schema's dates. One row per
/// employee on the schema's pay frequency, zero when nothing applies.
pub fn punctuality_summary(
    timed: &[TimedEvent],
    lunch: &[LunchOverage],
    schema: &PayPeriodSchema,
    names: &NameRegistry,
) -> Vec<PunctualitySummary> {
    let mut rows: Vec<PunctualitySummary> = names
        .roster(schema.frequency)
        .map(|(id, name)| PunctualitySummary {
            period_label: schema.label.clone(),
            employee_id: id,
            name: name.to_string(),
            late_time: Duration::zero(),
            early_time: Duration::zero(),
            exceeding_lunch_time: Duration::zero(),
        })
        .collect();
    let slot: HashMap<EmployeeId, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (r.employee_id, i))
        .collect();

    for t in timed.iter().filter(|t| schema.contains(t.event.date)) {
        if let Some(&i) = slot.get(&t.event.employee_id) {
            rows[i].late_time += t.late_time;
            rows[i].early_time += t.early_time;
        }
    }

    for l in lunch.iter().filter(|l| schema.contains(l.date)) {
        if let Some(&i) = slot.get(&l.employee_id) {
            rows[i].exceeding_lunch_time += l.exceeding;
        }
    }

    rows
}
