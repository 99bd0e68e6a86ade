use crate::models::metrics::LunchOverage;
use crate::models::{ClockEvent, EmployeeId, EventKind};
use crate::utils::time::since_midnight;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

struct BreakSums {
    out: Duration,
    back: Duration,
}

/// Per employee/day: Σ breakIn − Σ breakOut (times of day), and the part of
/// it above `limit`. Days without break punches produce no row.
pub fn lunch_overages<'a, I>(events: I, limit: Duration) -> Vec<LunchOverage>
where
    I: IntoIterator<Item = &'a ClockEvent>,
{
    let mut sums: BTreeMap<(EmployeeId, NaiveDate), BreakSums> = BTreeMap::new();

    for ev in events {
        if !ev.kind.is_break() {
            continue;
        }
        let slot = sums
            .entry((ev.employee_id, ev.date))
            .or_insert_with(|| BreakSums {
                out: Duration::zero(),
                back: Duration::zero(),
            });

        if ev.kind == EventKind::BreakOut {
            slot.out += since_midnight(ev.time);
        } else {
            slot.back += since_midnight(ev.time);
        }
    }

    sums.into_iter()
        .map(|((employee_id, date), s)| {
            let interval = s.back - s.out;
            LunchOverage {
                employee_id,
                date,
                interval,
                exceeding: exceeding(interval, limit),
            }
        })
        .collect()
}

pub fn exceeding(interval: Duration, limit: Duration) -> Duration {
    if interval > limit {
        interval - limit
    } else {
        Duration::zero()
    }
}
