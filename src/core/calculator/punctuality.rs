use crate::models::day_bucket::ValidatedEvent;
use crate::models::metrics::TimedEvent;
use crate::models::schedule::{ScheduleOffsets, WorkSchedule};
use crate::models::{ClockEvent, EventKind};
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};

/// Allowed start/end for one employee on one date:
/// midnight + base schedule + employee offset (zero when none is set).
pub fn allowed_window(
    event: &ClockEvent,
    schedule: &WorkSchedule,
    offsets: &ScheduleOffsets,
) -> (Weekday, NaiveDateTime, NaiveDateTime) {
    let weekday = event.date.weekday();
    let base = schedule.window(weekday);
    let offset = offsets.get_or_zero(event.employee_id, weekday);
    let midnight = event.date.and_time(NaiveTime::MIN);

    (
        weekday,
        midnight + base.start + offset.start,
        midnight + base.end + offset.end,
    )
}

pub fn time_event(
    event: &ClockEvent,
    schedule: &WorkSchedule,
    offsets: &ScheduleOffsets,
) -> TimedEvent {
    let (weekday, allowed_start, allowed_end) = allowed_window(event, schedule, offsets);
    let at = event.timestamp();

    let is_late_start = event.kind == EventKind::CheckIn && at > allowed_start;
    let is_early_end = event.kind == EventKind::CheckOut && at < allowed_end;

    TimedEvent {
        event: event.clone(),
        weekday,
        allowed_start,
        allowed_end,
        is_late_start,
        is_early_end,
        late_time: if is_late_start {
            at - allowed_start
        } else {
            Duration::zero()
        },
        early_time: if is_early_end {
            allowed_end - at
        } else {
            Duration::zero()
        },
    }
}

/// Timing for every punch of the valid partition.
pub fn time_events(
    valid: &[ValidatedEvent],
    schedule: &WorkSchedule,
    offsets: &ScheduleOffsets,
) -> Vec<TimedEvent> {
    valid
        .iter()
        .map(|v| time_event(&v.event, schedule, offsets))
        .collect()
}
