pub mod calendar;
pub mod clock_event;
pub mod day_bucket;
pub mod employee;
pub mod event_kind;
pub mod leave;
pub mod metrics;
pub mod period;
pub mod schedule;

pub use clock_event::{ClockEvent, EmployeeId};
pub use event_kind::EventKind;
