use serde::{Deserialize, Serialize};

/// Kind of a clock punch.
///
/// The declaration order is the tie-break order for punches sharing a
/// timestamp, so `Ord` must stay derived from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Undefined,
    CheckIn,
    BreakOut,
    BreakIn,
    CheckOut,
}

impl EventKind {
    /// The four kinds counted by the daily integrity rules.
    pub const COUNTED: [EventKind; 4] = [
        EventKind::CheckIn,
        EventKind::BreakOut,
        EventKind::BreakIn,
        EventKind::CheckOut,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Undefined => "undefined",
            EventKind::CheckIn => "checkIn",
            EventKind::BreakOut => "breakOut",
            EventKind::BreakIn => "breakIn",
            EventKind::CheckOut => "checkOut",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "undefined" => Some(EventKind::Undefined),
            "checkIn" => Some(EventKind::CheckIn),
            "breakOut" => Some(EventKind::BreakOut),
            "breakIn" => Some(EventKind::BreakIn),
            "checkOut" => Some(EventKind::CheckOut),
            _ => None,
        }
    }

    /// Lenient parser for CSV/CLI input: accepts the DB spelling in any case
    /// plus snake_case (`check_in`). Blank input maps to `Undefined`.
    pub fn parse_loose(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Some(EventKind::Undefined);
        }
        let folded: String = trimmed
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match folded.as_str() {
            "undefined" => Some(EventKind::Undefined),
            "checkin" => Some(EventKind::CheckIn),
            "breakout" => Some(EventKind::BreakOut),
            "breakin" => Some(EventKind::BreakIn),
            "checkout" => Some(EventKind::CheckOut),
            _ => None,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, EventKind::BreakOut | EventKind::BreakIn)
    }
}
