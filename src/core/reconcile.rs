//! Merge raw punches and correction punches into one canonical stream.
//!
//! Two steps, in order:
//! 1. duplicate suppression inside the raw punches, per
//!    (employee, date, kind), keeping the earliest or latest punch;
//! 2. correction overlay: raw punches whose (employee, date, time) matches a
//!    correction are dropped and every correction inside the raw stream's
//!    date span is added.

use crate::models::{ClockEvent, EmployeeId, EventKind};
use chrono::{NaiveDate, NaiveTime};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Which punch of a same-kind group survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupRule {
    KeepEarliest,
    KeepLatest,
    KeepAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupPolicy {
    /// Apply earliest/latest suppression to break punches as well.
    pub dedup_breaks: bool,
}

impl Default for DedupPolicy {
    fn default() -> Self {
        Self { dedup_breaks: true }
    }
}

impl DedupPolicy {
    pub fn rule(&self, kind: EventKind) -> DedupRule {
        match kind {
            EventKind::CheckIn => DedupRule::KeepEarliest,
            EventKind::CheckOut => DedupRule::KeepLatest,
            EventKind::BreakOut if self.dedup_breaks => DedupRule::KeepEarliest,
            EventKind::BreakIn if self.dedup_breaks => DedupRule::KeepLatest,
            _ => DedupRule::KeepAll,
        }
    }
}

/// Inclusive date span covered by a set of punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn of(events: &[ClockEvent]) -> Option<Self> {
        let start = events.iter().map(|e| e.date).min()?;
        let end = events.iter().map(|e| e.date).max()?;
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Order by timestamp, then by kind for punches at the same instant.
pub fn sort_chronologically(events: &mut [ClockEvent]) {
    events.sort_by(|a, b| {
        a.timestamp()
            .cmp(&b.timestamp())
            .then(a.kind.cmp(&b.kind))
            .then(a.employee_id.cmp(&b.employee_id))
    });
}

/// Flag every superseded punch with `is_duplicate = true`. Order is kept.
pub fn mark_duplicates(mut events: Vec<ClockEvent>, policy: DedupPolicy) -> Vec<ClockEvent> {
    let mut groups: HashMap<(EmployeeId, NaiveDate, EventKind), Vec<usize>> = HashMap::new();
    for (idx, ev) in events.iter().enumerate() {
        groups
            .entry((ev.employee_id, ev.date, ev.kind))
            .or_default()
            .push(idx);
    }

    for ((_, _, kind), members) in groups {
        if members.len() < 2 {
            continue;
        }

        // ties on time go to the punch seen first
        let winner = match policy.rule(kind) {
            DedupRule::KeepAll => continue,
            DedupRule::KeepEarliest => members
                .iter()
                .copied()
                .min_by_key(|&i| (events[i].time, i)),
            DedupRule::KeepLatest => members
                .iter()
                .copied()
                .min_by_key(|&i| (std::cmp::Reverse(events[i].time), i)),
        };

        for idx in members {
            if Some(idx) != winner {
                events[idx].is_duplicate = true;
            }
        }
    }

    events
}

/// Duplicate suppression: returns only the surviving punches, sorted.
pub fn discard_duplicates(events: Vec<ClockEvent>, policy: DedupPolicy) -> Vec<ClockEvent> {
    let before = events.len();
    let mut kept: Vec<ClockEvent> = mark_duplicates(events, policy)
        .into_iter()
        .filter(|e| !e.is_duplicate)
        .collect();
    sort_chronologically(&mut kept);

    debug!(dropped = before - kept.len(), "duplicate punches suppressed");
    kept
}

/// Replace corrected punches and union in the corrections for the span of
/// `events`. When `events` is empty there is no span and nothing is added.
pub fn overlay_corrections(events: Vec<ClockEvent>, corrections: &[ClockEvent]) -> Vec<ClockEvent> {
    let span = DateSpan::of(&events);
    let corrected: HashSet<(EmployeeId, NaiveDate, NaiveTime)> =
        corrections.iter().map(ClockEvent::correction_key).collect();

    let mut out: Vec<ClockEvent> = events
        .into_iter()
        .filter(|e| !corrected.contains(&e.correction_key()))
        .collect();
    let replaced_or_kept = out.len();

    if let Some(span) = span {
        out.extend(
            corrections
                .iter()
                .filter(|c| span.contains(c.date))
                .map(|c| ClockEvent {
                    is_correction: true,
                    is_duplicate: false,
                    ..c.clone()
                }),
        );
    }

    debug!(
        corrections = out.len() - replaced_or_kept,
        "corrections merged into punch stream"
    );

    sort_chronologically(&mut out);
    out
}

/// Full reconciliation: duplicate suppression, then correction overlay.
pub fn reconcile(
    raw: Vec<ClockEvent>,
    corrections: &[ClockEvent],
    policy: DedupPolicy,
) -> Vec<ClockEvent> {
    let deduped = discard_duplicates(raw, policy);
    overlay_corrections(deduped, corrections)
}
