//! Anomalous events
//!
//! An event is a closed interval `[start, end]` of time steps, in the same
//! index space as the label sequences. Events serialize as `[start, end]`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ScoreError};
use crate::utils::confusion::check_binary;

/// Contiguous span of anomalous time steps (both ends inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Event {
    pub start: usize,
    pub end: usize,
}

impl Event {
    /// Create an event, rejecting `start > end`
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(ScoreError::InvalidEvent { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of time steps covered
    pub fn duration(&self) -> usize {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    /// Whether two closed intervals share at least one time step
    #[inline]
    pub fn overlaps(&self, other: &Event) -> bool {
        other.end >= self.start && other.start <= self.end
    }
}

impl TryFrom<(usize, usize)> for Event {
    type Error = ScoreError;

    fn try_from((start, end): (usize, usize)) -> Result<Self> {
        Event::new(start, end)
    }
}

impl From<Event> for (usize, usize) {
    fn from(event: Event) -> Self {
        (event.start, event.end)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// Build validated events from `(start, end)` pairs
pub fn events_from_pairs(pairs: &[(usize, usize)]) -> Result<Vec<Event>> {
    pairs.iter().map(|&pair| Event::try_from(pair)).collect()
}

/// Comma-separated `(start, end)` list, for logs and reports
pub fn format_events(events: &[Event]) -> String {
    events
        .iter()
        .map(Event::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extract events as the maximal runs of 1s in a label sequence
///
/// Events come out in time order and never touch each other.
pub fn labels_to_events(labels: &[u8]) -> Result<Vec<Event>> {
    check_binary(labels)?;

    let mut events = Vec::new();
    let mut run_start: Option<usize> = None;

    for (idx, &label) in labels.iter().enumerate() {
        match (label, run_start) {
            (1, None) => run_start = Some(idx),
            (0, Some(start)) => {
                events.push(Event { start, end: idx - 1 });
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        events.push(Event { start, end: labels.len() - 1 });
    }

    Ok(events)
}
