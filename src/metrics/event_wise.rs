//! EVENT-WISE RECALL
//!
//! A ground-truth event is detected when at least one predicted event
//! overlaps it (closed intervals intersect). Recall is the detected fraction
//! of ground-truth events.
//!
//! Each ground-truth event counts at most once, however many predictions
//! overlap it, and a single prediction may detect several ground-truth
//! events. Predicted events are scanned in the order given and the scan stops
//! at the first overlap.

use serde::Serialize;

use crate::utils::Event;

/// Per-event detection outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetection {
    /// For each ground-truth event, the index of the first overlapping
    /// predicted event (None = missed)
    pub matches: Vec<Option<usize>>,
}

impl EventDetection {
    /// Number of detected ground-truth events
    pub fn detected(&self) -> usize {
        self.matches.iter().filter(|m| m.is_some()).count()
    }

    /// Number of ground-truth events
    pub fn total(&self) -> usize {
        self.matches.len()
    }

    /// detected / total, or 0.0 with no ground-truth events
    pub fn recall(&self) -> f64 {
        if self.matches.is_empty() {
            return 0.0;
        }
        self.detected() as f64 / self.total() as f64
    }

    /// Indices of ground-truth events no prediction overlapped
    pub fn missed(&self) -> Vec<usize> {
        self.matches
            .iter()
            .enumerate()
            .filter_map(|(idx, m)| m.is_none().then_some(idx))
            .collect()
    }
}

/// Match every ground-truth event against the predicted events
pub fn detect_events(true_events: &[Event], pred_events: &[Event]) -> EventDetection {
    let matches = true_events
        .iter()
        .map(|truth| pred_events.iter().position(|pred| truth.overlaps(pred)))
        .collect();

    EventDetection { matches }
}

/// Event-wise recall: fraction of ground-truth events hit by a prediction
///
/// Returns 0.0 when there are no ground-truth events.
pub fn event_wise_recall(true_events: &[Event], pred_events: &[Event]) -> f64 {
    detect_events(true_events, pred_events).recall()
}
