//! Metric modules for Fc1 scoring
//!
//! Each metric is implemented in its own module:
//! - `pointwise`: per-time-step precision (plus recall/F1 for comparison)
//! - `event_wise`: overlap-based recall over anomalous events
//! - `composite`: Fc1, the harmonic mean of the two

pub mod composite;
pub mod event_wise;
pub mod pointwise;

// Re-export metric functions
pub use composite::{composite_f_score, composite_f_score_with, harmonic_mean};
pub use event_wise::{detect_events, event_wise_recall, EventDetection};
pub use pointwise::{
    pointwise_f1, pointwise_f1_with, pointwise_precision, pointwise_precision_with,
    pointwise_recall, pointwise_recall_with,
};
