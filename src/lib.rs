//! Fc1 Scorer
//!
//! Composite F-score (Fc1) for time-series anomaly detection: the harmonic
//! mean of pointwise precision and event-wise recall.
//!
//! Layout:
//! - `utils/`: Confusion counts, zero-division policy, event intervals
//! - `metrics/`: Pointwise, event-wise and composite metrics
//! - `scorer`: Per-case reports and parallel batch scoring
//! - `config`: Zero-division policy from JSON or environment
//!
//! ```
//! use fc1_scorer::{composite_f_score, events_from_pairs};
//!
//! let y_true = [0, 0, 1, 1, 0, 0, 1, 1, 1, 0];
//! let y_pred = [0, 1, 1, 1, 0, 0, 1, 0, 1, 0];
//! let true_events = events_from_pairs(&[(2, 3), (6, 8)])?;
//! let pred_events = events_from_pairs(&[(1, 3), (6, 7)])?;
//!
//! let fc1 = composite_f_score(&y_true, &y_pred, &true_events, &pred_events)?;
//! assert!((fc1 - 0.8889).abs() < 1e-4);
//! # Ok::<(), fc1_scorer::ScoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod scorer;
pub mod utils;

// Re-export commonly used types
pub use config::ScoringConfig;
pub use error::{Result, ScoreError};
pub use metrics::*;
pub use scorer::{load_cases, EvaluationCase, Fc1Report, Fc1Scorer};
pub use utils::{
    events_from_pairs, format_events, labels_to_events, BinaryConfusion, Event, ZeroDivision,
};
