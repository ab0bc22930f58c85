//! Error types for scoring
//!
//! Degenerate divisions (no ground-truth events, no predicted positives,
//! zero precision + recall) are not errors: they resolve to defined values.

use thiserror::Error;

/// Errors raised while validating scoring inputs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Ground-truth and predicted label sequences differ in length
    #[error("label length mismatch: y_true has {y_true} labels, y_pred has {y_pred}")]
    LengthMismatch { y_true: usize, y_pred: usize },

    /// A label other than 0 or 1
    #[error("invalid label {value} at index {index} (expected 0 or 1)")]
    InvalidLabel { index: usize, value: u8 },

    /// An event whose start lies after its end
    #[error("invalid event ({start}, {end}): start must not exceed end")]
    InvalidEvent { start: usize, end: usize },
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ScoreError>;
