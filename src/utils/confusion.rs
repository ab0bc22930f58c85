//! Binary Confusion Counts
//!
//! Tallies true/false positives and negatives over paired per-time-step
//! labels. A positive is label value 1.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

/// Value returned by a ratio whose denominator is zero
///
/// Pointwise precision is undefined when nothing is predicted positive
/// (likewise recall with no actual positives). `Zero` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDivision {
    #[default]
    Zero,
    One,
}

impl ZeroDivision {
    pub fn value(self) -> f64 {
        match self {
            ZeroDivision::Zero => 0.0,
            ZeroDivision::One => 1.0,
        }
    }
}

/// `num / den`, or the policy value when `den == 0`
#[inline]
pub fn safe_ratio(num: usize, den: usize, zero_division: ZeroDivision) -> f64 {
    if den == 0 {
        zero_division.value()
    } else {
        num as f64 / den as f64
    }
}

/// Reject any label that is not 0 or 1
pub(crate) fn check_binary(labels: &[u8]) -> Result<()> {
    match labels.iter().position(|&v| v > 1) {
        Some(index) => Err(ScoreError::InvalidLabel { index, value: labels[index] }),
        None => Ok(()),
    }
}

/// Confusion counts for one pair of label sequences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BinaryConfusion {
    pub tp: usize,
    pub fp: usize,
    pub fn_: usize,
    pub tn: usize,
}

impl BinaryConfusion {
    /// Count outcomes over two equal-length binary label sequences
    pub fn from_labels(y_true: &[u8], y_pred: &[u8]) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(ScoreError::LengthMismatch {
                y_true: y_true.len(),
                y_pred: y_pred.len(),
            });
        }
        check_binary(y_true)?;
        check_binary(y_pred)?;

        let mut counts = Self::default();
        for (&truth, &pred) in y_true.iter().zip(y_pred) {
            match (truth, pred) {
                (1, 1) => counts.tp += 1,
                (0, 1) => counts.fp += 1,
                (1, 0) => counts.fn_ += 1,
                _ => counts.tn += 1,
            }
        }

        Ok(counts)
    }

    pub fn predicted_positives(&self) -> usize {
        self.tp + self.fp
    }

    pub fn actual_positives(&self) -> usize {
        self.tp + self.fn_
    }

    pub fn total(&self) -> usize {
        self.tp + self.fp + self.fn_ + self.tn
    }

    /// tp / (tp + fp)
    pub fn precision(&self, zero_division: ZeroDivision) -> f64 {
        safe_ratio(self.tp, self.predicted_positives(), zero_division)
    }

    /// tp / (tp + fn)
    pub fn recall(&self, zero_division: ZeroDivision) -> f64 {
        safe_ratio(self.tp, self.actual_positives(), zero_division)
    }
}
