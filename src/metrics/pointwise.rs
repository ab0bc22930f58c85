//! POINTWISE METRICS (PER TIME STEP)
//!
//! Standard binary classification metrics over paired label sequences, one
//! label per time step. Pointwise precision is the precision half of Fc1;
//! recall and F1 are kept for side-by-side reporting against it.

use crate::error::Result;
use crate::metrics::composite::harmonic_mean;
use crate::utils::{BinaryConfusion, ZeroDivision};

/// Pointwise precision: tp / (tp + fp)
///
/// Returns 0.0 when nothing is predicted positive.
pub fn pointwise_precision(y_true: &[u8], y_pred: &[u8]) -> Result<f64> {
    pointwise_precision_with(y_true, y_pred, ZeroDivision::default())
}

/// Pointwise precision with an explicit zero-division policy
pub fn pointwise_precision_with(
    y_true: &[u8],
    y_pred: &[u8],
    zero_division: ZeroDivision,
) -> Result<f64> {
    let counts = BinaryConfusion::from_labels(y_true, y_pred)?;
    Ok(counts.precision(zero_division))
}

/// Pointwise recall: tp / (tp + fn)
pub fn pointwise_recall(y_true: &[u8], y_pred: &[u8]) -> Result<f64> {
    pointwise_recall_with(y_true, y_pred, ZeroDivision::default())
}

pub fn pointwise_recall_with(
    y_true: &[u8],
    y_pred: &[u8],
    zero_division: ZeroDivision,
) -> Result<f64> {
    let counts = BinaryConfusion::from_labels(y_true, y_pred)?;
    Ok(counts.recall(zero_division))
}

/// Plain pointwise F1 (harmonic mean of pointwise precision and recall)
pub fn pointwise_f1(y_true: &[u8], y_pred: &[u8]) -> Result<f64> {
    pointwise_f1_with(y_true, y_pred, ZeroDivision::default())
}

pub fn pointwise_f1_with(
    y_true: &[u8],
    y_pred: &[u8],
    zero_division: ZeroDivision,
) -> Result<f64> {
    let counts = BinaryConfusion::from_labels(y_true, y_pred)?;
    Ok(harmonic_mean(
        counts.precision(zero_division),
        counts.recall(zero_division),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;
    use approx::assert_relative_eq;

    const Y_TRUE: [u8; 10] = [0, 0, 1, 1, 0, 0, 1, 1, 1, 0];
    const Y_PRED: [u8; 10] = [0, 1, 1, 1, 0, 0, 1, 0, 1, 0];

    #[test]
    fn test_precision() {
        // Predicted positives at 1,2,3,6,8; true positives at 2,3,6,8 → 4/5
        let precision = pointwise_precision(&Y_TRUE, &Y_PRED).unwrap();
        assert_relative_eq!(precision, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_recall_and_f1() {
        assert_relative_eq!(pointwise_recall(&Y_TRUE, &Y_PRED).unwrap(), 0.8, epsilon = 1e-12);
        assert_relative_eq!(pointwise_f1(&Y_TRUE, &Y_PRED).unwrap(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_no_predicted_positives() {
        let y_pred = [0u8; 10];
        assert_eq!(pointwise_precision(&Y_TRUE, &y_pred).unwrap(), 0.0);
        assert_eq!(
            pointwise_precision_with(&Y_TRUE, &y_pred, ZeroDivision::One).unwrap(),
            1.0
        );
        // Precision 1 under the lenient policy, recall 0 → F1 0
        assert_eq!(pointwise_f1_with(&Y_TRUE, &y_pred, ZeroDivision::One).unwrap(), 0.0);
    }

    #[test]
    fn test_all_false_positives() {
        let precision = pointwise_precision(&[0, 0, 0], &[1, 1, 0]).unwrap();
        assert_eq!(precision, 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = pointwise_precision(&Y_TRUE, &Y_PRED[..9]).unwrap_err();
        assert_eq!(err, ScoreError::LengthMismatch { y_true: 10, y_pred: 9 });
    }

    #[test]
    fn test_empty_sequences() {
        assert_eq!(pointwise_precision(&[], &[]).unwrap(), 0.0);
    }
}
