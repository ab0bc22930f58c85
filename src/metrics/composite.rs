//! COMPOSITE F-SCORE (Fc1)
//!
//! Harmonic mean of pointwise precision and event-wise recall. Precision
//! penalises every falsely flagged time step, while recall only asks whether
//! each true anomaly was noticed at all.

use crate::error::Result;
use crate::metrics::event_wise::event_wise_recall;
use crate::metrics::pointwise::pointwise_precision_with;
use crate::utils::{Event, ZeroDivision};

/// 2ab / (a + b), or 0.0 when a + b == 0
#[inline]
pub fn harmonic_mean(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum == 0.0 {
        return 0.0;
    }
    2.0 * a * b / sum
}

/// Composite F-score (Fc1)
///
/// Fails only when the label sequences are invalid (length mismatch or
/// non-binary values). Event collections are not checked against the label
/// length.
pub fn composite_f_score(
    y_true: &[u8],
    y_pred: &[u8],
    true_events: &[Event],
    pred_events: &[Event],
) -> Result<f64> {
    composite_f_score_with(y_true, y_pred, true_events, pred_events, ZeroDivision::default())
}

/// Composite F-score with an explicit zero-division policy for precision
pub fn composite_f_score_with(
    y_true: &[u8],
    y_pred: &[u8],
    true_events: &[Event],
    pred_events: &[Event],
    zero_division: ZeroDivision,
) -> Result<f64> {
    let precision = pointwise_precision_with(y_true, y_pred, zero_division)?;
    let recall = event_wise_recall(true_events, pred_events);
    Ok(harmonic_mean(precision, recall))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;
    use crate::utils::events_from_pairs;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario() {
        let y_true = [0, 0, 1, 1, 0, 0, 1, 1, 1, 0];
        let y_pred = [0, 1, 1, 1, 0, 0, 1, 0, 1, 0];
        let truth = events_from_pairs(&[(2, 3), (6, 8)]).unwrap();
        let pred = events_from_pairs(&[(1, 3), (6, 7)]).unwrap();

        // 2 × 0.8 × 1.0 / 1.8
        let fc1 = composite_f_score(&y_true, &y_pred, &truth, &pred).unwrap();
        assert_relative_eq!(fc1, 16.0 / 18.0, epsilon = 1e-12);
    }

    #[test]
    fn test_harmonic_mean() {
        assert_eq!(harmonic_mean(0.0, 0.0), 0.0);
        assert_eq!(harmonic_mean(1.0, 0.0), 0.0);
        assert_relative_eq!(harmonic_mean(1.0, 1.0), 1.0);
        assert_relative_eq!(harmonic_mean(0.5, 1.0), 2.0 / 3.0, epsilon = 1e-12);
        assert_eq!(harmonic_mean(0.3, 0.9), harmonic_mean(0.9, 0.3));
    }

    #[test]
    fn test_degenerate_inputs_score_zero() {
        // No predicted positives and no events anywhere
        let fc1 = composite_f_score(&[0, 1, 0], &[0, 0, 0], &[], &[]).unwrap();
        assert_eq!(fc1, 0.0);
    }

    #[test]
    fn test_length_mismatch_propagates() {
        let err = composite_f_score(&[0, 1], &[0], &[], &[]).unwrap_err();
        assert_eq!(err, ScoreError::LengthMismatch { y_true: 2, y_pred: 1 });
    }
}
