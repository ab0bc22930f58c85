//! Property tests for the Fc1 metrics

use fc1_scorer::{
    composite_f_score, event_wise_recall, harmonic_mean, labels_to_events, pointwise_precision,
    Event,
};
use proptest::prelude::*;

fn label_pair(max_len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (0..=max_len).prop_flat_map(|len| {
        (
            prop::collection::vec(0u8..=1, len),
            prop::collection::vec(0u8..=1, len),
        )
    })
}

fn event() -> impl Strategy<Value = Event> {
    (0usize..200, 0usize..20).prop_map(|(start, width)| Event { start, end: start + width })
}

fn events(max: usize) -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(event(), 0..=max)
}

proptest! {
    #[test]
    fn precision_in_unit_interval((y_true, y_pred) in label_pair(64)) {
        let precision = pointwise_precision(&y_true, &y_pred).unwrap();
        prop_assert!((0.0..=1.0).contains(&precision));
    }

    #[test]
    fn recall_in_unit_interval(truth in events(16), pred in events(16)) {
        let recall = event_wise_recall(&truth, &pred);
        prop_assert!((0.0..=1.0).contains(&recall));
    }

    #[test]
    fn recall_is_one_when_predictions_cover_truth(truth in prop::collection::vec(event(), 1..16)) {
        // Predicting exactly the ground truth detects every event
        prop_assert_eq!(event_wise_recall(&truth, &truth), 1.0);

        let cover = Event { start: 0, end: 10_000 };
        prop_assert_eq!(event_wise_recall(&truth, &[cover]), 1.0);
    }

    #[test]
    fn recall_is_zero_without_overlap(truth in events(16)) {
        // All generated events end before 220
        let far = Event { start: 1_000, end: 2_000 };
        prop_assert_eq!(event_wise_recall(&truth, &[far]), 0.0);
    }

    #[test]
    fn harmonic_mean_symmetric(a in 0.0..=1.0f64, b in 0.0..=1.0f64) {
        prop_assert_eq!(harmonic_mean(a, b), harmonic_mean(b, a));
        let h = harmonic_mean(a, b);
        prop_assert!(h >= 0.0 && h <= a.max(b) + 1e-12);
    }

    #[test]
    fn fc1_bounded_and_idempotent(
        (y_true, y_pred) in label_pair(64),
        truth in events(8),
        pred in events(8),
    ) {
        let first = composite_f_score(&y_true, &y_pred, &truth, &pred).unwrap();
        let second = composite_f_score(&y_true, &y_pred, &truth, &pred).unwrap();
        prop_assert!((0.0..=1.0).contains(&first));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn extracted_events_cover_exactly_the_positives(labels in prop::collection::vec(0u8..=1, 0..64)) {
        let extracted = labels_to_events(&labels).unwrap();
        let covered: usize = extracted.iter().map(|e| e.duration()).sum();
        let positives = labels.iter().filter(|&&v| v == 1).count();
        prop_assert_eq!(covered, positives);

        for pair in extracted.windows(2) {
            // Maximal runs: a gap of at least one 0 separates consecutive events
            prop_assert!(pair[0].end + 1 < pair[1].start);
        }
    }
}
