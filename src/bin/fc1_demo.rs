//! Fc1 on a small hand-made example
//!
//! Ten time steps, two ground-truth events, two predicted events.
//! Prints Fc1 next to the plain pointwise F1 for comparison.

use fc1_scorer::{composite_f_score, events_from_pairs, format_events, pointwise_f1};

fn main() -> anyhow::Result<()> {
    // Ground truth binary labels for each time point
    let y_true = [0, 0, 1, 1, 0, 0, 1, 1, 1, 0];

    // Predicted binary labels for each time point
    let y_pred = [0, 1, 1, 1, 0, 0, 1, 0, 1, 0];

    // Anomalous events as (start, end), both ends inclusive
    let true_events = events_from_pairs(&[(2, 3), (6, 8)])?;
    let pred_events = events_from_pairs(&[(1, 3), (6, 7)])?;

    println!("Ground truth events: {}", format_events(&true_events));
    println!("Predicted events: {}", format_events(&pred_events));

    let fc1 = composite_f_score(&y_true, &y_pred, &true_events, &pred_events)?;
    println!("Composite F-score (Fc1): {:.2}", fc1);

    let simple_f1 = pointwise_f1(&y_true, &y_pred)?;
    println!("Simple F1 Score: {:.2}", simple_f1);

    Ok(())
}
