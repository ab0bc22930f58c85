//! Fc1 Scorer - Main coordinator for scoring evaluation cases
//!
//! Bundles the pointwise and event-wise metrics into one report per case.
//! Includes both single-case and parallel (Rayon) batch scoring.

use anyhow::Context;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::metrics::{detect_events, harmonic_mean};
use crate::utils::{labels_to_events, BinaryConfusion, Event};

/// One detector run to evaluate
///
/// When an event list is omitted it is derived from the matching label
/// sequence (maximal runs of 1s).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EvaluationCase {
    #[serde(default)]
    pub name: String,
    pub y_true: Vec<u8>,
    pub y_pred: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_events: Option<Vec<Event>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pred_events: Option<Vec<Event>>,
}

impl EvaluationCase {
    pub fn new(
        name: impl Into<String>,
        y_true: Vec<u8>,
        y_pred: Vec<u8>,
        true_events: Vec<Event>,
        pred_events: Vec<Event>,
    ) -> Self {
        Self {
            name: name.into(),
            y_true,
            y_pred,
            true_events: Some(true_events),
            pred_events: Some(pred_events),
        }
    }

    /// Case with both event lists derived from the labels
    pub fn from_labels(name: impl Into<String>, y_true: Vec<u8>, y_pred: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            y_true,
            y_pred,
            true_events: None,
            pred_events: None,
        }
    }

    fn resolve_events<'a>(
        events: &'a Option<Vec<Event>>,
        labels: &[u8],
    ) -> Result<Cow<'a, [Event]>> {
        match events {
            Some(events) => Ok(Cow::Borrowed(events.as_slice())),
            None => Ok(Cow::Owned(labels_to_events(labels)?)),
        }
    }
}

/// Scores for one evaluation case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fc1Report {
    pub name: String,
    /// Pointwise precision
    pub precision: f64,
    /// Event-wise recall
    pub recall: f64,
    /// Harmonic mean of the two above
    pub fc1: f64,
    /// Plain per-time-step recall and F1, for comparison
    pub pointwise_recall: f64,
    pub pointwise_f1: f64,
    pub detected_events: usize,
    pub total_events: usize,
    /// Indices of ground-truth events no prediction overlapped
    pub missed_events: Vec<usize>,
}

/// Main Fc1 scorer
#[derive(Debug, Clone, Default)]
pub struct Fc1Scorer {
    config: ScoringConfig,
}

impl Fc1Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a single case
    pub fn score(&self, case: &EvaluationCase) -> Result<Fc1Report> {
        let zero_division = self.config.zero_division;

        let counts = BinaryConfusion::from_labels(&case.y_true, &case.y_pred)?;
        let true_events = EvaluationCase::resolve_events(&case.true_events, &case.y_true)?;
        let pred_events = EvaluationCase::resolve_events(&case.pred_events, &case.y_pred)?;

        let precision = counts.precision(zero_division);
        let pointwise_recall = counts.recall(zero_division);
        let detection = detect_events(&true_events, &pred_events);
        let recall = detection.recall();
        let fc1 = harmonic_mean(precision, recall);

        tracing::debug!(
            case = %case.name,
            steps = counts.total(),
            tp = counts.tp,
            fp = counts.fp,
            detected = detection.detected(),
            total_events = detection.total(),
            precision,
            recall,
            fc1,
            "Scored case"
        );

        Ok(Fc1Report {
            name: case.name.clone(),
            precision,
            recall,
            fc1,
            pointwise_recall,
            pointwise_f1: harmonic_mean(precision, pointwise_recall),
            detected_events: detection.detected(),
            total_events: detection.total(),
            missed_events: detection.missed(),
        })
    }

    /// Score many cases IN PARALLEL using Rayon
    ///
    /// Results keep the input order. A failing case does not stop the others.
    pub fn score_batch(&self, cases: &[EvaluationCase]) -> Vec<Result<Fc1Report>> {
        let results: Vec<Result<Fc1Report>> =
            cases.par_iter().map(|case| self.score(case)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(
            "Scored {} cases ({} failed) with zero_division={:?}",
            results.len(),
            failed,
            self.config.zero_division
        );

        results
    }
}

/// Load evaluation cases from a JSON array file
pub fn load_cases(path: &Path) -> anyhow::Result<Vec<EvaluationCase>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cases file: {:?}", path))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse cases JSON: {:?}", path))
}
