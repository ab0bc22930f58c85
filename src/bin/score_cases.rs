// Batch Fc1 scoring
//
// Purpose: Score a JSON array of evaluation cases and print the reports as JSON
// Usage: cargo run --release --bin score_cases -- <cases.json> [config.json]
//
// Without a config file the zero-division policy comes from FC1_ZERO_DIVISION.

use anyhow::Context;
use fc1_scorer::{load_cases, Fc1Scorer, ScoringConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fc1_scorer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let cases_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .context("Usage: score_cases <cases.json> [config.json]")?;

    let config = match args.next() {
        Some(path) => ScoringConfig::load(&PathBuf::from(path))?,
        None => ScoringConfig::from_env()?,
    };

    let cases = load_cases(&cases_path)?;
    tracing::info!("Loaded {} cases from {:?}", cases.len(), cases_path);

    let scorer = Fc1Scorer::new(config);
    tracing::info!("Zero-division policy: {:?}", scorer.config().zero_division);
    let start = Instant::now();
    let results = scorer.score_batch(&cases);
    tracing::info!("Scoring took {:?}", start.elapsed());

    let mut reports = Vec::with_capacity(results.len());
    for (case, result) in cases.iter().zip(results) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => tracing::warn!("Case '{}' skipped: {}", case.name, e),
        }
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);

    if reports.len() < cases.len() {
        anyhow::bail!("{} of {} cases failed", cases.len() - reports.len(), cases.len());
    }

    Ok(())
}
