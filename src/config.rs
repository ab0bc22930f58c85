//! Scoring configuration
//!
//! The only tunable is the zero-division policy applied to pointwise
//! precision. It can come from a JSON file or the `FC1_ZERO_DIVISION`
//! environment variable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::utils::ZeroDivision;

/// Environment variable selecting the zero-division policy
pub const ZERO_DIVISION_ENV: &str = "FC1_ZERO_DIVISION";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Precision when nothing is predicted positive
    pub zero_division: ZeroDivision,
}

impl ScoringConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring config: {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse scoring config JSON: {:?}", path))
    }

    /// Read the policy from `FC1_ZERO_DIVISION`, defaulting when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var(ZERO_DIVISION_ENV) {
            Ok(value) => Ok(Self {
                zero_division: parse_zero_division(&value)?,
            }),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", ZERO_DIVISION_ENV)),
        }
    }
}

fn parse_zero_division(value: &str) -> Result<ZeroDivision> {
    match value.trim().to_ascii_lowercase().as_str() {
        "zero" | "0" => Ok(ZeroDivision::Zero),
        "one" | "1" => Ok(ZeroDivision::One),
        other => anyhow::bail!(
            "Unknown {} value '{}' (expected 'zero' or 'one')",
            ZERO_DIVISION_ENV,
            other
        ),
    }
}
