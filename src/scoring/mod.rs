//! Quality Scoring
//!
//! Collapses the three analyzer results into one integer between 0 and 100.
//!
//! # Scoring Formula
//!
//! ```text
//! score = 100
//!       - violation_weight × violations.statistics.high_priority   (default 10)
//!       - error_weight     × errors.metadata.total_errors          (default 2)
//!       - template_weight  × templates.statistics.high_priority    (default 5)
//!
//! clamped to [0, 100]
//! ```
//!
//! Missing or non-integer counters count as zero. Penalties saturate instead
//! of overflowing, so arbitrarily large counts bottom out at 0.

use crate::models::AnalyzerResult;
use serde::Deserialize;

/// Upper bound of the quality score
pub const MAX_SCORE: u8 = 100;

/// Per-unit penalties applied by [`quality_score`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScoringWeights {
    /// Penalty per high-priority size violation
    #[serde(default = "default_violation_weight")]
    pub violation_weight: u64,

    /// Penalty per lint error
    #[serde(default = "default_error_weight")]
    pub error_weight: u64,

    /// Penalty per high-priority template
    #[serde(default = "default_template_weight")]
    pub template_weight: u64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            violation_weight: default_violation_weight(),
            error_weight: default_error_weight(),
            template_weight: default_template_weight(),
        }
    }
}

fn default_violation_weight() -> u64 {
    10
}
fn default_error_weight() -> u64 {
    2
}
fn default_template_weight() -> u64 {
    5
}

/// Compute the quality score with the given weights
pub fn quality_score(
    weights: &ScoringWeights,
    violations: &AnalyzerResult,
    templates: &AnalyzerResult,
    errors: &AnalyzerResult,
) -> u8 {
    let score = i128::from(MAX_SCORE)
        .saturating_sub(penalty(weights.violation_weight, violations.high_priority()))
        .saturating_sub(penalty(weights.error_weight, errors.metadata_count("total_errors")))
        .saturating_sub(penalty(weights.template_weight, templates.high_priority()));

    score.clamp(0, i128::from(MAX_SCORE)) as u8
}

fn penalty(weight: u64, count: u64) -> i128 {
    i128::from(weight).saturating_mul(i128::from(count))
}

/// Qualitative reading of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Excellent,
            s if s >= 60 => ScoreBand::Good,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsWork => "Needs work",
        }
    }
}
