//! Score command - print only the quality score

use super::{styled_score, AnalyzerInputs};
use anyhow::Result;
use codehealth::config::ProjectConfig;
use codehealth::{Aggregator, ScoreBand};

/// Run the score command
pub fn run(inputs: &AnalyzerInputs, config: &ProjectConfig) -> Result<()> {
    let (violations, templates, errors) = inputs.load()?;
    let score = Aggregator::from_config(config).score(&violations, &templates, &errors);

    let verdict = match ScoreBand::from_score(score) {
        ScoreBand::Excellent => "Excellent!",
        ScoreBand::Good => "Good",
        ScoreBand::NeedsWork => "Needs work",
    };
    println!("Quality score: {} - {}", styled_score(score), verdict);
    Ok(())
}
