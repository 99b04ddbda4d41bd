//! Report aggregation
//!
//! Merges the violations, templates and errors analyzer results into one
//! [`ReportDocument`], computing the quality score and the priority list.
//! Building the document is pure; persisting it to `full_report.json` is a
//! separate step whose failure never discards the built document.

pub mod priorities;

pub use priorities::{build_priorities, compare, sort_priorities, PriorityRules};

use crate::config::ProjectConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::{AnalyzerResult, ReportDocument, Summary};
use crate::persist;
use crate::scoring::{quality_score, ScoringWeights};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the full JSON report inside an output directory
pub const FULL_REPORT_FILE: &str = "full_report.json";

/// Builds report documents with a fixed scoring and priority setup.
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent aggregations.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    weights: ScoringWeights,
    rules: PriorityRules,
}

/// Result of [`Aggregator::merge`]: the document plus the outcome of the
/// optional write.
#[derive(Debug)]
pub struct Aggregation {
    pub report: ReportDocument,
    /// `None` when no output directory was requested
    pub written: Option<ReportResult<PathBuf>>,
}

impl Aggregation {
    pub fn written_path(&self) -> Option<&Path> {
        match &self.written {
            Some(Ok(path)) => Some(path.as_path()),
            _ => None,
        }
    }

    pub fn write_error(&self) -> Option<&ReportError> {
        match &self.written {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }

    /// The document, or the write error if persisting failed
    pub fn into_result(self) -> ReportResult<ReportDocument> {
        match self.written {
            Some(Err(e)) => Err(e),
            _ => Ok(self.report),
        }
    }
}

impl Aggregator {
    pub fn new(weights: ScoringWeights, rules: PriorityRules) -> Self {
        Self { weights, rules }
    }

    pub fn from_config(config: &ProjectConfig) -> Self {
        Self::new(config.scoring, config.priorities)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(
        &self,
        violations: &AnalyzerResult,
        templates: &AnalyzerResult,
        errors: &AnalyzerResult,
    ) -> u8 {
        quality_score(&self.weights, violations, templates, errors)
    }

    /// Build a report stamped with the current time
    pub fn build(
        &self,
        violations: AnalyzerResult,
        templates: AnalyzerResult,
        errors: AnalyzerResult,
    ) -> ReportDocument {
        self.build_at(violations, templates, errors, Utc::now())
    }

    /// Build a report with an explicit timestamp
    pub fn build_at(
        &self,
        violations: AnalyzerResult,
        templates: AnalyzerResult,
        errors: AnalyzerResult,
        generated_at: DateTime<Utc>,
    ) -> ReportDocument {
        let summary = Summary {
            generated_at,
            quality_score: self.score(&violations, &templates, &errors),
            total_files: violations.metadata_count("total_files"),
            violation_files: violations.metadata_count("violation_files"),
            total_templates: templates.metadata_count("total_templates"),
            total_errors: errors.metadata_count("total_errors"),
            high_priority_issues: violations.high_priority(),
        };
        let priorities = build_priorities(&self.rules, &violations, &templates, &errors);

        debug!(
            "Built report: score {}, {} priorities",
            summary.quality_score,
            priorities.len()
        );

        ReportDocument {
            summary,
            priorities,
            violations,
            templates,
            errors,
        }
    }

    /// Build a report and, when `output_dir` is given, write it there as
    /// `full_report.json`.
    pub fn merge(
        &self,
        violations: AnalyzerResult,
        templates: AnalyzerResult,
        errors: AnalyzerResult,
        output_dir: Option<&Path>,
    ) -> Aggregation {
        let report = self.build(violations, templates, errors);
        info!("Quality score: {}/100", report.summary.quality_score);

        let written = output_dir.map(|dir| {
            let outcome = write_full_report(&report, dir);
            if let Err(e) = &outcome {
                warn!("Report built but not saved: {}", e);
            }
            outcome
        });

        Aggregation { report, written }
    }
}

/// Write `report` as pretty JSON to `<dir>/full_report.json`
pub fn write_full_report(report: &ReportDocument, dir: &Path) -> ReportResult<PathBuf> {
    persist::ensure_dir(dir)?;
    let path = dir.join(FULL_REPORT_FILE);
    let json = serde_json::to_string_pretty(report)?;
    persist::write_text(&path, &json)?;
    info!("Full report saved to {}", path.display());
    Ok(path)
}

/// Merge with the default weights and rules
pub fn merge(
    violations: AnalyzerResult,
    templates: AnalyzerResult,
    errors: AnalyzerResult,
    output_dir: Option<&Path>,
) -> Aggregation {
    Aggregator::default().merge(violations, templates, errors, output_dir)
}

/// Score with the default weights
pub fn score(
    violations: &AnalyzerResult,
    templates: &AnalyzerResult,
    errors: &AnalyzerResult,
) -> u8 {
    Aggregator::default().score(violations, templates, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalyzerKind, Priority};
    use serde_json::json;

    fn violations() -> AnalyzerResult {
        AnalyzerResult::from_value(
            AnalyzerKind::Violations,
            json!({
                "metadata": {"total_files": 42, "violation_files": 7},
                "statistics": {"high_priority": 3},
                "violations": [
                    {"file": "app/models.py", "priority": "high", "lines": 812},
                ],
            }),
        )
        .unwrap()
    }

    fn templates() -> AnalyzerResult {
        AnalyzerResult::from_value(
            AnalyzerKind::Templates,
            json!({"metadata": {"total_templates": 9}, "statistics": {"high_priority": 1}}),
        )
        .unwrap()
    }

    fn errors() -> AnalyzerResult {
        AnalyzerResult::from_value(AnalyzerKind::Errors, json!({"metadata": {"total_errors": 4}}))
            .unwrap()
    }

    #[test]
    fn test_summary_counters() {
        let report = Aggregator::default().build(violations(), templates(), errors());
        let s = &report.summary;
        assert_eq!(s.total_files, 42);
        assert_eq!(s.violation_files, 7);
        assert_eq!(s.total_templates, 9);
        assert_eq!(s.total_errors, 4);
        assert_eq!(s.high_priority_issues, 3);
        // 100 - 30 - 8 - 5
        assert_eq!(s.quality_score, 57);
    }

    #[test]
    fn test_inputs_embedded_verbatim() {
        let report = Aggregator::default().build(violations(), templates(), errors());
        assert_eq!(report.violations, violations());
        assert_eq!(report.templates, templates());
        assert_eq!(report.errors, errors());
    }

    #[test]
    fn test_single_high_priority_entry() {
        let report = Aggregator::default().build(violations(), templates(), errors());
        assert_eq!(report.priorities.len(), 1);
        assert_eq!(report.priorities[0].priority, Priority::High);
        assert_eq!(report.priorities[0].count, 3);
    }

    #[test]
    fn test_build_at_is_deterministic() {
        let at = Utc::now();
        let agg = Aggregator::default();
        let a = agg.build_at(violations(), templates(), errors(), at);
        let b = agg.build_at(violations(), templates(), errors(), at);
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_metadata_reads_zero() {
        let v = AnalyzerResult::from_value(
            AnalyzerKind::Violations,
            json!({"statistics": {"high_priority": 0}}),
        )
        .unwrap();
        let report =
            Aggregator::default().build(v, AnalyzerResult::default(), AnalyzerResult::default());
        assert_eq!(report.summary.total_files, 0);
        assert_eq!(report.summary.violation_files, 0);
        assert_eq!(report.summary.quality_score, 100);
    }

    #[test]
    fn test_custom_weights_and_rules() {
        let agg = Aggregator::new(
            ScoringWeights {
                violation_weight: 1,
                error_weight: 1,
                template_weight: 1,
            },
            PriorityRules {
                templates: true,
                errors: false,
            },
        );
        let report = agg.build(violations(), templates(), errors());
        assert_eq!(report.summary.quality_score, 100 - 3 - 4 - 1);
        assert_eq!(report.priorities.len(), 2);
        assert_eq!(report.priorities[1].priority, Priority::Medium);
    }

    #[test]
    fn test_merge_without_output_dir_writes_nothing() {
        let outcome = merge(violations(), templates(), errors(), None);
        assert!(outcome.written.is_none());
        assert!(outcome.write_error().is_none());
        assert!(outcome.into_result().is_ok());
    }

    #[test]
    fn test_merge_writes_full_report() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports/nightly");

        let outcome = merge(violations(), templates(), errors(), Some(&out));
        let path = outcome.written_path().unwrap().to_path_buf();
        assert_eq!(path, out.join(FULL_REPORT_FILE));

        let saved: ReportDocument =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, outcome.report);
    }

    #[test]
    fn test_write_failure_keeps_document() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "file, not dir").unwrap();

        let outcome = merge(violations(), templates(), errors(), Some(&blocker));
        assert!(outcome.write_error().unwrap().is_io());
        assert_eq!(outcome.report.summary.quality_score, 57);
        assert!(outcome.into_result().is_err());
    }
}
