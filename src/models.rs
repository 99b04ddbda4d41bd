//! Core data models for codehealth
//!
//! Analyzer results come from three external probes (size violations,
//! inline-asset templates, lint errors). Each is kept as a typed shell around
//! the original JSON so the report can embed it verbatim while counter reads
//! default to zero in one place.

use crate::error::{ReportError, ReportResult};
use crate::scoring::ScoreBand;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which probe produced an analyzer result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    Violations,
    Templates,
    Errors,
}

impl std::fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzerKind::Violations => write!(f, "violations"),
            AnalyzerKind::Templates => write!(f, "templates"),
            AnalyzerKind::Errors => write!(f, "errors"),
        }
    }
}

/// A mapping of named counters.
///
/// Values that are missing, negative, fractional or not numbers at all read
/// as zero. The raw mapping is preserved for serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counters(Map<String, Value>);

impl Counters {
    pub fn get(&self, key: &str) -> u64 {
        self.0.get(key).and_then(Value::as_u64).unwrap_or(0)
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Counters {
    fn from(map: Map<String, Value>) -> Self {
        Counters(map)
    }
}

/// Output of one analyzer.
///
/// `metadata` and `statistics` are the only parts the aggregator reads.
/// Everything else (detail lists such as `violations`) lands in `details`
/// and is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Counters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Counters>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl AnalyzerResult {
    /// Validate and convert a raw JSON document.
    ///
    /// The document must be an object, and `metadata`/`statistics` must be
    /// objects when present. Missing keys are fine.
    pub fn from_value(kind: AnalyzerKind, value: Value) -> ReportResult<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ReportError::malformed(
                    kind,
                    format!("expected a JSON object, found {}", value_kind(&other)),
                ))
            }
        };

        for section in ["metadata", "statistics"] {
            match map.get(section) {
                None | Some(Value::Null) | Some(Value::Object(_)) => {}
                Some(other) => {
                    return Err(ReportError::malformed(
                        kind,
                        format!(
                            "`{}` must be a JSON object, found {}",
                            section,
                            value_kind(other)
                        ),
                    ))
                }
            }
        }

        serde_json::from_value(Value::Object(map))
            .map_err(|e| ReportError::malformed(kind, e.to_string()))
    }

    /// Read a counter from `metadata`
    pub fn metadata_count(&self, key: &str) -> u64 {
        self.metadata.as_ref().map_or(0, |m| m.get(key))
    }

    /// Read a counter from `statistics`
    pub fn statistics_count(&self, key: &str) -> u64 {
        self.statistics.as_ref().map_or(0, |s| s.get(key))
    }

    pub fn high_priority(&self) -> u64 {
        self.statistics_count("high_priority")
    }

    /// Object records of a detail list. Missing lists and non-object items
    /// are skipped.
    pub fn records<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Map<String, Value>> + 'a {
        self.details
            .get(key)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Remediation priority of a report entry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A ranked remediation recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityEntry {
    pub title: String,
    pub priority: Priority,
    pub count: u64,
}

/// Headline numbers of a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub generated_at: DateTime<Utc>,
    pub quality_score: u8,
    pub total_files: u64,
    pub violation_files: u64,
    pub total_templates: u64,
    pub total_errors: u64,
    pub high_priority_issues: u64,
}

/// The merged health report for one project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub priorities: Vec<PriorityEntry>,
    #[serde(default)]
    pub violations: AnalyzerResult,
    #[serde(default)]
    pub templates: AnalyzerResult,
    #[serde(default)]
    pub errors: AnalyzerResult,
}

impl ReportDocument {
    /// The `n` most urgent priorities
    pub fn top_priorities(&self, n: usize) -> &[PriorityEntry] {
        &self.priorities[..n.min(self.priorities.len())]
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.summary.quality_score)
    }
}
