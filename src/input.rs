//! Loading analyzer results produced by the external probes

use crate::error::{ReportError, ReportResult};
use crate::models::{AnalyzerKind, AnalyzerResult};
use crate::persist;
use std::path::Path;
use tracing::debug;

/// Parse an analyzer result from JSON text
pub fn parse_analyzer_result(kind: AnalyzerKind, json: &str) -> ReportResult<AnalyzerResult> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| ReportError::malformed(kind, format!("invalid JSON: {e}")))?;
    AnalyzerResult::from_value(kind, value)
}

/// Read and validate an analyzer result file
pub fn load_analyzer_result(kind: AnalyzerKind, path: &Path) -> ReportResult<AnalyzerResult> {
    let content = persist::read_text(path)?;
    let result = parse_analyzer_result(kind, &content)?;
    debug!("Loaded {} result from {}", kind, path.display());
    Ok(result)
}

/// Like [`load_analyzer_result`], but an absent path yields an empty result
pub fn load_optional(kind: AnalyzerKind, path: Option<&Path>) -> ReportResult<AnalyzerResult> {
    match path {
        Some(path) => load_analyzer_result(kind, path),
        None => {
            debug!("No {} result given, using an empty one", kind);
            Ok(AnalyzerResult::default())
        }
    }
}
