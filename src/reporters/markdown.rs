//! Markdown reporter
//!
//! A short digest of the summary counters, suitable for pull request
//! comments or a README badge section. Priorities and detail lists are not
//! included.

use crate::error::ReportResult;
use crate::models::ReportDocument;
use crate::persist;
use std::path::Path;

/// Render the summary as Markdown
pub fn render(report: &ReportDocument) -> String {
    let s = &report.summary;
    format!(
        r#"# Code Health Report

## Summary

- Quality score: {}
- Total files: {}
- Files with violations: {}
- Templates: {}
- Lint errors: {}
"#,
        s.quality_score, s.total_files, s.violation_files, s.total_templates, s.total_errors
    )
}

/// Render the summary and write it to `path` when given
pub fn to_markdown(report: &ReportDocument, path: Option<&Path>) -> ReportResult<String> {
    let md = render(report);
    if let Some(path) = path {
        persist::write_text(path, &md)?;
    }
    Ok(md)
}
