//! JSON reporter
//!
//! Outputs the full ReportDocument as pretty-printed JSON, including the
//! three embedded analyzer results. Reading the file back yields an equal
//! document.

use crate::error::ReportResult;
use crate::models::ReportDocument;
use crate::persist;
use std::path::Path;

/// Render report as JSON
pub fn render(report: &ReportDocument) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the full report to `path`
pub fn to_json(report: &ReportDocument, path: &Path) -> ReportResult<()> {
    persist::write_text(path, &render(report)?)
}

/// Read a report previously written by [`to_json`]
pub fn load_report(path: &Path) -> ReportResult<ReportDocument> {
    let content = persist::read_text(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["summary"]["quality_score"], 74);
        assert_eq!(parsed["priorities"][0]["priority"], "high");
        assert_eq!(
            parsed["violations"]["violations"].as_array().expect("violations array").len(),
            3
        );
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/full_report.json");
        let report = test_report();

        to_json(&report, &path).unwrap();
        let loaded = load_report(&path).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn test_load_report_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_report(&path).is_err());
    }
}
