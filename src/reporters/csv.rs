//! CSV reporter
//!
//! Flattens the size-violation detail list into `type,file,priority,lines`
//! rows for spreadsheet import. Templates and lint errors are not exported.

use crate::error::ReportResult;
use crate::models::ReportDocument;
use crate::persist;
use serde_json::{Map, Value};
use std::path::Path;

pub const CSV_HEADER: &str = "type,file,priority,lines";

/// Row kind for violation records
const VIOLATION_ROW: &str = "violation";

/// Render violation rows as CSV, header first
pub fn render(report: &ReportDocument) -> String {
    let mut content = String::new();
    content.push_str(CSV_HEADER);
    content.push('\n');

    for record in report.violations.records("violations") {
        content.push_str(&format!(
            "{},{},{},{}\n",
            VIOLATION_ROW,
            field(record, "file"),
            field(record, "priority"),
            field(record, "lines")
        ));
    }

    content
}

/// Write violation rows to `path`
pub fn to_csv(report: &ReportDocument, path: &Path) -> ReportResult<()> {
    persist::write_text(path, &render(report))
}

/// One cell: strings as-is, other scalars via their JSON text, missing or
/// null as empty
fn field(record: &Map<String, Value>, key: &str) -> String {
    let raw = match record.get(key) {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    escape_csv(&raw)
}

fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
