//! Fixed-width summary table for terminal output

use crate::models::ReportDocument;

const BORDER: &str = "+-------------------------+---------+";

/// Render the summary counters as a boxed two-column table
pub fn summary_table(report: &ReportDocument) -> String {
    let s = &report.summary;
    let rows: [(&str, u64); 5] = [
        ("Quality score", u64::from(s.quality_score)),
        ("Total files", s.total_files),
        ("Files with violations", s.violation_files),
        ("Templates", s.total_templates),
        ("Lint errors", s.total_errors),
    ];

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(BORDER.to_string());
    for (label, value) in rows {
        lines.push(format!("| {:<23} | {:>7} |", label, value));
    }
    lines.push(BORDER.to_string());
    lines.join("\n")
}
