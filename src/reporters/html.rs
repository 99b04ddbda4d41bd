//! HTML reporter with embedded styles
//!
//! Generates a standalone page that can be opened directly in a browser.
//! Shows the same summary counters as the Markdown digest plus the
//! generation timestamp, with the score colored by band.

use crate::error::ReportResult;
use crate::models::ReportDocument;
use crate::persist;
use crate::scoring::ScoreBand;
use std::path::Path;

/// Render report as standalone HTML
pub fn render(report: &ReportDocument) -> String {
    let mut html = String::new();

    html.push_str(&render_head());
    html.push_str("<body>\n");
    html.push_str(&render_header(report));
    html.push_str(&render_summary(report));
    html.push_str("</body>\n</html>\n");

    html
}

/// Render report as HTML and write it to `path` when given
pub fn to_html(report: &ReportDocument, path: Option<&Path>) -> ReportResult<String> {
    let html = render(report);
    if let Some(path) = path {
        persist::write_text(path, &html)?;
    }
    Ok(html)
}

fn render_head() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Code Health Report</title>
  <style>
{CSS}
  </style>
</head>
"#
    )
}

fn render_header(report: &ReportDocument) -> String {
    let generated = report.summary.generated_at.to_rfc3339();
    format!(
        r#"  <h1>Code Health Report</h1>
  <p class="timestamp">Generated at: {}</p>
"#,
        html_escape(&generated)
    )
}

fn render_summary(report: &ReportDocument) -> String {
    let s = &report.summary;
    format!(
        r#"  <h2>Summary</h2>
  <ul>
    <li>Quality score: <strong class="{}">{}</strong></li>
    <li>Total files: {}</li>
    <li>Files with violations: {}</li>
    <li>Templates: {}</li>
    <li>Lint errors: {}</li>
  </ul>
"#,
        score_class(report.band()),
        s.quality_score,
        s.total_files,
        s.violation_files,
        s.total_templates,
        s.total_errors
    )
}

fn score_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "ok",
        ScoreBand::Good => "warn",
        ScoreBand::NeedsWork => "err",
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Embedded CSS
const CSS: &str = r#"    body { font-family: Arial, sans-serif; margin: 2rem; }
    h1, h2 { color: #333; }
    .timestamp { color: #666; }
    .ok { color: #2ecc71; }
    .warn { color: #f1c40f; }
    .err { color: #e74c3c; }
    ul { line-height: 1.8; }"#;
