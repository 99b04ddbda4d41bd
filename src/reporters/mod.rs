//! Output reporters for codehealth reports
//!
//! Supports multiple output formats:
//! - `json` - Full-fidelity JSON (the only lossless format)
//! - `markdown` - Summary digest
//! - `html` - Standalone HTML summary with inline styles
//! - `csv` - One row per size violation
//!
//! Plus [`summary_table`] for console display. Every reporter reads the
//! report and never changes it.

mod csv;
mod html;
mod json;
mod markdown;
mod table;

pub use self::csv::{to_csv, CSV_HEADER};
pub use html::to_html;
pub use json::{load_report, to_json};
pub use markdown::to_markdown;
pub use table::summary_table;

use crate::error::{ReportError, ReportResult};
use crate::models::ReportDocument;
use crate::persist;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Html,
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Json,
        ExportFormat::Html,
        ExportFormat::Markdown,
        ExportFormat::Csv,
    ];

    /// Default file name inside an output directory
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Json => crate::aggregator::FULL_REPORT_FILE,
            ExportFormat::Markdown => "report.md",
            ExportFormat::Html => "report.html",
            ExportFormat::Csv => "report.csv",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" => Ok(ExportFormat::Html),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Parse a format selection; `all` expands to every format
pub fn parse_selection(s: &str) -> ReportResult<Vec<ExportFormat>> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(ExportFormat::ALL.to_vec());
    }
    Ok(vec![ExportFormat::from_str(s)?])
}

/// Render a report in the given format without touching the filesystem
pub fn render(report: &ReportDocument, format: ExportFormat) -> ReportResult<String> {
    match format {
        ExportFormat::Json => json::render(report),
        ExportFormat::Markdown => Ok(markdown::render(report)),
        ExportFormat::Html => Ok(html::render(report)),
        ExportFormat::Csv => Ok(csv::render(report)),
    }
}

/// Render a report and write it to `path`, returning the rendered text
pub fn export(report: &ReportDocument, format: ExportFormat, path: &Path) -> ReportResult<String> {
    let rendered = render(report, format)?;
    persist::write_text(path, &rendered)?;
    info!("{} report saved to {}", format, path.display());
    Ok(rendered)
}

/// Export each format to its default file name inside `dir`
pub fn export_to_dir(
    report: &ReportDocument,
    formats: &[ExportFormat],
    dir: &Path,
) -> ReportResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(formats.len());
    for format in formats {
        let path = dir.join(format.file_name());
        export(report, *format, &path)?;
        written.push(path);
    }
    Ok(written)
}
