//! Export command - render a saved report in another format

use anyhow::{Context, Result};
use codehealth::reporters::{self, ExportFormat};
use console::style;
use std::path::Path;
use std::str::FromStr;

/// Run the export command
pub fn run(report_path: &Path, format: &str, output: &Path) -> Result<()> {
    let report = reporters::load_report(report_path)
        .with_context(|| format!("Failed to load report {}", report_path.display()))?;
    let format = ExportFormat::from_str(format)?;

    reporters::export(&report, format, output)?;
    println!(
        "{} {} report saved to {}",
        style("[OK]").green(),
        format,
        output.display()
    );
    Ok(())
}
