//! Report command - merge analyzer results, print the summary, export files

use super::{styled_score, AnalyzerInputs};
use anyhow::{Context, Result};
use codehealth::config::ProjectConfig;
use codehealth::reporters::{self, ExportFormat};
use codehealth::{Aggregation, Aggregator, Priority, ReportDocument};
use console::style;
use std::path::Path;

/// Priorities shown in the terminal summary
const TOP_PRIORITIES: usize = 5;

/// Run the report command
pub fn run(
    inputs: &AnalyzerInputs,
    output: Option<&Path>,
    format: Option<&str>,
    config: &ProjectConfig,
) -> Result<()> {
    let (violations, templates, errors) = inputs.load()?;

    let output_dir = output
        .map(Path::to_path_buf)
        .or_else(|| config.output.dir.clone());
    let format = format.or(config.output.format.as_deref()).unwrap_or("json");
    let formats = reporters::parse_selection(format)?;

    let aggregator = Aggregator::from_config(config);
    let Aggregation { report, written } =
        aggregator.merge(violations, templates, errors, output_dir.as_deref());

    print_summary(&report);

    // Show the summary even when saving fails, then report the failure
    if let Some(written) = written {
        let path = written.context("Failed to save full report")?;
        println!("  {} {}", style("Saved").green(), path.display());
    }

    if let Some(dir) = &output_dir {
        // full_report.json is already written by merge
        let extra: Vec<ExportFormat> = formats
            .into_iter()
            .filter(|f| *f != ExportFormat::Json)
            .collect();
        for path in reporters::export_to_dir(&report, &extra, dir)? {
            println!("  {} {}", style("Saved").green(), path.display());
        }
    }

    Ok(())
}

fn print_summary(report: &ReportDocument) {
    let summary = &report.summary;

    println!("\n{}", style("=".repeat(50)).dim());
    println!("{}", style("CODE HEALTH SUMMARY").bold());
    println!("{}", style("=".repeat(50)).dim());
    println!(
        "Quality score: {} ({})",
        styled_score(summary.quality_score),
        report.band().label()
    );
    println!("{}", reporters::summary_table(report));
    println!("High-priority issues: {}", summary.high_priority_issues);

    let top = report.top_priorities(TOP_PRIORITIES);
    if top.is_empty() {
        println!("\n{}", style("No urgent action needed!").green());
        return;
    }

    println!("\n{}", style("ACTION PRIORITIES").bold());
    for (i, entry) in top.iter().enumerate() {
        let tag = match entry.priority {
            Priority::High => style("[HIGH]").red(),
            Priority::Medium => style("[MED] ").yellow(),
            Priority::Low => style("[LOW] ").blue(),
        };
        println!("{}. {} {} ({})", i + 1, tag, entry.title, entry.count);
    }
}
