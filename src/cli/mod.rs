//! CLI command definitions and handlers

mod export;
mod report;
mod score;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use codehealth::config::{load_config_file, load_project_config, ProjectConfig};
use codehealth::input::load_optional;
use codehealth::{AnalyzerKind, AnalyzerResult, ScoreBand};
use console::{style, StyledObject};
use std::path::{Path, PathBuf};

/// codehealth - merge analyzer results into a scored health report
#[derive(Parser, Debug)]
#[command(name = "codehealth")]
#[command(
    version,
    about = "Merge size-violation, template and lint analyzer results into one scored code health report",
    after_help = "\
Examples:
  codehealth report --violations v.json --templates t.json --errors e.json
  codehealth report --violations v.json -o reports -f all
  codehealth score --violations v.json --errors e.json
  codehealth export reports/full_report.json -f csv -o reports/violations.csv"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: codehealth.toml or .codehealthrc.json in the current directory)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Analyzer result files; any omitted one counts as an empty result
#[derive(Args, Debug)]
pub struct AnalyzerInputs {
    /// Size-violation analyzer output (JSON)
    #[arg(long, value_name = "FILE")]
    pub violations: Option<PathBuf>,

    /// Template analyzer output (JSON)
    #[arg(long, value_name = "FILE")]
    pub templates: Option<PathBuf>,

    /// Lint-error analyzer output (JSON)
    #[arg(long, value_name = "FILE")]
    pub errors: Option<PathBuf>,
}

impl AnalyzerInputs {
    fn load(&self) -> Result<(AnalyzerResult, AnalyzerResult, AnalyzerResult)> {
        let violations = load_optional(AnalyzerKind::Violations, self.violations.as_deref())?;
        let templates = load_optional(AnalyzerKind::Templates, self.templates.as_deref())?;
        let errors = load_optional(AnalyzerKind::Errors, self.errors.as_deref())?;
        Ok((violations, templates, errors))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge analyzer results, print the summary and export the report
    #[command(after_help = "\
With --output, full_report.json is always written; --format adds other files:
  codehealth report --violations v.json -o out             out/full_report.json
  codehealth report --violations v.json -o out -f html     + out/report.html
  codehealth report --violations v.json -o out -f all      + report.html, report.md, report.csv")]
    Report {
        #[command(flatten)]
        inputs: AnalyzerInputs,

        /// Output directory for report files
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Export format: json, html, markdown (or md), csv, all
        #[arg(long, short = 'f', value_parser = ["json", "html", "markdown", "md", "csv", "all"])]
        format: Option<String>,
    },

    /// Print only the quality score
    Score {
        #[command(flatten)]
        inputs: AnalyzerInputs,
    },

    /// Re-export a saved full_report.json in another format
    Export {
        /// Path to a full_report.json written by `report`
        report: PathBuf,

        /// Export format: json, html, markdown (or md), csv
        #[arg(long, short = 'f', default_value = "json", value_parser = ["json", "html", "markdown", "md", "csv"])]
        format: String,

        /// Destination file
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Report {
            inputs,
            output,
            format,
        } => report::run(&inputs, output.as_deref(), format.as_deref(), &config),

        Commands::Score { inputs } => score::run(&inputs, &config),

        Commands::Export {
            report,
            format,
            output,
        } => export::run(&report, &format, &output),
    }
}

fn load_config(path: Option<&Path>) -> Result<ProjectConfig> {
    match path {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_project_config(Path::new("."))),
    }
}

/// Score text colored by band
fn styled_score(score: u8) -> StyledObject<String> {
    let text = format!("{}/100", score);
    match ScoreBand::from_score(score) {
        ScoreBand::Excellent => style(text).green().bold(),
        ScoreBand::Good => style(text).yellow().bold(),
        ScoreBand::NeedsWork => style(text).red().bold(),
    }
}
