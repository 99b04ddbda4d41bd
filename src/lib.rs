//! codehealth - code health report aggregation
//!
//! Merges the results of three code-quality probes (size violations,
//! templates with inline CSS/JS, lint errors) into one [`ReportDocument`]
//! with a 0-100 quality score and a ranked priority list, then exports it as
//! JSON, Markdown, HTML or CSV.
//!
//! ```rust,ignore
//! use codehealth::{merge, reporters, AnalyzerKind, AnalyzerResult};
//!
//! let violations = codehealth::input::load_analyzer_result(AnalyzerKind::Violations, path)?;
//! let outcome = merge(violations, AnalyzerResult::default(), AnalyzerResult::default(), Some(out_dir));
//! println!("{}", reporters::summary_table(&outcome.report));
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub(crate) mod persist;
pub mod reporters;
pub mod scoring;

pub use aggregator::{merge, score, Aggregation, Aggregator, FULL_REPORT_FILE};
pub use error::{ReportError, ReportResult};
pub use models::{
    AnalyzerKind, AnalyzerResult, Counters, Priority, PriorityEntry, ReportDocument, Summary,
};
pub use reporters::ExportFormat;
pub use scoring::{ScoreBand, ScoringWeights};
