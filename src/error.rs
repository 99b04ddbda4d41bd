//! Error types for aggregation and export
//!
//! Missing keys inside an analyzer result are never errors; they default to
//! zero or empty. Only structurally wrong input and I/O failures surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or exporting a health report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Malformed {analyzer} result: {reason}")]
    MalformedInput { analyzer: String, reason: String },

    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown format '{0}'. Valid formats: json, markdown, html, csv")]
    UnknownFormat(String),

    #[error("Invalid configuration in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl ReportError {
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        ReportError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(analyzer: impl ToString, reason: impl Into<String>) -> Self {
        ReportError::MalformedInput {
            analyzer: analyzer.to_string(),
            reason: reason.into(),
        }
    }

    /// True for failures that happened while touching the filesystem
    pub fn is_io(&self) -> bool {
        matches!(self, ReportError::Io { .. })
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
