//! Project-level configuration support
//!
//! Loads per-project configuration from `codehealth.toml` or
//! `.codehealthrc.json` in the project root.
//!
//! # Configuration Format
//!
//! ```toml
//! # codehealth.toml
//!
//! [scoring]
//! violation_weight = 10
//! error_weight = 2
//! template_weight = 5
//!
//! [priorities]
//! templates = true   # medium entry for high-priority templates
//! errors = false     # low entry for lint errors
//!
//! [output]
//! format = "all"
//! dir = "reports"
//! ```

use crate::aggregator::PriorityRules;
use crate::error::{ReportError, ReportResult};
use crate::persist;
use crate::scoring::ScoringWeights;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Discovery order inside a project directory
pub const CONFIG_FILE_NAMES: &[&str] = &["codehealth.toml", ".codehealthrc.json"];

/// Project-level configuration loaded from codehealth.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Scoring weights
    #[serde(default)]
    pub scoring: ScoringWeights,

    /// Extra priority rules
    #[serde(default)]
    pub priorities: PriorityRules,

    /// Default CLI output settings
    #[serde(default)]
    pub output: OutputDefaults,
}

/// Output defaults that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputDefaults {
    /// Default export format (json, html, markdown, csv, all)
    #[serde(default)]
    pub format: Option<String>,

    /// Default output directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Load project configuration from a project directory.
///
/// Searches for `codehealth.toml`, then `.codehealthrc.json`. A file that
/// fails to parse is skipped with a warning. Returns defaults if nothing
/// usable is found.
pub fn load_project_config(project_path: &Path) -> ProjectConfig {
    for name in CONFIG_FILE_NAMES {
        let path = project_path.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load one configuration file, picking the parser by extension.
///
/// Unlike [`load_project_config`] this reports every failure.
pub fn load_config_file(path: &Path) -> ReportResult<ProjectConfig> {
    let content = persist::read_text(path)?;
    let is_json = path.extension().is_some_and(|ext| ext == "json");

    let parsed = if is_json {
        serde_json::from_str::<ProjectConfig>(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str::<ProjectConfig>(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| ReportError::Config {
        path: path.to_path_buf(),
        reason,
    })
}
