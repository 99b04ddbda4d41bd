//! Configuration module for codehealth
//!
//! This module handles:
//! - Project-level configuration (codehealth.toml / .codehealthrc.json)
//! - Scoring weight overrides
//! - Opt-in priority rules
//! - CLI output defaults

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, OutputDefaults, ProjectConfig, CONFIG_FILE_NAMES,
};
