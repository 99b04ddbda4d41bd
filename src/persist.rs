//! Filesystem writes shared by the aggregator and the exporters.
//!
//! Every artifact is written whole (no append) as UTF-8, after creating any
//! missing parent directories.

use crate::error::{ReportError, ReportResult};
use std::path::Path;
use tracing::debug;

/// Create `dir` and all of its missing ancestors
pub fn ensure_dir(dir: &Path) -> ReportResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| ReportError::io("create directory", dir, e))
}

/// Overwrite `path` with `contents`, creating parent directories first
pub fn write_text(path: &Path, contents: &str) -> ReportResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    std::fs::write(path, contents).map_err(|e| ReportError::io("write", path, e))?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Read a whole UTF-8 file
pub fn read_text(path: &Path) -> ReportResult<String> {
    std::fs::read_to_string(path).map_err(|e| ReportError::io("read", path, e))
}
