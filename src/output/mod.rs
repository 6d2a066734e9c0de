//! Output writers for change reports.
//!
//! The JSON report file is the hand-off to downstream consumers; the
//! terminal rendering lives with the detector.

pub mod json;

// Re-export main functions
pub use json::{read_report, write_report, ReportFile};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
