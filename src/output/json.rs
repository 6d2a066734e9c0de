//! JSON change report writer.
//!
//! Writes the report file that downstream consumers pick up after a cycle.

use super::validate_path;
use crate::detector::ChangeReport;
use crate::utils::config::REPORT_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// On-disk change report: metadata plus the flattened report fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFile {
    /// Schema version for the report format
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub has_changes: bool,

    #[serde(flatten)]
    pub report: ChangeReport,
}

impl ReportFile {
    /// Wrap a report, stamping it with the current time
    pub fn new(report: ChangeReport) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            has_changes: report.has_changes(),
            report,
        }
    }
}

/// Write a change report to a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let (_, report) = detect_changes(&previous, &current, policy)?;
/// write_report(&ReportFile::new(report), "match_changes.json")?;
/// ```
pub fn write_report(report: &ReportFile, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!("Writing change report to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    info!("Change report written to: {}", output_path.display());

    Ok(())
}

/// Read a change report from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ReportFile, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading change report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: ReportFile = serde_json::from_reader(file)?;

    Ok(report)
}
