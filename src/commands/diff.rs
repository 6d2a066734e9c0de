//! Diff command implementation.
//! Runs detection offline between two snapshot files.

use super::models::DiffArgs;
use crate::detector::{detect_changes, render_terminal_report, ChangeReport};
use crate::model::MatchRecord;
use crate::output::{write_report, ReportFile};
use crate::store::SnapshotStore;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

/// Execute the diff command
///
/// Unlike a live cycle, both files must exist and parse.
///
/// # Returns
/// `(has_changes, report)`
pub fn execute_diff(args: &DiffArgs) -> Result<(bool, ChangeReport)> {
    // Step 1: Load both snapshots
    let previous = load_strict(&args.previous).context("Failed to read previous snapshot")?;
    let current = load_strict(&args.current).context("Failed to read current snapshot")?;

    // Step 2: Detect
    let (has_changes, report) = detect_changes(&previous, &current, args.duplicate_ids)
        .context("Change detection failed")?;

    // Step 3: Write output if requested
    if let Some(path) = &args.output {
        write_report(&ReportFile::new(report.clone()), path)
            .context("Failed to write change report JSON")?;
        println!(
            "📋 Change report written to {}",
            path.display().to_string().cyan()
        );
    }

    // Step 4: Terminal Summary
    if args.summary {
        println!("{}", render_terminal_report(&report));
    }

    Ok((has_changes, report))
}

fn load_strict(path: &Path) -> Result<Vec<MatchRecord>> {
    SnapshotStore::new(path)
        .try_load()?
        .with_context(|| format!("Snapshot not found: {}", path.display()))
}
