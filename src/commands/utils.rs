use crate::store::SnapshotStore;
use crate::utils::config::REPORT_VERSION;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Validate a snapshot file and print what it holds
pub fn validate_snapshot_file(file_path: &Path) -> Result<()> {
    println!("Validating snapshot: {}", file_path.display());

    let records = SnapshotStore::new(file_path)
        .try_load()?
        .with_context(|| format!("Snapshot not found: {}", file_path.display()))?;

    let unique_ids: HashSet<_> = records.iter().map(|record| &record.id).collect();
    let with_referees = records
        .iter()
        .filter(|record| !record.referee_assignments.is_empty())
        .count();
    let cancelled = records
        .iter()
        .filter(|record| record.status_flags.cancelled)
        .count();

    println!("✓ Valid snapshot JSON");
    println!("  Matches: {}", records.len());
    println!("  Unique IDs: {}", unique_ids.len());
    if unique_ids.len() != records.len() {
        println!("  ⚠ {} duplicate match IDs", records.len() - unique_ids.len());
    }
    println!("  With referees: {}", with_referees);
    println!("  Cancelled: {}", cancelled);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Matchlist Watch v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_VERSION);
    println!();
    println!("Detects additions, removals and field-level changes in scheduled match lists.");
}
