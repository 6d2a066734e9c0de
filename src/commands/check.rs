//! Check command implementation.
//!
//! One detection cycle:
//! 1. Loads the previous snapshot
//! 2. Fetches the current match list
//! 3. Parses it into typed records
//! 4. Detects changes
//! 5. Writes the change report
//! 6. Persists the current list as the next snapshot
//!
//! Cycles must not overlap; the snapshot file has no locking of its own.

use super::models::CheckArgs;
use crate::detector::{detect_changes, render_terminal_report, ChangeReport};
use crate::fetch::{MatchListClient, MatchSource};
use crate::model::parse_matches;
use crate::output::{write_report, ReportFile};
use crate::store::SnapshotStore;
use anyhow::{Context, Result};
use log::{error, info};
use std::time::Instant;

/// Result of one detection cycle
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub has_changes: bool,
    pub report: ChangeReport,

    /// Whether a previous snapshot was loaded
    pub snapshot_found: bool,

    /// Whether the current list was persisted (always false on dry runs)
    pub snapshot_saved: bool,
}

/// Execute the check command against the configured HTTP source
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid configuration
/// * Fetch or parse failures (the snapshot is left untouched)
/// * Report write failures
pub fn execute_check(args: &CheckArgs) -> Result<CycleOutcome> {
    validate_args(args)?;

    let client =
        MatchListClient::new(&args.config.source).context("Failed to create match list client")?;

    run_cycle(args, &client)
}

/// Run one detection cycle against any match source
///
/// A failed snapshot save is logged and reported through
/// `CycleOutcome::snapshot_saved`; it does not fail the cycle, the next
/// cycle simply compares against the older snapshot.
pub fn run_cycle<S: MatchSource + ?Sized>(args: &CheckArgs, source: &S) -> Result<CycleOutcome> {
    let start_time = Instant::now();
    let config = &args.config;
    let store = SnapshotStore::new(&config.storage.snapshot_file);

    // Step 1: Load previous snapshot
    info!("Step 1/6: Loading previous snapshot...");
    let (previous, snapshot_found) = store.load();

    // Step 2: Fetch current list
    info!("Step 2/6: Fetching current match list...");
    let raw = source
        .fetch_matches()
        .context("Failed to fetch current matches")?;

    // Step 3: Parse
    info!("Step 3/6: Parsing {} match records...", raw.len());
    let current = parse_matches(&raw).context("Fetched match list contains a malformed record")?;

    // Step 4: Detect
    info!("Step 4/6: Detecting changes...");
    let (has_changes, report) = detect_changes(&previous, &current, config.detection.duplicate_ids)
        .context("Change detection failed")?;

    // Step 5: Write report
    info!("Step 5/6: Writing change report...");
    write_report(&ReportFile::new(report.clone()), &config.storage.report_file)
        .context("Failed to write change report")?;

    // Step 6: Persist snapshot
    let snapshot_saved = if args.dry_run {
        info!("Step 6/6: Dry run, leaving snapshot untouched");
        false
    } else {
        info!("Step 6/6: Saving current snapshot...");
        let saved = store.save(&current);
        if !saved {
            error!("Snapshot not saved, the next cycle will compare against stale data");
        }
        saved
    };

    if args.print_summary {
        println!("{}", render_terminal_report(&report));
    }

    let elapsed = start_time.elapsed();
    info!("Check completed in {:.2}s", elapsed.as_secs_f64());

    Ok(CycleOutcome {
        has_changes,
        report,
        snapshot_found,
        snapshot_saved,
    })
}

/// Validate check arguments
///
/// **Public** - can be called before execute_check for early validation
pub fn validate_args(args: &CheckArgs) -> Result<()> {
    args.config
        .validate()
        .context("Invalid configuration")?;
    Ok(())
}
