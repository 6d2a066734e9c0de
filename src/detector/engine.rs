//! Core detection engine.
//! Builds a complete change report from a previous and a current collection.

use crate::model::MatchRecord;
use crate::utils::config::DuplicateIdPolicy;
use log::info;

use super::compare::{compare_records, index_by_id};
use super::schema::ChangeReport;
use super::DetectError;

/// Explanation attached to cold-start reports
pub const COLD_START_MESSAGE: &str =
    "Initial match list fetch: no previous snapshot to compare against, all matches reported as new";

/// Detect changes between two match collections
///
/// Pure: no I/O, no clock. When `previous` is empty every current match
/// counts as new and only a summary with `message` is produced.
/// A cold start with an empty current list reports `has_changes = false`:
/// the flag always follows the counts, cold start or not.
///
/// # Returns
/// `(has_changes, report)`
///
/// # Errors
/// * `DetectError::DuplicateId` - duplicate ids under `DuplicateIdPolicy::Reject`
///
/// # Example
/// ```ignore
/// use matchlist_watch::detector::detect_changes;
///
/// let (has_changes, report) = detect_changes(&previous, &current, DuplicateIdPolicy::LastWins)?;
/// ```
pub fn detect_changes(
    previous: &[MatchRecord],
    current: &[MatchRecord],
    policy: DuplicateIdPolicy,
) -> Result<(bool, ChangeReport), DetectError> {
    // Step 1: Key both collections
    let current_index = index_by_id(current, "current", policy)?;

    // Step 2: Cold start, nothing to compare against
    if previous.is_empty() {
        info!(
            "No previous matches to compare with, treating {} matches as new",
            current_index.len()
        );
        let report = ChangeReport {
            new_matches: current_index.len(),
            message: Some(COLD_START_MESSAGE.to_string()),
            ..Default::default()
        };
        return Ok((report.has_changes(), report));
    }

    let previous_index = index_by_id(previous, "previous", policy)?;

    // Step 3: Partition ids
    let new_match_details: Vec<MatchRecord> = current_index
        .iter()
        .filter(|record| !previous_index.contains(&record.id))
        .cloned()
        .collect();

    let removed_match_details: Vec<MatchRecord> = previous_index
        .iter()
        .filter(|record| !current_index.contains(&record.id))
        .cloned()
        .collect();

    // Step 4: Field-level comparison of common ids
    let changed_match_details: Vec<_> = current_index
        .iter()
        .filter_map(|current_record| {
            previous_index
                .get(&current_record.id)
                .and_then(|previous_record| compare_records(previous_record, current_record))
        })
        .collect();

    // Step 5: Aggregate
    let report = ChangeReport {
        new_matches: new_match_details.len(),
        removed_matches: removed_match_details.len(),
        changed_matches: changed_match_details.len(),
        new_match_details,
        removed_match_details,
        changed_match_details,
        message: None,
    };

    let has_changes = report.has_changes();
    if has_changes {
        info!(
            "Changes detected: {} new, {} removed, {} changed",
            report.new_matches, report.removed_matches, report.changed_matches
        );
    } else {
        info!("No changes detected in match list");
    }

    Ok((has_changes, report))
}
