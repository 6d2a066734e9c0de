//! Match list change detection.
//!
//! This module compares a previous and a current match collection and
//! produces a change report: new, removed, and changed matches, with
//! field-level detail for the changed ones.
//!
//! # Example
//! ```ignore
//! use matchlist_watch::detector::{detect_changes, render_terminal_report};
//! use matchlist_watch::store::SnapshotStore;
//!
//! let (previous, _found) = SnapshotStore::new("previous_matches.json").load();
//! let (has_changes, report) = detect_changes(&previous, &current, DuplicateIdPolicy::LastWins)?;
//! println!("{}", render_terminal_report(&report));
//! ```

mod compare;
mod engine;
mod output;
mod schema;

// Public API exports
pub use compare::{compare_basic, compare_records, compare_referees, compare_teams, index_by_id, IndexedMatches};
pub use engine::{detect_changes, COLD_START_MESSAGE};
pub use output::render_terminal_report;
pub use schema::{
    ChangeCategory, ChangeFlags, ChangeReport, FieldChange, MatchChange, MatchView, TeamView,
};

// Error type
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DetectError {
    #[error("duplicate match id {match_id} in {collection} collection")]
    DuplicateId {
        collection: &'static str,
        match_id: String,
    },
}

#[cfg(test)]
mod tests;
