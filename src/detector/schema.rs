//! Schema definitions for change reports.
//!
//! Defines the structures that describe how two match collections differ.

use crate::model::{ExternalId, MatchRecord, RefereeAssignment, StatusFlags};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete change report comparing a previous and a current collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChangeReport {
    /// Matches present only in the current collection
    pub new_matches: usize,

    /// Matches present only in the previous collection
    pub removed_matches: usize,

    /// Matches present in both with at least one changed category
    pub changed_matches: usize,

    /// New records, in current-collection order
    pub new_match_details: Vec<MatchRecord>,

    /// Removed records, in previous-collection order
    pub removed_match_details: Vec<MatchRecord>,

    /// Field-level details, in current-collection order
    pub changed_match_details: Vec<MatchChange>,

    /// Set only on cold start, explaining why everything counts as new
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChangeReport {
    pub fn has_changes(&self) -> bool {
        self.new_matches > 0 || self.removed_matches > 0 || self.changed_matches > 0
    }

    pub fn is_cold_start(&self) -> bool {
        self.message.is_some()
    }
}

/// Change record for one match present in both collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchChange {
    pub match_id: ExternalId,

    /// Current match number, falling back to the previous one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_number: Option<String>,

    pub previous: MatchView,
    pub current: MatchView,

    /// Which categories changed
    pub changes: ChangeFlags,

    /// Differing fields within the changed categories
    pub field_changes: Vec<FieldChange>,
}

/// Readable view of the compared fields of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    pub date: String,
    pub time: String,
    pub home_team: TeamView,
    pub away_team: TeamView,
    pub venue: Option<String>,
    pub status: StatusFlags,
    pub referees: Vec<RefereeAssignment>,
}

impl From<&MatchRecord> for MatchView {
    fn from(record: &MatchRecord) -> Self {
        Self {
            date: record.date.clone(),
            time: record.kickoff_time.clone(),
            home_team: TeamView {
                id: record.home_team_id.clone(),
                name: record.home_team_name.clone(),
            },
            away_team: TeamView {
                id: record.away_team_id.clone(),
                name: record.away_team_name.clone(),
            },
            venue: record.venue_name.clone(),
            status: record.status_flags,
            referees: record.referee_assignments.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamView {
    pub id: ExternalId,
    pub name: String,
}

/// Independent change categories for one match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeFlags {
    /// Date, kickoff time, status flags or venue
    pub basic: bool,

    /// Home/away team ids or names
    pub teams: bool,

    /// Membership of the referee id set
    pub referees: bool,
}

impl ChangeFlags {
    pub fn any(&self) -> bool {
        self.basic || self.teams || self.referees
    }
}

/// Axis along which a match can change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
    Basic,
    Teams,
    Referees,
}

impl fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeCategory::Basic => "basic",
            ChangeCategory::Teams => "teams",
            ChangeCategory::Referees => "referees",
        };
        f.write_str(label)
    }
}

/// One differing field with its previous and current value rendered as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub category: ChangeCategory,
    pub field: String,
    pub previous: String,
    pub current: String,
}
