//! Match record definitions.
//!
//! These are the records the detector compares and the snapshot file stores.
//! Field names here are the canonical on-disk names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier issued by the remote service (match, team, referee)
///
/// The service uses integers, but string ids are accepted too. Serialized
/// untagged so the original JSON type survives a save/load round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalId::Int(id) => write!(f, "{}", id),
            ExternalId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ExternalId {
    fn from(id: i64) -> Self {
        ExternalId::Int(id)
    }
}

impl From<&str> for ExternalId {
    fn from(id: &str) -> Self {
        ExternalId::Text(id.to_string())
    }
}

/// A single scheduled match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Stable key across fetches
    pub id: ExternalId,

    /// Human-facing match number (not used for keying)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_number: Option<String>,

    /// Match date as reported by the service (e.g. "2025-04-26")
    pub date: String,

    /// Kickoff time as reported by the service (e.g. "14:00")
    pub kickoff_time: String,

    pub home_team_id: ExternalId,
    pub home_team_name: String,
    pub away_team_id: ExternalId,
    pub away_team_name: String,

    #[serde(default)]
    pub venue_name: Option<String>,

    #[serde(default)]
    pub status_flags: StatusFlags,

    /// Referees in the order the service lists them
    #[serde(default)]
    pub referee_assignments: Vec<RefereeAssignment>,
}

impl MatchRecord {
    /// Set of assigned referee ids; order and non-id fields are ignored
    pub fn referee_ids(&self) -> BTreeSet<&ExternalId> {
        self.referee_assignments
            .iter()
            .map(|referee| &referee.referee_id)
            .collect()
    }

    /// Short "Home - Away" label for logs and summaries
    pub fn fixture_label(&self) -> String {
        format!("{} - {}", self.home_team_name, self.away_team_name)
    }
}

/// Cancellation state of a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlags {
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub interrupted: bool,
    #[serde(default)]
    pub postponed: bool,
}

impl fmt::Display for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels = Vec::new();
        if self.cancelled {
            labels.push("cancelled");
        }
        if self.interrupted {
            labels.push("interrupted");
        }
        if self.postponed {
            labels.push("postponed");
        }
        if labels.is_empty() {
            f.write_str("scheduled")
        } else {
            f.write_str(&labels.join(", "))
        }
    }
}

/// A referee assigned to a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefereeAssignment {
    pub referee_id: ExternalId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}
