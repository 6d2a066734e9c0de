//! Collection indexing and per-category record comparison.

use crate::model::{ExternalId, MatchRecord};
use crate::utils::config::DuplicateIdPolicy;
use log::debug;
use std::collections::HashMap;

use super::schema::{ChangeCategory, ChangeFlags, FieldChange, MatchChange, MatchView};
use super::DetectError;

/// A collection keyed by match id, remembering first-appearance order
pub struct IndexedMatches<'a> {
    order: Vec<&'a ExternalId>,
    by_id: HashMap<&'a ExternalId, &'a MatchRecord>,
}

impl<'a> IndexedMatches<'a> {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &ExternalId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &ExternalId) -> Option<&'a MatchRecord> {
        self.by_id.get(id).copied()
    }

    /// Records in first-appearance order of their id
    pub fn iter(&self) -> impl Iterator<Item = &'a MatchRecord> + '_ {
        self.order.iter().filter_map(|id| self.by_id.get(*id).copied())
    }
}

/// Key a collection by match id
///
/// `collection` names the input in errors ("previous" or "current").
///
/// # Errors
/// * `DetectError::DuplicateId` - under `DuplicateIdPolicy::Reject`
pub fn index_by_id<'a>(
    records: &'a [MatchRecord],
    collection: &'static str,
    policy: DuplicateIdPolicy,
) -> Result<IndexedMatches<'a>, DetectError> {
    let mut order = Vec::with_capacity(records.len());
    let mut by_id = HashMap::with_capacity(records.len());

    for record in records {
        match by_id.insert(&record.id, record) {
            None => order.push(&record.id),
            Some(_) => match policy {
                DuplicateIdPolicy::LastWins => {
                    debug!("Duplicate match id {} in {} collection, keeping the later record", record.id, collection);
                }
                DuplicateIdPolicy::Reject => {
                    return Err(DetectError::DuplicateId {
                        collection,
                        match_id: record.id.to_string(),
                    });
                }
            },
        }
    }

    Ok(IndexedMatches { order, by_id })
}

/// Compare two versions of the same match
///
/// Returns `None` when no category changed.
pub fn compare_records(previous: &MatchRecord, current: &MatchRecord) -> Option<MatchChange> {
    let mut field_changes = Vec::new();

    let changes = ChangeFlags {
        basic: compare_basic(previous, current, &mut field_changes),
        teams: compare_teams(previous, current, &mut field_changes),
        referees: compare_referees(previous, current, &mut field_changes),
    };

    if !changes.any() {
        return None;
    }

    Some(MatchChange {
        match_id: current.id.clone(),
        match_number: current
            .match_number
            .clone()
            .or_else(|| previous.match_number.clone()),
        previous: MatchView::from(previous),
        current: MatchView::from(current),
        changes,
        field_changes,
    })
}

/// Date, kickoff time, status flags and venue
pub fn compare_basic(
    previous: &MatchRecord,
    current: &MatchRecord,
    out: &mut Vec<FieldChange>,
) -> bool {
    let before = out.len();
    let category = ChangeCategory::Basic;

    record_change(out, category, "date", &previous.date, &current.date);
    record_change(out, category, "kickoff_time", &previous.kickoff_time, &current.kickoff_time);
    record_change(
        out,
        category,
        "status_flags",
        &previous.status_flags,
        &current.status_flags,
    );
    record_change(
        out,
        category,
        "venue_name",
        &VenueText(previous.venue_name.as_deref()),
        &VenueText(current.venue_name.as_deref()),
    );

    out.len() > before
}

/// Home and away team ids and names
pub fn compare_teams(
    previous: &MatchRecord,
    current: &MatchRecord,
    out: &mut Vec<FieldChange>,
) -> bool {
    let before = out.len();
    let category = ChangeCategory::Teams;

    record_change(out, category, "home_team_id", &previous.home_team_id, &current.home_team_id);
    record_change(out, category, "home_team_name", &previous.home_team_name, &current.home_team_name);
    record_change(out, category, "away_team_id", &previous.away_team_id, &current.away_team_id);
    record_change(out, category, "away_team_name", &previous.away_team_name, &current.away_team_name);

    out.len() > before
}

/// Referee id sets; order and name/role/contact fields do not count
pub fn compare_referees(
    previous: &MatchRecord,
    current: &MatchRecord,
    out: &mut Vec<FieldChange>,
) -> bool {
    let previous_ids = previous.referee_ids();
    let current_ids = current.referee_ids();

    if previous_ids == current_ids {
        return false;
    }

    out.push(FieldChange {
        category: ChangeCategory::Referees,
        field: "referee_ids".to_string(),
        previous: join_ids(previous_ids),
        current: join_ids(current_ids),
    });
    true
}

fn record_change<T>(
    out: &mut Vec<FieldChange>,
    category: ChangeCategory,
    field: &str,
    previous: &T,
    current: &T,
) where
    T: PartialEq + std::fmt::Display + ?Sized,
{
    if previous != current {
        out.push(FieldChange {
            category,
            field: field.to_string(),
            previous: previous.to_string(),
            current: current.to_string(),
        });
    }
}

#[derive(PartialEq)]
struct VenueText<'a>(Option<&'a str>);

impl std::fmt::Display for VenueText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.unwrap_or("(none)"))
    }
}

fn join_ids<'a>(ids: impl IntoIterator<Item = &'a ExternalId>) -> String {
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
