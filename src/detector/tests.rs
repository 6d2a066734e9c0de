//! Unit tests for the detector module.
//!
//! Covers indexing, the per-category comparisons and the engine paths.

use super::*;
use crate::model::{ExternalId, MatchRecord, RefereeAssignment, StatusFlags};
use crate::utils::config::DuplicateIdPolicy;
use pretty_assertions::assert_eq;

/// Helper function to create a test match
fn create_match(id: i64, kickoff_time: &str) -> MatchRecord {
    MatchRecord {
        id: ExternalId::Int(id),
        match_number: Some(format!("{:09}", id)),
        date: "2025-04-26".to_string(),
        kickoff_time: kickoff_time.to_string(),
        home_team_id: ExternalId::Int(25650),
        home_team_name: "IK Kongahälla".to_string(),
        away_team_id: ExternalId::Int(25529),
        away_team_name: "Motala AIF FK".to_string(),
        venue_name: Some("Kongevi 1 Konstgräs".to_string()),
        status_flags: StatusFlags::default(),
        referee_assignments: vec![referee(6600, "Huvuddomare"), referee(6601, "Assisterande")],
    }
}

fn referee(id: i64, role: &str) -> RefereeAssignment {
    RefereeAssignment {
        referee_id: ExternalId::Int(id),
        name: Some(format!("Referee {}", id)),
        role: Some(role.to_string()),
        email: None,
        phone: None,
    }
}

// ============================================================================
// INDEXING
// ============================================================================

#[test]
fn test_index_keeps_first_appearance_order() {
    let records = vec![create_match(3, "14:00"), create_match(1, "15:00"), create_match(2, "16:00")];
    let index = index_by_id(&records, "current", DuplicateIdPolicy::LastWins).unwrap();

    let ids: Vec<_> = index.iter().map(|record| record.id.clone()).collect();
    assert_eq!(ids, vec![ExternalId::Int(3), ExternalId::Int(1), ExternalId::Int(2)]);
}

#[test]
fn test_index_last_wins_on_duplicate() {
    let records = vec![create_match(1, "14:00"), create_match(2, "15:00"), create_match(1, "18:00")];
    let index = index_by_id(&records, "current", DuplicateIdPolicy::LastWins).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.get(&ExternalId::Int(1)).unwrap().kickoff_time, "18:00");
}

#[test]
fn test_index_rejects_duplicate() {
    let records = vec![create_match(1, "14:00"), create_match(1, "18:00")];
    let result = index_by_id(&records, "previous", DuplicateIdPolicy::Reject);

    assert!(matches!(
        result,
        Err(DetectError::DuplicateId { collection: "previous", ref match_id }) if match_id == "1"
    ));
}

// ============================================================================
// CATEGORY COMPARISONS
// ============================================================================

#[test]
fn test_compare_identical_records() {
    let record = create_match(1, "14:00");
    assert!(compare_records(&record, &record.clone()).is_none());
}

#[test]
fn test_compare_basic_status_flag() {
    let previous = create_match(1, "14:00");
    let mut current = previous.clone();
    current.status_flags.postponed = true;

    let mut fields = Vec::new();
    assert!(compare_basic(&previous, &current, &mut fields));
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].field, "status_flags");
    assert_eq!(fields[0].previous, "scheduled");
    assert_eq!(fields[0].current, "postponed");
}

#[test]
fn test_compare_basic_venue_removed() {
    let previous = create_match(1, "14:00");
    let mut current = previous.clone();
    current.venue_name = None;

    let change = compare_records(&previous, &current).unwrap();
    assert!(change.changes.basic);
    assert_eq!(change.field_changes[0].previous, "Kongevi 1 Konstgräs");
    assert_eq!(change.field_changes[0].current, "(none)");
}

#[test]
fn test_compare_teams_name_only() {
    let previous = create_match(1, "14:00");
    let mut current = previous.clone();
    current.away_team_name = "Motala AIF".to_string();

    let change = compare_records(&previous, &current).unwrap();
    assert_eq!(
        change.changes,
        ChangeFlags {
            basic: false,
            teams: true,
            referees: false
        }
    );
    assert_eq!(change.field_changes[0].category, ChangeCategory::Teams);
    assert_eq!(change.field_changes[0].field, "away_team_name");
}

#[test]
fn test_compare_referees_ignores_order_and_details() {
    let previous = create_match(1, "14:00");
    let mut current = previous.clone();
    current.referee_assignments.reverse();
    current.referee_assignments[0].role = Some("Fjärdedomare".to_string());
    current.referee_assignments[1].email = Some("new@example.org".to_string());

    let mut fields = Vec::new();
    assert!(!compare_referees(&previous, &current, &mut fields));
    assert!(fields.is_empty());
}

#[test]
fn test_compare_referees_substitution() {
    let previous = create_match(1, "14:00");
    let mut current = previous.clone();
    current.referee_assignments[1] = referee(7700, "Assisterande");

    let mut fields = Vec::new();
    assert!(compare_referees(&previous, &current, &mut fields));
    assert_eq!(fields[0].previous, "6600, 6601");
    assert_eq!(fields[0].current, "6600, 7700");
}

#[test]
fn test_match_number_falls_back_to_previous() {
    let previous = create_match(1, "14:00");
    let mut current = create_match(1, "15:00");
    current.match_number = None;

    let change = compare_records(&previous, &current).unwrap();
    assert_eq!(change.match_number, previous.match_number);
}

// ============================================================================
// ENGINE
// ============================================================================

#[test]
fn test_cold_start_summary_only() {
    let current = vec![create_match(1, "14:00"), create_match(2, "15:00")];
    let (has_changes, report) = detect_changes(&[], &current, DuplicateIdPolicy::LastWins).unwrap();

    assert!(has_changes);
    assert_eq!(report.new_matches, 2);
    assert!(report.new_match_details.is_empty());
    assert!(report.changed_match_details.is_empty());
    assert_eq!(report.message.as_deref(), Some(COLD_START_MESSAGE));
}

#[test]
fn test_cold_start_with_empty_current() {
    let (has_changes, report) = detect_changes(&[], &[], DuplicateIdPolicy::LastWins).unwrap();

    assert!(!has_changes);
    assert_eq!(report.new_matches, 0);
    assert!(report.is_cold_start());
}

#[test]
fn test_cold_start_still_checks_current_duplicates() {
    let current = vec![create_match(1, "14:00"), create_match(1, "15:00")];
    assert!(detect_changes(&[], &current, DuplicateIdPolicy::Reject).is_err());
}

#[test]
fn test_detail_ordering_follows_inputs() {
    let previous = vec![create_match(9, "14:00"), create_match(5, "14:00"), create_match(1, "14:00")];
    let current = vec![
        create_match(1, "20:00"),
        create_match(8, "14:00"),
        create_match(7, "14:00"),
    ];

    let (_, report) = detect_changes(&previous, &current, DuplicateIdPolicy::LastWins).unwrap();

    let new_ids: Vec<_> = report.new_match_details.iter().map(|m| m.id.clone()).collect();
    let removed_ids: Vec<_> = report.removed_match_details.iter().map(|m| m.id.clone()).collect();
    assert_eq!(new_ids, vec![ExternalId::Int(8), ExternalId::Int(7)]);
    assert_eq!(removed_ids, vec![ExternalId::Int(9), ExternalId::Int(5)]);
    assert_eq!(report.changed_match_details[0].match_id, ExternalId::Int(1));
}

#[test]
fn test_render_terminal_report() {
    let previous = vec![create_match(1, "14:00")];
    let current = vec![create_match(1, "15:00")];
    let (_, report) = detect_changes(&previous, &current, DuplicateIdPolicy::LastWins).unwrap();

    let out = render_terminal_report(&report);
    assert!(out.contains("Changed: 1"));
    assert!(out.contains("basic.kickoff_time: 14:00 -> 15:00"));
}
