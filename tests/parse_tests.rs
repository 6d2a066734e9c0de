use matchlist_watch::model::{parse_match, parse_matches, ExternalId};
use matchlist_watch::utils::error::ParseError;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn upstream_match() -> Value {
    json!({
        "matchid": 6169105,
        "matchnr": "000024032",
        "speldatum": "2025-04-26",
        "avsparkstid": "14:00",
        "lag1lagid": 25650,
        "lag1namn": "IK Kongahälla",
        "lag2lagid": 25529,
        "lag2namn": "Motala AIF FK",
        "anlaggningnamn": "Kongevi 1 Konstgräs",
        "installd": false,
        "avbruten": false,
        "uppskjuten": true,
        "tavlingnamn": "Division 2",
        "domaruppdraglista": [
            {
                "domareid": 6600,
                "personnamn": "Bartek Svaberg",
                "domarrollnamn": "Huvuddomare",
                "epostadress": "bartek.svaberg@example.org",
                "mobiltelefon": "0709423055"
            }
        ]
    })
}

fn canonical_match(id: Value) -> Value {
    json!({
        "id": id,
        "date": "2025-05-01",
        "kickoff_time": "18:30",
        "home_team_id": "H1",
        "home_team_name": "Home",
        "away_team_id": "A1",
        "away_team_name": "Away",
        "venue_name": null
    })
}

#[test]
fn test_parse_upstream_names() {
    let record = parse_match(0, &upstream_match()).unwrap();

    assert_eq!(record.id, ExternalId::Int(6169105));
    assert_eq!(record.match_number.as_deref(), Some("000024032"));
    assert_eq!(record.date, "2025-04-26");
    assert_eq!(record.kickoff_time, "14:00");
    assert_eq!(record.home_team_name, "IK Kongahälla");
    assert_eq!(record.away_team_id, ExternalId::Int(25529));
    assert_eq!(record.venue_name.as_deref(), Some("Kongevi 1 Konstgräs"));
    assert!(record.status_flags.postponed);
    assert!(!record.status_flags.cancelled);

    let referee = &record.referee_assignments[0];
    assert_eq!(referee.referee_id, ExternalId::Int(6600));
    assert_eq!(referee.role.as_deref(), Some("Huvuddomare"));
    assert_eq!(referee.phone.as_deref(), Some("0709423055"));
}

#[test]
fn test_parse_canonical_names_with_defaults() {
    let record = parse_match(0, &canonical_match(json!("X-1"))).unwrap();

    assert_eq!(record.id, ExternalId::from("X-1"));
    assert_eq!(record.match_number, None);
    assert_eq!(record.venue_name, None);
    assert_eq!(record.status_flags, Default::default());
    assert!(record.referee_assignments.is_empty());
}

#[test]
fn test_missing_kickoff_names_match_and_field() {
    let mut raw = upstream_match();
    raw.as_object_mut().unwrap().remove("avsparkstid");

    assert_eq!(
        parse_match(0, &raw),
        Err(ParseError::MissingField {
            match_id: "6169105".to_string(),
            field: "kickoff_time"
        })
    );
}

#[test]
fn test_wrong_type_is_invalid_field() {
    let mut raw = upstream_match();
    raw["installd"] = json!("yes");

    match parse_match(0, &raw) {
        Err(ParseError::InvalidField { match_id, field, .. }) => {
            assert_eq!(match_id, "6169105");
            assert_eq!(field, "cancelled");
        }
        other => panic!("expected invalid field, got {:?}", other),
    }
}

#[test]
fn test_missing_id_names_position() {
    let records = vec![canonical_match(json!(1)), json!({"date": "2025-05-01"})];
    assert_eq!(parse_matches(&records), Err(ParseError::MissingId { index: 1 }));
}

#[test]
fn test_non_object_record() {
    let records = vec![json!([1, 2, 3])];
    assert_eq!(parse_matches(&records), Err(ParseError::NotAnObject { index: 0 }));
}

#[test]
fn test_parse_preserves_order() {
    let records = vec![
        canonical_match(json!(3)),
        canonical_match(json!(1)),
        canonical_match(json!(2)),
    ];
    let ids: Vec<_> = parse_matches(&records)
        .unwrap()
        .into_iter()
        .map(|record| record.id)
        .collect();

    assert_eq!(ids, vec![ExternalId::Int(3), ExternalId::Int(1), ExternalId::Int(2)]);
}

#[test]
fn test_error_message_is_readable() {
    let err = ParseError::MissingField {
        match_id: "42".to_string(),
        field: "date",
    };
    assert_eq!(err.to_string(), "match 42: missing required field 'date'");
}
