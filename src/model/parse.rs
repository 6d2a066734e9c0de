//! Boundary parse step: raw JSON match objects into typed records.
//!
//! Accepts canonical field names and the upstream service's names
//! (see the field tables in `utils::config`). Unknown fields are ignored.
//! A missing or mistyped required field is an error naming the match id
//! and the canonical field name.

use super::schema::{ExternalId, MatchRecord, RefereeAssignment, StatusFlags};
use crate::utils::config::*;
use crate::utils::error::ParseError;
use log::debug;
use serde_json::{Map, Value};

/// Parse a fetched match list
///
/// # Errors
/// The first malformed record aborts the parse; nothing is skipped silently.
pub fn parse_matches(raw: &[Value]) -> Result<Vec<MatchRecord>, ParseError> {
    let records = raw
        .iter()
        .enumerate()
        .map(|(index, value)| parse_match(index, value))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} match records", records.len());
    Ok(records)
}

/// Parse one raw match object; `index` is its position, used when the id is unusable
pub fn parse_match(index: usize, raw: &Value) -> Result<MatchRecord, ParseError> {
    let obj = raw.as_object().ok_or(ParseError::NotAnObject { index })?;

    let id = lookup(obj, MATCH_ID_FIELDS)
        .and_then(as_external_id)
        .ok_or(ParseError::MissingId { index })?;
    let match_id = id.to_string();
    let fields = Fields { obj, match_id: &match_id };

    Ok(MatchRecord {
        match_number: fields.optional_text(MATCH_NUMBER_FIELDS, true)?,
        date: fields.required_text(DATE_FIELDS)?,
        kickoff_time: fields.required_text(KICKOFF_FIELDS)?,
        home_team_id: fields.required_id(HOME_TEAM_ID_FIELDS)?,
        home_team_name: fields.required_text(HOME_TEAM_NAME_FIELDS)?,
        away_team_id: fields.required_id(AWAY_TEAM_ID_FIELDS)?,
        away_team_name: fields.required_text(AWAY_TEAM_NAME_FIELDS)?,
        venue_name: fields.optional_text(VENUE_FIELDS, false)?,
        status_flags: fields.status_flags()?,
        referee_assignments: fields.referees()?,
        id,
    })
}

/// Field accessors bound to one record so errors carry its id
struct Fields<'a> {
    obj: &'a Map<String, Value>,
    match_id: &'a str,
}

impl<'a> Fields<'a> {
    fn with(&self, obj: &'a Map<String, Value>) -> Fields<'a> {
        Fields {
            obj,
            match_id: self.match_id,
        }
    }

    fn missing(&self, names: &'static [&'static str]) -> ParseError {
        ParseError::MissingField {
            match_id: self.match_id.to_string(),
            field: names[0],
        }
    }

    fn invalid(&self, names: &'static [&'static str], reason: impl Into<String>) -> ParseError {
        ParseError::InvalidField {
            match_id: self.match_id.to_string(),
            field: names[0],
            reason: reason.into(),
        }
    }

    fn required_id(&self, names: &'static [&'static str]) -> Result<ExternalId, ParseError> {
        let value = lookup(self.obj, names).ok_or_else(|| self.missing(names))?;
        as_external_id(value)
            .ok_or_else(|| self.invalid(names, format!("expected integer or string id, got {}", value)))
    }

    fn required_text(&self, names: &'static [&'static str]) -> Result<String, ParseError> {
        self.optional_text(names, false)?
            .ok_or_else(|| self.missing(names))
    }

    /// `allow_number` lets numeric values stand in for text (match numbers)
    fn optional_text(
        &self,
        names: &'static [&'static str],
        allow_number: bool,
    ) -> Result<Option<String>, ParseError> {
        match lookup(self.obj, names) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(Value::Number(number)) if allow_number => Ok(Some(number.to_string())),
            Some(other) => Err(self.invalid(names, format!("expected string, got {}", other))),
        }
    }

    fn flag(&self, names: &'static [&'static str]) -> Result<bool, ParseError> {
        match lookup(self.obj, names) {
            None => Ok(false),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(other) => Err(self.invalid(names, format!("expected boolean, got {}", other))),
        }
    }

    fn status_flags(&self) -> Result<StatusFlags, ParseError> {
        let source = match self.obj.get(STATUS_FLAGS_FIELD) {
            Some(Value::Object(nested)) => self.with(nested),
            _ => self.with(self.obj),
        };

        Ok(StatusFlags {
            cancelled: source.flag(CANCELLED_FIELDS)?,
            interrupted: source.flag(INTERRUPTED_FIELDS)?,
            postponed: source.flag(POSTPONED_FIELDS)?,
        })
    }

    fn referees(&self) -> Result<Vec<RefereeAssignment>, ParseError> {
        let entries = match lookup(self.obj, REFEREE_LIST_FIELDS) {
            None => return Ok(Vec::new()),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(self.invalid(
                    REFEREE_LIST_FIELDS,
                    format!("expected array, got {}", other),
                ))
            }
        };

        entries
            .iter()
            .map(|entry| -> Result<RefereeAssignment, ParseError> {
                let entry = entry.as_object().ok_or_else(|| {
                    self.invalid(REFEREE_LIST_FIELDS, "referee entry is not an object")
                })?;
                let referee = self.with(entry);

                Ok(RefereeAssignment {
                    referee_id: referee.required_id(REFEREE_ID_FIELDS)?,
                    name: referee.optional_text(REFEREE_NAME_FIELDS, false)?,
                    role: referee.optional_text(REFEREE_ROLE_FIELDS, false)?,
                    email: referee.optional_text(REFEREE_EMAIL_FIELDS, false)?,
                    phone: referee.optional_text(REFEREE_PHONE_FIELDS, true)?,
                })
            })
            .collect()
    }
}

/// First non-null value among the accepted names
fn lookup<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| obj.get(*name))
        .find(|value| !value.is_null())
}

fn as_external_id(value: &Value) -> Option<ExternalId> {
    match value {
        Value::Number(number) => number.as_i64().map(ExternalId::Int),
        Value::String(text) if !text.trim().is_empty() => Some(ExternalId::Text(text.clone())),
        _ => None,
    }
}
