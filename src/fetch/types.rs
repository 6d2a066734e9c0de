//! Types for the match list service responses.

use chrono::{Days, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

/// Raw match objects, left untyped until the parse step
pub type RawMatch = Value;

/// Match list response body
///
/// The service returns either a bare array or, behind the aggregating
/// service, an envelope with a `matches` array. Error envelopes may omit
/// `matches`; any other object without it is not a match list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MatchListResponse {
    Bare(Vec<RawMatch>),
    Envelope {
        #[serde(default)]
        matches: Option<Vec<RawMatch>>,
        #[serde(default)]
        status: Option<String>,
        #[serde(default)]
        error: Option<String>,
    },
}

/// Inclusive date range sent with the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl FetchWindow {
    /// `days_back` before and `days_ahead` after `today`
    pub fn around(today: NaiveDate, days_back: u32, days_ahead: u32) -> Self {
        Self {
            from: today
                .checked_sub_days(Days::new(days_back.into()))
                .unwrap_or(NaiveDate::MIN),
            to: today
                .checked_add_days(Days::new(days_ahead.into()))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Query parameters in the service's date format
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("from", self.from.format("%Y-%m-%d").to_string()),
            ("to", self.to.format("%Y-%m-%d").to_string()),
        ]
    }
}
