//! HTTP client for the remote match list service.

use super::types::{FetchWindow, MatchListResponse, RawMatch};
use crate::utils::config::SourceConfig;
use crate::utils::error::FetchError;
use chrono::Local;
use log::{debug, info};
use reqwest::blocking::Client;

/// Anything that can supply the current raw match list
///
/// The detection cycle only depends on this trait, so it can run against
/// the HTTP client or any other source.
pub trait MatchSource {
    fn fetch_matches(&self) -> Result<Vec<RawMatch>, FetchError>;
}

/// Blocking client for `GET {api_url}/matches`
pub struct MatchListClient {
    client: Client,
    api_url: String,
    days_back: u32,
    days_ahead: u32,
}

impl MatchListClient {
    /// Create a new client from source settings
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            days_back: config.days_back,
            days_ahead: config.days_ahead,
        })
    }

    pub fn matches_url(&self) -> String {
        format!("{}/matches", self.api_url)
    }

    /// Fetch matches scheduled within `window`
    pub fn fetch_window(&self, window: &FetchWindow) -> Result<Vec<RawMatch>, FetchError> {
        let url = self.matches_url();

        info!(
            "Fetching matches from {} ({} to {})",
            url, window.from, window.to
        );

        let response = self
            .client
            .get(&url)
            .query(&window.query())
            .send()
            .map_err(FetchError::RequestFailed)?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus { url, status });
        }

        let body = response.text().map_err(FetchError::RequestFailed)?;
        debug!("Match list response: {} bytes", body.len());

        let matches = parse_match_list_body(&body)?;
        info!("Successfully fetched {} current matches", matches.len());

        Ok(matches)
    }
}

impl MatchSource for MatchListClient {
    fn fetch_matches(&self) -> Result<Vec<RawMatch>, FetchError> {
        let window = FetchWindow::around(Local::now().date_naive(), self.days_back, self.days_ahead);
        self.fetch_window(&window)
    }
}

/// Decode a response body into raw match objects
///
/// An envelope reporting `status: "error"` is a failure even if it
/// carries an (empty) `matches` array. An object without a `matches` array
/// is rejected rather than read as an empty list.
pub fn parse_match_list_body(body: &str) -> Result<Vec<RawMatch>, FetchError> {
    let response: MatchListResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::InvalidResponse(format!("not a match list: {}", e)))?;

    match response {
        MatchListResponse::Bare(matches) => Ok(matches),
        MatchListResponse::Envelope {
            status: Some(status),
            error,
            ..
        } if status.eq_ignore_ascii_case("error") => Err(FetchError::InvalidResponse(
            error.unwrap_or_else(|| "service reported an error".to_string()),
        )),
        MatchListResponse::Envelope {
            matches: Some(matches),
            ..
        } => Ok(matches),
        MatchListResponse::Envelope { matches: None, .. } => Err(FetchError::InvalidResponse(
            "object has no matches array".to_string(),
        )),
    }
}
