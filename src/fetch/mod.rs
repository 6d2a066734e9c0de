//! Fetching the current match list from the remote service.

pub mod client;
pub mod types;

pub use client::{parse_match_list_body, MatchListClient, MatchSource};
pub use types::{FetchWindow, MatchListResponse, RawMatch};
