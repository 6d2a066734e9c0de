//! Match records and the boundary parse step that builds them.

pub mod parse;
pub mod schema;

pub use parse::{parse_match, parse_matches};
pub use schema::{ExternalId, MatchRecord, RefereeAssignment, StatusFlags};
