//! Matchlist Watch
//!
//! Detects changes in a list of scheduled matches between two fetches:
//! new and removed matches, and field-level changes to kickoff time,
//! venue, status, teams and referee assignments.
//!
//! This crate provides the core implementation for the
//! `matchlist-watch` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! matchlist-watch check --api-url http://localhost:8080 --summary
//! matchlist-watch --help
//! ```

pub mod commands;
pub mod detector;
pub mod fetch;
pub mod model;
pub mod output;
pub mod store;
pub mod utils;
