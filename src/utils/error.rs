//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while fetching the match list
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid match list response: {0}")]
    InvalidResponse(String),
}

/// Errors raised by the boundary parse step for raw match records
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("record #{index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("record #{index} has no usable match id")]
    MissingId { index: usize },

    #[error("match {match_id}: missing required field '{field}'")]
    MissingField { match_id: String, field: &'static str },

    #[error("match {match_id}: invalid value for '{field}': {reason}")]
    InvalidField {
        match_id: String,
        field: &'static str,
        reason: String,
    },
}

/// Errors that can occur while reading or writing the snapshot file
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot is not a valid match list: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Failed to replace snapshot: {0}")]
    PersistFailed(#[from] tempfile::PersistError),

    #[error("Invalid snapshot path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
