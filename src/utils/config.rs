//! Configuration and constants for the watcher.
//!
//! `WatchConfig` is built once at startup (TOML file, then CLI overrides)
//! and passed by reference to the components that need it.

use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default timeout for match list requests
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Current change report schema version
pub const REPORT_VERSION: &str = "1.0.0";

pub const DEFAULT_SNAPSHOT_FILE: &str = "previous_matches.json";
pub const DEFAULT_REPORT_FILE: &str = "match_changes.json";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

// Fetch window around today
pub const DEFAULT_DAYS_BACK: u32 = 7;
pub const DEFAULT_DAYS_AHEAD: u32 = 365;
pub const MAX_WINDOW_DAYS: u32 = 3650;

// Field names accepted by the parse step (canonical first, then upstream API names)
pub const MATCH_ID_FIELDS: &[&str] = &["id", "matchid"];
pub const MATCH_NUMBER_FIELDS: &[&str] = &["match_number", "matchnr"];
pub const DATE_FIELDS: &[&str] = &["date", "speldatum"];
pub const KICKOFF_FIELDS: &[&str] = &["kickoff_time", "avsparkstid"];
pub const HOME_TEAM_ID_FIELDS: &[&str] = &["home_team_id", "lag1lagid"];
pub const HOME_TEAM_NAME_FIELDS: &[&str] = &["home_team_name", "lag1namn"];
pub const AWAY_TEAM_ID_FIELDS: &[&str] = &["away_team_id", "lag2lagid"];
pub const AWAY_TEAM_NAME_FIELDS: &[&str] = &["away_team_name", "lag2namn"];
pub const VENUE_FIELDS: &[&str] = &["venue_name", "anlaggningnamn"];
pub const STATUS_FLAGS_FIELD: &str = "status_flags";
pub const CANCELLED_FIELDS: &[&str] = &["cancelled", "installd"];
pub const INTERRUPTED_FIELDS: &[&str] = &["interrupted", "avbruten"];
pub const POSTPONED_FIELDS: &[&str] = &["postponed", "uppskjuten"];
pub const REFEREE_LIST_FIELDS: &[&str] = &["referee_assignments", "domaruppdraglista"];
pub const REFEREE_ID_FIELDS: &[&str] = &["referee_id", "domareid"];
pub const REFEREE_NAME_FIELDS: &[&str] = &["name", "personnamn"];
pub const REFEREE_ROLE_FIELDS: &[&str] = &["role", "domarrollnamn"];
pub const REFEREE_EMAIL_FIELDS: &[&str] = &["email", "epostadress"];
pub const REFEREE_PHONE_FIELDS: &[&str] = &["phone", "mobiltelefon"];

/// Complete watcher configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct WatchConfig {
    /// Where matches are fetched from
    #[serde(default)]
    pub source: SourceConfig,

    /// Where snapshot and report files live
    #[serde(default)]
    pub storage: StorageConfig,

    /// Detection behaviour
    #[serde(default)]
    pub detection: DetectionConfig,
}

/// Match list source settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the match list service
    pub api_url: String,

    /// Days before today included in the fetch window
    pub days_back: u32,

    /// Days after today included in the fetch window
    pub days_ahead: u32,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            days_back: DEFAULT_DAYS_BACK,
            days_ahead: DEFAULT_DAYS_AHEAD,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

impl SourceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// File locations
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub snapshot_file: PathBuf,
    pub report_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_file: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }
}

/// Detection settings
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// What to do when one collection holds the same match id twice
    pub duplicate_ids: DuplicateIdPolicy,
}

/// Handling of duplicate match ids within a single collection
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// The later record in iteration order replaces the earlier one
    #[default]
    LastWins,
    /// Duplicates are an input error
    Reject,
}

/// Load configuration from a TOML file
///
/// Missing sections and keys fall back to their defaults.
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::Invalid` - If values are out of range
///
/// # Example
/// ```ignore
/// let config = load_config("matchlist-watch.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<WatchConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: WatchConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

impl WatchConfig {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.source.api_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Invalid("source.api_url cannot be empty".to_string()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "source.api_url must start with http:// or https://".to_string(),
            ));
        }
        if self.source.days_back > MAX_WINDOW_DAYS || self.source.days_ahead > MAX_WINDOW_DAYS {
            return Err(ConfigError::Invalid(format!(
                "fetch window is too large (max {} days each way)",
                MAX_WINDOW_DAYS
            )));
        }
        if self.source.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "source.request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.storage.snapshot_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("storage.snapshot_file cannot be empty".to_string()));
        }
        if self.storage.snapshot_file == self.storage.report_file {
            return Err(ConfigError::Invalid(
                "snapshot and report must be different files".to_string(),
            ));
        }
        Ok(())
    }
}
