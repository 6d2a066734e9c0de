use crate::utils::config::{DuplicateIdPolicy, WatchConfig};
use std::path::PathBuf;

/// Arguments for the check command
///
/// **Public** - used by main.rs to construct from config file and CLI args
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Fully resolved configuration
    pub config: WatchConfig,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Detect and report, but leave the snapshot untouched
    pub dry_run: bool,
}

/// Arguments for the diff command
#[derive(Debug, Clone)]
pub struct DiffArgs {
    /// Snapshot file treated as the previous collection
    pub previous: PathBuf,

    /// Snapshot file treated as the current collection
    pub current: PathBuf,

    /// Path to write the change report JSON
    pub output: Option<PathBuf>,

    /// Print a human-readable summary to the terminal
    pub summary: bool,

    pub duplicate_ids: DuplicateIdPolicy,
}

impl Default for DiffArgs {
    fn default() -> Self {
        Self {
            previous: PathBuf::new(),
            current: PathBuf::new(),
            output: None,
            summary: true,
            duplicate_ids: DuplicateIdPolicy::LastWins,
        }
    }
}
