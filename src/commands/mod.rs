//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod check;
pub mod diff;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use check::{execute_check, run_cycle, validate_args, CycleOutcome};
pub use diff::execute_diff;
pub use models::{CheckArgs, DiffArgs};
pub use utils::{display_version, validate_snapshot_file};
