//! Matchlist Watch CLI
//!
//! Fetches the current match list, compares it against the previous
//! snapshot and reports what changed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use matchlist_watch::commands::{
    display_version, execute_check, execute_diff, validate_snapshot_file, CheckArgs, DiffArgs,
};
use matchlist_watch::utils::config::{load_config, DuplicateIdPolicy, WatchConfig};

/// Matchlist Watch - change detection for scheduled match lists
#[derive(Parser, Debug)]
#[command(name = "matchlist-watch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one detection cycle against the match list service
    Check {
        /// TOML configuration file
        #[arg(short, long, env = "MATCHLIST_CONFIG")]
        config: Option<PathBuf>,

        /// Base URL of the match list service
        #[arg(long, env = "MATCHLIST_API_URL")]
        api_url: Option<String>,

        /// Snapshot file holding the previous match list
        #[arg(short, long, env = "MATCHLIST_SNAPSHOT_FILE")]
        snapshot: Option<PathBuf>,

        /// Output path for the change report JSON
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Days before today to include
        #[arg(long, env = "MATCHLIST_DAYS_BACK")]
        days_back: Option<u32>,

        /// Days after today to include
        #[arg(long, env = "MATCHLIST_DAYS_AHEAD")]
        days_ahead: Option<u32>,

        /// Fail on duplicate match ids instead of keeping the later record
        #[arg(long)]
        reject_duplicates: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Do not update the snapshot
        #[arg(long)]
        dry_run: bool,
    },

    /// Compare two snapshot files offline
    Diff {
        /// Previous snapshot JSON
        #[arg(short, long)]
        previous: PathBuf,

        /// Current snapshot JSON
        #[arg(short, long)]
        current: PathBuf,

        /// Output path for the change report JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        summary: bool,

        /// Fail on duplicate match ids instead of keeping the later record
        #[arg(long)]
        reject_duplicates: bool,
    },

    /// Validate a snapshot JSON file
    Validate {
        /// Path to snapshot JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Check {
            config,
            api_url,
            snapshot,
            report,
            days_back,
            days_ahead,
            reject_duplicates,
            summary,
            dry_run,
        } => {
            // File first, then CLI overrides
            let mut watch_config = match config {
                Some(path) => load_config(&path)?,
                None => WatchConfig::default(),
            };

            if let Some(url) = api_url {
                watch_config.source.api_url = url;
            }
            if let Some(path) = snapshot {
                watch_config.storage.snapshot_file = path;
            }
            if let Some(path) = report {
                watch_config.storage.report_file = path;
            }
            if let Some(days) = days_back {
                watch_config.source.days_back = days;
            }
            if let Some(days) = days_ahead {
                watch_config.source.days_ahead = days;
            }
            if reject_duplicates {
                watch_config.detection.duplicate_ids = DuplicateIdPolicy::Reject;
            }

            let args = CheckArgs {
                config: watch_config,
                print_summary: summary,
                dry_run,
            };

            execute_check(&args)?;
        }

        Commands::Diff {
            previous,
            current,
            output,
            summary,
            reject_duplicates,
        } => {
            let args = DiffArgs {
                previous,
                current,
                output,
                summary,
                duplicate_ids: if reject_duplicates {
                    DuplicateIdPolicy::Reject
                } else {
                    DuplicateIdPolicy::LastWins
                },
            };

            execute_diff(&args)?;
        }

        Commands::Validate { file } => {
            validate_snapshot_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_reads_deployment_env() {
        std::env::set_var("MATCHLIST_DAYS_BACK", "3");
        std::env::set_var("MATCHLIST_DAYS_AHEAD", "30");
        std::env::set_var("MATCHLIST_SNAPSHOT_FILE", "/var/lib/matchlist/previous.json");

        let from_env = Cli::try_parse_from(["matchlist-watch", "check"]);
        let from_flag = Cli::try_parse_from(["matchlist-watch", "check", "--days-back", "9"]);

        std::env::remove_var("MATCHLIST_DAYS_BACK");
        std::env::remove_var("MATCHLIST_DAYS_AHEAD");
        std::env::remove_var("MATCHLIST_SNAPSHOT_FILE");

        match from_env.unwrap().command {
            Commands::Check {
                days_back,
                days_ahead,
                snapshot,
                ..
            } => {
                assert_eq!(days_back, Some(3));
                assert_eq!(days_ahead, Some(30));
                assert_eq!(snapshot, Some(PathBuf::from("/var/lib/matchlist/previous.json")));
            }
            other => panic!("expected check, got {:?}", other),
        }

        match from_flag.unwrap().command {
            Commands::Check { days_back, .. } => assert_eq!(days_back, Some(9)),
            other => panic!("expected check, got {:?}", other),
        }
    }
}
