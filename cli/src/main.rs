//! `ballot` — command-line front end to the voting client core.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Context;
use ballot_types::Timestamp;
use ballot_utils::LogFormat;
use clap::Parser;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "ballot", about = "Voting client core: election timing, profile checks, connectivity")]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, global = true, env = "BALLOT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "BALLOT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "BALLOT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Show status, time remaining and progress of an election window.
    Election {
        /// Voting opens (RFC 3339 or Unix milliseconds).
        #[arg(long)]
        start: Timestamp,

        /// Voting closes (RFC 3339 or Unix milliseconds).
        #[arg(long)]
        end: Timestamp,

        /// Evaluate at this instant instead of the current time.
        #[arg(long)]
        now: Option<Timestamp>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Compare extracted identity document fields with a profile form.
    #[command(name = "check-profile")]
    CheckProfile {
        /// JSON file with the extraction result (`text_details`).
        #[arg(long)]
        verification: PathBuf,

        /// JSON file with the submitted profile form.
        #[arg(long)]
        form: PathBuf,
    },

    /// Track connectivity from `online`/`offline` lines on stdin.
    Connectivity {
        /// Start in the offline state.
        #[arg(long)]
        offline: bool,

        /// Override the reconnect delay in milliseconds.
        #[arg(long, env = "BALLOT_RECONNECT_DELAY_MS")]
        reconnect_delay_ms: Option<u64>,

        /// Override the settle delay in milliseconds.
        #[arg(long, env = "BALLOT_SETTLE_DELAY_MS")]
        settle_delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CliConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    ballot_utils::init_tracing(&config.log_level, config.log_format);
    if let Some(ref path) = cli.config {
        tracing::debug!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Election {
            start,
            end,
            now,
            json,
        } => {
            let summary = commands::election_summary(start, end, now);
            commands::print_election(&summary, json)?;
        }
        Command::CheckProfile { verification, form } => {
            let mismatches = commands::check_profile(&verification, &form)?;
            println!("{}", serde_json::to_string_pretty(&mismatches)?);
        }
        Command::Connectivity {
            offline,
            reconnect_delay_ms,
            settle_delay_ms,
        } => {
            let mut connectivity = config.connectivity;
            if let Some(ms) = reconnect_delay_ms {
                connectivity.reconnect_delay_ms = ms;
            }
            if let Some(ms) = settle_delay_ms {
                connectivity.settle_delay_ms = ms;
            }
            tracing::info!(
                offline,
                reconnect_delay_ms = connectivity.reconnect_delay_ms,
                settle_delay_ms = connectivity.settle_delay_ms,
                "Starting connectivity session"
            );
            commands::connectivity_session(offline, connectivity).await?;
        }
    }

    Ok(())
}
