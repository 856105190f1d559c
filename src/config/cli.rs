//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Netgear presence monitor
///
/// Polls a Netgear router's SOAP API for attached devices and logs each
/// device that joins or leaves the network.
#[derive(Debug, Parser)]
#[command(name = "netgear-presence")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Router host name or IP address
    #[arg(long)]
    pub host: Option<String>,

    /// Router SOAP port
    #[arg(long)]
    pub port: Option<u16>,

    /// Router admin username
    #[arg(long, short)]
    pub username: Option<String>,

    /// Router admin password (required for run mode)
    #[arg(long, short)]
    pub password: Option<String>,

    /// Session identifier sent with every request
    #[arg(long = "session-id")]
    pub session_id: Option<String>,

    /// Polling interval in seconds
    #[arg(long = "poll-interval")]
    pub poll_interval: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for netgear-presence
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "netgear-presence.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
