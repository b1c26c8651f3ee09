//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::time::Duration;

use crate::config::parse_duration;
use crate::config::PollSettings;
use crate::error::Result;

/// waitup - wait for a service to become ready.
#[derive(Debug, Parser)]
#[command(name = "waitup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Give up after this long (e.g. 30s, 2m)
    #[arg(
        short,
        long,
        global = true,
        env = "WAITUP_TIMEOUT",
        default_value = "10s",
        value_name = "DURATION",
        value_parser = parse_duration
    )]
    pub timeout: Duration,

    /// Pause between attempts
    #[arg(
        short,
        long,
        global = true,
        env = "WAITUP_INTERVAL",
        default_value = "1s",
        value_name = "DURATION",
        value_parser = parse_duration
    )]
    pub interval: Duration,

    /// Report every attempt
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Validated poll settings from the global flags.
    pub fn poll_settings(&self) -> Result<PollSettings> {
        PollSettings::new(self.timeout, self.interval)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Wait for an HTTP endpoint
    #[command(after_help = HTTP_EXAMPLES)]
    Http(HttpArgs),

    /// Print version and build information
    Version(VersionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

const HTTP_EXAMPLES: &str = "\
Examples:
  # Wait until the endpoint answers at all
  waitup http http://localhost:8080

  # Wait for a specific status code
  waitup http http://localhost:8080/health --expect-status-code 200

  # Wait for the body to contain a pattern
  waitup http http://localhost:8080/health --expect-body '\"status\":\\s*\"up\"'";

/// Arguments for the `http` command.
#[derive(Debug, Clone, clap::Args)]
pub struct HttpArgs {
    /// URL to probe (e.g. http://localhost:8080/health)
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Expected response status code (0 = any)
    #[arg(long, value_name = "CODE")]
    pub expect_status_code: Option<u16>,

    /// Regular expression the response body must contain
    #[arg(long, value_name = "REGEX")]
    pub expect_body: Option<String>,

    /// Limit for each attempt, including connect, redirects and body
    #[arg(
        long,
        default_value = "5s",
        value_name = "DURATION",
        value_parser = parse_duration
    )]
    pub connection_timeout: Duration,
}

/// Arguments for the `version` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
