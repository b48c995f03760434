//! Command-line argument parsing for the API configuration inspector
//!
//! Defines the CLI structure using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// apiconfig - inspect generated API configuration
#[derive(Parser, Debug)]
#[command(
    name = "apiconfig",
    version,
    about = "Inspect and validate generated API configuration",
    long_about = "Reports whether cookie-based authentication is enabled for a generated API configuration,
summarizes the auth features code generation derives from it, and validates its authentication settings."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Tool configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report whether cookie-based authentication is enabled
    Check(TargetArgs),

    /// Show auth features derived for code generation
    Inspect(InspectArgs),

    /// Validate authentication settings
    Validate(TargetArgs),
}

/// Arguments selecting the API configuration document
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Path to the generated API configuration (defaults to the configured path)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print features as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Logging level requested by the verbosity flags, if any
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}
