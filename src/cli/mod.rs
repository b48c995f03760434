//! Command-line interface components
//!
//! This module contains CLI-specific code for the API configuration
//! inspector: argument parsing and command handlers.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, GlobalArgs, InspectArgs, TargetArgs};
pub use commands::{handle_check, handle_inspect, handle_validate};
