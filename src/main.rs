//! apiconfig CLI application
//!
//! Command-line interface for inspecting generated API configuration:
//! cookie-based authentication detection, derived auth features and validation.

use std::process;

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use apiconfig::cli::{Cli, Commands, handle_check, handle_inspect, handle_validate};
use apiconfig::config::AppConfig;
use apiconfig::constants::exit;
use apiconfig::errors::Result;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit::FAILURE);
        }
    }
}

/// Main application logic
async fn run() -> Result<i32> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();
    let config = AppConfig::load(cli.global.config.clone()).await?;

    init_logging(&cli, &config);
    debug!("apiconfig v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Check(args) => handle_check(args, &config).await,
        Commands::Inspect(args) => handle_inspect(args, &config).await,
        Commands::Validate(args) => handle_validate(args, &config).await,
    }
}

/// Initialize logging from CLI verbosity, falling back to the configured level
fn init_logging(cli: &Cli, config: &AppConfig) {
    let level = cli
        .log_level()
        .map(|level| level.to_string().to_lowercase())
        .unwrap_or_else(|| config.logging.level.clone());

    let mut filter = EnvFilter::from_default_env();
    match format!("apiconfig={}", level).parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("Ignoring invalid log level '{}': {}", level, e),
    }

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .with_writer(std::io::stderr)
        .init();
}
