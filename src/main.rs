//! Thermal Scout: a thermal-aware Hugging Face model search tool
//!
//! This is the main entry point for the CLI and the API server.

use anyhow::Result;
use clap::Parser;
use thermal_scout::cli::{Cli, Commands};
use thermal_scout::config;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let serving = matches!(cli.command, Commands::Serve(_));
    init_logging(log_level(cli.verbose, serving));

    let settings = config::load(cli.config.as_deref())?;
    config::init(settings)?;

    thermal_scout::cli::run(cli.command, config::get()).await
}

/// Level from the `-v` count; `serve` starts at info
fn log_level(verbose: u8, serving: bool) -> Level {
    match verbose.max(u8::from(serving)) {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize logging; `RUST_LOG` takes precedence over `-v`
fn init_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("thermal_scout={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
