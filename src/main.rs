//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing summary output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_audit::initialization::init_logger_with;
use site_audit::{run_session, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_session(config).await {
        Ok(summary) => {
            println!(
                "✅ Analyzed {} URL{} ({} completed, {} failed, {} rejected) in {:.1}s",
                summary.submitted,
                if summary.submitted == 1 { "" } else { "s" },
                summary.completed,
                summary.failed,
                summary.rejected,
                summary.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("site_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
