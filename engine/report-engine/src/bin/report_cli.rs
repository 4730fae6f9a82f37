//! # Report CLI Binary
//!
//! Command-line interface for roster and performance reports.

use anyhow::Result;
use clap::Parser;
use report_engine::cli::{Cli, CliHandler};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Create CLI handler
    let handler = CliHandler::new().await?;

    // Handle command
    handler.handle_command(cli.command).await?;

    Ok(())
}
