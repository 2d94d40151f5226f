//! # GNAT CLI - Causal Activity Graphs from Spike Trains
//!
//! Batch tools that evaluate recorded spike rasters against a known
//! synaptic connectivity graph and emit the causally related spike (or
//! spike-pair) edges.

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod error;

use commands::GnatCli;

fn main() {
    // Parse CLI arguments first so --verbose can raise the filter
    let cli = GnatCli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Execute the command
    if let Err(err) = cli.execute() {
        error!("Command failed: {}", err);
        std::process::exit(1);
    }
}
