//! CLI command implementations for GNAT

use clap::{Parser, Subcommand};

use crate::error::CliResult;

pub mod first_order;
pub mod second_order;

/// GNAT - causal activity graphs from spike trains
#[derive(Parser, Debug)]
#[command(
    name = "gnat",
    version,
    about = "Causal activity graphs from spike trains",
    long_about = "GNAT evaluates recorded neuronal spike trains against a known \
                  synaptic connectivity graph and emits directed edges between \
                  causally related spikes (first order) or spike pairs (second \
                  order)."
)]
pub struct GnatCli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// First-order activity graph between single spikes
    #[command(alias = "gnat1")]
    FirstOrder(first_order::FirstOrderCommand),

    /// Second-order activity graph between spike pairs
    #[command(alias = "gnat2")]
    SecondOrder(second_order::SecondOrderCommand),
}

impl GnatCli {
    /// Execute the CLI command
    pub fn execute(self) -> CliResult<()> {
        match self.command {
            Commands::FirstOrder(cmd) => cmd.execute(),
            Commands::SecondOrder(cmd) => cmd.execute(),
        }
    }
}
