//! First-order tool: single-spike edges or causal distance histograms

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use gnat_engine::{run_first_order, GnatParams, OutputMode};
use gnat_io::{read_network, read_network_csr, read_spike_raster, EventFilter, Strictness};

use crate::error::CliResult;

fn parse_func(s: &str) -> Result<OutputMode, String> {
    match s {
        "1" | "gnats" => Ok(OutputMode::Gnats),
        "2" | "cdh" => Ok(OutputMode::Cdh),
        other => Err(format!(
            "unknown function {:?}: expected 1/gnats or 2/cdh",
            other
        )),
    }
}

/// Compute the first-order activity graph
#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct FirstOrderCommand {
    /// Number of neurons in the population
    pub n_neurons: u32,

    /// Connectivity file (one synapse per line: src tgt rel_w delay)
    pub connection_file: PathBuf,

    /// Spike raster file (one event per line: type ts_hex neuron_id)
    pub spike_file: PathBuf,

    /// 1/gnats = emit edges, 2/cdh = emit causal distances
    #[arg(value_parser = parse_func)]
    pub func: OutputMode,

    /// Output file
    pub out_file: PathBuf,

    /// Time constant of the synaptic kernel, in ticks
    pub tau: f32,

    /// Score threshold; edges require gamma <= thresh
    pub thresh: f32,

    /// Temporal radius of the past-only query window, in ticks
    pub causal_radius: f64,

    /// Connectivity file uses the CSR layout (line number = target id)
    #[arg(long)]
    pub csr: bool,

    /// Treat spikes from out-of-range neurons as fatal instead of skipping
    #[arg(long)]
    pub strict: bool,
}

impl FirstOrderCommand {
    /// Run the first-order analysis
    pub fn execute(self) -> CliResult<()> {
        let params = GnatParams::new(self.tau, self.thresh, self.causal_radius)?;

        info!("Reading spike file {}", self.spike_file.display());
        let strictness = if self.strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        };
        let raster = read_spike_raster(
            BufReader::new(File::open(&self.spike_file)?),
            self.n_neurons,
            EventFilter::SpikesOnly,
            strictness,
        )?;

        info!("Reading connectivity file {}", self.connection_file.display());
        let net_reader = BufReader::new(File::open(&self.connection_file)?);
        let network = if self.csr {
            read_network_csr(net_reader, self.n_neurons)?
        } else {
            read_network(net_reader, self.n_neurons)?
        };

        info!("Computing activity threads...");
        let out = BufWriter::new(File::create(&self.out_file)?);
        run_first_order(&raster, &network, &params, self.func, out, |_, _| {})?;
        info!("Done; wrote {}", self.out_file.display());
        Ok(())
    }
}
