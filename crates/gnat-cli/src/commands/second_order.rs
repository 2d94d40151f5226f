//! Second-order tool: edges between spike pairs

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use gnat_engine::{run_second_order, GnatParams};
use gnat_io::{read_network, read_spike_raster, EventFilter, Strictness};

use crate::error::CliResult;

/// Compute the second-order activity graph
#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct SecondOrderCommand {
    /// Number of neurons in the population
    pub n_cells: u32,

    /// Spike raster file (one event per line: type ts_hex neuron_id)
    pub spike_file: PathBuf,

    /// Connectivity file (one synapse per line: src tgt rel_w delay)
    pub network_file: PathBuf,

    /// Time constant of the synaptic kernel, in ticks
    pub tau: f32,

    /// Score threshold; both pair components require gamma <= thresh
    pub thresh: f32,

    /// Half-width of the square temporal query window, in ticks
    pub causal_radius: f64,

    /// Output file
    #[arg(short, long, default_value = "gnat2_out.txt")]
    pub out_file: PathBuf,
}

impl SecondOrderCommand {
    /// Run the second-order analysis
    pub fn execute(self) -> CliResult<()> {
        let params = GnatParams::new(self.tau, self.thresh, self.causal_radius)?;

        info!("Reading spike file {}", self.spike_file.display());
        let raster = read_spike_raster(
            BufReader::new(File::open(&self.spike_file)?),
            self.n_cells,
            EventFilter::All,
            Strictness::Strict,
        )?;

        info!("Reading connectivity file {}", self.network_file.display());
        let network = read_network(
            BufReader::new(File::open(&self.network_file)?),
            self.n_cells,
        )?;

        info!("Computing pair edges...");
        let bar = ProgressBar::new(u64::from(raster.n_cells()));
        bar.set_style(
            ProgressStyle::with_template("{bar:40} cell {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let out = BufWriter::new(File::create(&self.out_file)?);
        run_second_order(&raster, &network, &params, out, |done, _| {
            bar.set_position(u64::from(done))
        })?;
        bar.finish_and_clear();

        info!("Done; wrote {}", self.out_file.display());
        Ok(())
    }
}
