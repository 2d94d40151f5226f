//! First-order activity graph driver
//!
//! For every postsynaptic spike, sweep each presynaptic neuron's train
//! inside the past-only temporal window `[t_q - R, t_q]` and score each
//! candidate spike through the connecting synapse. GNATS mode emits the
//! edges that pass the threshold; CDH mode emits every score unfiltered.

use std::io::Write;

use gnat_core::{gamma, Network, NeuronId, SpikeRaster, Timestamp};
use gnat_io::{CausalScore, EdgeWriter, FirstOrderEdge};

use crate::{
    error::{EngineError, Result},
    params::{GnatParams, OutputMode},
};

/// Run the first-order analysis, writing one line per emission to `out`
///
/// The network must cover at least the raster's population. `progress` is
/// called once per completed postsynaptic neuron with `(done, total)`.
pub fn run_first_order<W, P>(
    raster: &SpikeRaster,
    network: &Network,
    params: &GnatParams,
    mode: OutputMode,
    out: W,
    mut progress: P,
) -> Result<()>
where
    W: Write,
    P: FnMut(u32, u32),
{
    if network.n_cells() < raster.n_cells() {
        return Err(EngineError::PopulationMismatch {
            network_cells: network.n_cells(),
            raster_cells: raster.n_cells(),
        });
    }

    match mode {
        OutputMode::Gnats => {
            let mut writer = EdgeWriter::new(out);
            sweep(raster, network, params, &mut progress, |pre, t_pre, post, t_post, g| {
                if g <= params.thresh {
                    writer.push(FirstOrderEdge {
                        pre,
                        t_pre,
                        post,
                        t_post,
                    })?;
                }
                Ok(())
            })?;
            writer.finalize()?;
        }
        OutputMode::Cdh => {
            let mut writer = EdgeWriter::new(out);
            sweep(raster, network, params, &mut progress, |_, _, _, _, g| {
                writer.push(CausalScore(g))?;
                Ok(())
            })?;
            writer.finalize()?;
        }
    }
    Ok(())
}

/// Score every candidate (pre spike, post spike) pairing in the window
fn sweep<P, F>(
    raster: &SpikeRaster,
    network: &Network,
    params: &GnatParams,
    progress: &mut P,
    mut visit: F,
) -> Result<()>
where
    P: FnMut(u32, u32),
    F: FnMut(NeuronId, Timestamp, NeuronId, Timestamp, f32) -> Result<()>,
{
    let total = raster.n_cells();
    for p in 0..total {
        let post = NeuronId::new(p);
        for &t_q in raster.spike_train(post) {
            let past_limit = t_q.saturating_sub(params.radius_ticks());
            for syn in network.presyns_of(post) {
                if syn.src.raw() >= raster.n_cells() {
                    // Sources beyond the recorded population have no spikes
                    continue;
                }
                for &t_p in raster.spikes_in_range(syn.src, past_limit, t_q) {
                    let g = gamma(t_p, t_q, syn, params.tau);
                    visit(syn.src, t_p, post, t_q, g)?;
                }
            }
        }
        progress(p + 1, total);
    }
    Ok(())
}
