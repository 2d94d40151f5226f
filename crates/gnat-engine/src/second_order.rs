//! Second-order activity graph driver
//!
//! Builds one quadtree of intra-neuron spike pairs per neuron, then for
//! every postsynaptic pair queries each presynaptic neuron's tree with a
//! square temporal window and applies the two-component edge test to every
//! visited pair.

use std::io::Write;

use log::debug;

use gnat_core::{pair_edge_test, BoundingBox, Network, NeuronId, PairTree, SpikeRaster};
use gnat_io::{EdgeWriter, PairEdge};

use crate::{
    error::{EngineError, Result},
    params::GnatParams,
};

/// Build one pair quadtree per neuron over the raster's temporal extent
///
/// The shared top-level box is centered at the midpoint of the recording
/// on both axes. Its half-width is padded by one tick beyond the strict
/// `(t_max - t_min) / 2` so that pairs touching the global time bounds
/// still satisfy the strict containment test and stay queryable.
pub fn build_pair_trees(raster: &SpikeRaster) -> Vec<PairTree> {
    let (center, half) = match raster.time_bounds() {
        Some((t_min, t_max)) => {
            let lo = t_min.ticks() as f64;
            let hi = t_max.ticks() as f64;
            ((lo + hi) / 2.0, (hi - lo) / 2.0 + 1.0)
        }
        None => (0.0, 0.0),
    };
    let top = BoundingBox::new(center, center, half);

    let mut trees = Vec::with_capacity(raster.n_cells() as usize);
    for n in 0..raster.n_cells() {
        let neuron = NeuronId::new(n);
        let mut tree = PairTree::new(top);
        for pair in raster.pairs(neuron) {
            tree.insert(pair);
        }
        debug!(
            "neuron {}: {} pairs in {} nodes",
            n,
            tree.len(),
            tree.node_count()
        );
        trees.push(tree);
    }
    trees
}

/// Run the second-order analysis, writing one line per edge to `out`
///
/// The network and raster must declare the same population. `progress` is
/// called once per completed postsynaptic neuron with `(done, total)`.
pub fn run_second_order<W, P>(
    raster: &SpikeRaster,
    network: &Network,
    params: &GnatParams,
    out: W,
    mut progress: P,
) -> Result<()>
where
    W: Write,
    P: FnMut(u32, u32),
{
    if network.n_cells() != raster.n_cells() {
        return Err(EngineError::PopulationMismatch {
            network_cells: network.n_cells(),
            raster_cells: raster.n_cells(),
        });
    }

    let trees = build_pair_trees(raster);
    let mut writer = EdgeWriter::new(out);

    let total = raster.n_cells();
    for p in 0..total {
        let post = NeuronId::new(p);
        for post_pair in raster.pairs(post) {
            for syn in network.presyns_of(post) {
                let query = BoundingBox::new(
                    post_pair.t1.ticks() as f64,
                    post_pair.t2.ticks() as f64,
                    params.radius,
                );
                let tree = &trees[syn.src.raw() as usize];

                let mut push_err = None;
                tree.for_each_in_range(&query, |pre_pair| {
                    if push_err.is_some() {
                        return;
                    }
                    if pair_edge_test(pre_pair, &post_pair, syn, params.tau, params.thresh) {
                        let edge = PairEdge {
                            pre: syn.src,
                            t_pre1: pre_pair.t1,
                            t_pre2: pre_pair.t2,
                            post,
                            t_post1: post_pair.t1,
                            t_post2: post_pair.t2,
                        };
                        if let Err(err) = writer.push(edge) {
                            push_err = Some(err);
                        }
                    }
                });
                if let Some(err) = push_err {
                    return Err(err.into());
                }
            }
        }
        progress(p + 1, total);
    }

    writer.finalize()?;
    Ok(())
}
