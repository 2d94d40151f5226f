//! Synaptic connectivity graph
//!
//! Maps each target neuron to the ordered sequence of its incident
//! presynaptic synapses. Sequence order follows insertion; only membership
//! matters for correctness, but the order is preserved so that edge
//! emission stays deterministic for identical input files.

use core::fmt;

use log::debug;

use crate::{
    error::{CoreError, Result},
    ids::NeuronId,
};

/// A directed synapse from a presynaptic to a postsynaptic neuron
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Synapse {
    /// Presynaptic (source) neuron
    pub src: NeuronId,
    /// Postsynaptic (target) neuron
    pub tgt: NeuronId,
    /// Relative weight, dimensionless, > 0
    pub rel_w: f32,
    /// Axonal conduction delay in the same units as timestamps
    pub delay: f32,
    /// Cached -ln(rel_w); keeps transcendental calls out of the scorer
    pub neg_log_rel_w: f32,
}

impl Synapse {
    /// Create a synapse, caching the negative log weight
    ///
    /// The weight must be finite and positive so that `-ln w` is finite;
    /// the delay must be finite and non-negative.
    pub fn new(src: NeuronId, tgt: NeuronId, rel_w: f32, delay: f32) -> Result<Self> {
        if !(rel_w.is_finite() && rel_w > 0.0) {
            return Err(CoreError::InvalidWeight { weight: rel_w });
        }
        if !(delay.is_finite() && delay >= 0.0) {
            return Err(CoreError::InvalidDelay { delay });
        }
        Ok(Self {
            src,
            tgt,
            rel_w,
            delay,
            neg_log_rel_w: -rel_w.ln(),
        })
    }
}

impl fmt::Display for Synapse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --> {} [{:.2}, {:.2}]",
            self.src, self.tgt, self.rel_w, self.delay
        )
    }
}

/// Per-target lists of presynaptic synapses for a fixed population
#[derive(Debug, Clone)]
pub struct Network {
    presyns: Vec<Vec<Synapse>>,
}

impl Network {
    /// Create an empty network over `n_cells` neurons
    pub fn new(n_cells: u32) -> Self {
        Self {
            presyns: vec![Vec::new(); n_cells as usize],
        }
    }

    /// Population size the network was declared with
    pub fn n_cells(&self) -> u32 {
        self.presyns.len() as u32
    }

    /// Total number of synapses
    pub fn n_synapses(&self) -> usize {
        self.presyns.iter().map(Vec::len).sum()
    }

    /// Add a synapse onto its target's presynaptic list
    ///
    /// Both endpoints must lie inside the population; a source outside the
    /// raster would only fail later at query time, so it is rejected here.
    pub fn add_synapse(&mut self, syn: Synapse) -> Result<()> {
        let n_cells = self.n_cells();
        if syn.tgt.raw() >= n_cells {
            return Err(CoreError::NeuronOutOfRange {
                id: syn.tgt.raw(),
                n_cells,
            });
        }
        if syn.src.raw() >= n_cells {
            return Err(CoreError::NeuronOutOfRange {
                id: syn.src.raw(),
                n_cells,
            });
        }
        self.presyns[syn.tgt.raw() as usize].push(syn);
        Ok(())
    }

    /// The presynaptic synapses of `tgt`, in insertion order
    pub fn presyns_of(&self, tgt: NeuronId) -> &[Synapse] {
        &self.presyns[tgt.raw() as usize]
    }

    /// Log per-target degree statistics at debug level
    pub fn log_stats(&self) {
        let max_deg = self.presyns.iter().map(Vec::len).max().unwrap_or(0);
        debug!(
            "network: {} cells, {} synapses, max in-degree {}",
            self.n_cells(),
            self.n_synapses(),
            max_deg
        );
    }
}
