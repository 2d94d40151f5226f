//! Spike and spike-pair values

use core::fmt;

use crate::{
    error::{CoreError, Result},
    ids::{NeuronId, Timestamp},
};

/// A single timestamped event from one neuron
///
/// Spikes are immutable once read from the raster file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spike {
    /// Neuron that emitted the spike
    pub neuron: NeuronId,
    /// Spike time in ticks
    pub ts: Timestamp,
}

impl Spike {
    /// Create a new spike
    pub const fn new(neuron: NeuronId, ts: Timestamp) -> Self {
        Self { neuron, ts }
    }
}

impl fmt::Display for Spike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spike[{}, {}]", self.neuron, self.ts)
    }
}

/// An ordered pair of two distinct spikes from the same neuron
///
/// Only used in second-order mode. The pair's 2D coordinate in the
/// quadtree plane is `(t1, t2)`. Enumeration on the raster guarantees
/// `t1` precedes `t2` in train order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpikePair {
    /// Neuron both component spikes belong to
    pub neuron: NeuronId,
    /// Timestamp of the first component spike
    pub t1: Timestamp,
    /// Timestamp of the second component spike
    pub t2: Timestamp,
}

impl SpikePair {
    /// Create a pair from two timestamps of the same neuron
    ///
    /// Rejects pairs whose component spikes coincide; the same-neuron
    /// invariant is structural since the pair stores a single id.
    pub fn new(neuron: NeuronId, t1: Timestamp, t2: Timestamp) -> Result<Self> {
        if t1 == t2 {
            return Err(CoreError::DegeneratePair {
                neuron: neuron.raw(),
                ts: t1.ticks(),
            });
        }
        Ok(Self { neuron, t1, t2 })
    }

    /// The pair's coordinate in the (t1, t2) plane
    pub fn point(&self) -> (f64, f64) {
        (self.t1.ticks() as f64, self.t2.ticks() as f64)
    }
}

impl fmt::Display for SpikePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Spike[{}, {}] <---> Spike[{}, {}]",
            self.neuron, self.t1, self.neuron, self.t2
        )
    }
}
