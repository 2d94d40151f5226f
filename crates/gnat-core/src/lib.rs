//! Core primitives for causal activity graph computation
//!
//! This crate provides the data model and query structures used to derive
//! causal activity graphs from recorded spike trains: spike and spike-pair
//! values, the per-neuron spike raster, the synaptic connectivity graph,
//! and the point-region quadtree used for second-order pair queries,
//! together with the synapse-weighted causal scoring functions.

#![deny(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod error;
pub mod ids;
pub mod spike;
pub mod scoring;
pub mod geometry;
pub mod raster;
pub mod network;
pub mod quadtree;

// Re-export essential types
pub use error::{CoreError, Result};
pub use ids::{NeuronId, Timestamp};
pub use spike::{Spike, SpikePair};
pub use scoring::{gamma, omega, pair_edge_test, GAMMA_SENTINEL};
pub use geometry::BoundingBox;
pub use raster::SpikeRaster;
pub use network::{Network, Synapse};
pub use quadtree::{PairTree, NODE_CAPACITY};

/// Ticks per millisecond by convention; no computation depends on the rate.
pub const TICKS_PER_MS: u64 = 1_000_000;
