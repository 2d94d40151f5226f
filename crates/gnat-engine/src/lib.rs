//! Causal activity graph drivers
//!
//! Ties the core query structures together into the two batch analyses:
//! the first-order driver sweeps a 1D temporal window over presynaptic
//! spike trains for every postsynaptic spike, and the second-order driver
//! queries per-neuron quadtrees of spike pairs with a square temporal
//! window around every postsynaptic pair. Both emit edges through the
//! buffered writer and execute synchronously to completion.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod params;
pub mod first_order;
pub mod second_order;

pub use error::{EngineError, Result};
pub use params::{GnatParams, OutputMode};
pub use first_order::run_first_order;
pub use second_order::{build_pair_trees, run_second_order};
