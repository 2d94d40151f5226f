//! Text formats and buffered edge output for causal activity graphs
//!
//! This crate reads the line-oriented spike raster and connectivity files
//! and writes activity graph edges through a fixed-capacity buffer. All
//! formats are whitespace-separated text; see the individual modules for
//! the exact field layouts.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod spike_file;
pub mod network_file;
pub mod edge_writer;

pub use error::{IoError, Result};
pub use spike_file::{read_spike_raster, EventFilter, Strictness};
pub use network_file::{read_network, read_network_csr};
pub use edge_writer::{
    CausalScore, EdgeRecord, EdgeWriter, FirstOrderEdge, PairEdge, EDGE_BUF_LEN,
};
