//! Connectivity file readers
//!
//! Canonical format, one synapse per line:
//!
//! ```text
//! <src_id> <tgt_id> <rel_w> <delay>
//! ```
//!
//! CSR variant (first-order tool only), one target per line with the line
//! number as the target id:
//!
//! ```text
//! <n_edges> <src_0> <w_0> <d_0> <src_1> <w_1> <d_1> ...
//! ```
//!
//! Ids are decimal integers; weights and delays are floating point. All
//! parse failures and out-of-range ids are fatal.

use std::io::BufRead;

use gnat_core::{Network, NeuronId, Synapse};

use crate::error::{IoError, Result};

fn parse_field<T: std::str::FromStr>(
    fields: &mut std::str::SplitWhitespace<'_>,
    line_no: usize,
    what: &str,
) -> Result<T> {
    let field = fields
        .next()
        .ok_or_else(|| IoError::parse(line_no, format!("missing {}", what)))?;
    field
        .parse()
        .map_err(|_| IoError::parse(line_no, format!("bad {} {:?}", what, field)))
}

/// Read a canonical connectivity file over `n_cells` neurons
pub fn read_network<R: BufRead>(reader: R, n_cells: u32) -> Result<Network> {
    let mut network = Network::new(n_cells);

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.split_whitespace().next().is_none() {
            continue; // blank line
        }
        let mut fields = line.split_whitespace();

        let src: u32 = parse_field(&mut fields, line_no, "source neuron")?;
        let tgt: u32 = parse_field(&mut fields, line_no, "target neuron")?;
        let rel_w: f32 = parse_field(&mut fields, line_no, "relative weight")?;
        let delay: f32 = parse_field(&mut fields, line_no, "delay")?;

        let syn = Synapse::new(NeuronId::new(src), NeuronId::new(tgt), rel_w, delay)?;
        network.add_synapse(syn)?;
    }

    network.log_stats();
    Ok(network)
}

/// Read a CSR connectivity file over `n_cells` neurons
///
/// Line `i` lists the presynaptic edges of target neuron `i`; a file with
/// more lines than `n_cells` does not fit the population and is rejected.
pub fn read_network_csr<R: BufRead>(reader: R, n_cells: u32) -> Result<Network> {
    let mut network = Network::new(n_cells);

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if idx as u32 >= n_cells {
            return Err(IoError::parse(
                line_no,
                format!("more target lines than the {} declared cells", n_cells),
            ));
        }
        let tgt = NeuronId::new(idx as u32);
        let mut fields = line.split_whitespace();

        let n_edges: usize = parse_field(&mut fields, line_no, "edge count")?;
        for _ in 0..n_edges {
            let src: u32 = parse_field(&mut fields, line_no, "source neuron")?;
            let rel_w: f32 = parse_field(&mut fields, line_no, "relative weight")?;
            let delay: f32 = parse_field(&mut fields, line_no, "delay")?;

            let syn = Synapse::new(NeuronId::new(src), tgt, rel_w, delay)?;
            network.add_synapse(syn)?;
        }
    }

    network.log_stats();
    Ok(network)
}
