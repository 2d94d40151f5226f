//! Spike raster file reader
//!
//! One event per line, whitespace-separated:
//!
//! ```text
//! <type> <timestamp_hex> <neuron_id_decimal>
//! ```
//!
//! The timestamp is hexadecimal without an `0x` prefix; type and neuron id
//! are decimal. Only `type == 0` denotes a spike; the first-order tool
//! drops other event types silently while the second-order tool ingests
//! every line.

use std::io::BufRead;

use log::warn;

use gnat_core::{CoreError, NeuronId, Spike, SpikeRaster, Timestamp};

use crate::error::{IoError, Result};

/// Which event types to keep while reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFilter {
    /// Keep only lines with `type == 0`
    SpikesOnly,
    /// Keep every line regardless of type
    All,
}

/// How to treat events from neurons outside the declared population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Out-of-range neuron ids are fatal
    #[default]
    Strict,
    /// Out-of-range neuron ids are skipped with a warning
    Lenient,
}

/// Read a spike raster over `n_cells` neurons from `reader`
///
/// The returned raster is finalized: trains are chronological with
/// duplicate timestamps collapsed. Unparsable fields are fatal regardless
/// of strictness.
pub fn read_spike_raster<R: BufRead>(
    reader: R,
    n_cells: u32,
    filter: EventFilter,
    strictness: Strictness,
) -> Result<SpikeRaster> {
    let mut raster = SpikeRaster::new(n_cells);

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(type_field) = fields.next() else {
            continue; // blank line
        };

        let event_type: i64 = type_field
            .parse()
            .map_err(|_| IoError::parse(line_no, format!("bad event type {:?}", type_field)))?;

        let ts_field = fields
            .next()
            .ok_or_else(|| IoError::parse(line_no, "missing timestamp"))?;
        let ts = u64::from_str_radix(ts_field, 16)
            .map_err(|_| IoError::parse(line_no, format!("bad hex timestamp {:?}", ts_field)))?;

        let id_field = fields
            .next()
            .ok_or_else(|| IoError::parse(line_no, "missing neuron id"))?;
        let neuron: u32 = id_field
            .parse()
            .map_err(|_| IoError::parse(line_no, format!("bad neuron id {:?}", id_field)))?;

        if filter == EventFilter::SpikesOnly && event_type != 0 {
            continue;
        }

        let spike = Spike::new(NeuronId::new(neuron), Timestamp::from_ticks(ts));
        match raster.add_spike(spike) {
            Ok(()) => {}
            Err(CoreError::NeuronOutOfRange { id, n_cells }) if strictness == Strictness::Lenient => {
                warn!(
                    "line {}: spike from neuron {} outside population of {}; skipping",
                    line_no, id, n_cells
                );
            }
            Err(err) => return Err(err.into()),
        }
    }

    raster.finalize();
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_hex_timestamps() {
        let input = "0 a 0\n0 1F 1\n";
        let raster =
            read_spike_raster(Cursor::new(input), 2, EventFilter::All, Strictness::Strict)
                .unwrap();
        assert_eq!(raster.spike_train(NeuronId::new(0)), &[Timestamp::from_ticks(10)]);
        assert_eq!(raster.spike_train(NeuronId::new(1)), &[Timestamp::from_ticks(31)]);
    }

    #[test]
    fn test_type_filter() {
        let input = "0 1 0\n1 2 0\n2 3 0\n";
        let only_spikes =
            read_spike_raster(Cursor::new(input), 1, EventFilter::SpikesOnly, Strictness::Strict)
                .unwrap();
        assert_eq!(only_spikes.spike_train(NeuronId::new(0)).len(), 1);

        let all = read_spike_raster(Cursor::new(input), 1, EventFilter::All, Strictness::Strict)
            .unwrap();
        assert_eq!(all.spike_train(NeuronId::new(0)).len(), 3);
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        let input = "0 1 5\n";
        let err = read_spike_raster(Cursor::new(input), 2, EventFilter::All, Strictness::Strict);
        assert!(matches!(err, Err(IoError::Domain(_))));
    }

    #[test]
    fn test_lenient_skips_out_of_range() {
        let input = "0 1 5\n0 2 0\n";
        let raster =
            read_spike_raster(Cursor::new(input), 2, EventFilter::All, Strictness::Lenient)
                .unwrap();
        assert_eq!(raster.spike_train(NeuronId::new(0)).len(), 1);
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let input = "0 1 0\n0 zz 0\n";
        let err = read_spike_raster(Cursor::new(input), 1, EventFilter::All, Strictness::Strict);
        match err {
            Err(IoError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = "0 1 0\n\n   \n0 2 0\n";
        let raster =
            read_spike_raster(Cursor::new(input), 1, EventFilter::All, Strictness::Strict)
                .unwrap();
        assert_eq!(raster.spike_train(NeuronId::new(0)).len(), 2);
    }
}
