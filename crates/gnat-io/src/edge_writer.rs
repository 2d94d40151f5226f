//! Buffered activity graph edge output
//!
//! Edges are collected into a fixed-capacity buffer and written to the
//! output stream one line per record whenever the buffer fills, plus a
//! final flush on [`EdgeWriter::finalize`]. Single-threaded by contract; a
//! write failure is propagated and the run aborts, so a crashed run may
//! have flushed only a prefix of its edges.

use std::io::{self, Write};

use gnat_core::{NeuronId, Timestamp};

use crate::error::Result;

/// Capacity of the pending edge buffer
pub const EDGE_BUF_LEN: usize = 8192;

/// A record that renders as one output line
pub trait EdgeRecord {
    /// Write the record, including the trailing newline
    fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

/// First-order edge: presynaptic spike -> postsynaptic spike
///
/// Line format: `pre t_pre post t_post`, decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstOrderEdge {
    /// Presynaptic neuron
    pub pre: NeuronId,
    /// Presynaptic spike time
    pub t_pre: Timestamp,
    /// Postsynaptic neuron
    pub post: NeuronId,
    /// Postsynaptic spike time
    pub t_post: Timestamp,
}

impl EdgeRecord for FirstOrderEdge {
    fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} {} {} {}", self.pre, self.t_pre, self.post, self.t_post)
    }
}

/// Unfiltered causal score, one per candidate spike pairing (CDH mode)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CausalScore(
    /// The gamma value of the candidate
    pub f32,
);

impl EdgeRecord for CausalScore {
    fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.0)
    }
}

/// Second-order edge: presynaptic spike pair -> postsynaptic spike pair
///
/// Line format: `pre t_pre1 t_pre2 post t_post1 t_post2`, decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairEdge {
    /// Presynaptic neuron
    pub pre: NeuronId,
    /// First presynaptic spike time
    pub t_pre1: Timestamp,
    /// Second presynaptic spike time
    pub t_pre2: Timestamp,
    /// Postsynaptic neuron
    pub post: NeuronId,
    /// First postsynaptic spike time
    pub t_post1: Timestamp,
    /// Second postsynaptic spike time
    pub t_post2: Timestamp,
}

impl EdgeRecord for PairEdge {
    fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{} {} {} {} {} {}",
            self.pre, self.t_pre1, self.t_pre2, self.post, self.t_post1, self.t_post2
        )
    }
}

/// Fixed-capacity buffered writer for edge records
#[derive(Debug)]
pub struct EdgeWriter<R, W: Write> {
    buf: Vec<R>,
    capacity: usize,
    out: W,
}

impl<R: EdgeRecord, W: Write> EdgeWriter<R, W> {
    /// Create a writer with the standard buffer capacity
    pub fn new(out: W) -> Self {
        Self::with_capacity(EDGE_BUF_LEN, out)
    }

    /// Create a writer with an explicit buffer capacity
    pub fn with_capacity(capacity: usize, out: W) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
            out,
        }
    }

    /// Number of records currently pending in the buffer
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Buffer a record, flushing first if the buffer is full
    pub fn push(&mut self, record: R) -> Result<()> {
        if self.buf.len() >= self.capacity {
            self.flush()?;
        }
        self.buf.push(record);
        Ok(())
    }

    /// Write every pending record and clear the buffer
    pub fn flush(&mut self) -> Result<()> {
        for record in &self.buf {
            record.write_line(&mut self.out)?;
        }
        self.buf.clear();
        Ok(())
    }

    /// Flush pending records and the underlying stream
    pub fn finalize(mut self) -> Result<()> {
        self.flush()?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(t: u64) -> FirstOrderEdge {
        FirstOrderEdge {
            pre: NeuronId::new(0),
            t_pre: Timestamp::from_ticks(t),
            post: NeuronId::new(1),
            t_post: Timestamp::from_ticks(t + 1),
        }
    }

    #[test]
    fn test_line_formats() {
        let mut out = Vec::new();
        edge(7).write_line(&mut out).unwrap();
        PairEdge {
            pre: NeuronId::new(0),
            t_pre1: Timestamp::from_ticks(0),
            t_pre2: Timestamp::from_ticks(1),
            post: NeuronId::new(1),
            t_post1: Timestamp::from_ticks(0),
            t_post2: Timestamp::from_ticks(1),
        }
        .write_line(&mut out)
        .unwrap();
        CausalScore(0.5).write_line(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 7 1 8\n0 0 1 1 0 1\n0.5\n"
        );
    }

    #[test]
    fn test_flush_cycles_keep_every_record() {
        // Ten records through a four-slot buffer: two full flushes while
        // pushing, a final partial flush of two.
        let mut out = Vec::new();
        {
            let mut writer = EdgeWriter::with_capacity(4, &mut out);
            for t in 0..10 {
                writer.push(edge(t)).unwrap();
            }
            assert_eq!(writer.pending(), 2);
            writer.finalize().unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        // No duplicates, original order
        for (t, line) in lines.iter().enumerate() {
            assert_eq!(*line, format!("0 {} 1 {}", t, t + 1));
        }
    }

    #[test]
    fn test_flush_on_empty_buffer_is_a_no_op() {
        let mut out = Vec::new();
        let mut writer: EdgeWriter<FirstOrderEdge, _> = EdgeWriter::new(&mut out);
        writer.flush().unwrap();
        writer.finalize().unwrap();
        assert!(out.is_empty());
    }
}
