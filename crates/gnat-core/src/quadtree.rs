//! Point-region quadtree over spike pairs
//!
//! Indexes the spike pairs of one neuron by their (t1, t2) coordinate so
//! the second-order driver can sweep a square temporal window around each
//! postsynaptic pair. Nodes live in a pool and reference their children
//! and resident pairs by index; no pointers, no per-node allocation.
//!
//! A node is either a leaf holding up to [`NODE_CAPACITY`] residents, or an
//! internal node with all four children present. The one exception is a
//! pair that sits exactly on a dividing line: strict containment means no
//! child can take it, so it stays on the internal node (which may then
//! exceed the capacity). Range traversal visits internal residents, so
//! such pairs remain queryable.

use smallvec::SmallVec;

use crate::{
    geometry::{BoundingBox, Quadrant},
    spike::SpikePair,
};

/// Maximum residents of a leaf before it subdivides
pub const NODE_CAPACITY: usize = 4;

const ROOT: u32 = 0;

#[derive(Debug, Clone)]
struct Node {
    bbox: BoundingBox,
    residents: SmallVec<[u32; NODE_CAPACITY]>,
    children: Option<[u32; 4]>,
}

impl Node {
    fn new(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            residents: SmallVec::new(),
            children: None,
        }
    }
}

/// Quadtree over the spike pairs of a single neuron
#[derive(Debug, Clone)]
pub struct PairTree {
    nodes: Vec<Node>,
    pairs: Vec<SpikePair>,
}

impl PairTree {
    /// Create an empty tree covering `bbox`
    pub fn new(bbox: BoundingBox) -> Self {
        Self {
            nodes: vec![Node::new(bbox)],
            pairs: Vec::new(),
        }
    }

    /// Number of pairs accepted into the tree
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no pair has been accepted
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of nodes in the pool
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a pair; returns whether it was accepted
    ///
    /// Only pairs strictly inside the top-level box are accepted.
    pub fn insert(&mut self, pair: SpikePair) -> bool {
        let point = pair.point();
        if !self.nodes[ROOT as usize].bbox.contains(point) {
            return false;
        }
        let idx = self.pairs.len() as u32;
        self.pairs.push(pair);
        self.place(ROOT, idx, point);
        true
    }

    fn place(&mut self, mut node: u32, pair_idx: u32, point: (f64, f64)) {
        loop {
            match self.nodes[node as usize].children {
                None => {
                    if self.nodes[node as usize].residents.len() < NODE_CAPACITY {
                        self.nodes[node as usize].residents.push(pair_idx);
                        return;
                    }
                    self.subdivide(node);
                }
                Some(children) => match self.child_containing(&children, point) {
                    Some(c) => node = c,
                    None => {
                        // Dividing-line pair: no child passes the strict
                        // containment test, so it stays on this node.
                        self.nodes[node as usize].residents.push(pair_idx);
                        return;
                    }
                },
            }
        }
    }

    fn child_containing(&self, children: &[u32; 4], point: (f64, f64)) -> Option<u32> {
        children
            .iter()
            .copied()
            .find(|&c| self.nodes[c as usize].bbox.contains(point))
    }

    /// Split a full leaf into four quadrant children and redistribute
    fn subdivide(&mut self, node: u32) {
        let bbox = self.nodes[node as usize].bbox;
        let first = self.nodes.len() as u32;
        for q in Quadrant::ALL {
            self.nodes.push(Node::new(bbox.quadrant(q)));
        }
        let children = [first, first + 1, first + 2, first + 3];
        self.nodes[node as usize].children = Some(children);

        let residents = core::mem::take(&mut self.nodes[node as usize].residents);
        for pair_idx in residents {
            let point = self.pairs[pair_idx as usize].point();
            match self.child_containing(&children, point) {
                Some(c) => self.nodes[c as usize].residents.push(pair_idx),
                None => self.nodes[node as usize].residents.push(pair_idx),
            }
        }
    }

    /// Apply `visitor` to every pair in a node whose box intersects `query`
    ///
    /// Residents are not individually tested against the query box; any
    /// pair in an intersecting node may be near enough to score, and the
    /// caller's γ threshold is the true filter.
    pub fn for_each_in_range<F>(&self, query: &BoundingBox, mut visitor: F)
    where
        F: FnMut(&SpikePair),
    {
        self.visit(ROOT, query, &mut visitor);
    }

    fn visit<F>(&self, node: u32, query: &BoundingBox, visitor: &mut F)
    where
        F: FnMut(&SpikePair),
    {
        let n = &self.nodes[node as usize];
        if !n.bbox.intersects(query) {
            return;
        }
        for &idx in &n.residents {
            visitor(&self.pairs[idx as usize]);
        }
        if let Some(children) = n.children {
            for c in children {
                self.visit(c, query, visitor);
            }
        }
    }

    /// Check the structural invariants; returns the number of residents
    ///
    /// Every resident's point must lie strictly inside its node's box and
    /// every child box inside its parent's. Intended for tests.
    #[doc(hidden)]
    pub fn check_invariants(&self) -> usize {
        let mut total = 0;
        for node in &self.nodes {
            for &idx in &node.residents {
                assert!(
                    node.bbox.contains(self.pairs[idx as usize].point()),
                    "resident outside its node box"
                );
                total += 1;
            }
            if let Some(children) = node.children {
                for c in children {
                    let child = &self.nodes[c as usize];
                    assert!(
                        (child.bbox.cx - node.bbox.cx).abs() + child.bbox.half <= node.bbox.half
                            && (child.bbox.cy - node.bbox.cy).abs() + child.bbox.half
                                <= node.bbox.half,
                        "child box escapes its parent"
                    );
                }
            }
        }
        total
    }
}
