use super::NeighborIter;
use crate::types::{Edge, VId, Weight};

/// Per-vertex edge lists in insertion order.
pub(super) struct DynamicAdjacency {
    edges: Vec<Vec<Edge>>,
    num_entries: usize,
}

impl DynamicAdjacency {
    pub(super) fn new(num_vertices: usize) -> Self {
        Self {
            edges: vec![Vec::new(); num_vertices],
            num_entries: 0,
        }
    }

    pub(super) fn insert(&mut self, u: usize, v: usize, weight: Weight) {
        self.edges[u].push(Edge::new(v as VId, weight));
        self.num_entries += 1;
        if u != v {
            self.edges[v].push(Edge::new(u as VId, weight));
            self.num_entries += 1;
        }
    }

    pub(super) fn incident(&self, u: usize) -> NeighborIter<'_> {
        NeighborIter::Dynamic(self.edges[u].iter())
    }

    pub(super) fn num_entries(&self) -> usize {
        self.num_entries
    }
}
