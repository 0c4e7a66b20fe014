use crate::{
    store::Graph,
    types::{Distance, Edge},
};
use log::trace;
use std::{cmp::Ordering, collections::BinaryHeap};

/// A frontier entry, ordered so that `BinaryHeap` pops the closest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    distance: Distance,
    vid: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.vid.cmp(&self.vid))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(super) fn dijkstra<G: Graph>(
    graph: &G,
    source: usize,
    target: Option<usize>,
) -> Vec<Option<Distance>> {
    let mut dist = vec![None; graph.num_vertices()];
    let mut heap = BinaryHeap::new();
    dist[source] = Some(0);
    heap.push(HeapEntry {
        distance: 0,
        vid: source,
    });
    while let Some(HeapEntry { distance, vid: u }) = heap.pop() {
        // No decrease-key: superseded entries stay queued until popped here.
        if dist[u].map_or(false, |best| distance > best) {
            trace!("skip stale ({}, {})", u, distance);
            continue;
        }
        if Some(u) == target {
            break;
        }
        for Edge { to, weight } in graph.incident(u) {
            let v = to as usize;
            let candidate = distance.saturating_add(weight);
            if dist[v].map_or(true, |best| candidate < best) {
                dist[v] = Some(candidate);
                heap.push(HeapEntry {
                    distance: candidate,
                    vid: v,
                });
            }
        }
    }
    dist
}
