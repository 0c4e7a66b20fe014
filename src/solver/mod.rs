//! The shortest-path solver.

use crate::{
    error::{Error, Result},
    store::{check_vid, Graph},
    types::{Distance, VId, UNREACHABLE},
};
use derive_more::Display;
use log::debug;
use rayon::prelude::*;
use std::str::FromStr;

mod heap;
mod linear;

/// How a query settles vertices.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Binary heap with lazily skipped stale entries, O((E + V) log V).
    #[display(fmt = "heap")]
    Heap,
    /// Linear scan for the closest unsettled vertex, O(V^2).
    #[display(fmt = "linear")]
    Linear,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Heap
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "heap" => Ok(Strategy::Heap),
            "linear" => Ok(Strategy::Linear),
            _ => Err(Error::InvalidArgument(format!("unknown strategy {:?}", s))),
        }
    }
}

/// Answers distance queries against a populated graph.
///
/// Each query allocates its own distance array and frontier, so a solver
/// holds nothing between queries and may be shared across threads.
pub struct Solver<'a, G> {
    graph: &'a G,
    strategy: Strategy,
}

impl<'a, G: Graph> Solver<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self::with_strategy(graph, Strategy::default())
    }

    pub fn with_strategy(graph: &'a G, strategy: Strategy) -> Self {
        Self { graph, strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the length of a shortest path from `from` to `to`, or
    /// [`UNREACHABLE`] if there is none.
    pub fn shortest_path(&self, from: VId, to: VId) -> Result<Distance> {
        let (source, target) = self.check_pair(from, to)?;
        let distance = self.query(source, target);
        debug!("shortest_path {} {} = {}", from, to, distance);
        Ok(distance)
    }

    /// Returns the distance from `from` to every vertex.
    pub fn distances_from(&self, from: VId) -> Result<Vec<Distance>> {
        let source = check_vid(from, self.graph.num_vertices())?;
        let distances: Vec<_> = self
            .settle(source, None)
            .into_iter()
            .map(finalize)
            .collect();
        debug!(
            "distances_from {} reached {} vertices",
            from,
            distances.iter().filter(|&&d| d != UNREACHABLE).count()
        );
        Ok(distances)
    }

    fn check_pair(&self, from: VId, to: VId) -> Result<(usize, usize)> {
        let num_vertices = self.graph.num_vertices();
        Ok((check_vid(from, num_vertices)?, check_vid(to, num_vertices)?))
    }

    fn query(&self, source: usize, target: usize) -> Distance {
        finalize(self.settle(source, Some(target))[target])
    }

    /// Only the distance of `target`, when given, is final on return.
    /// Unreached vertices are `None`; a path longer than `Distance::MAX`
    /// is reported as `Distance::MAX`.
    fn settle(&self, source: usize, target: Option<usize>) -> Vec<Option<Distance>> {
        match self.strategy {
            Strategy::Heap => heap::dijkstra(self.graph, source, target),
            Strategy::Linear => linear::dijkstra(self.graph, source, target),
        }
    }
}

impl<'a, G: Graph + Sync> Solver<'a, G> {
    /// Answers independent queries in parallel, in the order given.
    ///
    /// Fails without running any query if one of the pairs is out of range.
    pub fn shortest_paths(&self, queries: &[(VId, VId)]) -> Result<Vec<Distance>> {
        let pairs = queries
            .iter()
            .map(|&(from, to)| self.check_pair(from, to))
            .collect::<Result<Vec<_>>>()?;
        let distances: Vec<_> = pairs
            .par_iter()
            .zip(queries)
            .map(|(&(source, target), &(from, to))| {
                let distance = self.query(source, target);
                debug!("shortest_path {} {} = {}", from, to, distance);
                distance
            })
            .collect();
        debug!("answered {} queries", distances.len());
        Ok(distances)
    }
}

fn finalize(distance: Option<Distance>) -> Distance {
    distance.unwrap_or(UNREACHABLE)
}
