//! The graph store.

pub use info::GraphInfo;

use self::{dynamic::DynamicAdjacency, fixed::FixedAdjacency};
use crate::{
    error::{Error, Result},
    types::{Edge, VId, Weight},
};
use derive_more::Display;
use log::{debug, info};
use std::convert::TryFrom;

mod dynamic;
mod fixed;
mod info;

/// The physical adjacency layout of a store.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Neither `add_edge` nor `load_bulk` has been called yet.
    #[display(fmt = "no")]
    Unpopulated,
    /// Per-vertex growable edge lists filled by `add_edge`.
    #[display(fmt = "dynamic")]
    Dynamic,
    /// Fixed-capacity neighbor and weight rows filled once by `load_bulk`.
    #[display(fmt = "fixed")]
    Fixed,
}

/// Read-only access to the incident edges of each vertex.
///
/// Implementors must only yield edges whose `to` lies in
/// `[0, num_vertices())`; the solver indexes its working arrays with it.
pub trait Graph {
    fn num_vertices(&self) -> usize;

    /// Incident edges of `u`, which must be below `num_vertices()`.
    ///
    /// May panic if `u` is out of range; use `neighbors` for unchecked input.
    fn incident(&self, u: usize) -> NeighborIter<'_>;

    fn neighbors(&self, vid: VId) -> Result<NeighborIter<'_>> {
        Ok(self.incident(check_vid(vid, self.num_vertices())?))
    }
}

/// An iterator over the incident edges of one vertex, whatever the layout.
pub enum NeighborIter<'a> {
    Empty,
    Dynamic(std::slice::Iter<'a, Edge>),
    Fixed(std::iter::Zip<std::slice::Iter<'a, VId>, std::slice::Iter<'a, Weight>>),
}

impl<'a> Iterator for NeighborIter<'a> {
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            NeighborIter::Empty => None,
            NeighborIter::Dynamic(iter) => iter.next().copied(),
            NeighborIter::Fixed(iter) => iter.next().map(|(&to, &weight)| Edge { to, weight }),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for NeighborIter<'a> {
    fn len(&self) -> usize {
        match self {
            NeighborIter::Empty => 0,
            NeighborIter::Dynamic(iter) => iter.len(),
            NeighborIter::Fixed(iter) => iter.len(),
        }
    }
}

enum Adjacency {
    Unpopulated,
    Dynamic(DynamicAdjacency),
    Fixed(FixedAdjacency),
}

/// A weighted undirected graph over the vertices `[0, n)`.
///
/// The store starts without a layout. The first `add_edge` commits it to the
/// dynamic layout and `load_bulk` commits it to the fixed layout; the two are
/// never mixed on one instance. Every failing call leaves the store as it was.
pub struct GraphStore {
    num_vertices: usize,
    adjacency: Adjacency,
}

impl GraphStore {
    /// Creates a store of `n` isolated vertices.
    pub fn create(n: i64) -> Result<Self> {
        let num_vertices = usize::try_from(n)
            .map_err(|_| Error::InvalidArgument(format!("invalid vertex count {}", n)))?;
        debug!("created graph store with {} vertices", num_vertices);
        Ok(Self {
            num_vertices,
            adjacency: Adjacency::Unpopulated,
        })
    }

    /// Creates a store of `n` vertices and inserts `edges` one by one.
    pub fn from_edges<E>(n: i64, edges: E) -> Result<Self>
    where
        E: IntoIterator<Item = (VId, VId, Weight)>,
    {
        let mut store = Self::create(n)?;
        for (u, v, weight) in edges {
            store.add_edge(u, v, weight)?;
        }
        info!("loaded {}", store.info());
        Ok(store)
    }

    /// Inserts the undirected edge `(u, v)` with the given weight.
    ///
    /// A self-loop is recorded as a single incident entry of `u`.
    pub fn add_edge(&mut self, u: VId, v: VId, weight: Weight) -> Result<()> {
        let (src, dst) = (
            check_vid(u, self.num_vertices)?,
            check_vid(v, self.num_vertices)?,
        );
        check_weight(weight)?;
        self.dynamic_mut()?.insert(src, dst, weight);
        debug!("add_edge {} {} {}", u, v, weight);
        Ok(())
    }

    /// Replaces the (empty) content with fixed rows.
    ///
    /// Row `i` of `neighbors` and `weights` holds the incident edges of vertex
    /// `i`; only the first `degree[i]` entries are read.
    pub fn load_bulk<N, W>(
        &mut self,
        degree: &[usize],
        neighbors: &[N],
        weights: &[W],
    ) -> Result<()>
    where
        N: AsRef<[VId]>,
        W: AsRef<[Weight]>,
    {
        match self.layout() {
            Layout::Unpopulated => {}
            layout => return Err(Error::Reinitialization(layout)),
        }
        let adjacency = FixedAdjacency::load(self.num_vertices, degree, neighbors, weights)?;
        self.adjacency = Adjacency::Fixed(adjacency);
        info!("loaded {}", self.info());
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        match self.adjacency {
            Adjacency::Unpopulated => Layout::Unpopulated,
            Adjacency::Dynamic(_) => Layout::Dynamic,
            Adjacency::Fixed(_) => Layout::Fixed,
        }
    }

    /// The number of stored incident entries over all vertices.
    pub fn num_entries(&self) -> usize {
        match &self.adjacency {
            Adjacency::Unpopulated => 0,
            Adjacency::Dynamic(adjacency) => adjacency.num_entries(),
            Adjacency::Fixed(adjacency) => adjacency.num_entries(),
        }
    }

    pub fn degree(&self, vid: VId) -> Result<usize> {
        Ok(self.neighbors(vid)?.len())
    }

    pub fn info(&self) -> GraphInfo {
        GraphInfo::new(self.num_vertices, self.num_entries(), self.layout())
    }

    fn dynamic_mut(&mut self) -> Result<&mut DynamicAdjacency> {
        if let Adjacency::Unpopulated = self.adjacency {
            self.adjacency = Adjacency::Dynamic(DynamicAdjacency::new(self.num_vertices));
        }
        match &mut self.adjacency {
            Adjacency::Dynamic(adjacency) => Ok(adjacency),
            Adjacency::Fixed(_) => Err(Error::Reinitialization(Layout::Fixed)),
            Adjacency::Unpopulated => unreachable!(),
        }
    }
}

impl Graph for GraphStore {
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn incident(&self, u: usize) -> NeighborIter<'_> {
        match &self.adjacency {
            Adjacency::Unpopulated => NeighborIter::Empty,
            Adjacency::Dynamic(adjacency) => adjacency.incident(u),
            Adjacency::Fixed(adjacency) => adjacency.incident(u),
        }
    }
}

pub(crate) fn check_vid(vid: VId, num_vertices: usize) -> Result<usize> {
    usize::try_from(vid)
        .ok()
        .filter(|&u| u < num_vertices)
        .ok_or(Error::OutOfRange { vid, num_vertices })
}

pub(crate) fn check_weight(weight: Weight) -> Result<Weight> {
    if weight < 0 {
        Err(Error::InvalidArgument(format!("negative weight {}", weight)))
    } else {
        Ok(weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        let store = GraphStore::create(3).unwrap();
        assert_eq!(store.num_vertices(), 3);
        assert_eq!(store.layout(), Layout::Unpopulated);
        assert_eq!(store.neighbors(2).unwrap().count(), 0);
        assert!(matches!(
            GraphStore::create(-1),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(GraphStore::create(0).unwrap().num_vertices(), 0);
    }

    #[test]
    fn test_add_edge() {
        let mut store = GraphStore::create(3).unwrap();
        store.add_edge(0, 1, 5).unwrap();
        store.add_edge(0, 1, 2).unwrap();
        store.add_edge(2, 0, 7).unwrap();
        assert_eq!(store.layout(), Layout::Dynamic);
        assert_eq!(
            store.neighbors(0).unwrap().collect::<Vec<_>>(),
            vec![Edge::new(1, 5), Edge::new(1, 2), Edge::new(2, 7)]
        );
        assert_eq!(
            store.neighbors(1).unwrap().collect::<Vec<_>>(),
            vec![Edge::new(0, 5), Edge::new(0, 2)]
        );
        assert_eq!(store.degree(2), Ok(1));
        assert_eq!(store.num_entries(), 6);
    }

    #[test]
    fn test_add_self_loop() {
        let mut store = GraphStore::create(2).unwrap();
        store.add_edge(1, 1, 4).unwrap();
        assert_eq!(
            store.neighbors(1).unwrap().collect::<Vec<_>>(),
            vec![Edge::new(1, 4)]
        );
    }

    #[test]
    fn test_add_edge_invalid() {
        let mut store = GraphStore::create(2).unwrap();
        assert_eq!(
            store.add_edge(0, 2, 1),
            Err(Error::OutOfRange {
                vid: 2,
                num_vertices: 2
            })
        );
        assert_eq!(
            store.add_edge(-1, 0, 1),
            Err(Error::OutOfRange {
                vid: -1,
                num_vertices: 2
            })
        );
        assert!(matches!(
            store.add_edge(0, 1, -3),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(store.layout(), Layout::Unpopulated);
        assert_eq!(store.num_entries(), 0);
    }

    #[test]
    fn test_load_bulk() {
        let mut store = GraphStore::create(3).unwrap();
        store
            .load_bulk(
                &[2, 1, 1],
                &[[1, 2, 9], [0, 9, 9], [0, 9, 9]],
                &[[5, 7, 9], [5, 9, 9], [7, 9, 9]],
            )
            .unwrap();
        assert_eq!(store.layout(), Layout::Fixed);
        assert_eq!(
            store.neighbors(0).unwrap().collect::<Vec<_>>(),
            vec![Edge::new(1, 5), Edge::new(2, 7)]
        );
        assert_eq!(store.degree(1), Ok(1));
        assert_eq!(store.num_entries(), 4);
        assert_eq!(
            store.neighbors(3).err(),
            Some(Error::OutOfRange {
                vid: 3,
                num_vertices: 3
            })
        );
    }

    #[test]
    fn test_reinitialization() {
        let mut bulk = GraphStore::create(2).unwrap();
        let (degree, neighbors, weights) = ([1, 1], [vec![1], vec![0]], [vec![3], vec![3]]);
        bulk.load_bulk(&degree, &neighbors, &weights).unwrap();
        assert_eq!(
            bulk.load_bulk(&degree, &neighbors, &weights),
            Err(Error::Reinitialization(Layout::Fixed))
        );
        assert_eq!(
            bulk.add_edge(0, 1, 1),
            Err(Error::Reinitialization(Layout::Fixed))
        );
        assert_eq!(bulk.num_entries(), 2);

        let mut dynamic = GraphStore::create(2).unwrap();
        dynamic.add_edge(0, 1, 1).unwrap();
        assert_eq!(
            dynamic.load_bulk(&degree, &neighbors, &weights),
            Err(Error::Reinitialization(Layout::Dynamic))
        );
        assert_eq!(dynamic.neighbors(0).unwrap().len(), 1);
    }

    #[test]
    fn test_failed_load_bulk_keeps_store_empty() {
        let mut store = GraphStore::create(3).unwrap();
        assert_eq!(
            store.load_bulk(&[1, 1, 0], &[vec![1], vec![3], vec![]], &[vec![2], vec![2], vec![]]),
            Err(Error::OutOfRange {
                vid: 3,
                num_vertices: 3
            })
        );
        assert!(matches!(
            store.load_bulk(&[1, 1, 0], &[vec![1], vec![0], vec![]], &[vec![2], vec![-2], vec![]]),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(store.layout(), Layout::Unpopulated);
        assert_eq!(store.num_entries(), 0);
        assert_eq!(store.neighbors(0).unwrap().len(), 0);

        store
            .load_bulk(&[1, 1, 0], &[vec![1], vec![0], vec![]], &[vec![2], vec![2], vec![]])
            .unwrap();
        assert_eq!(store.layout(), Layout::Fixed);
        assert_eq!(store.num_entries(), 2);

        let mut dynamic = GraphStore::create(3).unwrap();
        assert!(dynamic
            .load_bulk(&[1, 0, 0], &[vec![7], vec![], vec![]], &[vec![1], vec![], vec![]])
            .is_err());
        dynamic.add_edge(0, 2, 4).unwrap();
        assert_eq!(dynamic.layout(), Layout::Dynamic);
        assert_eq!(
            dynamic.neighbors(2).unwrap().collect::<Vec<_>>(),
            vec![Edge::new(0, 4)]
        );
    }
}
