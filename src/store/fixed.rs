use super::{check_vid, check_weight, NeighborIter};
use crate::{
    error::{Error, Result},
    types::{VId, Weight},
};
use itertools::izip;

/// Fixed-capacity neighbor and weight rows with an explicit degree per vertex.
///
/// ```text
/// row u: | neighbor 0 | ... | neighbor degree[u] - 1 | unused ... |
///        |<------------------- capacity ------------------------>|
/// ```
pub(super) struct FixedAdjacency {
    capacity: usize,
    degree: Vec<usize>,
    neighbors: Vec<VId>,
    weights: Vec<Weight>,
}

impl FixedAdjacency {
    pub(super) fn load<N, W>(
        num_vertices: usize,
        degree: &[usize],
        neighbors: &[N],
        weights: &[W],
    ) -> Result<Self>
    where
        N: AsRef<[VId]>,
        W: AsRef<[Weight]>,
    {
        check_rows("degree", degree.len(), num_vertices)?;
        check_rows("neighbors", neighbors.len(), num_vertices)?;
        check_rows("weights", weights.len(), num_vertices)?;
        for (u, &deg, ns, ws) in izip!(0.., degree, neighbors, weights) {
            let (ns, ws) = (ns.as_ref(), ws.as_ref());
            if deg > ns.len() || deg > ws.len() {
                return Err(Error::InvalidArgument(format!(
                    "degree {} of vertex {} exceeds its row length",
                    deg, u
                )));
            }
            for (&nid, &weight) in ns[..deg].iter().zip(&ws[..deg]) {
                check_vid(nid, num_vertices)?;
                check_weight(weight)?;
            }
        }
        let capacity = degree.iter().copied().max().unwrap_or(0);
        let mut adjacency = Self {
            capacity,
            degree: degree.to_vec(),
            neighbors: vec![0; num_vertices * capacity],
            weights: vec![0; num_vertices * capacity],
        };
        for (u, &deg, ns, ws) in izip!(0.., degree, neighbors, weights) {
            let row = u * capacity;
            adjacency.neighbors[row..row + deg].copy_from_slice(&ns.as_ref()[..deg]);
            adjacency.weights[row..row + deg].copy_from_slice(&ws.as_ref()[..deg]);
        }
        Ok(adjacency)
    }

    pub(super) fn incident(&self, u: usize) -> NeighborIter<'_> {
        let row = u * self.capacity;
        let end = row + self.degree[u];
        NeighborIter::Fixed(self.neighbors[row..end].iter().zip(&self.weights[row..end]))
    }

    pub(super) fn num_entries(&self) -> usize {
        self.degree.iter().sum()
    }
}

fn check_rows(name: &str, len: usize, num_vertices: usize) -> Result<()> {
    if len == num_vertices {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "{} has {} rows but the graph has {} vertices",
            name, len, num_vertices
        )))
    }
}
