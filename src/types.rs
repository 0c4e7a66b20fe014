//! Various types related to shortest paths.

/// The vertex id type.
pub type VId = i64;

/// The edge weight type.
pub type Weight = i64;

/// The path length type.
pub type Distance = i64;

/// The distance reported when no path exists.
pub const UNREACHABLE: Distance = -1;

/// An incident edge as seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: VId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(to: VId, weight: Weight) -> Self {
        Self { to, weight }
    }
}
