use super::Layout;
use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(
    fmt = "{} vertices, {} incident entries, {} layout",
    num_vertices,
    num_entries,
    layout
)]
pub struct GraphInfo {
    num_vertices: usize,
    num_entries: usize,
    layout: Layout,
}

impl GraphInfo {
    pub fn new(num_vertices: usize, num_entries: usize, layout: Layout) -> Self {
        Self {
            num_vertices,
            num_entries,
            layout,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_entries(&self) -> usize {
        self.num_entries
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }
}
