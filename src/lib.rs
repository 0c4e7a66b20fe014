//! Single-source shortest paths over weighted undirected graphs.

pub mod error;
pub mod load;
pub mod solver;
pub mod store;
pub mod types;
