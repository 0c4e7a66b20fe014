//! Error management.

use crate::{store::Layout, types::VId};
use derive_more::Display;

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    #[display(fmt = "invalid argument: {}", _0)]
    InvalidArgument(String),
    #[display(fmt = "vertex {} is out of range [0, {})", vid, num_vertices)]
    OutOfRange { vid: VId, num_vertices: usize },
    #[display(fmt = "graph store already populated with the {} layout", _0)]
    Reinitialization(Layout),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
