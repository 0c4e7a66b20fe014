//! Reading graph stores from files.

pub use sqlite::{from_sqlite, read_sqlite};
pub use text::{parse, read_file};

use derive_more::{Display, From};

mod sqlite;
mod text;

#[derive(Debug, Display, From)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Graph(crate::error::Error),
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "{}", _0)]
    #[from(ignore)]
    Parse(String),
    #[display(fmt = "{}", _0)]
    Sqlite(rusqlite::Error),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
