use super::Result;
use crate::{
    store::GraphStore,
    types::{VId, Weight},
};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Reads the graph stored in the SQLite3 database.
///
/// The database must have the following schema:
///
/// ```sql
/// CREATE TABLE vertices (vid INT);
/// CREATE TABLE edges (src INT, dst INT, weight INT);
/// ```
///
/// The vertex count is the number of rows in `vertices`; edges are inserted
/// in `rowid` order.
pub fn from_sqlite(conn: &Connection) -> Result<GraphStore> {
    let num_vertices: i64 =
        conn.query_row("SELECT COUNT(*) FROM vertices", [], |row| row.get(0))?;
    let mut edges_stmt = conn.prepare("SELECT src, dst, weight FROM edges ORDER BY rowid")?;
    let edges = edges_stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<rusqlite::Result<Vec<(VId, VId, Weight)>>>()?;
    Ok(GraphStore::from_edges(num_vertices, edges)?)
}

pub fn read_sqlite<P: AsRef<Path>>(path: P) -> Result<GraphStore> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    from_sqlite(&conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{load::Error, solver::Solver, store::Graph};

    fn create_conn(edges: &str) -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(&format!(
            "CREATE TABLE vertices (vid INT);
             CREATE TABLE edges (src INT, dst INT, weight INT);
             INSERT INTO vertices VALUES (0), (1), (2), (3);
             {}",
            edges
        ))
        .unwrap();
        conn
    }

    #[test]
    fn test_from_sqlite() {
        let conn = create_conn("INSERT INTO edges VALUES (0, 1, 4), (0, 2, 1), (2, 1, 1);");
        let store = from_sqlite(&conn).unwrap();
        assert_eq!(store.num_vertices(), 4);
        assert_eq!(store.num_entries(), 6);
        let solver = Solver::new(&store);
        assert_eq!(solver.shortest_path(0, 1), Ok(2));
        assert_eq!(solver.shortest_path(0, 3), Ok(-1));
    }

    #[test]
    fn test_from_sqlite_invalid() {
        let conn = create_conn("INSERT INTO edges VALUES (0, 4, 1);");
        assert!(matches!(from_sqlite(&conn), Err(Error::Graph(_))));
        let conn = Connection::open_in_memory().unwrap();
        assert!(matches!(from_sqlite(&conn), Err(Error::Sqlite(_))));
    }
}
