use super::{Error, Result};
use crate::{
    store::GraphStore,
    types::{VId, Weight},
};
use itertools::Itertools;
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use std::path::Path;

#[derive(Parser)]
#[grammar = "load/graph.pest"]
struct GraphParser;

impl From<pest::error::Error<Rule>> for Error {
    fn from(error: pest::error::Error<Rule>) -> Self {
        Error::Parse(error.to_string())
    }
}

/// Parses an edge list.
///
/// The first line holds the vertex count, every further line one undirected
/// edge `u v weight`. Blank lines and `#` comments are ignored.
///
/// ```text
/// # a path of three edges
/// 4
/// 0 1 1
/// 1 2 1
/// 2 3 1
/// ```
pub fn parse(input: &str) -> Result<GraphStore> {
    let mut num_vertices = None;
    let mut edges: Vec<(VId, VId, Weight)> = vec![];
    for pair in GraphParser::parse(Rule::graph, input)?.flat_map(|pair| pair.into_inner()) {
        match pair.as_rule() {
            Rule::num_vertices => {
                num_vertices = pair.into_inner().next().map(parse_int).transpose()?;
            }
            Rule::edge => {
                if let Some((u, v, weight)) = pair.into_inner().map(parse_int).collect_tuple() {
                    edges.push((u?, v?, weight?));
                }
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    let num_vertices =
        num_vertices.ok_or_else(|| Error::Parse(String::from("missing vertex count")))?;
    Ok(GraphStore::from_edges(num_vertices, edges)?)
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<GraphStore> {
    parse(&std::fs::read_to_string(path)?)
}

fn parse_int(pair: Pair<Rule>) -> Result<i64> {
    pair.as_str().parse().map_err(|_| {
        let (line, col) = pair.as_span().start_pos().line_col();
        Error::Parse(format!(
            "{}:{}: integer {} out of range",
            line,
            col,
            pair.as_str()
        ))
    })
}
