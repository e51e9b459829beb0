//! Parser trait and the default text-format entry point.

pub mod edgelist;

pub use edgelist::EdgeListParser;

use crate::graph::Graph;

/// Trait for graph source parsers.
pub trait Parser {
    /// Parse the input source string into a Graph.
    fn parse(&self, src: &str) -> Result<Graph, String>;
}

/// Parse the edge-list text format into a Graph.
pub fn parse(src: &str) -> Result<Graph, String> {
    EdgeListParser::new()?.parse(src)
}
