//! Line-oriented edge-list parser.
//!
//! ```text
//! # comment
//! 1[Alpha]
//! 2
//! 1 --> 2
//! 2 -> 1
//! ```
//!
//! Vertex lines are `id` or `id[label]`; edge lines are `id --> id` or
//! `id -> id`. Edges never create vertices.

use regex::Regex;

use super::Parser;
use crate::graph::{Edge, Graph, Vertex};

// ─── Patterns ────────────────────────────────────────────────────────────────

const VERTEX_PATTERN: &str = r"^(-?\d+)\s*(?:\[([^\]]*)\])?$";
const EDGE_PATTERN: &str = r"^(-?\d+)\s*--?>\s*(-?\d+)$";
const COMMENT_PREFIX: &str = "#";

// ─── EdgeListParser ──────────────────────────────────────────────────────────

pub struct EdgeListParser {
    vertex_re: Regex,
    edge_re: Regex,
}

impl EdgeListParser {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            vertex_re: Regex::new(VERTEX_PATTERN).map_err(|e| e.to_string())?,
            edge_re: Regex::new(EDGE_PATTERN).map_err(|e| e.to_string())?,
        })
    }

    fn parse_line(&self, graph: &mut Graph, lineno: usize, line: &str) -> Result<(), String> {
        if let Some(caps) = self.edge_re.captures(line) {
            let from_id = parse_id(lineno, &caps[1])?;
            let to_id = parse_id(lineno, &caps[2])?;
            log::trace!("line {lineno}: edge {from_id} -> {to_id}");
            graph.add_edge(Edge::new(from_id, to_id));
            return Ok(());
        }
        if let Some(caps) = self.vertex_re.captures(line) {
            let id = parse_id(lineno, &caps[1])?;
            let vertex = match caps.get(2) {
                Some(label) => Vertex::new(id, label.as_str().trim()),
                None => Vertex::bare(id),
            };
            log::trace!("line {lineno}: vertex {id} [{}]", vertex.label);
            if graph.vertex(id).is_some() {
                log::debug!("line {lineno}: duplicate vertex id {id}; first definition wins");
            }
            graph.add_vertex(vertex);
            return Ok(());
        }
        Err(format!("line {lineno}: cannot parse '{line}'"))
    }
}

fn parse_id(lineno: usize, text: &str) -> Result<i64, String> {
    text.parse::<i64>()
        .map_err(|e| format!("line {lineno}: invalid vertex id '{text}': {e}"))
}

impl Parser for EdgeListParser {
    fn parse(&self, src: &str) -> Result<Graph, String> {
        let mut graph = Graph::new();
        for (i, raw) in src.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            self.parse_line(&mut graph, i + 1, line)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_edgelist.rs"]
mod tests;
