//! Graph model: vertices, edges, and the plain `Graph` container.
//!
//! The container is permissive: ids need not be unique and edges
//! may name vertices that do not exist. Lookups take the first match and the
//! layout pipeline drops edges it cannot resolve.

use petgraph::graph::DiGraph;

// ─── Vertex ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: i64,
    /// Display label. Carried through, never consulted by the renderer.
    pub label: String,
}

impl Vertex {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// A vertex labelled with its own id.
    pub fn bare(id: i64) -> Self {
        Self::new(id, id.to_string())
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

/// Directed edge between two vertex ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from_id: i64,
    pub to_id: i64,
}

impl Edge {
    pub fn new(from_id: i64, to_id: i64) -> Self {
        Self { from_id, to_id }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from_id == self.to_id
    }
}

// ─── Graph ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// First vertex carrying `id`, if any.
    pub fn vertex(&self, id: i64) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// Build a graph from a petgraph `DiGraph`.
    ///
    /// Node indices become vertex ids (in index order) and `label` renders
    /// each node weight into a vertex label. Every petgraph edge is kept.
    pub fn from_digraph<N, E>(digraph: &DiGraph<N, E>, label: impl Fn(&N) -> String) -> Self {
        let vertices = digraph
            .node_indices()
            .map(|idx| Vertex::new(idx.index() as i64, label(&digraph[idx])))
            .collect();
        let edges = digraph
            .raw_edges()
            .iter()
            .map(|e| Edge::new(e.source().index() as i64, e.target().index() as i64))
            .collect();
        Self { vertices, edges }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_graph.rs"]
mod tests;
