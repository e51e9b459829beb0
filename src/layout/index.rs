//! Id → point association and edge resolution.

use crate::geometry::{Segment, Vector};
use crate::graph::Edge;

/// Vertex ids paired with their layout points, in vertex order.
///
/// Duplicate ids are kept; `get` returns the first one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointIndex {
    entries: Vec<(i64, Vector)>,
}

impl PointIndex {
    /// Zip `ids` with `points`, truncating to the shorter of the two.
    pub fn new(ids: impl IntoIterator<Item = i64>, points: impl IntoIterator<Item = Vector>) -> Self {
        Self {
            entries: ids.into_iter().zip(points).collect(),
        }
    }

    pub fn get(&self, id: i64) -> Option<Vector> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|&(_, point)| point)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve an edge to a directed segment, or `None` if either end is unknown.
pub fn resolve_edge(edge: &Edge, index: &PointIndex) -> Option<Segment> {
    let start = index.get(edge.from_id)?;
    let end = index.get(edge.to_id)?;
    Some(Segment::new(start, end))
}

/// Resolve every edge, silently omitting the ones that name unknown ids.
pub fn resolve_edges(edges: &[Edge], index: &PointIndex) -> Vec<Segment> {
    edges
        .iter()
        .filter_map(|edge| resolve_edge(edge, index))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_index.rs"]
mod tests;
