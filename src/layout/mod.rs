//! Layout engine — circular placement plus edge resolution.
//!
//! `full_layout()` runs both steps and hands the result to the renderers.

pub mod circular;
pub mod index;

pub use circular::{circular_layout, layout};
pub use index::{PointIndex, resolve_edge, resolve_edges};

use crate::geometry::{Segment, Vector};
use crate::graph::Graph;

/// Points and resolved segments for one graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    /// One point per vertex, in vertex order.
    pub points: Vec<Vector>,
    /// One segment per resolvable edge, in edge order.
    pub segments: Vec<Segment>,
}

/// Lay out `graph` on the unit circle and resolve its edges.
pub fn full_layout(graph: &Graph) -> LayoutResult {
    let points = layout(graph);
    let index = PointIndex::new(graph.vertices.iter().map(|v| v.id), points.iter().copied());
    let segments = resolve_edges(&graph.edges, &index);

    let dropped = graph.edge_count() - segments.len();
    let self_loops = graph.edges.iter().filter(|e| e.is_self_loop()).count();
    log::debug!(
        "circular layout: {} vertices, {} edges resolved, {} dropped, {} self-loops",
        points.len(),
        segments.len(),
        dropped,
        self_loops
    );

    LayoutResult { points, segments }
}
