//! Circular placement: N points evenly spaced on the unit circle.

use std::f64::consts::TAU;

use crate::geometry::Vector;
use crate::graph::Graph;

/// Place `n` points on the unit circle, starting at angle 0.
///
/// Point `k` is `(1, 0)` rotated by `k * 2π / n`. `n == 0` yields nothing.
pub fn circular_layout(n: usize) -> Vec<Vector> {
    if n == 0 {
        return Vec::new();
    }
    let step = TAU / n as f64;
    (0..n)
        .map(|k| Vector::UNIT_X.rotate(k as f64 * step))
        .collect()
}

/// One point per vertex, in vertex order.
pub fn layout(graph: &Graph) -> Vec<Vector> {
    circular_layout(graph.vertex_count())
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_circular.rs"]
mod tests;
