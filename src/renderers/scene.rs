//! Scene composition — turns a graph into an ordered list of drawables.
//!
//! Output order is fixed: edge lines, then vertex markers, then the bounding
//! box. With a scale of 1.0 the figure fills a 2×2 square anchored at the
//! origin; larger scales grow it proportionally.

use super::color::Color;
use super::drawable::Drawable;
use super::shapes::{Circle, Line, Rectangle, Shape};
use crate::geometry::Vector;
use crate::graph::Graph;
use crate::layout::{LayoutResult, full_layout};

// ── Constants ────────────────────────────────────────────────────────────────

/// Figure scale relative to the bounding box.
pub const K: f64 = 0.8;
/// Horizontal offset factor for markers and lines. Empirical: keeps the
/// markers visually centered inside the box. The box itself does not use it.
pub const KK: f64 = 0.92;
/// Bounding box scale.
pub const BOX_SCALE: f64 = 1.2;
/// Edge stroke width, in output units.
pub const EDGE_WIDTH: f64 = 2.5;
/// Marker radius for a graph of one vertex; divided by the vertex count.
pub const MARKER_RADIUS: f64 = 0.5;

// ── Shape construction ───────────────────────────────────────────────────────

/// One filled marker per layout point, radius `0.5 / n`.
pub fn vertex_markers(points: &[Vector]) -> Vec<Circle> {
    let radius = MARKER_RADIUS / points.len() as f64;
    points
        .iter()
        .map(|&p| Circle::new(p, radius, Color::MARKER_BLUE, Color::MARKER_BLUE))
        .collect()
}

pub fn edge_lines(layout: &LayoutResult) -> Vec<Line> {
    layout
        .segments
        .iter()
        .map(|&s| Line::new(s, EDGE_WIDTH, Color::BLACK))
        .collect()
}

/// The fixed 2×2 frame centered at the origin.
pub fn bounding_box() -> Rectangle {
    Rectangle::new(Vector::ORIGIN, 2., 2., Color::BOX_BLUE, Color::BLACK)
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Render `graph` at `scale` into `[lines…, markers…, box]`.
pub fn render(scale: f64, graph: &Graph) -> Vec<Drawable> {
    let layout = full_layout(graph);

    let figure_scale = K * scale;
    let figure_offset = Vector::new(KK * scale, scale);

    let mut out: Vec<Drawable> = Vec::with_capacity(layout.segments.len() + layout.points.len() + 1);
    out.extend(
        edge_lines(&layout)
            .iter()
            .map(|l| l.place(figure_scale, figure_offset)),
    );
    out.extend(
        vertex_markers(&layout.points)
            .iter()
            .map(|c| c.place(figure_scale, figure_offset)),
    );
    out.push(bounding_box().place(BOX_SCALE * scale, Vector::new(scale, scale)));

    log::debug!("rendered {} drawables at scale {}", out.len(), scale);
    out
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_scene.rs"]
mod tests;
