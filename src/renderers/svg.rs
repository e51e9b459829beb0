//! SVG renderer — wraps the scene's drawables in a standalone SVG document.
//!
//! The `viewBox` exactly covers the bounding box: the frame spans
//! `[-0.2s, 2.2s]` on both axes for scale `s`.

use super::Renderer;
use super::drawable::{Drawable, fmt_num};
use super::scene::{self, BOX_SCALE};
use crate::graph::Graph;

// ── Constants ────────────────────────────────────────────────────────────────

const SVG_NS: &str = "http://www.w3.org/2000/svg";

// ── Helpers ──────────────────────────────────────────────────────────────────

/// `(min, extent)` of the viewport along either axis.
fn viewport(scale: f64) -> (f64, f64) {
    let half = BOX_SCALE * scale;
    (scale - half, 2.0 * half)
}

/// Wrap already-rendered drawables in an `<svg>` element sized for `scale`.
pub fn document(drawables: &[Drawable], scale: f64, precision: usize) -> String {
    let (min, extent) = viewport(scale);
    let min = fmt_num(min, precision);
    let extent = fmt_num(extent, precision);

    let mut parts = vec![format!(
        r#"<svg xmlns="{SVG_NS}" width="{extent}" height="{extent}" viewBox="{min} {min} {extent} {extent}">"#
    )];
    parts.extend(drawables.iter().map(|d| d.to_svg(precision)));
    parts.push("</svg>".to_string());
    parts.join("\n")
}

// ── Renderer ─────────────────────────────────────────────────────────────────

/// Renders a graph to a standalone SVG document.
pub struct SvgRenderer {
    pub scale: f64,
    pub precision: usize,
}

impl SvgRenderer {
    pub fn new(scale: f64, precision: usize) -> Self {
        Self { scale, precision }
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, graph: &Graph) -> Result<String, String> {
        let drawables = scene::render(self.scale, graph);
        Ok(document(&drawables, self.scale, self.precision))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
