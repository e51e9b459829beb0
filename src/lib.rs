//! circle-graph — circular graph layout rendered as SVG shapes.
//!
//! Vertices are placed evenly on the unit circle, edges become straight
//! lines, and everything is scaled into a fixed, framed 2×2 box.
//!
//! Core entry point: [`render`] turns `(scale, graph)` into an ordered list of
//! [`Drawable`]s. [`render_dsl`] wraps parsing and serialization around it.

pub mod config;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod parsers;
pub mod renderers;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{OutputFormat, RenderConfig};
pub use geometry::{Segment, Vector};
pub use graph::{Edge, Graph, Vertex};
pub use renderers::Drawable;
pub use renderers::scene::render;

use crate::parsers::parse;
use crate::renderers::renderer_for;

/// Parse the edge-list text format and render it with `config`.
pub fn render_dsl(src: &str, config: &RenderConfig) -> Result<String, String> {
    config.validate()?;
    let graph = parse(src)?;
    log::debug!(
        "parsed {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    renderer_for(config).render(&graph)
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
