//! Renderer registry and Renderer trait.
//!
//! `scene` does the geometry; `svg` and `json` only decide how the resulting
//! drawables are written out.

pub mod color;
pub mod drawable;
pub mod json;
pub mod scene;
pub mod shapes;
pub mod svg;

pub use color::Color;
pub use drawable::Drawable;
pub use json::JsonRenderer;
pub use shapes::{Circle, Line, Rectangle, Shape};
pub use svg::SvgRenderer;

use crate::config::{OutputFormat, RenderConfig};
use crate::graph::Graph;

/// Trait for graph renderers.
pub trait Renderer {
    /// Render a graph to its serialized form.
    fn render(&self, graph: &Graph) -> Result<String, String>;
}

/// Pick the renderer for `config.format`.
pub fn renderer_for(config: &RenderConfig) -> Box<dyn Renderer> {
    match config.format {
        OutputFormat::Svg => Box::new(SvgRenderer::new(config.scale, config.precision)),
        OutputFormat::Json => Box::new(JsonRenderer::new(config.scale)),
    }
}
