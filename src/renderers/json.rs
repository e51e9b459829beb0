//! JSON renderer — the scene's drawable list, for consumers that draw it
//! themselves.

use super::Renderer;
use super::scene;
use crate::graph::Graph;

pub struct JsonRenderer {
    pub scale: f64,
}

impl JsonRenderer {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, graph: &Graph) -> Result<String, String> {
        let drawables = scene::render(self.scale, graph);
        serde_json::to_string_pretty(&drawables).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_json.rs"]
mod tests;
