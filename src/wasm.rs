//! WASM bindings for circle-graph.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::{OutputFormat, RenderConfig};

/// Render edge-list source to an SVG document with default settings.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_dsl(src, &RenderConfig::default()).map_err(|e| JsError::new(&e))
}

/// Render edge-list source with full control over options.
///
/// - `scale`: output units per layout unit
/// - `precision`: decimal places kept in SVG coordinates
/// - `format`: "svg", "json", or empty string for svg
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    src: &str,
    scale: f64,
    precision: usize,
    format: &str,
) -> Result<String, JsError> {
    let format = if format.is_empty() {
        OutputFormat::Svg
    } else {
        OutputFormat::from_name(format).map_err(|e| JsError::new(&e))?
    };
    let config = RenderConfig {
        scale,
        precision,
        format,
    };
    crate::render_dsl(src, &config).map_err(|e| JsError::new(&e))
}
