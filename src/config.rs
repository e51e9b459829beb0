//! Configuration for the rendering pipeline.

use crate::renderers::scene::BOX_SCALE;

/// Output serialization choice for `render_dsl()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Standalone SVG document.
    #[default]
    Svg,
    /// Drawable list as JSON.
    Json,
}

impl OutputFormat {
    /// Parse a format name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown format '{other}'; use svg or json")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output units per layout unit. 1.0 fills a 2×2 square.
    pub scale: f64,
    /// Decimal places kept in SVG coordinates.
    pub precision: usize,
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 100.0,
            precision: 2,
            format: OutputFormat::Svg,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject a scale that would produce a degenerate or non-finite drawing.
    ///
    /// The viewport extent is the largest coordinate derived from the scale,
    /// so it must stay finite too.
    pub fn validate(&self) -> Result<(), String> {
        let extent = 2.0 * BOX_SCALE * self.scale;
        if !self.scale.is_finite() || self.scale <= 0.0 || !extent.is_finite() {
            return Err(format!(
                "Invalid scale {}; must be a positive finite number",
                self.scale
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
