//! RGBA color value shared by every shape.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Color::rgba(0, 0, 0, 1.0);
    /// Vertex marker fill and stroke.
    pub const MARKER_BLUE: Self = Color::rgba(0, 50, 255, 0.8);
    /// Bounding box fill; lighter than the markers.
    pub const BOX_BLUE: Self = Color::rgba(100, 149, 237, 0.2);

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// CSS `rgba()` notation, as used in SVG paint attributes.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_color.rs"]
mod tests;
