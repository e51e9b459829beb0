//! Drawable — final, positioned SVG primitives.

use serde::Serialize;

use super::color::Color;

/// A shape after scaling and translation, ready to be written out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Drawable {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Color,
        stroke: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Color,
        stroke_width: f64,
    },
    /// `x`/`y` is the top-left corner, as in SVG.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        stroke: Color,
    },
}

impl Drawable {
    /// The SVG element name this drawable serializes to.
    pub fn tag(&self) -> &'static str {
        match self {
            Drawable::Circle { .. } => "circle",
            Drawable::Line { .. } => "line",
            Drawable::Rect { .. } => "rect",
        }
    }

    /// Serialize to one self-closing SVG element, numbers rounded to
    /// `precision` decimals.
    pub fn to_svg(&self, precision: usize) -> String {
        let n = |v: f64| fmt_num(v, precision);
        let tag = self.tag();
        match self {
            Drawable::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
            } => format!(
                r#"<{tag} cx="{}" cy="{}" r="{}" fill="{fill}" stroke="{stroke}"/>"#,
                n(*cx),
                n(*cy),
                n(*r)
            ),
            Drawable::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => format!(
                r#"<{tag} x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{}"/>"#,
                n(*x1),
                n(*y1),
                n(*x2),
                n(*y2),
                n(*stroke_width)
            ),
            Drawable::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => format!(
                r#"<{tag} x="{}" y="{}" width="{}" height="{}" fill="{fill}" stroke="{stroke}"/>"#,
                n(*x),
                n(*y),
                n(*width),
                n(*height)
            ),
        }
    }
}

/// Fixed-point formatting with trailing zeros trimmed; `-0` prints as `0`.
pub(crate) fn fmt_num(v: f64, precision: usize) -> String {
    let mut s = format!("{v:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" { "0".to_string() } else { s }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_drawable.rs"]
mod tests;
