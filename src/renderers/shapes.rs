//! Shape primitives with scale / translate / draw.
//!
//! Scaling is about the origin. Stroke widths are output units and are left
//! alone by both transforms.

use super::color::Color;
use super::drawable::Drawable;
use crate::geometry::{Segment, Vector};

// ─── Shape trait ─────────────────────────────────────────────────────────────

/// A geometric primitive that can be placed and then drawn.
pub trait Shape: Sized {
    /// Scale about the origin by `factor`.
    fn scale(&self, factor: f64) -> Self;

    /// Move by `offset`.
    fn translate(&self, offset: Vector) -> Self;

    /// Convert to its final drawable form.
    fn draw(&self) -> Drawable;

    /// Scale, then translate, then draw.
    fn place(&self, factor: f64, offset: Vector) -> Drawable {
        self.scale(factor).translate(offset).draw()
    }
}

// ─── Circle ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vector,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
}

impl Circle {
    pub fn new(center: Vector, radius: f64, fill: Color, stroke: Color) -> Self {
        Self {
            center,
            radius,
            fill,
            stroke,
        }
    }
}

impl Shape for Circle {
    fn scale(&self, factor: f64) -> Self {
        Self {
            center: self.center * factor,
            radius: self.radius * factor,
            ..*self
        }
    }

    fn translate(&self, offset: Vector) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }

    fn draw(&self) -> Drawable {
        Drawable::Circle {
            cx: self.center.x,
            cy: self.center.y,
            r: self.radius,
            fill: self.fill,
            stroke: self.stroke,
        }
    }
}

// ─── Rectangle ───────────────────────────────────────────────────────────────

/// Axis-aligned rectangle described by its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub center: Vector,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Color,
}

impl Rectangle {
    pub fn new(center: Vector, width: f64, height: f64, fill: Color, stroke: Color) -> Self {
        Self {
            center,
            width,
            height,
            fill,
            stroke,
        }
    }
}

impl Shape for Rectangle {
    fn scale(&self, factor: f64) -> Self {
        Self {
            center: self.center * factor,
            width: self.width * factor,
            height: self.height * factor,
            ..*self
        }
    }

    fn translate(&self, offset: Vector) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }

    fn draw(&self) -> Drawable {
        Drawable::Rect {
            x: self.center.x - self.width / 2.,
            y: self.center.y - self.height / 2.,
            width: self.width,
            height: self.height,
            fill: self.fill,
            stroke: self.stroke,
        }
    }
}

// ─── Line ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub segment: Segment,
    pub width: f64,
    pub color: Color,
}

impl Line {
    pub fn new(segment: Segment, width: f64, color: Color) -> Self {
        Self {
            segment,
            width,
            color,
        }
    }
}

impl Shape for Line {
    fn scale(&self, factor: f64) -> Self {
        Self {
            segment: Segment::new(self.segment.start * factor, self.segment.end * factor),
            ..*self
        }
    }

    fn translate(&self, offset: Vector) -> Self {
        Self {
            segment: Segment::new(self.segment.start + offset, self.segment.end + offset),
            ..*self
        }
    }

    fn draw(&self) -> Drawable {
        Drawable::Line {
            x1: self.segment.start.x,
            y1: self.segment.start.y,
            x2: self.segment.end.x,
            y2: self.segment.end.y,
            stroke: self.color,
            stroke_width: self.width,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_shapes.rs"]
mod tests;
