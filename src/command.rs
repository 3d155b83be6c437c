//! Draw commands: the value objects the scene produces and the renderer
//! consumes.
//!
//! Coordinates are world units (the heart curves' own space). Line widths and
//! font sizes are typographic points, converted to pixels by the renderer.

use image::Rgb;

/// A point in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Color, opacity and stroke width shared by every shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Rgb<u8>,
    pub alpha: f64,
    /// Stroke width in points; ignored for fills and markers
    pub line_width: f64,
}

impl Style {
    pub fn new(color: Rgb<u8>, alpha: f64, line_width: f64) -> Self {
        Self {
            color,
            alpha,
            line_width,
        }
    }

    /// Style for filled shapes, which have no stroke
    pub fn fill(color: Rgb<u8>, alpha: f64) -> Self {
        Self::new(color, alpha, 0.0)
    }
}

/// One layer of a text path effect, applied in order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextEffect {
    /// Stroke the glyph outlines
    Stroke {
        width: f64,
        color: Rgb<u8>,
        alpha: f64,
    },
    /// Fill the glyphs with the command's own style
    Fill,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Open stroked path through the points
    Polyline(Vec<Point>),
    /// Closed filled polygon
    Polygon(Vec<Point>),
    /// Filled circle; `area` is in points², as for scatter markers
    Marker { center: Point, area: f64 },
    /// Text centered on `anchor`
    Text {
        content: String,
        anchor: Point,
        font_size: f64,
        effects: Vec<TextEffect>,
    },
}

/// An immutable drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub z_order: i32,
    pub shape: Shape,
    pub style: Style,
}

impl DrawCommand {
    pub fn polyline(points: Vec<Point>, style: Style, z_order: i32) -> Self {
        Self {
            z_order,
            shape: Shape::Polyline(points),
            style,
        }
    }

    pub fn polygon(points: Vec<Point>, style: Style, z_order: i32) -> Self {
        Self {
            z_order,
            shape: Shape::Polygon(points),
            style,
        }
    }

    pub fn marker(center: Point, area: f64, style: Style, z_order: i32) -> Self {
        Self {
            z_order,
            shape: Shape::Marker { center, area },
            style,
        }
    }
}
