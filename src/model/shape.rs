//! Colors and simple vector drawings.

use serde::{Deserialize, Serialize};

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 0.5, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    /// Create a color from float components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Uniform grey of the given intensity.
    pub const fn gray(level: f32) -> Self {
        Self::rgb(level, level, level)
    }

    /// Hex notation (e.g., `#ff0000`).
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// An axis-aligned rectangle inside a drawing.
///
/// Coordinates are in points relative to the drawing's bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Fill color (no fill when unset)
    pub fill: Option<Color>,
    /// Stroke color (no outline when unset)
    pub stroke: Option<Color>,
    /// Outline width in points
    pub stroke_width: f32,
}

impl Rect {
    /// Create an unfilled, unstroked rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: None,
            stroke_width: 1.0,
        }
    }

    /// Set the fill color and return self.
    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set the outline and return self.
    pub fn stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }
}

/// A fixed-size canvas holding rectangles, standing in for an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Canvas width in points
    pub width: f32,
    /// Canvas height in points
    pub height: f32,
    /// Shapes in paint order
    pub rects: Vec<Rect>,
}

impl Drawing {
    /// Create an empty drawing.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            rects: Vec::new(),
        }
    }

    /// Add a rectangle and return self.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rects.push(rect);
        self
    }

    /// Number of shapes.
    pub fn shape_count(&self) -> usize {
        self.rects.len()
    }

    /// Short textual description used by text renderers.
    pub fn describe(&self) -> String {
        format!(
            "[Figure: {} x {}, {} shapes]",
            self.width,
            self.height,
            self.rects.len()
        )
    }
}
