//! Drawing surface abstraction and the recording implementation.

use crate::font::FontWeight;

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Pixel size and weight of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }
}

/// The operations the card compositor needs from a 2D surface.
///
/// Text is positioned by its alphabetic baseline.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Fill the whole surface with `color`, discarding previous content.
    fn clear(&mut self, color: Color);
    /// Stroke the outline of `rect`, centred on its edges.
    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    StrokeRect {
        rect: Rect,
        line_width: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: Font,
        color: Color,
    },
}

/// Canvas that keeps a display list instead of pixels.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Every text run, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text runs anchored at `x` whose baseline lies within `y_range`.
    pub fn texts_in_column(&self, x: f32, y_range: std::ops::Range<f32>) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, x: tx, y, .. }
                    if (*tx - x).abs() < f32::EPSILON && y_range.contains(y) =>
                {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(color));
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            line_width,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            font,
            color,
        });
    }
}

/// Surfaces whose pixels can be exported as a PNG file.
pub trait ExportPng {
    fn encode_png(&self) -> crate::error::Result<Vec<u8>>;
}
