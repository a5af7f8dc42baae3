//! Pixel canvas backed by a tiny-skia pixmap.

use super::canvas::{Canvas, Color, ExportPng, Font, Rect};
use crate::error::{Result, WrappedError};
use crate::font::FontBook;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::{debug, warn};

/// Raster surface; text needs a [`FontBook`], shapes do not.
pub struct RasterCanvas {
    pixmap: Pixmap,
    fonts: Option<FontBook>,
    warned_no_fonts: bool,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, fonts: Option<FontBook>) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            WrappedError::Render(format!("Invalid canvas size {}x{}", width, height))
        })?;
        Ok(Self {
            pixmap,
            fonts,
            warned_no_fonts: false,
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl ExportPng for RasterCanvas {
    fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| WrappedError::Render(format!("PNG encoding failed: {}", e)))
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) {
        let Some(r) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) else {
            warn!(?rect, "Skipping degenerate rectangle");
            return;
        };
        let path = PathBuilder::from_rect(r);
        let stroke = Stroke {
            width: line_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color) {
        let Some(fonts) = &self.fonts else {
            if !self.warned_no_fonts {
                warn!("No fonts available, card text is not rendered");
                self.warned_no_fonts = true;
            }
            return;
        };

        match fonts.outline_text(text, x, y, font.size, font.weight) {
            Ok(Some(path)) => {
                self.pixmap.fill_path(
                    &path,
                    &paint(color),
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
            Ok(None) => debug!(text, "Text produced no outline"),
            Err(e) => warn!(text, error = %e, "Failed to outline text"),
        }
    }
}
