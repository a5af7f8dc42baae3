//! Font discovery and glyph outlines for the raster card.
//!
//! Faces are resolved through `fontdb` (system fonts plus an optional extra
//! file) and outlined with `ttf-parser` straight into tiny-skia paths.

use crate::error::{Result, WrappedError};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use std::path::Path;
use std::sync::Arc;
use tiny_skia::PathBuilder;
use tracing::{debug, info};

/// Regular or bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Font bytes plus the face index inside a collection.
#[derive(Debug, Clone)]
pub struct FaceData {
    bytes: Arc<[u8]>,
    index: u32,
}

impl FaceData {
    fn parse(&self) -> Result<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.bytes, self.index)
            .map_err(|e| WrappedError::Render(format!("Failed to parse font face: {}", e)))
    }
}

/// The two faces the card uses.
#[derive(Debug, Clone)]
pub struct FontBook {
    regular: FaceData,
    bold: FaceData,
}

impl FontBook {
    /// Load system fonts, plus `extra` which is preferred when given.
    pub fn load(extra: Option<&Path>) -> Result<Self> {
        let mut db = Database::new();
        db.load_system_fonts();

        let mut preferred = None;
        if let Some(path) = extra {
            let before: Vec<_> = db.faces().map(|f| f.id).collect();
            db.load_font_file(path).map_err(|e| {
                WrappedError::Config(format!("Failed to load font {}: {}", path.display(), e))
            })?;
            preferred = db
                .faces()
                .find(|f| !before.contains(&f.id))
                .and_then(|f| f.families.first().map(|(name, _)| name.clone()));
            info!(path = %path.display(), family = ?preferred, "Loaded extra font");
        }

        if db.faces().next().is_none() {
            return Err(WrappedError::Config(
                "No fonts found on this system".to_string(),
            ));
        }

        let regular = resolve(&db, preferred.as_deref(), Weight::NORMAL)?;
        let bold = resolve(&db, preferred.as_deref(), Weight::BOLD)?;
        Ok(Self { regular, bold })
    }

    fn face(&self, weight: FontWeight) -> &FaceData {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    /// Outline `text` at `size` px with its alphabetic baseline at (`x`, `y`).
    ///
    /// Glyphs missing from the face are skipped but still advance the pen.
    pub fn outline_text(
        &self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
    ) -> Result<Option<tiny_skia::Path>> {
        let face = self.face(weight).parse()?;
        let scale = size / f32::from(face.units_per_em());
        let mut builder = GlyphPathBuilder {
            builder: PathBuilder::new(),
            scale,
            origin_x: x,
            origin_y: y,
        };

        for ch in text.chars() {
            let Some(gid) = face.glyph_index(ch) else {
                debug!(ch = ?ch, "No glyph for character");
                builder.origin_x += size * 0.5;
                continue;
            };
            face.outline_glyph(gid, &mut builder);
            let advance = face.glyph_hor_advance(gid).unwrap_or(0);
            builder.origin_x += f32::from(advance) * scale;
        }

        Ok(builder.builder.finish())
    }
}

fn resolve(db: &Database, preferred: Option<&str>, weight: Weight) -> Result<FaceData> {
    let mut families = Vec::new();
    if let Some(name) = preferred {
        families.push(Family::Name(name));
    }
    families.push(Family::SansSerif);

    let query = Query {
        families: &families,
        weight,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))
        .ok_or_else(|| WrappedError::Config("No usable font face".to_string()))?;

    db.with_face_data(id, |data, index| FaceData {
        bytes: Arc::from(data),
        index,
    })
    .ok_or_else(|| WrappedError::Config("Font face data unavailable".to_string()))
}

/// Feeds `ttf-parser` outline callbacks into a tiny-skia path, mapping font
/// units (Y up) to canvas pixels (Y down).
struct GlyphPathBuilder {
    builder: PathBuilder,
    scale: f32,
    origin_x: f32,
    origin_y: f32,
}

impl GlyphPathBuilder {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.origin_y - y * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_extra_font_is_config_error() {
        let err = FontBook::load(Some(Path::new("/nonexistent/font.ttf")))
            .expect_err("missing file");
        assert!(matches!(err, WrappedError::Config(_)));
    }

    #[test]
    fn test_outline_text_when_fonts_available() {
        // Font availability depends on the host; only check behaviour when present.
        let Ok(fonts) = FontBook::load(None) else {
            return;
        };
        let Some(path) = fonts
            .outline_text("Wrapped", 10.0, 50.0, 32.0, FontWeight::Bold)
            .expect("outline")
        else {
            return;
        };
        let bounds = path.bounds();
        assert!(bounds.left() >= 5.0);
        assert!(bounds.bottom() <= 60.0);
        assert!(bounds.top() >= 10.0);
    }
}
