//! Wrapped card compositor.
//!
//! The card layout is fixed: every position, font size and color below is a
//! constant, so the same [`AnalysisResult`] always produces the same image.
//!
//! ```text
//! +--------------------------------------------------+
//! | Research Wrapped                                 |
//! | <author>                                         |
//! | Based on N recent abstracts                      |
//! |                                                  |
//! | Top words        Top verbs        Topics         |
//! | term (n)         term (n)         term (n)       |
//! | ... up to 7 rows per column                      |
//! |                                                  |
//! | Made with Research Wrapped                       |
//! +--------------------------------------------------+
//! ```

pub mod canvas;
pub mod raster;

pub use canvas::{Canvas, Color, DrawOp, ExportPng, Font, Rect, RecordingCanvas};
pub use raster::RasterCanvas;

use crate::model::{AnalysisResult, TermCount};

pub const CARD_WIDTH: u32 = 1200;
pub const CARD_HEIGHT: u32 = 700;

pub const BORDER_INSET: f32 = 8.0;
pub const BORDER_WIDTH: f32 = 8.0;

pub const TITLE: &str = "Research Wrapped";
pub const FOOTER: &str = "Made with Research Wrapped";

const MARGIN_X: f32 = 60.0;
const TITLE_Y: f32 = 110.0;
const AUTHOR_Y: f32 = 165.0;
const CAPTION_Y: f32 = 210.0;
const FOOTER_OFFSET: f32 = 40.0;

/// Left edge of the three ranked columns.
pub const COLUMN_X: [f32; 3] = [60.0, 440.0, 820.0];
pub const COLUMN_HEADERS: [&str; 3] = ["Top words", "Top verbs", "Topics"];
pub const HEADER_Y: f32 = 290.0;
pub const FIRST_ROW_Y: f32 = 340.0;
pub const ROW_STEP: f32 = 40.0;
/// Entries beyond this many are not drawn.
pub const MAX_ROWS: usize = 7;

const TITLE_FONT: Font = Font::bold(56.0);
const AUTHOR_FONT: Font = Font::regular(36.0);
const CAPTION_FONT: Font = Font::regular(24.0);
const HEADER_FONT: Font = Font::bold(28.0);
const ROW_FONT: Font = Font::regular(24.0);
const FOOTER_FONT: Font = Font::regular(18.0);

const BACKGROUND: Color = Color::WHITE;
const INK: Color = Color::rgb(0x1f, 0x29, 0x37);
const ACCENT: Color = Color::rgb(0x7c, 0x3a, 0xed);
const MUTED: Color = Color::rgb(0x6b, 0x72, 0x80);

/// Draw the wrapped card for `data` onto `canvas`.
pub fn draw<C: Canvas + ?Sized>(canvas: &mut C, data: &AnalysisResult) {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;

    canvas.clear(BACKGROUND);
    canvas.stroke_rect(
        Rect {
            x: BORDER_INSET,
            y: BORDER_INSET,
            width: width - 2.0 * BORDER_INSET,
            height: height - 2.0 * BORDER_INSET,
        },
        BORDER_WIDTH,
        ACCENT,
    );

    canvas.fill_text(TITLE, MARGIN_X, TITLE_Y, TITLE_FONT, ACCENT);
    canvas.fill_text(data.display_name(), MARGIN_X, AUTHOR_Y, AUTHOR_FONT, INK);
    canvas.fill_text(&data.caption(), MARGIN_X, CAPTION_Y, CAPTION_FONT, MUTED);

    let columns: [&[TermCount]; 3] = [&data.top_words, &data.top_verbs, &data.topics];
    for ((x, header), items) in COLUMN_X.iter().zip(COLUMN_HEADERS).zip(columns) {
        draw_column(canvas, *x, header, items);
    }

    canvas.fill_text(FOOTER, MARGIN_X, height - FOOTER_OFFSET, FOOTER_FONT, MUTED);
}

fn draw_column<C: Canvas + ?Sized>(canvas: &mut C, x: f32, header: &str, items: &[TermCount]) {
    canvas.fill_text(header, x, HEADER_Y, HEADER_FONT, ACCENT);
    for (row, item) in items.iter().take(MAX_ROWS).enumerate() {
        let y = FIRST_ROW_Y + row as f32 * ROW_STEP;
        canvas.fill_text(&item.label(), x, y, ROW_FONT, INK);
    }
}

/// Baselines covered by a column's entries.
pub fn rows_region() -> std::ops::Range<f32> {
    FIRST_ROW_Y..FIRST_ROW_Y + MAX_ROWS as f32 * ROW_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(prefix: &str, n: usize) -> Vec<TermCount> {
        (0..n)
            .map(|i| TermCount::new(format!("{}{}", prefix, i), (100 - i) as u64))
            .collect()
    }

    fn sample() -> AnalysisResult {
        AnalysisResult {
            author_name: Some("A. Example".into()),
            works_used: 10,
            top_words: terms("w", 10),
            top_verbs: terms("v", 3),
            topics: Vec::new(),
            ..Default::default()
        }
    }

    fn recorded(data: &AnalysisResult) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new(CARD_WIDTH, CARD_HEIGHT);
        draw(&mut canvas, data);
        canvas
    }

    #[test]
    fn test_header_block() {
        let canvas = recorded(&sample());
        let texts = canvas.texts();
        assert_eq!(texts[0], TITLE);
        assert_eq!(texts[1], "A. Example");
        assert_eq!(texts[2], "Based on 10 recent abstracts");
        assert_eq!(texts.last().copied(), Some(FOOTER));
    }

    #[test]
    fn test_long_list_truncated_to_first_seven() {
        let canvas = recorded(&sample());
        let words = canvas.texts_in_column(COLUMN_X[0], rows_region());
        let expected: Vec<String> = terms("w", 7).iter().map(TermCount::label).collect();
        assert_eq!(words, expected);
        assert!(!canvas.texts().contains(&"w7 (93)"));
    }

    #[test]
    fn test_short_list_stops_early() {
        let canvas = recorded(&sample());
        assert_eq!(
            canvas.texts_in_column(COLUMN_X[1], rows_region()),
            vec!["v0 (100)", "v1 (99)", "v2 (98)"]
        );
        assert!(canvas.texts_in_column(COLUMN_X[2], rows_region()).is_empty());
    }

    #[test]
    fn test_column_headers_always_drawn() {
        let canvas = recorded(&AnalysisResult::default());
        for (x, header) in COLUMN_X.iter().zip(COLUMN_HEADERS) {
            assert_eq!(
                canvas.texts_in_column(*x, HEADER_Y..HEADER_Y + 1.0),
                vec![header]
            );
        }
    }

    #[test]
    fn test_unknown_author_fallback() {
        let canvas = recorded(&AnalysisResult::default());
        assert_eq!(canvas.texts()[1], crate::model::UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_border_and_clear() {
        let canvas = recorded(&sample());
        assert_eq!(canvas.ops()[0], DrawOp::Clear(Color::WHITE));
        assert_eq!(
            canvas.ops()[1],
            DrawOp::StrokeRect {
                rect: Rect {
                    x: 8.0,
                    y: 8.0,
                    width: 1184.0,
                    height: 684.0
                },
                line_width: 8.0,
                color: ACCENT,
            }
        );
    }

    #[test]
    fn test_redraw_replaces_previous_card() {
        let mut canvas = RecordingCanvas::new(CARD_WIDTH, CARD_HEIGHT);
        draw(&mut canvas, &sample());
        let first = canvas.ops().len();
        draw(&mut canvas, &sample());
        assert_eq!(canvas.ops().len(), first);
    }

    #[test]
    fn test_draw_is_deterministic() {
        assert_eq!(recorded(&sample()).ops(), recorded(&sample()).ops());
    }

    #[test]
    fn test_raster_background_and_border() {
        let mut canvas = RasterCanvas::new(CARD_WIDTH, CARD_HEIGHT, None).expect("canvas");
        draw(&mut canvas, &sample());
        let pixmap = canvas.pixmap();

        let corner = pixmap.pixel(2, 2).expect("corner pixel");
        assert_eq!((corner.red(), corner.green(), corner.blue()), (255, 255, 255));

        let border = pixmap.pixel(8, 300).expect("border pixel");
        assert_eq!(
            (border.red(), border.green(), border.blue()),
            (ACCENT.r, ACCENT.g, ACCENT.b)
        );

        let inside = pixmap.pixel(600, 650).expect("inner pixel");
        assert_eq!(inside.red(), 255);
    }

    #[test]
    fn test_png_export_signature() {
        let mut canvas = RasterCanvas::new(CARD_WIDTH, CARD_HEIGHT, None).expect("canvas");
        draw(&mut canvas, &sample());
        let png = canvas.encode_png().expect("png");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_zero_sized_raster_rejected() {
        assert!(RasterCanvas::new(0, 0, None).is_err());
    }
}
