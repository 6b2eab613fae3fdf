use tiny_skia::{Path, PathBuilder, Rect as SkRect};

use crate::{
    canvas::Canvas,
    color::Color,
    math::Point,
    text::{bitmap, VMetrics},
};

#[derive(Clone, Debug)]
pub(crate) enum PreparedGlyphs {
    /// Outline glyphs positioned relative to the start of the baseline.
    Outline(Vec<rusttype::PositionedGlyph<'static>>),
    /// Built-in glyphs, each with its horizontal offset in pixels.
    Bitmap {
        cell: f32,
        glyphs: Vec<(f32, &'static [u8; 7])>,
    },
}

/// A span of text that has been measured and is ready to render.
#[derive(Clone, Debug)]
pub struct PreparedSpan {
    /// The font size in pixels.
    pub size: f32,
    /// The horizontal advance of the whole span, in pixels.
    pub width: f32,
    /// The vertical metrics of the span's font.
    pub metrics: VMetrics,
    pub(crate) glyphs: PreparedGlyphs,
}

impl PreparedSpan {
    /// Returns the baseline origin that centers this span on `center`.
    ///
    /// The span is centered horizontally by its advance width and vertically
    /// on the middle of its ascent and descent.
    #[must_use]
    pub fn centered_baseline(&self, center: Point<f32>) -> Point<f32> {
        Point::<f32>::new(
            center.x - self.width / 2.,
            center.y + (self.metrics.ascent + self.metrics.descent) / 2.,
        )
    }

    /// Renders the text onto `canvas` with the baseline starting at `origin`.
    pub fn render_baseline_at(&self, canvas: &mut Canvas, origin: Point<f32>, color: Color) {
        match &self.glyphs {
            PreparedGlyphs::Outline(glyphs) => {
                render_outlines(glyphs, canvas, origin, color);
            }
            PreparedGlyphs::Bitmap { cell, glyphs } => {
                if let Some(path) = bitmap_path(*cell, glyphs, origin) {
                    canvas.fill_path(&path, color);
                }
            }
        }
    }
}

/// Rasterizes outline glyphs into a coverage mask and fills it in one pass.
fn render_outlines(
    glyphs: &[rusttype::PositionedGlyph<'static>],
    canvas: &mut Canvas,
    origin: Point<f32>,
    color: Color,
) {
    let mut mask = match canvas.coverage_mask() {
        Some(mask) => mask,
        None => return,
    };
    let size = canvas.size();
    let coverage = mask.data_mut();
    for glyph in glyphs {
        let position = glyph.position();
        let glyph = glyph
            .unpositioned()
            .clone()
            .positioned(rusttype::point(origin.x + position.x, origin.y + position.y));
        if let Some(bounds) = glyph.pixel_bounding_box() {
            glyph.draw(|x, y, value| {
                let x = bounds.min.x + x as i32;
                let y = bounds.min.y + y as i32;
                if x < 0 || y < 0 || x >= size.width || y >= size.height {
                    return;
                }
                let index = y as usize * size.width as usize + x as usize;
                let value = (value.max(0.).min(1.) * 255.).round() as u8;
                coverage[index] = coverage[index].max(value);
            });
        }
    }
    canvas.fill_masked(&mask, color);
}

/// Builds one path covering every lit cell. Lit cells that touch
/// horizontally are merged into a single rectangle.
fn bitmap_path(cell: f32, glyphs: &[(f32, &'static [u8; 7])], origin: Point<f32>) -> Option<Path> {
    let top = origin.y - cell * f32::from(bitmap::GLYPH_HEIGHT);
    let mut builder = PathBuilder::new();
    for &(offset, rows) in glyphs {
        let left = origin.x + offset;
        for row in 0..bitmap::GLYPH_HEIGHT {
            let mut column = 0;
            while column < bitmap::GLYPH_WIDTH {
                if !bitmap::is_lit(rows, column, row) {
                    column += 1;
                    continue;
                }
                let start = column;
                while column < bitmap::GLYPH_WIDTH && bitmap::is_lit(rows, column, row) {
                    column += 1;
                }
                let y = top + cell * f32::from(row);
                if let Some(rect) = SkRect::from_ltrb(
                    left + cell * f32::from(start),
                    y,
                    left + cell * f32::from(column),
                    y + cell,
                ) {
                    builder.push_rect(rect);
                }
            }
        }
    }
    builder.finish()
}
