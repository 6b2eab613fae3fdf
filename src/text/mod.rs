mod bitmap;
pub(crate) mod font;
/// Types for handling prepared text.
pub mod prepared;

pub use font::Font;
use rusttype::Scale;

use self::prepared::{PreparedGlyphs, PreparedSpan};

/// A vertical metrics measurement, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VMetrics {
    /// The amount of pixels above the baseline.
    pub ascent: f32,
    /// The amount of pixels below the baseline. Typically a negative number.
    pub descent: f32,
    /// The amount of pixels to allow between lines.
    pub line_gap: f32,
}

impl From<rusttype::VMetrics> for VMetrics {
    fn from(value: rusttype::VMetrics) -> Self {
        Self {
            ascent: value.ascent,
            descent: value.descent,
            line_gap: value.line_gap,
        }
    }
}

impl VMetrics {
    /// The height of the ascent and descent combined.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.ascent - self.descent
    }
}

/// Text rendering functionality
pub enum Text {}

impl Text {
    /// Prepares `text` to be rendered at `size` pixels.
    ///
    /// When `font` is `None`, the built-in counter font is used. It only
    /// contains digits and `+`; other characters advance without drawing.
    #[must_use]
    pub fn prepare(text: &str, font: Option<&Font>, size: f32) -> PreparedSpan {
        match font {
            Some(font) => Self::prepare_outline(text, font, size),
            None => Self::prepare_bitmap(text, size),
        }
    }

    fn prepare_outline(text: &str, font: &Font, size: f32) -> PreparedSpan {
        let mut caret = 0.;
        let mut glyphs = Vec::new();
        let mut last_glyph_id = None;
        for c in text.chars() {
            let base_glyph = font.glyph(c);
            if let Some(id) = last_glyph_id.take() {
                caret += font.pair_kerning(size, id, base_glyph.id());
            }
            last_glyph_id = Some(base_glyph.id());
            let glyph = base_glyph
                .scaled(Scale::uniform(size))
                .positioned(rusttype::point(caret, 0.0));

            caret += glyph.unpositioned().h_metrics().advance_width;
            glyphs.push(glyph);
        }

        PreparedSpan {
            size,
            width: caret,
            metrics: font.metrics(size),
            glyphs: PreparedGlyphs::Outline(glyphs),
        }
    }

    fn prepare_bitmap(text: &str, size: f32) -> PreparedSpan {
        let cell = size / bitmap::EM;
        let advance = cell * f32::from(bitmap::ADVANCE);
        let mut glyphs = Vec::new();
        let mut count = 0_u16;
        for c in text.chars() {
            if let Some(rows) = bitmap::glyph(c) {
                glyphs.push((advance * f32::from(count), rows));
            }
            count = count.saturating_add(1);
        }
        // The spacing after the last glyph is not part of the span.
        let width = if count == 0 {
            0.
        } else {
            advance * f32::from(count) - cell
        };

        PreparedSpan {
            size,
            width,
            metrics: VMetrics {
                ascent: cell * f32::from(bitmap::GLYPH_HEIGHT),
                descent: 0.,
                line_gap: cell * (bitmap::EM - f32::from(bitmap::GLYPH_HEIGHT)),
            },
            glyphs: PreparedGlyphs::Bitmap { cell, glyphs },
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use image::Rgba;

    use super::*;
    use crate::{canvas::Canvas, color::Color, math::{Point, Size}};

    #[test]
    fn bitmap_measurements() {
        let span = Text::prepare("99+", None, 18.);
        // One cell is 2px: three glyphs of 6 cells, minus the trailing gap.
        assert_relative_eq!(span.width, 34.);
        assert_relative_eq!(span.metrics.ascent, 14.);
        assert_relative_eq!(span.metrics.descent, 0.);
        assert_relative_eq!(span.metrics.height(), 14.);

        let empty = Text::prepare("", None, 18.);
        assert_relative_eq!(empty.width, 0.);
    }

    #[test]
    fn outline_measurements() {
        let font = crate::include_font!("../../fonts/dejavu/DejaVuSans.ttf").unwrap();
        let span = Text::prepare("88", Some(&font), 22.);
        let advance = font
            .glyph('8')
            .scaled(Scale::uniform(22.))
            .h_metrics()
            .advance_width;
        assert_relative_eq!(span.width, advance * 2., epsilon = 1.);
        assert_relative_eq!(span.metrics.height(), 22., epsilon = 0.01);
        assert!(span.metrics.ascent > 0.);
        assert!(span.metrics.descent < 0.);
        assert_eq!(span.metrics, font.metrics(22.));
    }

    #[test]
    fn centered_baseline() {
        let span = Text::prepare("7", None, 9.);
        let origin = span.centered_baseline(Point::<f32>::new(10., 10.));
        assert_relative_eq!(origin.x, 7.5);
        assert_relative_eq!(origin.y, 13.5);
    }

    #[test]
    fn bitmap_rendering() {
        // One cell per pixel.
        let span = Text::prepare("1", None, 9.);
        let mut canvas = Canvas::new(Size::new(8, 8)).unwrap();
        span.render_baseline_at(&mut canvas, Point::<f32>::new(1., 7.), Color::WHITE);
        let image = canvas.into_image();

        // The stem of the 1 is in column 2 of every row.
        for row in 0..7 {
            assert_eq!(image.get_pixel(3, row), &Rgba([255, 255, 255, 255]));
        }
        // The foot spans columns 1..=3 of the last row.
        assert_eq!(image.get_pixel(2, 6), &Rgba([255, 255, 255, 255]));
        assert_eq!(image.get_pixel(4, 6), &Rgba([255, 255, 255, 255]));
        assert_eq!(image.get_pixel(1, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(image.get_pixel(3, 7), &Rgba([0, 0, 0, 0]));
    }
}
