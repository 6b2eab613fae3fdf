use image::{Rgba, RgbaImage};
use tiny_skia::{
    ColorU8, FillRule, Mask, Paint, Path, Pixmap, PixmapPaint, Rect as SkRect, Stroke, Transform,
};

use crate::{color::Color, math::Size};

/// An RGBA raster that shapes, text and images are composited onto.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

/// Copies `image` into a premultiplied pixmap. Returns `None` for images with
/// no pixels.
fn pixmap_from_image(image: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (destination, source) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [red, green, blue, alpha] = source.0;
        *destination = ColorU8::from_rgba(red, green, blue, alpha).premultiply();
    }
    Some(pixmap)
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.into());
    paint.anti_alias = true;
    paint
}

impl Canvas {
    /// Creates a fully transparent canvas of `size`. Returns `None` if either
    /// dimension is zero, negative or too large to allocate.
    #[must_use]
    pub fn new(size: Size) -> Option<Self> {
        if size.width <= 0 || size.height <= 0 {
            return None;
        }
        Pixmap::new(size.width as u32, size.height as u32).map(|pixmap| Self { pixmap })
    }

    /// Returns the size of the canvas.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.pixmap.width() as i32, self.pixmap.height() as i32)
    }

    /// Returns a copy of the canvas as a straight-alpha image.
    #[must_use]
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (destination, source) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let color = source.demultiply();
            *destination = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }
        image
    }

    /// Consumes the canvas and returns its contents as a straight-alpha
    /// image.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.to_image()
    }

    /// Composites `image` with its top-left corner at `(x, y)`.
    pub fn draw_image(&mut self, image: &RgbaImage, x: i32, y: i32) {
        if let Some(source) = pixmap_from_image(image) {
            self.pixmap.draw_pixmap(
                x,
                y,
                source.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
    }

    /// Fills `path` with `color`, antialiased.
    pub fn fill_path(&mut self, path: &Path, color: Color) {
        self.pixmap.fill_path(
            path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Strokes `path` with `color`. The line is centered on the path.
    pub fn stroke_path(&mut self, path: &Path, color: Color, line_width: f32) {
        let stroke = Stroke {
            width: line_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint(color), &stroke, Transform::identity(), None);
    }

    /// Fills the whole canvas with `color`, weighted by `coverage`.
    pub fn fill_masked(&mut self, coverage: &Mask, color: Color) {
        if let Some(bounds) =
            SkRect::from_xywh(0., 0., self.pixmap.width() as f32, self.pixmap.height() as f32)
        {
            self.pixmap
                .fill_rect(bounds, &paint(color), Transform::identity(), Some(coverage));
        }
    }

    /// Returns an empty coverage mask the size of this canvas.
    #[must_use]
    pub fn coverage_mask(&self) -> Option<Mask> {
        Mask::new(self.pixmap.width(), self.pixmap.height())
    }
}

#[cfg(test)]
mod tests {
    use tiny_skia::PathBuilder;

    use super::*;

    #[test]
    fn empty_sizes_are_rejected() {
        assert!(Canvas::new(Size::new(0, 4)).is_none());
        assert!(Canvas::new(Size::new(4, -1)).is_none());
        assert_eq!(Canvas::new(Size::new(3, 2)).unwrap().size(), Size::new(3, 2));
    }

    #[test]
    fn opaque_fill_replaces() {
        let mut canvas = Canvas::new(Size::new(4, 4)).unwrap();
        let path = PathBuilder::from_rect(SkRect::from_ltrb(1., 1., 3., 3.).unwrap());
        canvas.fill_path(&path, Color::RED);
        let image = canvas.into_image();
        assert_eq!(image.get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(2, 2), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(image.get_pixel(3, 3), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn translucent_fill_over_opaque() {
        let mut canvas = Canvas::new(Size::new(1, 1)).unwrap();
        canvas.draw_image(&RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255])), 0, 0);
        let path = PathBuilder::from_rect(SkRect::from_ltrb(0., 0., 1., 1.).unwrap());
        canvas.fill_path(&path, Color::BLACK.with_alpha(0.5));
        let pixel = *canvas.into_image().get_pixel(0, 0);
        assert_eq!(pixel[3], 255);
        assert!((126..=129).contains(&pixel[0]), "{:?}", pixel);
    }

    #[test]
    fn masked_fill_follows_coverage() {
        let mut canvas = Canvas::new(Size::new(3, 1)).unwrap();
        let mut mask = canvas.coverage_mask().unwrap();
        mask.data_mut()[1] = 255;
        canvas.fill_masked(&mask, Color::BLUE);
        let image = canvas.into_image();
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(image.get_pixel(1, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(image.get_pixel(2, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn draw_image_at_offset() {
        let mut canvas = Canvas::new(Size::new(4, 4)).unwrap();
        let source = RgbaImage::from_pixel(2, 2, Rgba([9, 8, 7, 255]));
        canvas.draw_image(&source, 1, 2);
        let image = canvas.into_image();
        assert_eq!(image.get_pixel(1, 2), &Rgba([9, 8, 7, 255]));
        assert_eq!(image.get_pixel(2, 3), &Rgba([9, 8, 7, 255]));
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn draw_image_keeps_transparency() {
        let mut canvas = Canvas::new(Size::new(2, 1)).unwrap();
        let source = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]));
        canvas.draw_image(&source, 0, 0);
        assert_eq!(canvas.to_image().get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }
}
