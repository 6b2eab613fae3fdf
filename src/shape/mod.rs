mod fill;
mod oval;
mod stroke;

use oval::Oval;

pub use self::{fill::*, stroke::*};
use crate::{
    canvas::Canvas,
    math::{Pixels, Point, Rect},
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum ShapeGeometry {
    Empty,
    Oval(Oval),
}

/// A shape with an optional fill and stroke. The fill is drawn first and the
/// stroke is drawn on top of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    geometry: ShapeGeometry,
    stroke: Option<Stroke>,
    fill: Option<Fill>,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            geometry: ShapeGeometry::Empty,
            stroke: None,
            fill: None,
        }
    }
}

impl Shape {
    /// Creates an ellipse inscribed in `bounds`.
    #[must_use]
    pub fn oval(bounds: impl Into<Rect<f32>>) -> Self {
        Self {
            geometry: ShapeGeometry::Oval(Oval::inscribed(&bounds.into())),
            ..Self::default()
        }
    }

    /// Creates a circle centered at `center`.
    #[must_use]
    pub fn circle(center: Point<f32, Pixels>, radius: f32) -> Self {
        Self {
            geometry: ShapeGeometry::Oval(Oval {
                center,
                radius_x: radius,
                radius_y: radius,
            }),
            ..Self::default()
        }
    }

    /// Builder-style function. Sets the fill and returns self.
    #[must_use]
    pub const fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Builder-style function. Sets the stroke and returns self.
    #[must_use]
    pub const fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Draws the shape onto `canvas`.
    pub fn render(&self, canvas: &mut Canvas) {
        match &self.geometry {
            ShapeGeometry::Empty => {}
            ShapeGeometry::Oval(oval) => {
                if let Some(fill) = &self.fill {
                    oval.fill(canvas, fill.color);
                }
                if let Some(stroke) = &self.stroke {
                    oval.stroke(canvas, stroke.color, stroke.line_width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;
    use crate::{color::Color, math::Size};

    #[test]
    fn filled_circle() {
        let mut canvas = Canvas::new(Size::new(32, 32)).unwrap();
        Shape::circle(Point::<f32>::new(16., 16.), 8.)
            .fill(Fill::new(Color::RED))
            .render(&mut canvas);

        let image = canvas.into_image();
        assert_eq!(image.get_pixel(16, 16), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(9, 16), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(2, 2), &Rgba([0, 0, 0, 0]));
        assert_eq!(image.get_pixel(25, 16), &Rgba([0, 0, 0, 0]));
        // The diagonal edge is partially covered.
        let edge = image.get_pixel(10, 10);
        assert!(edge[3] > 0 && edge[3] < 255, "{:?}", edge);
    }

    #[test]
    fn stroked_oval_leaves_interior() {
        let mut canvas = Canvas::new(Size::new(40, 40)).unwrap();
        let bounds = Rect::<f32>::new(Point::<f32>::new(4., 4.), Point::<f32>::new(36., 36.));
        Shape::oval(bounds)
            .stroke(Stroke::new(Color::BLUE).line_width(4.))
            .render(&mut canvas);

        let image = canvas.into_image();
        assert_eq!(image.get_pixel(20, 20), &Rgba([0, 0, 0, 0]));
        // Pixel 4 spans 4..5, well within the 2..6 stroke band.
        assert_eq!(image.get_pixel(4, 20), &Rgba([0, 0, 255, 255]));
        assert_eq!(image.get_pixel(35, 20), &Rgba([0, 0, 255, 255]));
        assert_eq!(image.get_pixel(0, 20), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn stroke_is_drawn_over_fill() {
        let mut canvas = Canvas::new(Size::new(20, 20)).unwrap();
        Shape::oval(Rect::<f32>::new(Point::<f32>::new(0., 0.), Point::<f32>::new(20., 20.)))
            .fill(Fill::new(Color::RED))
            .stroke(Stroke::new(Color::WHITE).line_width(4.))
            .render(&mut canvas);

        let image = canvas.into_image();
        assert_eq!(image.get_pixel(10, 10), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(1, 10), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn empty_shape_draws_nothing() {
        let mut canvas = Canvas::new(Size::new(4, 4)).unwrap();
        Shape::default()
            .fill(Fill::new(Color::RED))
            .render(&mut canvas);
        Shape::oval(Rect::<f32>::new(Point::<f32>::new(1., 1.), Point::<f32>::new(1., 3.)))
            .fill(Fill::new(Color::RED))
            .render(&mut canvas);
        assert!(canvas.to_image().pixels().all(|p| p[3] == 0));
    }
}
