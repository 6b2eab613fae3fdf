use tiny_skia::{Path, PathBuilder, Rect as SkRect};

use crate::{
    canvas::Canvas,
    color::Color,
    math::{Pixels, Point, Rect},
};

/// An ellipse inscribed in a rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oval {
    pub center: Point<f32, Pixels>,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Oval {
    pub fn inscribed(bounds: &Rect<f32>) -> Self {
        Self {
            center: Point::<f32>::new(
                (bounds.min.x + bounds.max.x) / 2.,
                (bounds.min.y + bounds.max.y) / 2.,
            ),
            radius_x: bounds.width() / 2.,
            radius_y: bounds.height() / 2.,
        }
    }

    fn path(&self) -> Option<Path> {
        if self.radius_x <= 0. || self.radius_y <= 0. {
            return None;
        }
        let bounds = SkRect::from_ltrb(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )?;
        PathBuilder::from_oval(bounds)
    }

    pub fn fill(&self, canvas: &mut Canvas, color: Color) {
        if let Some(path) = self.path() {
            canvas.fill_path(&path, color);
        }
    }

    pub fn stroke(&self, canvas: &mut Canvas, color: Color, line_width: f32) {
        if line_width <= 0. {
            return;
        }
        if let Some(path) = self.path() {
            canvas.stroke_path(&path, color, line_width);
        }
    }
}
