use crate::color::Color;

/// A shape stroke (outline) options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// The color to stroke the shape's with.
    pub color: Color,
    /// The width of the outline in pixels. The outline is centered on the
    /// shape's edge.
    pub line_width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

impl Stroke {
    /// Creates a new instance using `color` with a one pixel line width.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            line_width: 1.,
        }
    }

    /// Builder-style function. Sets `line_width` and return self.
    #[must_use]
    pub const fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }
}
