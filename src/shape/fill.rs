use crate::color::Color;

/// Shape fill options.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    /// The color to fill.
    pub color: Color,
}

impl Fill {
    /// Returns a solid fill of `color`.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}
