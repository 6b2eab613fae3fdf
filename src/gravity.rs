use bitflags::bitflags;

use crate::math::{Point, Rect};

bitflags! {
    /// Describes where a rectangle is anchored inside of a container.
    ///
    /// Each axis is described independently. Specifying both edges of an
    /// axis stretches the rectangle to fill that axis, and specifying neither
    /// centers it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(
        feature = "serialization",
        derive(serde::Serialize, serde::Deserialize)
    )]
    pub struct Gravity: u8 {
        /// Push to the top of the container.
        const TOP = 1 << 0;
        /// Push to the bottom of the container.
        const BOTTOM = 1 << 1;
        /// Center vertically.
        const CENTER_VERTICAL = 1 << 2;
        /// Push to the left of the container.
        const LEFT = 1 << 3;
        /// Push to the right of the container.
        const RIGHT = 1 << 4;
        /// Push to the leading edge, depending on the [`LayoutDirection`].
        const START = 1 << 5;
        /// Push to the trailing edge, depending on the [`LayoutDirection`].
        const END = 1 << 6;
        /// Center horizontally.
        const CENTER_HORIZONTAL = 1 << 7;

        /// Center on both axes.
        const CENTER = Self::CENTER_VERTICAL.bits() | Self::CENTER_HORIZONTAL.bits();
        /// Stretch to fill the container vertically.
        const FILL_VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// Stretch to fill the container horizontally.
        const FILL_HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Stretch to fill the container on both axes.
        const FILL = Self::FILL_VERTICAL.bits() | Self::FILL_HORIZONTAL.bits();
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::TOP | Self::END
    }
}

/// The direction text and layouts flow in. Determines which physical edges
/// [`Gravity::START`] and [`Gravity::END`] refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum LayoutDirection {
    /// Start is left, end is right.
    LeftToRight,
    /// Start is right, end is left.
    RightToLeft,
}

impl Default for LayoutDirection {
    fn default() -> Self {
        Self::LeftToRight
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pull {
    Center,
    Before,
    After,
    Fill,
}

impl Pull {
    const fn new(before: bool, after: bool) -> Self {
        match (before, after) {
            (false, false) => Self::Center,
            (true, false) => Self::Before,
            (false, true) => Self::After,
            (true, true) => Self::Fill,
        }
    }

    /// Returns the `(min, max)` edges of an extent of `length` placed within
    /// `container_min..container_max`. Edges saturate at the bounds of `i32`.
    const fn place(self, length: i32, container_min: i32, container_max: i32, adjust: i32) -> (i32, i32) {
        match self {
            Self::Center => {
                let slack = container_max.saturating_sub(container_min).saturating_sub(length) / 2;
                let min = container_min.saturating_add(slack).saturating_add(adjust);
                (min, min.saturating_add(length))
            }
            Self::Before => {
                let min = container_min.saturating_add(adjust);
                (min, min.saturating_add(length))
            }
            Self::After => {
                let max = container_max.saturating_sub(adjust);
                (max.saturating_sub(length), max)
            }
            Self::Fill => (
                container_min.saturating_add(adjust),
                container_max.saturating_add(adjust),
            ),
        }
    }
}

impl Gravity {
    fn vertical(self) -> Pull {
        Pull::new(self.contains(Self::TOP), self.contains(Self::BOTTOM))
    }

    fn horizontal(self, direction: LayoutDirection) -> Pull {
        let (leading, trailing) = match direction {
            LayoutDirection::LeftToRight => (Self::START, Self::END),
            LayoutDirection::RightToLeft => (Self::END, Self::START),
        };
        Pull::new(
            self.intersects(Self::LEFT | leading),
            self.intersects(Self::RIGHT | trailing),
        )
    }

    /// Places a `width` x `height` rectangle within `container`.
    ///
    /// `x_adjust` and `y_adjust` move the rectangle away from the edge it is
    /// pulled toward. Centered rectangles are offset by the adjustment
    /// instead, and filled axes ignore the requested length.
    #[must_use]
    pub fn apply(
        self,
        width: i32,
        height: i32,
        container: &Rect,
        x_adjust: i32,
        y_adjust: i32,
        direction: LayoutDirection,
    ) -> Rect {
        let (left, right) = self.horizontal(direction).place(
            width,
            container.min.x,
            container.max.x,
            x_adjust,
        );
        let (top, bottom) =
            self.vertical()
                .place(height, container.min.y, container.max.y, y_adjust);
        Rect::new(Point::new(left, top), Point::new(right, bottom))
    }
}
