mod containment;

pub use self::containment::{move_in, Containment};

/// A unit representing physical pixels of an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Pixels;

/// A type representing an x and y coordinate.
pub type Point<T = i32, Unit = Pixels> = euclid::Point2D<T, Unit>;
/// A type representing a width and height.
pub type Size<T = i32, Unit = Pixels> = euclid::Size2D<T, Unit>;
/// A type representing a vector with magnitudes x and y.
pub type Vector<T = i32, Unit = Pixels> = euclid::Vector2D<T, Unit>;
/// A rectangle described by its four edges. `min` is the left/top edge and
/// `max` is the right/bottom edge, exclusive.
pub type Rect<T = i32, Unit = Pixels> = euclid::Box2D<T, Unit>;

/// Returns the integer center of `rect`, rounding toward negative infinity.
#[must_use]
pub fn center(rect: &Rect) -> Point {
    Point::new(
        (rect.min.x + rect.max.x) >> 1,
        (rect.min.y + rect.max.y) >> 1,
    )
}
