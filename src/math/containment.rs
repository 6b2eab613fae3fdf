use super::{Rect, Vector};

/// The outcome of [`move_in`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    /// The candidate was already inside of the container and was left alone.
    AlreadyInside,
    /// The candidate was translated so that it is now inside of the container.
    Moved,
    /// The candidate is wider or taller than the container and can never fit.
    /// It was left alone.
    TooLarge,
}

impl Containment {
    /// Returns true if the candidate was translated.
    #[must_use]
    pub const fn moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Translates `candidate` so that it lies inside of `container`, without
/// changing its size.
///
/// Each axis is handled independently: an edge protruding past the top or
/// left of the container is moved flush to that edge, and then an edge
/// protruding past the bottom or right is moved flush to that edge.
pub fn move_in(container: &Rect, candidate: &mut Rect) -> Containment {
    if container.contains_box(candidate) {
        return Containment::AlreadyInside;
    }

    let size = candidate.size();
    if size.width > container.width() || size.height > container.height() {
        return Containment::TooLarge;
    }

    let mut offset = Vector::zero();

    if candidate.min.y < container.min.y {
        offset.y = container.min.y - candidate.min.y;
    }
    if candidate.max.y + offset.y > container.max.y {
        offset.y = container.max.y - candidate.max.y;
    }

    if candidate.min.x < container.min.x {
        offset.x = container.min.x - candidate.min.x;
    }
    if candidate.max.x + offset.x > container.max.x {
        offset.x = container.max.x - candidate.max.x;
    }

    *candidate = candidate.translate(offset);
    tracing::trace!(?offset, "moved rect into container");
    Containment::Moved
}
