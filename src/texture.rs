use std::{
    convert::TryFrom,
    path::Path,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use image::{DynamicImage, RgbaImage};
use lazy_static::lazy_static;

use crate::math::{Rect, Size};

lazy_static! {
    static ref GLOBAL_ID_CELL: AtomicU64 = AtomicU64::new(0);
}

/// Embeds a texture in the binary.
#[macro_export]
macro_rules! include_texture {
    ($image_path:expr) => {{
        let image_bytes = std::include_bytes!($image_path);
        <$crate::texture::Texture as std::convert::TryFrom<&[u8]>>::try_from(image_bytes)
    }};
}

/// An image that badges are drawn on top of. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Texture {
    id: u64,
    /// The image behind the texture.
    pub image: Arc<RgbaImage>,
}

impl Texture {
    /// The unique ID of this texture. This depends on load order and is not
    /// related to the image data in any way.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Creates a new texture from an image.
    #[must_use]
    pub fn new(image: &DynamicImage) -> Self {
        Self::from_rgba(image.to_rgba8())
    }

    /// Creates a new texture that takes ownership of `image`.
    #[must_use]
    pub fn from_rgba(image: RgbaImage) -> Self {
        let id = GLOBAL_ID_CELL.fetch_add(1, Ordering::SeqCst);
        Self {
            id,
            image: Arc::new(image),
        }
    }

    /// Loads a texture from an image at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let img = image::open(path)?;

        Ok(Self::new(&img))
    }

    /// Returns the size of the image.
    #[must_use]
    pub fn size(&self) -> Size {
        let (w, h) = self.image.dimensions();
        Size::new(w as i32, h as i32)
    }

    /// Returns the bounds of the image, with its origin at `(0, 0)`.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }
}

impl<'a> TryFrom<&'a [u8]> for Texture {
    type Error = crate::Error;

    fn try_from(bytes: &[u8]) -> crate::Result<Self> {
        let img = image::load_from_memory(bytes)?;

        Ok(Self::new(&img))
    }
}

impl From<RgbaImage> for Texture {
    fn from(image: RgbaImage) -> Self {
        Self::from_rgba(image)
    }
}

impl From<&DynamicImage> for Texture {
    fn from(image: &DynamicImage) -> Self {
        Self::new(image)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba};

    use super::*;
    use crate::math::Point;

    #[test]
    fn ids_are_unique() {
        let a = Texture::from_rgba(RgbaImage::new(1, 1));
        let b = a.clone();
        let c = Texture::from_rgba(RgbaImage::new(1, 1));
        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn bounds_start_at_origin() {
        let texture = Texture::from_rgba(RgbaImage::new(12, 7));
        assert_eq!(texture.size(), Size::new(12, 7));
        assert_eq!(
            texture.bounds(),
            Rect::new(Point::new(0, 0), Point::new(12, 7))
        );
    }

    #[test]
    fn decodes_png_bytes() {
        let image = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let texture = Texture::try_from(bytes.as_slice()).unwrap();
        assert_eq!(texture.size(), Size::new(3, 2));
        assert_eq!(texture.image.get_pixel(2, 1), &Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(matches!(
            Texture::try_from(&b"not an image"[..]),
            Err(crate::Error::Image(_))
        ));
    }
}
