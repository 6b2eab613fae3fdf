use std::{
    fmt::Debug,
    path::Path,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use lazy_static::lazy_static;
use rusttype::Scale;

use crate::{text::VMetrics, Error};

lazy_static! {
    static ref GLOBAL_ID_CELL: AtomicU64 = AtomicU64::new(0);
}

/// Embeds a font in the binary.
#[macro_export]
macro_rules! include_font {
    ($path:expr) => {{
        let bytes = std::include_bytes!($path);
        $crate::text::Font::try_from_bytes(bytes as &'static [u8])
    }};
}

/// A TrueType font used to draw the counter. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Font {
    pub(crate) handle: Arc<FontData>,
}

impl Font {
    /// Parses a font from static bytes.
    pub fn try_from_bytes(bytes: &'static [u8]) -> crate::Result<Self> {
        rusttype::Font::try_from_bytes(bytes)
            .map(Self::from_rusttype)
            .ok_or(Error::InvalidFont)
    }

    /// Parses a font, taking ownership of `bytes`.
    pub fn try_from_vec(bytes: Vec<u8>) -> crate::Result<Self> {
        rusttype::Font::try_from_vec(bytes)
            .map(Self::from_rusttype)
            .ok_or(Error::InvalidFont)
    }

    /// Loads a font from the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        Self::try_from_vec(std::fs::read(path)?)
    }

    fn from_rusttype(font: rusttype::Font<'static>) -> Self {
        let id = GLOBAL_ID_CELL.fetch_add(1, Ordering::SeqCst);
        Self {
            handle: Arc::new(FontData { id, font }),
        }
    }

    /// The unique ID of this font. This depends on load order.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.handle.id
    }

    /// Returns the vertical metrics of this font at `size` pixels.
    #[must_use]
    pub fn metrics(&self, size: f32) -> VMetrics {
        self.handle.font.v_metrics(Scale::uniform(size)).into()
    }

    /// Returns the glyph for `c`.
    #[must_use]
    pub fn glyph(&self, c: char) -> rusttype::Glyph<'static> {
        self.handle.font.glyph(c)
    }

    /// Returns the kerning between two glyphs at `size` pixels.
    #[must_use]
    pub fn pair_kerning(&self, size: f32, a: rusttype::GlyphId, b: rusttype::GlyphId) -> f32 {
        self.handle.font.pair_kerning(Scale::uniform(size), a, b)
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.handle.id == other.handle.id
    }
}

#[derive(Debug)]
pub(crate) struct FontData {
    pub(crate) id: u64,
    pub(crate) font: rusttype::Font<'static>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            Font::try_from_bytes(b"definitely not a font"),
            Err(Error::InvalidFont)
        ));
        assert!(matches!(
            Font::try_from_vec(vec![0; 16]),
            Err(Error::InvalidFont)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Font::load("this/font/does/not/exist.ttf"),
            Err(Error::Io(_))
        ));
    }
}
