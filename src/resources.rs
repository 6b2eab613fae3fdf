use std::{collections::HashMap, fmt::Display};

use crate::{color::Color, text::Font, texture::Texture, Error};

/// Identifies a color, dimension, font or image provided by [`Resources`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ResourceId(pub u32);

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

/// The kinds of values [`Resources`] can resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A [`Color`].
    Color,
    /// A length in pixels.
    Dimension,
    /// A [`Font`].
    Font,
    /// A [`Texture`].
    Texture,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Color => "color",
            Self::Dimension => "dimension",
            Self::Font => "font",
            Self::Texture => "texture",
        })
    }
}

/// Resolves resource ids into concrete values.
///
/// Implement this to let a [`BadgeBuilder`](crate::BadgeBuilder) look up its
/// colors, sizes, font and image from an application's own resource store.
pub trait Resources {
    /// Returns the color for `id`.
    fn color(&self, id: ResourceId) -> crate::Result<Color>;
    /// Returns the dimension for `id`, in pixels.
    fn dimension(&self, id: ResourceId) -> crate::Result<f32>;
    /// Returns the font for `id`.
    fn font(&self, id: ResourceId) -> crate::Result<Font>;
    /// Returns the image for `id`.
    fn texture(&self, id: ResourceId) -> crate::Result<Texture>;

    /// Returns the dimension for `id` truncated to a whole pixel offset.
    fn dimension_pixel_offset(&self, id: ResourceId) -> crate::Result<f32> {
        self.dimension(id).map(f32::trunc)
    }
}

/// A [`Resources`] implementation backed by in-memory maps.
#[derive(Default, Clone, Debug)]
pub struct ResourceTable {
    colors: HashMap<ResourceId, Color>,
    dimensions: HashMap<ResourceId, f32>,
    fonts: HashMap<ResourceId, Font>,
    textures: HashMap<ResourceId, Texture>,
}

impl ResourceTable {
    /// Returns an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style function. Registers `color` as `id` and returns self.
    #[must_use]
    pub fn with_color(mut self, id: impl Into<ResourceId>, color: Color) -> Self {
        self.colors.insert(id.into(), color);
        self
    }

    /// Builder-style function. Registers `pixels` as `id` and returns self.
    #[must_use]
    pub fn with_dimension(mut self, id: impl Into<ResourceId>, pixels: f32) -> Self {
        self.dimensions.insert(id.into(), pixels);
        self
    }

    /// Builder-style function. Registers `font` as `id` and returns self.
    #[must_use]
    pub fn with_font(mut self, id: impl Into<ResourceId>, font: Font) -> Self {
        self.fonts.insert(id.into(), font);
        self
    }

    /// Builder-style function. Registers `texture` as `id` and returns self.
    #[must_use]
    pub fn with_texture(mut self, id: impl Into<ResourceId>, texture: Texture) -> Self {
        self.textures.insert(id.into(), texture);
        self
    }
}

fn lookup<T: Clone>(map: &HashMap<ResourceId, T>, kind: ResourceKind, id: ResourceId) -> crate::Result<T> {
    map.get(&id)
        .cloned()
        .ok_or(Error::UnknownResource { kind, id })
}

impl Resources for ResourceTable {
    fn color(&self, id: ResourceId) -> crate::Result<Color> {
        lookup(&self.colors, ResourceKind::Color, id)
    }

    fn dimension(&self, id: ResourceId) -> crate::Result<f32> {
        lookup(&self.dimensions, ResourceKind::Dimension, id)
    }

    fn font(&self, id: ResourceId) -> crate::Result<Font> {
        lookup(&self.fonts, ResourceKind::Font, id)
    }

    fn texture(&self, id: ResourceId) -> crate::Result<Texture> {
        lookup(&self.textures, ResourceKind::Texture, id)
    }
}
