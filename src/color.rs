use approx::relative_eq;
use palette::{rgb::Srgba, Component, IntoComponent, Srgb};

/// A RGBA color with f32 components.
#[derive(Default, Clone, Debug, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl<U: Component + IntoComponent<f32>> From<Srgba<U>> for Color {
    fn from(color: Srgba<U>) -> Self {
        let color = color.into_format::<f32, f32>();
        Self::new(
            color.color.red,
            color.color.green,
            color.color.blue,
            color.alpha,
        )
    }
}

impl<U: Component + IntoComponent<f32>> From<Srgb<U>> for Color {
    fn from(color: Srgb<U>) -> Self {
        let color = color.into_format::<f32>();
        Self::new(color.red, color.green, color.blue, 1.)
    }
}

impl From<Color> for Srgba {
    fn from(color: Color) -> Self {
        Self::new(color.red, color.green, color.blue, color.alpha)
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::from_rgba8(r, g, b, a)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        Self([
            channel_to_u8(color.red),
            channel_to_u8(color.green),
            channel_to_u8(color.blue),
            channel_to_u8(color.alpha),
        ])
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(color: Color) -> Self {
        let [red, green, blue, alpha] = image::Rgba::<u8>::from(color).0;
        Self::from_rgba8(red, green, blue, alpha)
    }
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.max(0.).min(1.) * 255.).round() as u8
}

impl Color {
    /// Creates a color from its red, green, blue and alpha components, each
    /// ranging from 0.0 to 1.0.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a color from 8-bit components.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Srgba::<u8>::new(red, green, blue, alpha).into()
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn from_rgb_hex(rgb: u32) -> Self {
        Self::from_rgba8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> f32 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> f32 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> f32 {
        self.blue
    }

    /// Returns the alpha component.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns the color as an f32 array.
    #[must_use]
    pub const fn rgba(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Returns if the color has a non-zero alpha value.
    #[must_use]
    pub fn visible(&self) -> bool {
        !relative_eq!(self.alpha, 0.)
    }

    /// Returns a new color using red, green, and blue from `self` and the
    /// parameter `alpha`.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Color {
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const BLACK: Self = Self::new(0., 0., 0., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const BLUE: Self = Self::new(0., 0., 1., 1.);
    /// Fully transparent black.
    pub const CLEAR_BLACK: Self = Self::new(0., 0., 0., 0.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const CRIMSON: Self = Self::new(220. / 255., 20. / 255., 60. / 255., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const LIME: Self = Self::new(0., 1., 0., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const ORANGE: Self = Self::new(1., 165. / 255., 0., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const RED: Self = Self::new(1., 0., 0., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const WHITE: Self = Self::new(1., 1., 1., 1.);
    /// The material design red (`#F44336`) used as the default badge fill.
    pub const MATERIAL_RED: Self = Self::new(244. / 255., 67. / 255., 54. / 255., 1.);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_conversions() {
        let color = Color::from_rgba8(244, 67, 54, 255);
        assert_eq!(image::Rgba::from(color), image::Rgba([244, 67, 54, 255]));
        assert_eq!(Color::from_rgb_hex(0x00F4_4336), color);
        assert_eq!(image::Rgba::from(Color::MATERIAL_RED), image::Rgba([244, 67, 54, 255]));
    }

    #[test]
    fn out_of_range_channels_clamp() {
        let color = Color::new(2., -1., 0.5, 1.);
        assert_eq!(image::Rgba::from(color), image::Rgba([255, 0, 128, 255]));
    }

    #[test]
    fn tiny_skia_conversion_clamps() {
        let color = tiny_skia::Color::from(Color::new(1.5, 0., 0.2, 1.));
        assert_eq!(color.to_color_u8(), tiny_skia::ColorU8::from_rgba(255, 0, 51, 255));
    }

    #[test]
    fn visibility() {
        assert!(Color::RED.visible());
        assert!(!Color::RED.with_alpha(0.).visible());
    }
}
