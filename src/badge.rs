use std::fmt::Display;

use image::RgbaImage;

use crate::{
    canvas::Canvas,
    color::Color,
    gravity::{Gravity, LayoutDirection},
    math::{center, move_in, Containment, Rect, Size},
    resources::{ResourceId, ResourceKind, Resources},
    shape::{Fill, Shape, Stroke},
    text::{Font, Text},
    texture::Texture,
    Error,
};

/// The largest counter that can be displayed. Larger counters are shown as
/// `"99+"`, regardless of the configured maximum.
pub const MAXIMUM_COUNT: u32 = 99;
/// The badge diameter used when none is configured, in pixels.
pub const DEFAULT_BADGE_SIZE: f32 = 36.;
/// The border width used when none is configured, in pixels.
pub const DEFAULT_BORDER_SIZE: f32 = 2.;
/// The text color used when none is configured.
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;
/// The badge fill color used when none is configured.
pub const DEFAULT_BADGE_COLOR: Color = Color::MATERIAL_RED;
/// The border color used when none is configured.
pub const DEFAULT_BORDER_COLOR: Color = Color::WHITE;

/// The largest badge diameter and edge adjustment used for placement, in
/// pixels. Larger values are clamped.
pub const MAXIMUM_BADGE_EXTENT: f32 = 4096.;

const OVERFLOW_TEXT_RATIO: f32 = 0.45;
const COUNTER_TEXT_RATIO: f32 = 0.55;

/// The optional settings of a [`Badge`]. Every `None` field falls back to its
/// documented default.
#[derive(Default, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BadgeOptions {
    /// The counter text color. Defaults to [`DEFAULT_TEXT_COLOR`].
    pub text_color: Option<Color>,
    /// The counter font. Defaults to the built-in counter font.
    #[cfg_attr(feature = "serialization", serde(skip))]
    pub text_font: Option<Font>,
    /// The badge fill color. Defaults to [`DEFAULT_BADGE_COLOR`].
    pub badge_color: Option<Color>,
    /// The border color. Defaults to [`DEFAULT_BORDER_COLOR`].
    pub badge_border_color: Option<Color>,
    /// The border width in pixels. Defaults to [`DEFAULT_BORDER_SIZE`].
    pub badge_border_size: Option<f32>,
    /// The badge diameter in pixels. Defaults to [`DEFAULT_BADGE_SIZE`].
    pub badge_size: Option<f32>,
    /// Where the badge is anchored. Defaults to `TOP | END`.
    pub badge_gravity: Option<Gravity>,
    /// The distance between the badge and the edges it is anchored to, in
    /// pixels. Defaults to 0.
    pub badge_margin: Option<f32>,
    /// Whether the border is drawn. Defaults to true.
    pub show_border: Option<bool>,
    /// The largest counter shown verbatim. Defaults to, and is capped at,
    /// [`MAXIMUM_COUNT`].
    pub maximum_counter: Option<u32>,
    /// Whether the counter text is drawn. Defaults to true.
    pub show_counter: Option<bool>,
    /// The direction used to resolve [`Gravity::START`] and
    /// [`Gravity::END`]. Defaults to left-to-right.
    pub layout_direction: Option<LayoutDirection>,
}

/// Draws a counter badge on top of an image.
///
/// ```rust
/// use drawable_badge::{image::RgbaImage, prelude::*};
///
/// let badge = Badge::builder()
///     .texture(Texture::from_rgba(RgbaImage::new(64, 64)))
///     .badge_size(24.)
///     .build()?;
/// let rendered = badge.render(7);
/// assert_eq!(rendered.dimensions(), (64, 64));
/// # Ok::<(), drawable_badge::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Badge {
    texture: Texture,
    text_color: Color,
    text_font: Option<Font>,
    badge_color: Color,
    badge_border_color: Color,
    badge_border_size: f32,
    badge_size: f32,
    badge_gravity: Gravity,
    badge_margin: f32,
    show_border: bool,
    maximum_counter: u32,
    show_counter: bool,
    layout_direction: LayoutDirection,
}

/// Where a badge lands when rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeLayout {
    /// The size of the rendered image. Large enough to hold both the source
    /// image and the badge.
    pub canvas: Size,
    /// The badge's bounds within the rendered image.
    pub badge: Rect,
    /// How the badge was kept inside of the rendered image.
    pub containment: Containment,
}

impl Badge {
    /// Creates a badge for `texture`, using defaults for every option that
    /// is `None`.
    #[must_use]
    pub fn new(texture: Texture, options: &BadgeOptions) -> Self {
        Self {
            texture,
            text_color: options.text_color.unwrap_or(DEFAULT_TEXT_COLOR),
            text_font: options.text_font.clone(),
            badge_color: options.badge_color.unwrap_or(DEFAULT_BADGE_COLOR),
            badge_border_color: options.badge_border_color.unwrap_or(DEFAULT_BORDER_COLOR),
            badge_border_size: options.badge_border_size.unwrap_or(DEFAULT_BORDER_SIZE),
            badge_size: options.badge_size.unwrap_or(DEFAULT_BADGE_SIZE),
            badge_gravity: options.badge_gravity.unwrap_or_default(),
            badge_margin: options.badge_margin.unwrap_or(0.),
            show_border: options.show_border.unwrap_or(true),
            maximum_counter: options.maximum_counter.unwrap_or(MAXIMUM_COUNT),
            show_counter: options.show_counter.unwrap_or(true),
            layout_direction: options.layout_direction.unwrap_or_default(),
        }
    }

    /// Returns a builder with nothing set.
    #[must_use]
    pub fn builder<'a>() -> BadgeBuilder<'a> {
        BadgeBuilder::new()
    }

    /// The image the badge is drawn on.
    #[must_use]
    pub const fn texture(&self) -> &Texture {
        &self.texture
    }

    /// The counter text color.
    #[must_use]
    pub const fn text_color(&self) -> Color {
        self.text_color
    }

    /// The counter font, if one was configured.
    #[must_use]
    pub const fn text_font(&self) -> Option<&Font> {
        self.text_font.as_ref()
    }

    /// The badge fill color.
    #[must_use]
    pub const fn badge_color(&self) -> Color {
        self.badge_color
    }

    /// The border color.
    #[must_use]
    pub const fn badge_border_color(&self) -> Color {
        self.badge_border_color
    }

    /// The border width in pixels.
    #[must_use]
    pub const fn badge_border_size(&self) -> f32 {
        self.badge_border_size
    }

    /// The badge diameter in pixels.
    #[must_use]
    pub const fn badge_size(&self) -> f32 {
        self.badge_size
    }

    /// Where the badge is anchored.
    #[must_use]
    pub const fn badge_gravity(&self) -> Gravity {
        self.badge_gravity
    }

    /// The badge margin in pixels.
    #[must_use]
    pub const fn badge_margin(&self) -> f32 {
        self.badge_margin
    }

    /// Whether the border is drawn.
    #[must_use]
    pub const fn show_border(&self) -> bool {
        self.show_border
    }

    /// The configured maximum counter. Counters above
    /// `min(maximum_counter, MAXIMUM_COUNT)` are shown as `"{max}+"`.
    #[must_use]
    pub const fn maximum_counter(&self) -> u32 {
        self.maximum_counter
    }

    /// Whether the counter text is drawn.
    #[must_use]
    pub const fn show_counter(&self) -> bool {
        self.show_counter
    }

    /// The direction used to resolve relative gravity.
    #[must_use]
    pub const fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Returns the badge's bounds relative to `bounds`, before any
    /// adjustment to keep it inside of the rendered image.
    ///
    /// The badge is pushed away from the edges it is anchored to by the
    /// margin, plus the border width when the border is shown.
    #[must_use]
    pub fn badge_rect(&self, bounds: &Rect) -> Rect {
        let border_size = if self.show_border {
            self.badge_border_size
        } else {
            0.
        };
        let adjust = clamp_extent(border_size + self.badge_margin, -MAXIMUM_BADGE_EXTENT) as i32;
        let size = clamp_extent(self.badge_size, 0.) as i32;
        self.badge_gravity
            .apply(size, size, bounds, adjust, adjust, self.layout_direction)
    }

    /// Computes the size of the rendered image and where the badge is drawn
    /// within it.
    #[must_use]
    pub fn layout(&self) -> BadgeLayout {
        let bounds = self.texture.bounds();
        let mut badge = self.badge_rect(&bounds);
        let canvas = Rect::from_size(bounds.union(&badge).size());
        let containment = move_in(&canvas, &mut badge);
        BadgeLayout {
            canvas: canvas.size(),
            badge,
            containment,
        }
    }

    /// Renders the source image with `counter` drawn in the badge. A counter
    /// of 0 returns the source image unchanged.
    #[must_use]
    pub fn render(&self, counter: u32) -> RgbaImage {
        if counter == 0 {
            return self.texture.image.as_ref().clone();
        }

        let layout = self.layout();
        tracing::debug!(
            texture = self.texture.id(),
            counter,
            canvas = ?layout.canvas,
            badge = ?layout.badge,
            "rendering badge"
        );

        let mut canvas = match Canvas::new(layout.canvas) {
            Some(canvas) => canvas,
            None => {
                tracing::warn!(canvas = ?layout.canvas, "badge canvas can not be allocated");
                return self.texture.image.as_ref().clone();
            }
        };
        canvas.draw_image(&self.texture.image, 0, 0);

        let mut shape = Shape::oval(layout.badge.to_f32()).fill(Fill::new(self.badge_color));
        if self.show_border {
            shape = shape.stroke(Stroke::new(self.badge_border_color).line_width(self.badge_border_size));
        }
        shape.render(&mut canvas);

        if self.show_counter {
            let label = CounterLabel::new(counter, self.maximum_counter);
            let span = Text::prepare(
                &label.text,
                self.text_font.as_ref(),
                label.text_size(layout.badge.height()),
            );
            let origin = span.centered_baseline(center(&layout.badge).to_f32());
            span.render_baseline_at(&mut canvas, origin, self.text_color);
        }

        canvas.into_image()
    }

    /// Renders `counter` like [`render()`](Self::render) and encodes the
    /// result as a PNG.
    #[cfg(feature = "png")]
    pub fn render_png(&self, counter: u32) -> crate::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(self.render(counter))
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Limits `pixels` to `minimum..=MAXIMUM_BADGE_EXTENT`. NaN becomes 0.
fn clamp_extent(pixels: f32, minimum: f32) -> f32 {
    if pixels.is_nan() {
        0.
    } else {
        pixels.max(minimum).min(MAXIMUM_BADGE_EXTENT)
    }
}

/// The text shown inside of a badge for a counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterLabel {
    /// The text to draw.
    pub text: String,
    /// True if the counter exceeded the maximum and is shown as `"{max}+"`.
    pub overflowed: bool,
}

impl CounterLabel {
    /// Returns the label for `counter`, given the configured
    /// `maximum_counter`. The maximum is capped at [`MAXIMUM_COUNT`].
    #[must_use]
    pub fn new(counter: u32, maximum_counter: u32) -> Self {
        let max = maximum_counter.min(MAXIMUM_COUNT);
        if counter > max {
            Self {
                text: format!("{}+", max),
                overflowed: true,
            }
        } else {
            Self {
                text: counter.to_string(),
                overflowed: false,
            }
        }
    }

    /// Returns the font size for this label inside of a badge that is
    /// `badge_height` pixels tall. Overflowed labels are slightly smaller to
    /// make room for the `+`.
    #[must_use]
    pub fn text_size(&self, badge_height: i32) -> f32 {
        let ratio = if self.overflowed {
            OVERFLOW_TEXT_RATIO
        } else {
            COUNTER_TEXT_RATIO
        };
        badge_height as f32 * ratio
    }
}

impl Display for CounterLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Clone, Debug)]
enum Setting<T> {
    Value(T),
    Resource(ResourceId),
}

impl<T> Setting<T> {
    fn resolve<F>(
        self,
        resources: Option<&dyn Resources>,
        kind: ResourceKind,
        lookup: F,
    ) -> crate::Result<T>
    where
        F: FnOnce(&dyn Resources, ResourceId) -> crate::Result<T>,
    {
        match self {
            Self::Value(value) => Ok(value),
            Self::Resource(id) => {
                let resources = resources.ok_or(Error::NoResources { kind, id })?;
                lookup(resources, id)
            }
        }
    }
}

fn resolve_optional<T, F>(
    setting: Option<Setting<T>>,
    resources: Option<&dyn Resources>,
    kind: ResourceKind,
    lookup: F,
) -> crate::Result<Option<T>>
where
    F: FnOnce(&dyn Resources, ResourceId) -> crate::Result<T>,
{
    setting
        .map(|setting| setting.resolve(resources, kind, lookup))
        .transpose()
}

/// Collects the settings of a [`Badge`].
///
/// Each setting has a raw-value setter and, for colors, dimensions, the font
/// and the image, a `*_resource` setter that records a [`ResourceId`] to be
/// looked up in [`with_resources()`](Self::with_resources) when the badge is
/// built. Setting a field again replaces the earlier value, whichever setter
/// was used.
#[derive(Default)]
#[must_use]
pub struct BadgeBuilder<'a> {
    resources: Option<&'a dyn Resources>,
    texture: Option<Setting<Texture>>,
    text_color: Option<Setting<Color>>,
    text_font: Option<Setting<Font>>,
    badge_color: Option<Setting<Color>>,
    badge_border_color: Option<Setting<Color>>,
    badge_border_size: Option<Setting<f32>>,
    badge_size: Option<Setting<f32>>,
    badge_margin: Option<Setting<f32>>,
    badge_gravity: Option<Gravity>,
    show_border: Option<bool>,
    maximum_counter: Option<u32>,
    show_counter: Option<bool>,
    layout_direction: Option<LayoutDirection>,
}

impl<'a> BadgeBuilder<'a> {
    /// Returns a builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resources that `*_resource` settings are resolved against.
    pub fn with_resources(mut self, resources: &'a dyn Resources) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Applies every option that is set in `options`, replacing earlier
    /// values for those fields.
    pub fn options(mut self, options: &BadgeOptions) -> Self {
        fn value<T: Clone>(option: &Option<T>) -> Option<Setting<T>> {
            option.clone().map(Setting::Value)
        }
        self.text_color = value(&options.text_color).or(self.text_color);
        self.text_font = value(&options.text_font).or(self.text_font);
        self.badge_color = value(&options.badge_color).or(self.badge_color);
        self.badge_border_color = value(&options.badge_border_color).or(self.badge_border_color);
        self.badge_border_size = value(&options.badge_border_size).or(self.badge_border_size);
        self.badge_size = value(&options.badge_size).or(self.badge_size);
        self.badge_margin = value(&options.badge_margin).or(self.badge_margin);
        self.badge_gravity = options.badge_gravity.or(self.badge_gravity);
        self.show_border = options.show_border.or(self.show_border);
        self.maximum_counter = options.maximum_counter.or(self.maximum_counter);
        self.show_counter = options.show_counter.or(self.show_counter);
        self.layout_direction = options.layout_direction.or(self.layout_direction);
        self
    }

    /// Sets the image the badge is drawn on.
    pub fn texture(mut self, texture: Texture) -> Self {
        self.texture = Some(Setting::Value(texture));
        self
    }

    /// Sets the image the badge is drawn on from a resource.
    pub fn texture_resource(mut self, id: impl Into<ResourceId>) -> Self {
        self.texture = Some(Setting::Resource(id.into()));
        self
    }

    /// Sets the counter text color.
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(Setting::Value(color));
        self
    }

    /// Sets the counter text color from a resource.
    pub fn text_color_resource(mut self, id: impl Into<ResourceId>) -> Self {
        self.text_color = Some(Setting::Resource(id.into()));
        self
    }

    /// Sets the counter font.
    pub fn text_font(mut self, font: Font) -> Self {
        self.text_font = Some(Setting::Value(font));
        self
    }

    /// Sets the counter font from a resource.
    pub fn text_font_resource(mut self, id: impl Into<ResourceId>) -> Self {
        self.text_font = Some(Setting::Resource(id.into()));
        self
    }

    /// Sets the badge fill color.
    pub fn badge_color(mut self, color: Color) -> Self {
        self.badge_color = Some(Setting::Value(color));
        self
    }

    /// Sets the badge fill color from a resource.
    pub fn badge_color_resource(mut self, id: impl Into<ResourceId>) -> Self {
        self.badge_color = Some(Setting::Resource(id.into()));
        self
    }

    /// Sets the border color.
    pub fn badge_border_color(mut self, color: Color) -> Self {
        self.badge_border_color = Some(Setting::Value(color));
        self
    }

    /// Sets the border color from a resource.
    pub fn badge_border_color_resource(mut self, id: impl Into<ResourceId>) -> Self {
        self.badge_border_color = Some(Setting::Resource(id.into()));
        self
    }

    /// Sets the border width in pixels.
    pub fn badge_border_size(mut self, pixels: f32) -> Self {
        self.badge_border_size = Some(Setting::Value(pixels));
        self
    }

    /// Sets the border width from a dimension resource.
    pub fn badge_border_size_resource(mut self, id: impl Into<ResourceId>) -> Self {
        self.badge_border_size = Some(Setting::Resource(id.into()));
        self
    }

    /// Sets the badge diameter in pixels.
    pub fn badge_size(mut self, pixels: f32) -> Self {
        self.badge_size = Some(Setting::Value(pixels));
        self
    }

    /// Sets the badge diameter from a dimension resource.
    pub fn badge_size_resource(mut self, id: impl Into<ResourceId>) -> Self {
        self.badge_size = Some(Setting::Resource(id.into()));
        self
    }

    /// Sets the distance between the badge and the edges it is anchored to,
    /// in pixels.
    pub fn badge_margin(mut self, pixels: f32) -> Self {
        self.badge_margin = Some(Setting::Value(pixels));
        self
    }

    /// Sets the badge margin from a dimension resource.
    pub fn badge_margin_resource(mut self, id: impl Into<ResourceId>) -> Self {
        self.badge_margin = Some(Setting::Resource(id.into()));
        self
    }

    /// Sets where the badge is anchored relative to the image.
    pub fn badge_gravity(mut self, gravity: Gravity) -> Self {
        self.badge_gravity = Some(gravity);
        self
    }

    /// Sets whether the border is drawn.
    pub fn show_border(mut self, show_border: bool) -> Self {
        self.show_border = Some(show_border);
        self
    }

    /// Sets the largest counter shown verbatim. Values above
    /// [`MAXIMUM_COUNT`] behave like [`MAXIMUM_COUNT`].
    pub fn maximum_counter(mut self, maximum_counter: u32) -> Self {
        self.maximum_counter = Some(maximum_counter);
        self
    }

    /// Sets whether the counter text is drawn.
    pub fn show_counter(mut self, show_counter: bool) -> Self {
        self.show_counter = Some(show_counter);
        self
    }

    /// Sets the direction used to resolve [`Gravity::START`] and
    /// [`Gravity::END`].
    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = Some(direction);
        self
    }

    /// Resolves every resource and builds the badge.
    ///
    /// Fails with [`Error::MissingImage`] if no image was set, and with the
    /// resolver's error if a resource can not be resolved.
    pub fn build(self) -> crate::Result<Badge> {
        let Self {
            resources,
            texture,
            text_color,
            text_font,
            badge_color,
            badge_border_color,
            badge_border_size,
            badge_size,
            badge_margin,
            badge_gravity,
            show_border,
            maximum_counter,
            show_counter,
            layout_direction,
        } = self;

        let texture = texture
            .ok_or(Error::MissingImage)?
            .resolve(resources, ResourceKind::Texture, |r, id| r.texture(id))?;

        let options = BadgeOptions {
            text_color: resolve_optional(text_color, resources, ResourceKind::Color, |r, id| {
                r.color(id)
            })?,
            text_font: resolve_optional(text_font, resources, ResourceKind::Font, |r, id| {
                r.font(id)
            })?,
            badge_color: resolve_optional(badge_color, resources, ResourceKind::Color, |r, id| {
                r.color(id)
            })?,
            badge_border_color: resolve_optional(
                badge_border_color,
                resources,
                ResourceKind::Color,
                |r, id| r.color(id),
            )?,
            badge_border_size: resolve_optional(
                badge_border_size,
                resources,
                ResourceKind::Dimension,
                |r, id| r.dimension_pixel_offset(id),
            )?,
            badge_size: resolve_optional(badge_size, resources, ResourceKind::Dimension, |r, id| {
                r.dimension_pixel_offset(id)
            })?,
            badge_margin: resolve_optional(
                badge_margin,
                resources,
                ResourceKind::Dimension,
                |r, id| r.dimension_pixel_offset(id),
            )?,
            badge_gravity,
            show_border,
            maximum_counter,
            show_counter,
            layout_direction,
        };

        let badge = Badge::new(texture, &options);
        tracing::debug!(
            texture = badge.texture.id(),
            size = badge.badge_size,
            gravity = ?badge.badge_gravity,
            maximum_counter = badge.maximum_counter,
            "built badge"
        );
        Ok(badge)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{math::Point, resources::ResourceTable};

    fn texture(width: u32, height: u32) -> Texture {
        Texture::from_rgba(RgbaImage::new(width, height))
    }

    fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Rect {
        Rect::new(Point::new(left, top), Point::new(right, bottom))
    }

    #[test]
    fn build_without_texture_fails() {
        assert!(matches!(
            Badge::builder().badge_size(10.).build(),
            Err(Error::MissingImage)
        ));
    }

    #[test]
    fn defaults() {
        let badge = Badge::builder().texture(texture(10, 10)).build().unwrap();
        assert_eq!(badge.text_color(), DEFAULT_TEXT_COLOR);
        assert!(badge.text_font().is_none());
        assert_eq!(badge.badge_color(), DEFAULT_BADGE_COLOR);
        assert_eq!(badge.badge_border_color(), DEFAULT_BORDER_COLOR);
        assert_relative_eq!(badge.badge_border_size(), DEFAULT_BORDER_SIZE);
        assert_relative_eq!(badge.badge_size(), DEFAULT_BADGE_SIZE);
        assert_eq!(badge.badge_gravity(), Gravity::TOP | Gravity::END);
        assert_relative_eq!(badge.badge_margin(), 0.);
        assert!(badge.show_border());
        assert_eq!(badge.maximum_counter(), MAXIMUM_COUNT);
        assert!(badge.show_counter());
        assert_eq!(badge.layout_direction(), LayoutDirection::LeftToRight);

        let constructed = Badge::new(texture(10, 10), &BadgeOptions::default());
        assert_relative_eq!(constructed.badge_size(), DEFAULT_BADGE_SIZE);
        assert_eq!(constructed.badge_gravity(), badge.badge_gravity());
    }

    #[test]
    fn later_setters_win() {
        let resources = ResourceTable::new()
            .with_color(ResourceId(1), Color::BLUE)
            .with_dimension(ResourceId(2), 17.9);
        let badge = Badge::builder()
            .with_resources(&resources)
            .texture(texture(10, 10))
            .badge_color(Color::LIME)
            .badge_color_resource(ResourceId(1))
            .badge_size_resource(ResourceId(2))
            .text_color_resource(ResourceId(1))
            .text_color(Color::BLACK)
            .maximum_counter(5)
            .maximum_counter(12)
            .build()
            .unwrap();
        assert_eq!(badge.badge_color(), Color::BLUE);
        assert_eq!(badge.text_color(), Color::BLACK);
        // Dimension resources resolve to whole pixels.
        assert_relative_eq!(badge.badge_size(), 17.);
        assert_eq!(badge.maximum_counter(), 12);
    }

    #[test]
    fn resources_resolve_textures() {
        let image = texture(3, 4);
        let resources = ResourceTable::new().with_texture(ResourceId(7), image.clone());
        let badge = Badge::builder()
            .with_resources(&resources)
            .texture_resource(ResourceId(7))
            .build()
            .unwrap();
        assert_eq!(badge.texture().id(), image.id());
    }

    #[test]
    fn unresolvable_resources_fail() {
        let resources = ResourceTable::new();
        assert!(matches!(
            Badge::builder()
                .with_resources(&resources)
                .texture(texture(1, 1))
                .badge_margin_resource(ResourceId(3))
                .build(),
            Err(Error::UnknownResource {
                kind: ResourceKind::Dimension,
                id: ResourceId(3)
            })
        ));

        assert!(matches!(
            Badge::builder()
                .texture(texture(1, 1))
                .badge_border_color_resource(ResourceId(4))
                .build(),
            Err(Error::NoResources {
                kind: ResourceKind::Color,
                ..
            })
        ));

        assert!(matches!(
            Badge::builder().texture_resource(ResourceId(5)).build(),
            Err(Error::NoResources {
                kind: ResourceKind::Texture,
                ..
            })
        ));
    }

    #[test]
    fn options_only_replace_what_is_set() {
        let options = BadgeOptions {
            badge_size: Some(20.),
            show_border: Some(false),
            ..BadgeOptions::default()
        };
        let badge = Badge::builder()
            .texture(texture(10, 10))
            .badge_color(Color::BLUE)
            .badge_size(50.)
            .options(&options)
            .build()
            .unwrap();
        assert_eq!(badge.badge_color(), Color::BLUE);
        assert_relative_eq!(badge.badge_size(), 20.);
        assert!(!badge.show_border());
    }

    #[test]
    fn counter_labels() {
        assert_eq!(CounterLabel::new(5, 99).text, "5");
        assert_eq!(CounterLabel::new(99, 99).text, "99");
        assert_eq!(CounterLabel::new(100, 99).text, "99+");
        assert!(CounterLabel::new(100, 99).overflowed);
        assert_eq!(CounterLabel::new(10, 9).to_string(), "9+");
        // The maximum is capped.
        assert_eq!(CounterLabel::new(150, 500).text, "99+");
        assert_eq!(CounterLabel::new(99, 500).text, "99");
        assert_eq!(CounterLabel::new(1, 0).text, "0+");
    }

    #[test]
    fn label_text_sizes() {
        assert_relative_eq!(CounterLabel::new(3, 99).text_size(20), 11.);
        assert_relative_eq!(CounterLabel::new(300, 99).text_size(20), 9.);
    }

    #[test]
    fn badge_rect_is_pushed_in_by_border_and_margin() {
        let bounds = rect(0, 0, 100, 100);
        let badge = Badge::builder()
            .texture(texture(100, 100))
            .badge_size(30.)
            .badge_border_size(2.5)
            .badge_margin(4.)
            .build()
            .unwrap();
        // 2.5 + 4 truncates to 6.
        assert_eq!(badge.badge_rect(&bounds), rect(64, 6, 94, 36));

        let borderless = Badge::builder()
            .texture(texture(100, 100))
            .badge_size(30.)
            .badge_border_size(2.5)
            .badge_margin(4.)
            .show_border(false)
            .badge_gravity(Gravity::BOTTOM | Gravity::START)
            .build()
            .unwrap();
        assert_eq!(borderless.badge_rect(&bounds), rect(4, 66, 34, 96));
    }

    #[test]
    fn layout_inside_image() {
        let badge = Badge::builder()
            .texture(texture(64, 48))
            .badge_size(20.)
            .build()
            .unwrap();
        let layout = badge.layout();
        assert_eq!(layout.canvas, Size::new(64, 48));
        assert_eq!(layout.badge, rect(42, 2, 62, 22));
        assert_eq!(layout.containment, Containment::AlreadyInside);
    }

    #[test]
    fn layout_grows_for_straddling_badges() {
        // A negative margin pulls the badge past the top right corner.
        let badge = Badge::builder()
            .texture(texture(40, 40))
            .badge_size(20.)
            .show_border(false)
            .badge_margin(-10.)
            .build()
            .unwrap();
        assert_eq!(badge.badge_rect(&rect(0, 0, 40, 40)), rect(30, -10, 50, 10));

        let layout = badge.layout();
        assert_eq!(layout.canvas, Size::new(50, 50));
        assert_eq!(layout.badge, rect(30, 0, 50, 20));
        assert_eq!(layout.containment, Containment::Moved);
    }

    #[test]
    fn layout_grows_for_oversized_badges() {
        let badge = Badge::builder()
            .texture(texture(10, 10))
            .badge_size(30.)
            .show_border(false)
            .build()
            .unwrap();
        let layout = badge.layout();
        assert_eq!(layout.canvas, Size::new(30, 30));
        assert_eq!(layout.badge, rect(0, 0, 30, 30));
    }

    #[test]
    fn extreme_margins_are_clamped() {
        let far = Badge::builder()
            .texture(texture(10, 10))
            .badge_margin(1e9)
            .build()
            .unwrap();
        assert_eq!(far.layout().canvas, Size::new(4132, 4132));

        let pulled = Badge::builder()
            .texture(texture(10, 10))
            .badge_margin(-3e9)
            .build()
            .unwrap();
        assert_eq!(pulled.layout().canvas, Size::new(4106, 4106));

        let huge = Badge::builder()
            .texture(texture(10, 10))
            .badge_size(f32::INFINITY)
            .show_border(false)
            .build()
            .unwrap();
        assert_eq!(huge.badge_rect(&rect(0, 0, 10, 10)).width(), 4096);
    }

    #[test]
    fn empty_canvas_renders_the_source() {
        let badge = Badge::builder()
            .texture(texture(0, 0))
            .badge_size(0.)
            .show_border(false)
            .build()
            .unwrap();
        assert_eq!(badge.layout().canvas, Size::new(0, 0));
        assert_eq!(badge.render(3).dimensions(), (0, 0));
    }

    #[test]
    fn zero_counter_is_untouched() {
        let badge = Badge::new(texture(8, 8), &BadgeOptions::default());
        let rendered = badge.render(0);
        assert_eq!(rendered, *badge.texture().image);
    }
}
