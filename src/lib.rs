//! Draws numeric counter badges on top of images.
//!
//! A [`Badge`] pairs a source [`Texture`] with display options. Calling
//! [`Badge::render`] with a counter produces a new image with a circular
//! badge showing that counter, or `"{max}+"` once the counter exceeds the
//! configured maximum.

#![forbid(unsafe_code)]
#![warn(
    clippy::cargo,
    missing_docs,
    clippy::nursery,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
)]

/// The badge configuration, builder and renderer.
pub mod badge;
/// A raster target that shapes and text are drawn into.
pub mod canvas;
mod color;
mod error;
/// Anchoring rectangles inside of containers.
pub mod gravity;
/// Math types for 2d geometry.
pub mod math;
/// Resolving colors, dimensions, fonts and images by id.
pub mod resources;
/// Types for rendering shapes.
pub mod shape;
/// Types for rendering text.
pub mod text;
/// Types for managing source images.
pub mod texture;

// Re-exports
pub use image;
pub use rusttype;
pub use tiny_skia;

pub use self::{
    badge::{Badge, BadgeBuilder, BadgeOptions},
    color::Color,
    error::Error,
};

/// A collection of commonly used exports provided by this crate.
pub mod prelude {
    pub use super::{
        badge::{Badge, BadgeBuilder, BadgeOptions, CounterLabel},
        gravity::{Gravity, LayoutDirection},
        include_font, include_texture,
        math::{move_in, Containment, Pixels, Point, Rect, Size},
        resources::{ResourceId, ResourceTable, Resources},
        text::Font,
        texture::Texture,
        Color, Error,
    };
}

/// Alias for [`std::result::Result`] where the error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
