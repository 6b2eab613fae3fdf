use crate::resources::{ResourceId, ResourceKind};

/// All errors that `drawable-badge` can return.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A badge was built without a source image.
    #[error("badge texture can not be missing")]
    MissingImage,
    /// A resource id was not known to the [`Resources`](crate::resources::Resources) in use.
    #[error("unknown {kind} resource {id}")]
    UnknownResource {
        /// The kind of resource that was requested.
        kind: ResourceKind,
        /// The id that was requested.
        id: ResourceId,
    },
    /// A resource id was given to a builder that has no resources to
    /// resolve it with.
    #[error("{kind} resource {id} requested without any resources to resolve it")]
    NoResources {
        /// The kind of resource that was requested.
        kind: ResourceKind,
        /// The id that was requested.
        id: ResourceId,
    },
    /// The font data could not be parsed.
    #[error("error parsing font data")]
    InvalidFont,
    /// An error reading a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// An error decoding or encoding an image.
    #[error("error reading image: {0}")]
    Image(#[from] image::ImageError),
}
