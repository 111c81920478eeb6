//! Construction of message content from every source.
//!
//! Public protocol media and actions, secret chat media, locally generated
//! events, public-API send requests and inline bot results each have their
//! own entry point. Input a decoder doesn't recognise becomes
//! [`MessageContent::Unsupported`](crate::content::domain::MessageContent::Unsupported)
//! rather than an error.

mod action;
mod document;
mod inline;
mod input;
mod local;
mod public;
mod secret;

pub use action::decode_action;
pub use inline::create_inline_content;
pub use input::{InputMessageRequest, create_input_content};
pub use local::{
    chat_set_ttl_content, contact_registered_content, screenshot_taken_content, text_content,
};
pub use public::decode_public_media;
pub use secret::{decode_secret_media, key_fingerprint};

use crate::content::{
    config::ContentOptions,
    domain::{DialogId, Dimensions, Location, Photo, PhotoSize},
    ports::FileRegistry,
    wire::{GeoPoint, WirePhoto, WirePhotoSize},
};

/// Collaborators and limits shared by the decoders.
#[derive(Clone, Copy)]
pub struct DecodeContext<'a> {
    /// File manager registering remote locations.
    pub files: &'a dyn FileRegistry,
    /// Limits to apply.
    pub options: &'a ContentOptions,
}

impl<'a> DecodeContext<'a> {
    /// Creates a decode context.
    #[must_use]
    pub const fn new(files: &'a dyn FileRegistry, options: &'a ContentOptions) -> Self {
        Self { files, options }
    }
}

impl std::fmt::Debug for DecodeContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodeContext")
            .field("options", self.options)
            .finish_non_exhaustive()
    }
}

/// Registers one photo size, skipping sizes without a stored file.
fn photo_size_from_wire(
    size: &WirePhotoSize,
    owner: DialogId,
    ctx: &DecodeContext<'_>,
) -> Option<PhotoSize> {
    let location = size.location.as_ref()?;
    match ctx.files.register_remote(location, owner) {
        Ok(file_id) => Some(PhotoSize {
            size_type: size.size_type.clone(),
            dimensions: Dimensions::new(size.width, size.height),
            size: i32::try_from(location.size).unwrap_or(0),
            file_id,
        }),
        Err(err) => {
            tracing::debug!(error = %err, size_type = %size.size_type, "skipping photo size");
            None
        }
    }
}

/// Registers every size of a server photo.
fn photo_from_wire(photo: &WirePhoto, owner: DialogId, ctx: &DecodeContext<'_>) -> Photo {
    let mut sizes: Vec<PhotoSize> = photo
        .sizes
        .iter()
        .filter_map(|size| photo_size_from_wire(size, owner, ctx))
        .collect();
    sizes.sort_by_key(|size| u32::from(size.dimensions.width) * u32::from(size.dimensions.height));
    Photo {
        id: photo.id,
        date: photo.date,
        sizes,
        has_stickers: photo.has_stickers,
        sticker_file_ids: Vec::new(),
    }
}

/// Converts a wire point, rejecting out-of-range coordinates.
fn location_from_point(point: GeoPoint) -> Option<Location> {
    let location = Location::new(point.latitude, point.longitude);
    location.is_valid().then_some(location)
}
