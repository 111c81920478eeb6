//! Media records embedded in message content.
//!
//! Each record carries the metadata queries need (duration, dimensions,
//! thumbnail) together with the [`FileId`] of the file itself. File bytes
//! are never held here.

use super::{FileId, FormattedText, UserId};
use serde::{Deserialize, Serialize};

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
}

impl Dimensions {
    /// Creates dimensions, clamping out-of-range values to zero.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let clamp = |value: i32| u16::try_from(value).unwrap_or(0);
        let (width, height) = (clamp(width), clamp(height));
        if width == 0 || height == 0 {
            return Self::default();
        }
        Self { width, height }
    }

    /// Returns `true` if neither side is known.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One stored size of a photo or thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoSize {
    /// Size class letter (`s`, `m`, `x`, `y`, `t`...).
    pub size_type: String,
    /// Image dimensions.
    pub dimensions: Dimensions,
    /// File size in bytes, zero when unknown.
    pub size: i32,
    /// The file holding this size.
    pub file_id: FileId,
}

impl PhotoSize {
    /// Returns `true` if this size refers to a file.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.file_id.is_valid()
    }
}

/// A photo stored in several sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Photo {
    /// Server photo identifier, zero for local photos.
    pub id: i64,
    /// Unix time the photo was uploaded.
    pub date: i32,
    /// Available sizes, smallest first.
    pub sizes: Vec<PhotoSize>,
    /// Whether stickers were drawn over the photo.
    pub has_stickers: bool,
    /// Files of the attached sticker sets.
    pub sticker_file_ids: Vec<FileId>,
}

impl Photo {
    /// Returns `true` if the photo has no sizes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Returns the smallest size suitable as a thumbnail.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&PhotoSize> {
        self.sizes
            .iter()
            .filter(|size| size.is_valid())
            .min_by_key(|size| area(size))
    }

    /// Returns the largest size.
    #[must_use]
    pub fn largest(&self) -> Option<&PhotoSize> {
        self.sizes
            .iter()
            .filter(|size| size.is_valid())
            .max_by_key(|size| area(size))
    }

    /// Returns the largest size whether or not its file is known yet.
    pub(crate) fn largest_mut(&mut self) -> Option<&mut PhotoSize> {
        self.sizes.iter_mut().max_by_key(|size| area(size))
    }

    /// Returns every file of every size.
    #[must_use]
    pub fn file_ids(&self) -> Vec<FileId> {
        self.sizes
            .iter()
            .map(|size| size.file_id)
            .filter(|file_id| file_id.is_valid())
            .collect()
    }
}

fn area(size: &PhotoSize) -> u32 {
    u32::from(size.dimensions.width) * u32::from(size.dimensions.height)
}

/// A silent looping video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animation {
    /// The animation file.
    pub file_id: FileId,
    /// Duration in seconds.
    pub duration: i32,
    /// Frame size.
    pub dimensions: Dimensions,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub mime_type: String,
    /// Preview thumbnail.
    pub thumbnail: Option<PhotoSize>,
}

/// A music file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Audio {
    /// The audio file.
    pub file_id: FileId,
    /// Duration in seconds.
    pub duration: i32,
    /// Track title.
    pub title: String,
    /// Track performer.
    pub performer: String,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub mime_type: String,
    /// Album cover thumbnail.
    pub thumbnail: Option<PhotoSize>,
}

/// A generic file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    /// The file.
    pub file_id: FileId,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub mime_type: String,
    /// Preview thumbnail.
    pub thumbnail: Option<PhotoSize>,
}

/// A sticker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sticker {
    /// The sticker file.
    pub file_id: FileId,
    /// Image size.
    pub dimensions: Dimensions,
    /// Emoji the sticker stands for.
    pub emoji: String,
    /// Sticker set, zero if unknown.
    pub set_id: i64,
    /// Whether the sticker is a mask for photos.
    pub is_mask: bool,
    /// Preview thumbnail.
    pub thumbnail: Option<PhotoSize>,
}

/// A video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Video {
    /// The video file.
    pub file_id: FileId,
    /// Duration in seconds.
    pub duration: i32,
    /// Frame size.
    pub dimensions: Dimensions,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub mime_type: String,
    /// Whether the video can be played while downloading.
    pub supports_streaming: bool,
    /// Whether stickers were drawn over the video.
    pub has_stickers: bool,
    /// Preview thumbnail.
    pub thumbnail: Option<PhotoSize>,
}

/// A round video message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoNote {
    /// The video file.
    pub file_id: FileId,
    /// Duration in seconds.
    pub duration: i32,
    /// Side of the square frame.
    pub length: i32,
    /// Preview thumbnail.
    pub thumbnail: Option<PhotoSize>,
}

/// A recorded voice message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceNote {
    /// The audio file.
    pub file_id: FileId,
    /// Duration in seconds.
    pub duration: i32,
    /// Volume waveform, 5 bits per sample.
    pub waveform: Vec<u8>,
    /// MIME type.
    pub mime_type: String,
}

/// A point on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if the coordinates are finite and within range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns `true` if both coordinates differ from `other` by less than
    /// `epsilon` degrees.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "coordinate comparison is inherently floating point"
    )]
    pub fn is_near(&self, other: &Self, epsilon: f64) -> bool {
        (self.latitude - other.latitude).abs() < epsilon
            && (self.longitude - other.longitude).abs() < epsilon
    }
}

/// A named place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Where the venue is.
    pub location: Location,
    /// Venue name.
    pub title: String,
    /// Street address.
    pub address: String,
    /// Venue directory provider, such as `foursquare`.
    pub provider: String,
    /// Identifier within the provider.
    pub id: String,
    /// Provider-specific venue category.
    pub venue_type: String,
}

/// A contact card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    /// Phone number.
    pub phone_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Additional vCard data.
    pub vcard: String,
    /// Account of the contact, if registered.
    pub user_id: UserId,
}

/// A game offered by a bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    /// Server game identifier.
    pub id: i64,
    /// Access hash echoed back by the server.
    pub access_hash: i64,
    /// Bot that owns the game.
    pub bot_user_id: UserId,
    /// Unique short name within the bot.
    pub short_name: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Cover photo.
    pub photo: Photo,
    /// Optional cover animation.
    pub animation_file_id: FileId,
    /// Text shown with the game, with entities.
    pub text: FormattedText,
}

impl Game {
    /// Compares the fields users see, ignoring server echo data.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
            && self.bot_user_id == other.bot_user_id
            && self.short_name == other.short_name
            && self.title == other.title
            && self.description == other.description
            && self.photo == other.photo
            && self.animation_file_id == other.animation_file_id
            && self.text == other.text
    }
}
