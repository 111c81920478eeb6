//! Media records of the end-to-end encrypted secret chat protocol.

use super::{DocumentAttribute, GeoPoint, WireDocument};
use crate::content::domain::EntityKind;

/// Descriptor of an encrypted file uploaded by the peer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncryptedFile {
    /// Server file identifier; zero means no file.
    pub id: i64,
    /// Access hash authorising downloads.
    pub access_hash: i64,
    /// Encrypted size in bytes.
    pub size: i64,
    /// Data centre holding the file.
    pub dc_id: i32,
    /// Fingerprint of the key and IV the peer used.
    pub key_fingerprint: i32,
}

/// Key material for one encrypted attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretKey {
    /// AES key.
    pub key: Vec<u8>,
    /// AES initialisation vector.
    pub iv: Vec<u8>,
}

/// Inline preview sent alongside a secret attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretThumbnail {
    /// JPEG bytes; empty when absent.
    pub bytes: Vec<u8>,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl SecretThumbnail {
    /// Returns `true` if there is a preview to decode.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.bytes.is_empty() && self.width > 0 && self.height > 0
    }
}

/// A formatting entity as sent in a secret chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEntity {
    /// What the entity marks up.
    pub kind: EntityKind,
    /// Start offset in UTF-16 code units.
    pub offset: i32,
    /// Length in UTF-16 code units.
    pub length: i32,
}

/// Media attached to a secret chat message.
#[derive(Debug, Clone, PartialEq)]
pub enum SecretMedia {
    /// No media; the message is plain text.
    Empty,
    /// An encrypted photo.
    Photo {
        /// Inline preview.
        thumbnail: SecretThumbnail,
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Decrypted size in bytes.
        size: i32,
        /// Key material.
        key: SecretKey,
        /// Caption.
        caption: String,
    },
    /// An encrypted video.
    Video {
        /// Inline preview.
        thumbnail: SecretThumbnail,
        /// Duration in seconds.
        duration: i32,
        /// MIME type.
        mime_type: String,
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Key material.
        key: SecretKey,
        /// Caption.
        caption: String,
    },
    /// An encrypted document of any type.
    Document {
        /// Inline preview.
        thumbnail: SecretThumbnail,
        /// MIME type.
        mime_type: String,
        /// Key material.
        key: SecretKey,
        /// Type attributes.
        attributes: Vec<DocumentAttribute>,
        /// Caption.
        caption: String,
    },
    /// A public document, such as a sticker, referenced from a secret chat.
    ExternalDocument(WireDocument),
    /// A location.
    Geo {
        /// The point.
        point: GeoPoint,
    },
    /// A venue.
    Venue {
        /// The point.
        point: GeoPoint,
        /// Venue name.
        title: String,
        /// Street address.
        address: String,
        /// Directory provider.
        provider: String,
        /// Identifier within the provider.
        venue_id: String,
    },
    /// A contact card.
    Contact {
        /// Phone number.
        phone_number: String,
        /// First name.
        first_name: String,
        /// Last name.
        last_name: String,
        /// Registered account, zero if none.
        user_id: i64,
    },
    /// A link preview to be resolved from its URL.
    WebPage {
        /// The previewed URL.
        url: String,
    },
    /// A legacy encrypted audio file.
    Audio {
        /// Duration in seconds.
        duration: i32,
        /// MIME type.
        mime_type: String,
        /// Key material.
        key: SecretKey,
    },
    /// A constructor newer than this client.
    Unknown {
        /// Wire constructor identifier.
        constructor: u32,
    },
}
