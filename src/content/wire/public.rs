//! Media records of the public network protocol.

use crate::content::domain::{MessageEntity, ReplyMarkup, WebPageId};

/// A file location on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RemoteFile {
    /// Server file identifier.
    pub id: i64,
    /// Access hash authorising downloads.
    pub access_hash: i64,
    /// Data centre holding the file.
    pub dc_id: i32,
    /// Size in bytes, zero when unknown.
    pub size: i64,
}

/// One size of a server photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WirePhotoSize {
    /// Size class letter.
    pub size_type: String,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Where the size is stored; `None` for empty sizes.
    pub location: Option<RemoteFile>,
}

/// A server photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WirePhoto {
    /// Server photo identifier.
    pub id: i64,
    /// Unix upload time.
    pub date: i32,
    /// Stored sizes.
    pub sizes: Vec<WirePhotoSize>,
    /// Whether stickers were drawn over it.
    pub has_stickers: bool,
}

/// Attribute refining what a server document is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentAttribute {
    /// Image dimensions.
    ImageSize {
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
    },
    /// The document is an animation.
    Animated,
    /// The document is a sticker.
    Sticker {
        /// Emoji the sticker stands for.
        alt: String,
        /// Sticker set, zero if none.
        set_id: i64,
        /// Whether it is a photo mask.
        is_mask: bool,
    },
    /// The document is a video.
    Video {
        /// Duration in seconds.
        duration: i32,
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Whether it is a round video note.
        round_message: bool,
        /// Whether it can be streamed.
        supports_streaming: bool,
    },
    /// The document is audio.
    Audio {
        /// Duration in seconds.
        duration: i32,
        /// Whether it is a voice note.
        voice: bool,
        /// Track title.
        title: String,
        /// Track performer.
        performer: String,
        /// Voice waveform.
        waveform: Vec<u8>,
    },
    /// Original file name.
    Filename(String),
    /// Stickers were drawn over the media.
    HasStickers,
}

/// A server document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireDocument {
    /// Where the document is stored.
    pub location: RemoteFile,
    /// Unix upload time.
    pub date: i32,
    /// MIME type.
    pub mime_type: String,
    /// Preview thumbnail.
    pub thumbnail: Option<WirePhotoSize>,
    /// Type attributes.
    pub attributes: Vec<DocumentAttribute>,
}

/// A point on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// A server game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireGame {
    /// Server game identifier.
    pub id: i64,
    /// Access hash.
    pub access_hash: i64,
    /// Short name within the bot.
    pub short_name: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Cover photo.
    pub photo: Option<WirePhoto>,
    /// Cover animation.
    pub document: Option<WireDocument>,
}

/// A server invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireInvoice {
    /// Product name.
    pub title: String,
    /// Product description.
    pub description: String,
    /// Product photo.
    pub photo: Option<WirePhoto>,
    /// Receipt message, once paid.
    pub receipt_message_id: Option<i32>,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Total in the smallest currency units.
    pub total_amount: i64,
    /// Bot deep-link parameter.
    pub start_parameter: String,
    /// Test invoice flag.
    pub is_test: bool,
    /// Whether shipping is required.
    pub shipping_address_requested: bool,
}

/// Media attached to a public protocol message.
#[derive(Debug, Clone, PartialEq)]
pub enum PublicMedia {
    /// No media; the message is plain text.
    Empty,
    /// A photo; `photo` is `None` once it self-destructed.
    Photo {
        /// The photo.
        photo: Option<WirePhoto>,
        /// Self-destruct timer.
        ttl_seconds: Option<i32>,
    },
    /// A static location.
    Geo {
        /// The point, `None` if empty.
        point: Option<GeoPoint>,
    },
    /// A live location.
    GeoLive {
        /// The point, `None` if empty.
        point: Option<GeoPoint>,
        /// Broadcast period in seconds.
        period: i32,
    },
    /// A venue.
    Venue {
        /// The point, `None` if empty.
        point: Option<GeoPoint>,
        /// Venue name.
        title: String,
        /// Street address.
        address: String,
        /// Directory provider.
        provider: String,
        /// Identifier within the provider.
        venue_id: String,
        /// Venue category.
        venue_type: String,
    },
    /// A contact card.
    Contact {
        /// Phone number.
        phone_number: String,
        /// First name.
        first_name: String,
        /// Last name.
        last_name: String,
        /// vCard data.
        vcard: String,
        /// Registered account, zero if none.
        user_id: i64,
    },
    /// A document of any type; `document` is `None` once it self-destructed.
    Document {
        /// The document.
        document: Option<WireDocument>,
        /// Self-destruct timer.
        ttl_seconds: Option<i32>,
    },
    /// A link preview for the message text.
    WebPage {
        /// The preview, `None` if the server has none.
        web_page_id: Option<WebPageId>,
    },
    /// A game.
    Game(WireGame),
    /// An invoice.
    Invoice(WireInvoice),
    /// Media the server knows this client can't show.
    Unsupported,
    /// A constructor newer than this client.
    Unknown {
        /// Wire constructor identifier.
        constructor: u32,
    },
}

/// Message an inline bot offers as a query result.
#[derive(Debug, Clone, PartialEq)]
pub enum BotInlineMessage {
    /// Send the result's media with a caption.
    MediaAuto {
        /// Caption.
        caption: String,
    },
    /// Send text.
    Text {
        /// Message text.
        text: String,
        /// Text entities.
        entities: Vec<MessageEntity>,
        /// Suppress the link preview.
        no_webpage: bool,
    },
    /// Send a location.
    Geo {
        /// The point.
        point: GeoPoint,
        /// Live period, zero for static.
        period: i32,
    },
    /// Send a venue.
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
        /// Venue category.
        venue_type: String,
    },
    /// Send a contact.
    Contact {
        /// Phone number.
        phone_number: String,
        /// First name.
        first_name: String,
        /// Last name.
        last_name: String,
        /// vCard data.
        vcard: String,
    },
}

/// A bot inline message with its keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct WireInlineMessage {
    /// The message body.
    pub message: BotInlineMessage,
    /// Keyboard to attach.
    pub reply_markup: Option<ReplyMarkup>,
}

