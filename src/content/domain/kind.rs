//! The closed set of content kinds and their classification rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a [`MessageContent`](super::MessageContent).
///
/// The numeric values are written to the write-ahead log and must never be
/// reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ContentKind {
    /// Formatted text, optionally with a web page preview.
    Text = 0,
    /// A silent looping video.
    Animation = 1,
    /// A music file.
    Audio = 2,
    /// A generic file.
    Document = 3,
    /// A photo with one or more sizes.
    Photo = 4,
    /// A sticker.
    Sticker = 5,
    /// A video.
    Video = 6,
    /// A recorded voice message.
    VoiceNote = 7,
    /// A shared contact card.
    Contact = 8,
    /// A static point on the map.
    Location = 9,
    /// A named place.
    Venue = 10,
    /// A basic group was created.
    ChatCreate = 11,
    /// The chat title changed.
    ChatChangeTitle = 12,
    /// The chat photo changed.
    ChatChangePhoto = 13,
    /// The chat photo was removed.
    ChatDeletePhoto = 14,
    /// The chat history was cleared.
    ChatDeleteHistory = 15,
    /// Members were added to the chat.
    ChatAddUsers = 16,
    /// A user joined through an invite link.
    ChatJoinedByLink = 17,
    /// A member left or was removed.
    ChatDeleteUser = 18,
    /// The chat was upgraded to a supergroup.
    ChatMigrateTo = 19,
    /// A channel was created.
    ChannelCreate = 20,
    /// The supergroup was created from a basic group.
    ChannelMigrateFrom = 21,
    /// A message was pinned.
    PinMessage = 22,
    /// A game.
    Game = 23,
    /// A new high score in a game.
    GameScore = 24,
    /// A screenshot of a secret chat was taken.
    ScreenshotTaken = 25,
    /// The self-destruct timer of a secret chat changed.
    ChatSetTtl = 26,
    /// Content this client does not understand.
    Unsupported = 27,
    /// A voice call.
    Call = 28,
    /// An invoice for a payment.
    Invoice = 29,
    /// A payment was completed.
    PaymentSuccessful = 30,
    /// A round video message.
    VideoNote = 31,
    /// A contact joined the service.
    ContactRegistered = 32,
    /// A self-destructed photo.
    ExpiredPhoto = 33,
    /// A self-destructed video.
    ExpiredVideo = 34,
    /// A location updated live for a period.
    LiveLocation = 35,
    /// A free-form service message.
    CustomServiceAction = 36,
    /// The user logged in to a website through a bot.
    WebsiteConnected = 37,
    /// Passport data was sent to a bot.
    PassportDataSent = 38,
    /// Passport data was received by a bot.
    PassportDataReceived = 39,
}

impl ContentKind {
    /// Every kind, in discriminant order.
    pub const ALL: [Self; 40] = [
        Self::Text,
        Self::Animation,
        Self::Audio,
        Self::Document,
        Self::Photo,
        Self::Sticker,
        Self::Video,
        Self::VoiceNote,
        Self::Contact,
        Self::Location,
        Self::Venue,
        Self::ChatCreate,
        Self::ChatChangeTitle,
        Self::ChatChangePhoto,
        Self::ChatDeletePhoto,
        Self::ChatDeleteHistory,
        Self::ChatAddUsers,
        Self::ChatJoinedByLink,
        Self::ChatDeleteUser,
        Self::ChatMigrateTo,
        Self::ChannelCreate,
        Self::ChannelMigrateFrom,
        Self::PinMessage,
        Self::Game,
        Self::GameScore,
        Self::ScreenshotTaken,
        Self::ChatSetTtl,
        Self::Unsupported,
        Self::Call,
        Self::Invoice,
        Self::PaymentSuccessful,
        Self::VideoNote,
        Self::ContactRegistered,
        Self::ExpiredPhoto,
        Self::ExpiredVideo,
        Self::LiveLocation,
        Self::CustomServiceAction,
        Self::WebsiteConnected,
        Self::PassportDataSent,
        Self::PassportDataReceived,
    ];

    /// Returns the log tag of this kind.
    #[must_use]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Looks up a kind by its log tag.
    #[must_use]
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    /// Returns `true` for service actions rather than user-authored content.
    #[must_use]
    pub const fn is_service(self) -> bool {
        match self {
            Self::Text
            | Self::Animation
            | Self::Audio
            | Self::Document
            | Self::Photo
            | Self::Sticker
            | Self::Video
            | Self::VoiceNote
            | Self::Contact
            | Self::Location
            | Self::Venue
            | Self::Game
            | Self::Unsupported
            | Self::Invoice
            | Self::VideoNote
            | Self::LiveLocation
            | Self::ExpiredPhoto
            | Self::ExpiredVideo => false,
            Self::ChatCreate
            | Self::ChatChangeTitle
            | Self::ChatChangePhoto
            | Self::ChatDeletePhoto
            | Self::ChatDeleteHistory
            | Self::ChatAddUsers
            | Self::ChatJoinedByLink
            | Self::ChatDeleteUser
            | Self::ChatMigrateTo
            | Self::ChannelCreate
            | Self::ChannelMigrateFrom
            | Self::PinMessage
            | Self::GameScore
            | Self::ScreenshotTaken
            | Self::ChatSetTtl
            | Self::Call
            | Self::PaymentSuccessful
            | Self::ContactRegistered
            | Self::CustomServiceAction
            | Self::WebsiteConnected
            | Self::PassportDataSent
            | Self::PassportDataReceived => true,
        }
    }

    /// Returns `true` if content of this kind can carry a caption.
    #[must_use]
    pub const fn can_have_caption(self) -> bool {
        matches!(
            self,
            Self::Animation | Self::Audio | Self::Document | Self::Photo | Self::Video | Self::VoiceNote
        )
    }

    /// Returns `true` if content of this kind may be grouped into an album.
    #[must_use]
    pub const fn is_allowed_in_media_group(self) -> bool {
        matches!(self, Self::Photo | Self::Video)
    }

    /// Returns `true` if content of this kind sent with `ttl` self-destructs
    /// once opened.
    ///
    /// Only visual and voice media qualify, and only for timers no longer
    /// than `max_secret_ttl` seconds.
    #[must_use]
    pub const fn is_secret(self, ttl: i32, max_secret_ttl: i32) -> bool {
        if ttl <= 0 || ttl > max_secret_ttl {
            return false;
        }
        matches!(
            self,
            Self::Animation | Self::Photo | Self::Video | Self::VideoNote | Self::VoiceNote
        )
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "Text",
            Self::Animation => "Animation",
            Self::Audio => "Audio",
            Self::Document => "Document",
            Self::Photo => "Photo",
            Self::Sticker => "Sticker",
            Self::Video => "Video",
            Self::VoiceNote => "VoiceNote",
            Self::Contact => "Contact",
            Self::Location => "Location",
            Self::Venue => "Venue",
            Self::ChatCreate => "ChatCreate",
            Self::ChatChangeTitle => "ChatChangeTitle",
            Self::ChatChangePhoto => "ChatChangePhoto",
            Self::ChatDeletePhoto => "ChatDeletePhoto",
            Self::ChatDeleteHistory => "ChatDeleteHistory",
            Self::ChatAddUsers => "ChatAddUsers",
            Self::ChatJoinedByLink => "ChatJoinedByLink",
            Self::ChatDeleteUser => "ChatDeleteUser",
            Self::ChatMigrateTo => "ChatMigrateTo",
            Self::ChannelCreate => "ChannelCreate",
            Self::ChannelMigrateFrom => "ChannelMigrateFrom",
            Self::PinMessage => "PinMessage",
            Self::Game => "Game",
            Self::GameScore => "GameScore",
            Self::ScreenshotTaken => "ScreenshotTaken",
            Self::ChatSetTtl => "ChatSetTtl",
            Self::Unsupported => "Unsupported",
            Self::Call => "Call",
            Self::Invoice => "Invoice",
            Self::PaymentSuccessful => "PaymentSuccessful",
            Self::VideoNote => "VideoNote",
            Self::ContactRegistered => "ContactRegistered",
            Self::ExpiredPhoto => "ExpiredPhoto",
            Self::ExpiredVideo => "ExpiredVideo",
            Self::LiveLocation => "LiveLocation",
            Self::CustomServiceAction => "CustomServiceAction",
            Self::WebsiteConnected => "WebsiteConnected",
            Self::PassportDataSent => "PassportDataSent",
            Self::PassportDataReceived => "PassportDataReceived",
        };
        f.write_str(name)
    }
}
