//! Shared-media search filters.

use crate::content::domain::{CallDiscardReason, EntityKind, MessageContent, MessageEntity};

/// Shared-media filter a message can be found under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SearchFilter {
    /// Animations.
    Animation = 1,
    /// Music.
    Audio = 2,
    /// Generic files.
    Document = 3,
    /// Photos.
    Photo = 4,
    /// Videos.
    Video = 5,
    /// Voice notes.
    VoiceNote = 6,
    /// Photos and videos together.
    PhotoAndVideo = 7,
    /// Messages containing links.
    Url = 8,
    /// Chat photo changes.
    ChatPhoto = 9,
    /// Calls.
    Call = 10,
    /// Missed incoming calls.
    MissedCall = 11,
    /// Video notes.
    VideoNote = 12,
    /// Voice and video notes together.
    VoiceAndVideoNote = 13,
}

impl SearchFilter {
    /// Returns the bit this filter occupies in an index mask.
    #[must_use]
    pub const fn mask(self) -> i32 {
        1 << (self as u32 - 1)
    }

    /// Returns `true` if `mask` includes this filter.
    #[must_use]
    pub const fn is_in(self, mask: i32) -> bool {
        mask & self.mask() != 0
    }
}

impl MessageContent {
    /// Returns the shared-media filters the message is indexed under.
    ///
    /// Self-destructing photos and videos are not indexed. Missed calls are
    /// only flagged for incoming calls.
    #[must_use]
    pub fn index_mask(&self, is_secret: bool, is_outgoing: bool) -> i32 {
        match self {
            Self::Animation(_) => SearchFilter::Animation.mask(),
            Self::Audio(_) => SearchFilter::Audio.mask(),
            Self::Document(_) => SearchFilter::Document.mask(),
            Self::Photo(_) if is_secret => 0,
            Self::Photo(_) => SearchFilter::Photo.mask() | SearchFilter::PhotoAndVideo.mask(),
            Self::Video(_) if is_secret => 0,
            Self::Video(_) => SearchFilter::Video.mask() | SearchFilter::PhotoAndVideo.mask(),
            Self::VoiceNote(_) => {
                SearchFilter::VoiceNote.mask() | SearchFilter::VoiceAndVideoNote.mask()
            }
            Self::VideoNote(_) => {
                SearchFilter::VideoNote.mask() | SearchFilter::VoiceAndVideoNote.mask()
            }
            Self::Text(content) if has_links(&content.text.entities) => SearchFilter::Url.mask(),
            Self::ChatChangePhoto(_) => SearchFilter::ChatPhoto.mask(),
            Self::Call(action) => {
                let missed = !is_outgoing
                    && matches!(
                        action.discard_reason,
                        CallDiscardReason::Missed | CallDiscardReason::Declined
                    );
                if missed {
                    SearchFilter::Call.mask() | SearchFilter::MissedCall.mask()
                } else {
                    SearchFilter::Call.mask()
                }
            }
            Self::Text(_)
            | Self::Sticker(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatDeletePhoto
            | Self::ChatDeleteHistory
            | Self::ChatAddUsers(_)
            | Self::ChatJoinedByLink
            | Self::ChatDeleteUser(_)
            | Self::ChatMigrateTo(_)
            | Self::ChannelCreate(_)
            | Self::ChannelMigrateFrom(_)
            | Self::PinMessage(_)
            | Self::Game(_)
            | Self::GameScore(_)
            | Self::ScreenshotTaken
            | Self::ChatSetTtl(_)
            | Self::Unsupported
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => 0,
        }
    }
}

fn has_links(entities: &[MessageEntity]) -> bool {
    entities.iter().any(|entity| {
        matches!(
            entity.kind,
            EntityKind::Url | EntityKind::EmailAddress | EntityKind::TextUrl(_)
        )
    })
}
