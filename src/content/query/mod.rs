//! Read-only projections and in-place updates of message content.
//!
//! Every projection is total: kinds a projection does not apply to yield a
//! neutral value (`None`, zero, an invalid identifier or an empty list).

mod dependencies;
mod public;
mod search;

pub use dependencies::{collect_dependencies, register_file_references};
pub use public::{PublicContent, to_public};
pub use search::SearchFilter;

use crate::content::{
    domain::{
        EncryptedSecureValue, FileId, FormattedText, LiveLocationContent, MessageContent,
        MessageId, PhotoSize, UserId, WebPageId,
    },
    error::FileRegistryError,
    ports::FileRegistry,
};

impl MessageContent {
    /// Returns the caption of media that can carry one.
    #[must_use]
    pub const fn caption(&self) -> Option<&FormattedText> {
        match self {
            Self::Animation(content) => Some(&content.caption),
            Self::Audio(content) => Some(&content.caption),
            Self::Document(content) => Some(&content.caption),
            Self::Photo(content) => Some(&content.caption),
            Self::Video(content) => Some(&content.caption),
            Self::VoiceNote(content) => Some(&content.caption),
            Self::Text(_)
            | Self::Sticker(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => None,
        }
    }

    /// Returns the text of a text or game message.
    #[must_use]
    pub const fn message_text(&self) -> Option<&FormattedText> {
        match self {
            Self::Text(content) => Some(&content.text),
            Self::Game(game) => Some(&game.text),
            Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Photo(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
            | Self::ChatDeletePhoto
            | Self::ChatDeleteHistory
            | Self::ChatAddUsers(_)
            | Self::ChatJoinedByLink
            | Self::ChatDeleteUser(_)
            | Self::ChatMigrateTo(_)
            | Self::ChannelCreate(_)
            | Self::ChannelMigrateFrom(_)
            | Self::PinMessage(_)
            | Self::GameScore(_)
            | Self::ScreenshotTaken
            | Self::ChatSetTtl(_)
            | Self::Unsupported
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => self.caption(),
        }
    }

    /// Returns the text indexed for message search.
    ///
    /// Media contribute their file name and track metadata ahead of the
    /// caption; games and invoices contribute title and description.
    #[must_use]
    pub fn search_text(&self) -> String {
        let parts: Vec<&str> = match self {
            Self::Text(content) => vec![content.text.text.as_str()],
            Self::Animation(content) => {
                vec![content.animation.file_name.as_str(), content.caption.text.as_str()]
            }
            Self::Audio(content) => vec![
                content.audio.file_name.as_str(),
                content.audio.title.as_str(),
                content.audio.performer.as_str(),
                content.caption.text.as_str(),
            ],
            Self::Document(content) => {
                vec![content.document.file_name.as_str(), content.caption.text.as_str()]
            }
            Self::Photo(content) => vec![content.caption.text.as_str()],
            Self::Video(content) => {
                vec![content.video.file_name.as_str(), content.caption.text.as_str()]
            }
            Self::VoiceNote(content) => vec![content.caption.text.as_str()],
            Self::Game(game) => vec![game.title.as_str(), game.description.as_str()],
            Self::Invoice(invoice) => {
                vec![invoice.title.as_str(), invoice.description.as_str()]
            }
            Self::Sticker(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
            | Self::ChatDeletePhoto
            | Self::ChatDeleteHistory
            | Self::ChatAddUsers(_)
            | Self::ChatJoinedByLink
            | Self::ChatDeleteUser(_)
            | Self::ChatMigrateTo(_)
            | Self::ChannelCreate(_)
            | Self::ChannelMigrateFrom(_)
            | Self::PinMessage(_)
            | Self::GameScore(_)
            | Self::ScreenshotTaken
            | Self::ChatSetTtl(_)
            | Self::Unsupported
            | Self::Call(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => Vec::new(),
        };
        parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the playback duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> i32 {
        match self {
            Self::Animation(content) => content.animation.duration,
            Self::Audio(content) => content.audio.duration,
            Self::Video(content) => content.video.duration,
            Self::VideoNote(content) => content.video_note.duration,
            Self::VoiceNote(content) => content.voice_note.duration,
            Self::Text(_)
            | Self::Document(_)
            | Self::Photo(_)
            | Self::Sticker(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
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

    /// Returns the main file, or an invalid id if there is none.
    #[must_use]
    pub fn file_id(&self) -> FileId {
        match self {
            Self::Animation(content) => content.animation.file_id,
            Self::Audio(content) => content.audio.file_id,
            Self::Document(content) => content.document.file_id,
            Self::Photo(content) => content
                .photo
                .largest()
                .map(|size| size.file_id)
                .unwrap_or_default(),
            Self::Sticker(content) => content.sticker.file_id,
            Self::Video(content) => content.video.file_id,
            Self::VideoNote(content) => content.video_note.file_id,
            Self::VoiceNote(content) => content.voice_note.file_id,
            Self::Text(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => FileId::default(),
        }
    }

    /// Returns the preview thumbnail file, or an invalid id.
    #[must_use]
    pub fn thumbnail_file_id(&self) -> FileId {
        match self {
            Self::Photo(content) => content
                .photo
                .thumbnail()
                .map(|size| size.file_id)
                .unwrap_or_default(),
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => self
                .thumbnail()
                .map(|size| size.file_id)
                .unwrap_or_default(),
        }
    }

    /// Returns every file the content references, thumbnails included,
    /// sorted and without duplicates.
    #[must_use]
    pub fn file_ids(&self) -> Vec<FileId> {
        let mut file_ids = match self {
            Self::Photo(content) => {
                let mut ids = content.photo.file_ids();
                ids.extend(content.photo.sticker_file_ids.iter().copied());
                ids
            }
            Self::ChatChangePhoto(action) => action.photo.file_ids(),
            Self::Game(game) => {
                let mut ids = game.photo.file_ids();
                ids.push(game.animation_file_id);
                ids
            }
            Self::Invoice(invoice) => invoice.photo.file_ids(),
            Self::PassportDataReceived(action) => action
                .values
                .iter()
                .flat_map(EncryptedSecureValue::file_ids)
                .collect(),
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
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
            | Self::GameScore(_)
            | Self::ScreenshotTaken
            | Self::ChatSetTtl(_)
            | Self::Unsupported
            | Self::Call(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_) => {
                let mut ids = vec![self.file_id()];
                ids.extend(self.thumbnail().map(|size| size.file_id));
                ids
            }
        };
        file_ids.retain(|file_id| file_id.is_valid());
        file_ids.sort_unstable();
        file_ids.dedup();
        file_ids
    }

    /// Returns the message a pin action refers to.
    #[must_use]
    pub const fn pinned_message_id(&self) -> MessageId {
        match self {
            Self::PinMessage(action) => action.message_id,
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Photo(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
            | Self::ChatDeletePhoto
            | Self::ChatDeleteHistory
            | Self::ChatAddUsers(_)
            | Self::ChatJoinedByLink
            | Self::ChatDeleteUser(_)
            | Self::ChatMigrateTo(_)
            | Self::ChannelCreate(_)
            | Self::ChannelMigrateFrom(_)
            | Self::Game(_)
            | Self::GameScore(_)
            | Self::ScreenshotTaken
            | Self::ChatSetTtl(_)
            | Self::Unsupported
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => MessageId::new(0),
        }
    }

    /// Returns the message a service action replies to implicitly.
    #[must_use]
    pub const fn replied_message_id(&self) -> MessageId {
        match self {
            Self::PinMessage(action) => action.message_id,
            Self::GameScore(action) => action.game_message_id,
            Self::PaymentSuccessful(action) => action.invoice_message_id,
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Photo(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
            | Self::ChatDeletePhoto
            | Self::ChatDeleteHistory
            | Self::ChatAddUsers(_)
            | Self::ChatJoinedByLink
            | Self::ChatDeleteUser(_)
            | Self::ChatMigrateTo(_)
            | Self::ChannelCreate(_)
            | Self::ChannelMigrateFrom(_)
            | Self::Game(_)
            | Self::ScreenshotTaken
            | Self::ChatSetTtl(_)
            | Self::Unsupported
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => MessageId::new(0),
        }
    }

    /// Returns the member who left, for delete-user actions.
    #[must_use]
    pub const fn deleted_user_id(&self) -> UserId {
        match self {
            Self::ChatDeleteUser(action) => action.user_id,
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Photo(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
            | Self::ChatDeletePhoto
            | Self::ChatDeleteHistory
            | Self::ChatAddUsers(_)
            | Self::ChatJoinedByLink
            | Self::ChatMigrateTo(_)
            | Self::ChannelCreate(_)
            | Self::ChannelMigrateFrom(_)
            | Self::PinMessage(_)
            | Self::Game(_)
            | Self::GameScore(_)
            | Self::ScreenshotTaken
            | Self::ChatSetTtl(_)
            | Self::Unsupported
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => UserId::new(0),
        }
    }

    /// Returns the live location period in seconds.
    #[must_use]
    pub const fn live_location_period(&self) -> i32 {
        match self {
            Self::LiveLocation(content) => content.period,
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Photo(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => 0,
        }
    }

    /// Returns the web page preview of a text message.
    #[must_use]
    pub const fn web_page_id(&self) -> WebPageId {
        match self {
            Self::Text(content) => content.web_page_id,
            Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Photo(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => WebPageId::new(0),
        }
    }

    /// Attaches a web page preview to a text message.
    ///
    /// Other kinds are left untouched.
    pub fn set_web_page_id(&mut self, web_page_id: WebPageId) {
        if let Self::Text(content) = self {
            content.web_page_id = web_page_id;
        }
    }

    /// Returns how the member count changes because of this action.
    #[must_use]
    pub fn new_participant_count(&self) -> i32 {
        match self {
            Self::ChatAddUsers(action) => i32::try_from(action.user_ids.len()).unwrap_or(i32::MAX),
            Self::ChatJoinedByLink => 1,
            Self::ChatDeleteUser(_) => -1,
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Photo(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
            | Self::ChatDeletePhoto
            | Self::ChatDeleteHistory
            | Self::ChatMigrateTo(_)
            | Self::ChannelCreate(_)
            | Self::ChannelMigrateFrom(_)
            | Self::PinMessage(_)
            | Self::Game(_)
            | Self::GameScore(_)
            | Self::ScreenshotTaken
            | Self::ChatSetTtl(_)
            | Self::Unsupported
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
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

    /// Returns `true` if the content may be forwarded.
    #[must_use]
    pub const fn can_forward(&self) -> bool {
        match self {
            Self::Game(game) => game.bot_user_id.is_valid(),
            Self::Unsupported | Self::ExpiredPhoto | Self::ExpiredVideo => false,
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Photo(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
            | Self::ChatDeletePhoto
            | Self::ChatDeleteHistory
            | Self::ChatAddUsers(_)
            | Self::ChatJoinedByLink
            | Self::ChatDeleteUser(_)
            | Self::ChatMigrateTo(_)
            | Self::ChannelCreate(_)
            | Self::ChannelMigrateFrom(_)
            | Self::PinMessage(_)
            | Self::GameScore(_)
            | Self::ScreenshotTaken
            | Self::ChatSetTtl(_)
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => !self.is_service(),
        }
    }

    /// Marks voice and video notes as played.
    ///
    /// Returns `true` if the flag changed.
    pub fn update_opened(&mut self) -> bool {
        match self {
            Self::VoiceNote(content) if !content.is_listened => {
                content.is_listened = true;
                true
            }
            Self::VideoNote(content) if !content.is_viewed => {
                content.is_viewed = true;
                true
            }
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Photo(_)
            | Self::Sticker(_)
            | Self::Video(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => false,
        }
    }

    /// Returns the content that remains once the message's timer fires.
    ///
    /// Self-destructing photos and videos become their expired kinds and
    /// live locations stop updating. Everything else is returned unchanged.
    #[must_use]
    pub fn expire(self) -> Self {
        match self {
            Self::Photo(_) => Self::ExpiredPhoto,
            Self::Video(_) => Self::ExpiredVideo,
            Self::LiveLocation(content) => Self::LiveLocation(LiveLocationContent {
                period: 0,
                ..content
            }),
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Sticker(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::VideoNote(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => self,
        }
    }

    /// Copies the content for re-sending.
    ///
    /// A forward gets independent file handles from the file manager and
    /// loses its self-destruct timer, receipt and played flags. A plain copy
    /// keeps everything.
    ///
    /// # Errors
    ///
    /// Returns `FileRegistryError` if a file can't be duplicated.
    pub fn duplicate(
        &self,
        for_forward: bool,
        files: &dyn FileRegistry,
    ) -> Result<Self, FileRegistryError> {
        let mut copy = self.clone();
        if !for_forward {
            return Ok(copy);
        }
        match &mut copy {
            Self::Photo(content) => content.ttl = 0,
            Self::Video(content) => content.ttl = 0,
            Self::VoiceNote(content) => content.is_listened = false,
            Self::VideoNote(content) => content.is_viewed = false,
            Self::Invoice(invoice) => invoice.receipt_message_id = MessageId::new(0),
            Self::Text(_)
            | Self::Animation(_)
            | Self::Audio(_)
            | Self::Document(_)
            | Self::Sticker(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::PaymentSuccessful(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => {}
        }
        if let Some(slot) = copy.main_file_slot()
            && slot.is_valid()
        {
            *slot = files.duplicate(*slot)?;
        }
        Ok(copy)
    }

    /// Removes the preview thumbnail.
    ///
    /// Returns `true` if there was one.
    pub fn delete_thumbnail(&mut self) -> bool {
        if let Self::Photo(content) = self {
            let before = content.photo.sizes.len();
            let thumbnail = content.photo.thumbnail().map(|size| size.file_id);
            if content.photo.sizes.len() < 2 {
                return false;
            }
            content
                .photo
                .sizes
                .retain(|size| Some(size.file_id) != thumbnail);
            return content.photo.sizes.len() != before;
        }
        self.thumbnail_slot()
            .is_some_and(|slot| slot.take().is_some())
    }

    /// Switches the main file to another remote location of the same file.
    ///
    /// Returns `true` if the handle changed. Handles naming a different
    /// file are ignored.
    pub fn update_file_id_remote(&mut self, file_id: FileId) -> bool {
        let Some(slot) = self.main_file_slot() else {
            return false;
        };
        if slot.same_file(file_id) && slot.remote != file_id.remote {
            *slot = file_id;
            return true;
        }
        false
    }

    /// Returns the preview thumbnail of non-photo media.
    pub(crate) const fn thumbnail(&self) -> Option<&PhotoSize> {
        match self {
            Self::Animation(content) => content.animation.thumbnail.as_ref(),
            Self::Audio(content) => content.audio.thumbnail.as_ref(),
            Self::Document(content) => content.document.thumbnail.as_ref(),
            Self::Sticker(content) => content.sticker.thumbnail.as_ref(),
            Self::Video(content) => content.video.thumbnail.as_ref(),
            Self::VideoNote(content) => content.video_note.thumbnail.as_ref(),
            Self::Text(_)
            | Self::Photo(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => None,
        }
    }

    /// Returns the handle of the main file for replacement.
    pub(crate) fn main_file_slot(&mut self) -> Option<&mut FileId> {
        match self {
            Self::Animation(content) => Some(&mut content.animation.file_id),
            Self::Audio(content) => Some(&mut content.audio.file_id),
            Self::Document(content) => Some(&mut content.document.file_id),
            Self::Photo(content) => content.photo.largest_mut().map(|size| &mut size.file_id),
            Self::Sticker(content) => Some(&mut content.sticker.file_id),
            Self::Video(content) => Some(&mut content.video.file_id),
            Self::VideoNote(content) => Some(&mut content.video_note.file_id),
            Self::VoiceNote(content) => Some(&mut content.voice_note.file_id),
            Self::Text(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => None,
        }
    }

    /// Returns the thumbnail of non-photo media for replacement.
    pub(crate) const fn thumbnail_slot(&mut self) -> Option<&mut Option<PhotoSize>> {
        match self {
            Self::Animation(content) => Some(&mut content.animation.thumbnail),
            Self::Audio(content) => Some(&mut content.audio.thumbnail),
            Self::Document(content) => Some(&mut content.document.thumbnail),
            Self::Sticker(content) => Some(&mut content.sticker.thumbnail),
            Self::Video(content) => Some(&mut content.video.thumbnail),
            Self::VideoNote(content) => Some(&mut content.video_note.thumbnail),
            Self::Text(_)
            | Self::Photo(_)
            | Self::VoiceNote(_)
            | Self::Contact(_)
            | Self::Location(_)
            | Self::Venue(_)
            | Self::ChatCreate(_)
            | Self::ChatChangeTitle(_)
            | Self::ChatChangePhoto(_)
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
            | Self::Call(_)
            | Self::Invoice(_)
            | Self::PaymentSuccessful(_)
            | Self::ContactRegistered
            | Self::ExpiredPhoto
            | Self::ExpiredVideo
            | Self::LiveLocation(_)
            | Self::CustomServiceAction(_)
            | Self::WebsiteConnected(_)
            | Self::PassportDataSent(_)
            | Self::PassportDataReceived(_) => None,
        }
    }
}
