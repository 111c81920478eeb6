//! The message content sum type.
//!
//! A [`MessageContent`] is the body or service action of one message. The
//! set of variants is closed; every operation in this crate matches it
//! exhaustively, so adding a variant is a compile-time change everywhere it
//! matters.

use super::{
    Animation, Audio, BotPaymentDetails, CallDiscardReason, CallId, ChannelId, ChatId, Contact,
    ContentKind, Document, EncryptedSecureCredentials, EncryptedSecureValue, FormattedText, Game,
    Invoice, Location, MessageId, Photo, SecureValueType, Sticker, UserId, Venue, Video,
    VideoNote, VoiceNote, WebPageId,
};
use serde::{Deserialize, Serialize};

/// A text message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    /// The message text.
    pub text: FormattedText,
    /// Web page preview attached after construction, if any.
    pub web_page_id: WebPageId,
}

/// An animation with caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationContent {
    /// The animation.
    pub animation: Animation,
    /// Caption shown below.
    pub caption: FormattedText,
}

/// An audio track with caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioContent {
    /// The audio file.
    pub audio: Audio,
    /// Caption shown below.
    pub caption: FormattedText,
}

/// A document with caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    /// The document.
    pub document: Document,
    /// Caption shown below.
    pub caption: FormattedText,
}

/// A photo with caption and optional self-destruct timer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoContent {
    /// The photo.
    pub photo: Photo,
    /// Caption shown below.
    pub caption: FormattedText,
    /// Self-destruct timer in seconds, zero if none.
    pub ttl: i32,
}

/// A sticker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerContent {
    /// The sticker.
    pub sticker: Sticker,
}

/// A video with caption and optional self-destruct timer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoContent {
    /// The video.
    pub video: Video,
    /// Caption shown below.
    pub caption: FormattedText,
    /// Self-destruct timer in seconds, zero if none.
    pub ttl: i32,
}

/// A voice note with caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceNoteContent {
    /// The voice note.
    pub voice_note: VoiceNote,
    /// Caption shown below.
    pub caption: FormattedText,
    /// Whether the recipient has played it.
    pub is_listened: bool,
}

/// A round video message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoNoteContent {
    /// The video note.
    pub video_note: VideoNote,
    /// Whether the recipient has played it.
    pub is_viewed: bool,
}

/// A location broadcast for a limited period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveLocationContent {
    /// Last reported position.
    pub location: Location,
    /// Broadcast period in seconds; zero once stopped.
    pub period: i32,
}

/// A basic group was created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCreateAction {
    /// Initial title.
    pub title: String,
    /// Initial members.
    pub participant_user_ids: Vec<UserId>,
}

/// A title was set, either on a chat or on a new channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleAction {
    /// The new title.
    pub title: String,
}

/// The chat photo changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPhotoAction {
    /// The new photo.
    pub photo: Photo,
}

/// Members were added to a chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAddUsersAction {
    /// Added members.
    pub user_ids: Vec<UserId>,
}

/// A member left or was removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatDeleteUserAction {
    /// The member who left.
    pub user_id: UserId,
}

/// A basic group was upgraded to a supergroup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMigrateToAction {
    /// The new supergroup.
    pub channel_id: ChannelId,
}

/// A supergroup was created from a basic group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMigrateFromAction {
    /// Title of the old group.
    pub title: String,
    /// The old group.
    pub chat_id: ChatId,
}

/// A message was pinned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMessageAction {
    /// The pinned message.
    pub message_id: MessageId,
}

/// A new game high score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScoreAction {
    /// Message with the game.
    pub game_message_id: MessageId,
    /// Server game identifier.
    pub game_id: i64,
    /// The score.
    pub score: i32,
}

/// The self-destruct timer of a secret chat changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSetTtlAction {
    /// New timer in seconds, zero to disable.
    pub ttl: i32,
}

/// A voice call took place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallAction {
    /// Server call identifier.
    pub call_id: CallId,
    /// Duration in seconds.
    pub duration: i32,
    /// Why the call ended.
    pub discard_reason: CallDiscardReason,
}

/// A payment was completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSuccessfulAction {
    /// Message with the paid invoice.
    pub invoice_message_id: MessageId,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Amount in the smallest currency units.
    pub total_amount: i64,
    /// Details only the receiving bot sees.
    pub bot_details: Option<BotPaymentDetails>,
}

/// A free-form service message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomServiceAction {
    /// Message text.
    pub message: String,
}

/// The user logged in to a website through a bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteConnectedAction {
    /// The website's domain.
    pub domain_name: String,
}

/// Passport data was sent to a bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportDataSentAction {
    /// Kinds of data shared.
    pub types: Vec<SecureValueType>,
}

/// Passport data was received by a bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportDataReceivedAction {
    /// Encrypted elements.
    pub values: Vec<EncryptedSecureValue>,
    /// Credentials for decrypting them.
    pub credentials: EncryptedSecureCredentials,
}

/// The body or service action of one message.
///
/// # Examples
///
/// ```
/// use missive::content::domain::{ContentKind, FormattedText, MessageContent};
///
/// let content = MessageContent::text(FormattedText::plain("hello"));
/// assert_eq!(content.kind(), ContentKind::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MessageContent {
    /// See [`ContentKind::Text`].
    Text(TextContent),
    /// See [`ContentKind::Animation`].
    Animation(AnimationContent),
    /// See [`ContentKind::Audio`].
    Audio(AudioContent),
    /// See [`ContentKind::Document`].
    Document(DocumentContent),
    /// See [`ContentKind::Photo`].
    Photo(PhotoContent),
    /// See [`ContentKind::Sticker`].
    Sticker(StickerContent),
    /// See [`ContentKind::Video`].
    Video(VideoContent),
    /// See [`ContentKind::VoiceNote`].
    VoiceNote(VoiceNoteContent),
    /// See [`ContentKind::Contact`].
    Contact(Contact),
    /// See [`ContentKind::Location`].
    Location(Location),
    /// See [`ContentKind::Venue`].
    Venue(Venue),
    /// See [`ContentKind::ChatCreate`].
    ChatCreate(ChatCreateAction),
    /// See [`ContentKind::ChatChangeTitle`].
    ChatChangeTitle(TitleAction),
    /// See [`ContentKind::ChatChangePhoto`].
    ChatChangePhoto(ChatPhotoAction),
    /// See [`ContentKind::ChatDeletePhoto`].
    ChatDeletePhoto,
    /// See [`ContentKind::ChatDeleteHistory`].
    ChatDeleteHistory,
    /// See [`ContentKind::ChatAddUsers`].
    ChatAddUsers(ChatAddUsersAction),
    /// See [`ContentKind::ChatJoinedByLink`].
    ChatJoinedByLink,
    /// See [`ContentKind::ChatDeleteUser`].
    ChatDeleteUser(ChatDeleteUserAction),
    /// See [`ContentKind::ChatMigrateTo`].
    ChatMigrateTo(ChatMigrateToAction),
    /// See [`ContentKind::ChannelCreate`].
    ChannelCreate(TitleAction),
    /// See [`ContentKind::ChannelMigrateFrom`].
    ChannelMigrateFrom(ChannelMigrateFromAction),
    /// See [`ContentKind::PinMessage`].
    PinMessage(PinMessageAction),
    /// See [`ContentKind::Game`].
    Game(Game),
    /// See [`ContentKind::GameScore`].
    GameScore(GameScoreAction),
    /// See [`ContentKind::ScreenshotTaken`].
    ScreenshotTaken,
    /// See [`ContentKind::ChatSetTtl`].
    ChatSetTtl(ChatSetTtlAction),
    /// See [`ContentKind::Unsupported`].
    Unsupported,
    /// See [`ContentKind::Call`].
    Call(CallAction),
    /// See [`ContentKind::Invoice`].
    Invoice(Invoice),
    /// See [`ContentKind::PaymentSuccessful`].
    PaymentSuccessful(PaymentSuccessfulAction),
    /// See [`ContentKind::VideoNote`].
    VideoNote(VideoNoteContent),
    /// See [`ContentKind::ContactRegistered`].
    ContactRegistered,
    /// See [`ContentKind::ExpiredPhoto`].
    ExpiredPhoto,
    /// See [`ContentKind::ExpiredVideo`].
    ExpiredVideo,
    /// See [`ContentKind::LiveLocation`].
    LiveLocation(LiveLocationContent),
    /// See [`ContentKind::CustomServiceAction`].
    CustomServiceAction(CustomServiceAction),
    /// See [`ContentKind::WebsiteConnected`].
    WebsiteConnected(WebsiteConnectedAction),
    /// See [`ContentKind::PassportDataSent`].
    PassportDataSent(PassportDataSentAction),
    /// See [`ContentKind::PassportDataReceived`].
    PassportDataReceived(PassportDataReceivedAction),
}

impl MessageContent {
    /// Creates a text message without a web page preview.
    #[must_use]
    pub fn text(text: FormattedText) -> Self {
        Self::Text(TextContent {
            text,
            web_page_id: WebPageId::default(),
        })
    }

    /// Returns the discriminant.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Text(_) => ContentKind::Text,
            Self::Animation(_) => ContentKind::Animation,
            Self::Audio(_) => ContentKind::Audio,
            Self::Document(_) => ContentKind::Document,
            Self::Photo(_) => ContentKind::Photo,
            Self::Sticker(_) => ContentKind::Sticker,
            Self::Video(_) => ContentKind::Video,
            Self::VoiceNote(_) => ContentKind::VoiceNote,
            Self::Contact(_) => ContentKind::Contact,
            Self::Location(_) => ContentKind::Location,
            Self::Venue(_) => ContentKind::Venue,
            Self::ChatCreate(_) => ContentKind::ChatCreate,
            Self::ChatChangeTitle(_) => ContentKind::ChatChangeTitle,
            Self::ChatChangePhoto(_) => ContentKind::ChatChangePhoto,
            Self::ChatDeletePhoto => ContentKind::ChatDeletePhoto,
            Self::ChatDeleteHistory => ContentKind::ChatDeleteHistory,
            Self::ChatAddUsers(_) => ContentKind::ChatAddUsers,
            Self::ChatJoinedByLink => ContentKind::ChatJoinedByLink,
            Self::ChatDeleteUser(_) => ContentKind::ChatDeleteUser,
            Self::ChatMigrateTo(_) => ContentKind::ChatMigrateTo,
            Self::ChannelCreate(_) => ContentKind::ChannelCreate,
            Self::ChannelMigrateFrom(_) => ContentKind::ChannelMigrateFrom,
            Self::PinMessage(_) => ContentKind::PinMessage,
            Self::Game(_) => ContentKind::Game,
            Self::GameScore(_) => ContentKind::GameScore,
            Self::ScreenshotTaken => ContentKind::ScreenshotTaken,
            Self::ChatSetTtl(_) => ContentKind::ChatSetTtl,
            Self::Unsupported => ContentKind::Unsupported,
            Self::Call(_) => ContentKind::Call,
            Self::Invoice(_) => ContentKind::Invoice,
            Self::PaymentSuccessful(_) => ContentKind::PaymentSuccessful,
            Self::VideoNote(_) => ContentKind::VideoNote,
            Self::ContactRegistered => ContentKind::ContactRegistered,
            Self::ExpiredPhoto => ContentKind::ExpiredPhoto,
            Self::ExpiredVideo => ContentKind::ExpiredVideo,
            Self::LiveLocation(_) => ContentKind::LiveLocation,
            Self::CustomServiceAction(_) => ContentKind::CustomServiceAction,
            Self::WebsiteConnected(_) => ContentKind::WebsiteConnected,
            Self::PassportDataSent(_) => ContentKind::PassportDataSent,
            Self::PassportDataReceived(_) => ContentKind::PassportDataReceived,
        }
    }

    /// Returns `true` for service actions.
    #[must_use]
    pub const fn is_service(&self) -> bool {
        self.kind().is_service()
    }
}
