//! Domain types for the message content subsystem.
//!
//! This module contains pure domain types with no infrastructure
//! dependencies. Content values are plain data: operations on them live in
//! the [`decoder`](super::decoder), [`codec`](super::codec),
//! [`merge`](super::merge) and [`query`](super::query) modules.

mod commerce;
mod content;
mod dependencies;
mod ids;
mod input;
mod kind;
mod media;
mod text;

pub use commerce::{
    BotPaymentDetails, CallDiscardReason, EncryptedSecureCredentials, EncryptedSecureData,
    EncryptedSecureFile, EncryptedSecureValue, Invoice, LabeledPrice, SecureValueType,
};
pub use content::{
    AnimationContent, AudioContent, CallAction, ChannelMigrateFromAction, ChatAddUsersAction,
    ChatCreateAction, ChatDeleteUserAction, ChatMigrateToAction, ChatPhotoAction,
    ChatSetTtlAction, CustomServiceAction, DocumentContent, GameScoreAction, LiveLocationContent,
    MessageContent, PassportDataReceivedAction, PassportDataSentAction, PaymentSuccessfulAction,
    PhotoContent, PinMessageAction, StickerContent, TextContent, TitleAction, VideoContent,
    VideoNoteContent, VoiceNoteContent, WebsiteConnectedAction,
};
pub use dependencies::Dependencies;
pub use ids::{
    CallId, ChannelId, ChatId, DialogId, DialogType, FileId, MessageId, UserId, WebPageId,
};
pub use input::{InlineButton, InlineButtonAction, InlineContent, InputContent, ReplyMarkup};
pub use kind::ContentKind;
pub use media::{
    Animation, Audio, Contact, Dimensions, Document, Game, Location, Photo, PhotoSize, Sticker,
    Venue, Video, VideoNote, VoiceNote,
};
pub use text::{EntityKind, FormattedText, MessageEntity};
