//! Projection of content to the public client API.

use crate::content::domain::{
    Animation, Audio, CallDiscardReason, ChannelId, ChatId, Contact, Document,
    EncryptedSecureCredentials, EncryptedSecureValue, FormattedText, Game, Location,
    MessageContent, MessageId, Photo, SecureValueType, Sticker, UserId, Venue, Video, VideoNote,
    VoiceNote, WebPageId,
};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::Serialize;

/// Content as exposed to API clients.
///
/// Serialises with an `@type` discriminator in camel case, for example
/// `{"@type":"messageText",...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub enum PublicContent {
    /// A text message.
    MessageText {
        /// The text.
        text: FormattedText,
        /// Link preview, when one is known.
        web_page_id: Option<WebPageId>,
    },
    /// An animation.
    MessageAnimation {
        /// The animation.
        animation: Animation,
        /// Caption.
        caption: FormattedText,
        /// The animation self-destructs once opened.
        is_secret: bool,
    },
    /// An audio file.
    MessageAudio {
        /// The audio.
        audio: Audio,
        /// Caption.
        caption: FormattedText,
    },
    /// A document.
    MessageDocument {
        /// The document.
        document: Document,
        /// Caption.
        caption: FormattedText,
    },
    /// A photo.
    MessagePhoto {
        /// The photo.
        photo: Photo,
        /// Caption.
        caption: FormattedText,
        /// The photo self-destructs once opened.
        is_secret: bool,
    },
    /// A self-destructed photo.
    MessageExpiredPhoto,
    /// A sticker.
    MessageSticker {
        /// The sticker.
        sticker: Sticker,
    },
    /// A video.
    MessageVideo {
        /// The video.
        video: Video,
        /// Caption.
        caption: FormattedText,
        /// The video self-destructs once opened.
        is_secret: bool,
    },
    /// A self-destructed video.
    MessageExpiredVideo,
    /// A round video message.
    MessageVideoNote {
        /// The video note.
        video_note: VideoNote,
        /// Whether it was played.
        is_viewed: bool,
        /// The video note self-destructs once opened.
        is_secret: bool,
    },
    /// A voice message.
    MessageVoiceNote {
        /// The voice note.
        voice_note: VoiceNote,
        /// Caption.
        caption: FormattedText,
        /// Whether it was played.
        is_listened: bool,
    },
    /// A static or live location.
    MessageLocation {
        /// The point.
        location: Location,
        /// Live period in seconds, zero for static locations.
        live_period: i32,
        /// Seconds until the live location stops updating.
        expires_in: i32,
    },
    /// A venue.
    MessageVenue {
        /// The venue.
        venue: Venue,
    },
    /// A contact.
    MessageContact {
        /// The contact.
        contact: Contact,
    },
    /// A game.
    MessageGame {
        /// The game.
        game: Game,
    },
    /// An invoice.
    MessageInvoice {
        /// Product name.
        title: String,
        /// Product description.
        description: String,
        /// Product photo.
        photo: Photo,
        /// ISO 4217 currency code.
        currency: String,
        /// Total in the smallest currency units.
        total_amount: i64,
        /// Bot deep-link parameter.
        start_parameter: String,
        /// Test invoice flag.
        is_test: bool,
        /// Whether shipping is required.
        need_shipping_address: bool,
        /// Receipt message, once paid.
        receipt_message_id: Option<MessageId>,
    },
    /// A call.
    MessageCall {
        /// Why the call ended.
        discard_reason: CallDiscardReason,
        /// Duration in seconds.
        duration: i32,
    },
    /// A basic group was created.
    MessageBasicGroupChatCreate {
        /// Group title.
        title: String,
        /// Initial members.
        member_user_ids: Vec<UserId>,
    },
    /// A supergroup or channel was created.
    MessageSupergroupChatCreate {
        /// Title.
        title: String,
    },
    /// Chat title changed.
    MessageChatChangeTitle {
        /// New title.
        title: String,
    },
    /// Chat photo changed.
    MessageChatChangePhoto {
        /// New photo.
        photo: Photo,
    },
    /// Chat photo removed.
    MessageChatDeletePhoto,
    /// Members were added.
    MessageChatAddMembers {
        /// New members.
        member_user_ids: Vec<UserId>,
    },
    /// A user joined by invite link.
    MessageChatJoinByLink,
    /// A member left.
    MessageChatDeleteMember {
        /// The member.
        user_id: UserId,
    },
    /// The group was upgraded.
    MessageChatUpgradeTo {
        /// The new supergroup.
        supergroup_id: ChannelId,
    },
    /// The supergroup was upgraded from a basic group.
    MessageChatUpgradeFrom {
        /// Old group title.
        title: String,
        /// Old group.
        basic_group_id: ChatId,
    },
    /// A message was pinned.
    MessagePinMessage {
        /// The pinned message.
        message_id: MessageId,
    },
    /// A screenshot was taken.
    MessageScreenshotTaken,
    /// The self-destruct timer changed.
    MessageChatSetTtl {
        /// New timer in seconds.
        ttl: i32,
    },
    /// A free-form service message.
    MessageCustomServiceAction {
        /// Message text.
        text: String,
    },
    /// A new game score.
    MessageGameScore {
        /// Message with the game.
        game_message_id: MessageId,
        /// Server game identifier.
        game_id: i64,
        /// The score.
        score: i32,
    },
    /// A payment was sent.
    MessagePaymentSuccessful {
        /// Message with the invoice.
        invoice_message_id: MessageId,
        /// ISO 4217 currency code.
        currency: String,
        /// Total in the smallest currency units.
        total_amount: i64,
    },
    /// A payment was received by this bot.
    MessagePaymentSuccessfulBot {
        /// Message with the invoice.
        invoice_message_id: MessageId,
        /// ISO 4217 currency code.
        currency: String,
        /// Total in the smallest currency units.
        total_amount: i64,
        /// Bot-defined invoice payload.
        invoice_payload: Vec<u8>,
        /// Chosen shipping option.
        shipping_option_id: String,
        /// Charge identifier of the messaging service.
        service_charge_id: String,
        /// Charge identifier of the payment provider.
        provider_charge_id: String,
    },
    /// A contact joined the service.
    MessageContactRegistered,
    /// The user logged in to a website.
    MessageWebsiteConnected {
        /// Website domain.
        domain_name: String,
    },
    /// Passport data was sent.
    MessagePassportDataSent {
        /// Sent element types.
        types: Vec<SecureValueType>,
    },
    /// Passport data was received.
    MessagePassportDataReceived {
        /// Encrypted elements.
        elements: Vec<EncryptedSecureValue>,
        /// Credentials.
        credentials: EncryptedSecureCredentials,
    },
    /// Content this client can't show.
    MessageUnsupported,
}

impl PublicContent {
    /// Renders the object as sent to API clients.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if a field has no JSON representation.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Projects content to its public API form.
///
/// `is_content_secret` marks self-destructing media as secret and hides
/// server-side metadata: sticker sets and link previews. Live locations
/// report the seconds left relative to `clock`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use missive::content::domain::{FormattedText, MessageContent};
/// use missive::content::query::{PublicContent, to_public};
/// use mockable::DefaultClock;
///
/// let content = MessageContent::text(FormattedText::plain("hi"));
/// let public = to_public(&content, Utc::now(), false, &DefaultClock);
/// assert!(matches!(public, PublicContent::MessageText { .. }));
/// ```
#[must_use]
pub fn to_public(
    content: &MessageContent,
    message_date: DateTime<Utc>,
    is_content_secret: bool,
    clock: &impl Clock,
) -> PublicContent {
    match content {
        MessageContent::Text(text) => PublicContent::MessageText {
            text: text.text.clone(),
            web_page_id: (!is_content_secret && text.web_page_id.is_valid())
                .then_some(text.web_page_id),
        },
        MessageContent::Animation(animation) => PublicContent::MessageAnimation {
            animation: animation.animation.clone(),
            caption: animation.caption.clone(),
            is_secret: is_content_secret,
        },
        MessageContent::Audio(audio) => PublicContent::MessageAudio {
            audio: audio.audio.clone(),
            caption: audio.caption.clone(),
        },
        MessageContent::Document(document) => PublicContent::MessageDocument {
            document: document.document.clone(),
            caption: document.caption.clone(),
        },
        MessageContent::Photo(photo) => PublicContent::MessagePhoto {
            photo: photo.photo.clone(),
            caption: photo.caption.clone(),
            is_secret: is_content_secret,
        },
        MessageContent::Sticker(sticker) => {
            let mut public = sticker.sticker.clone();
            if is_content_secret {
                public.set_id = 0;
            }
            PublicContent::MessageSticker { sticker: public }
        }
        MessageContent::Video(video) => PublicContent::MessageVideo {
            video: video.video.clone(),
            caption: video.caption.clone(),
            is_secret: is_content_secret,
        },
        MessageContent::VoiceNote(voice) => PublicContent::MessageVoiceNote {
            voice_note: voice.voice_note.clone(),
            caption: voice.caption.clone(),
            is_listened: voice.is_listened,
        },
        MessageContent::VideoNote(note) => PublicContent::MessageVideoNote {
            video_note: note.video_note.clone(),
            is_viewed: note.is_viewed,
            is_secret: is_content_secret,
        },
        MessageContent::Contact(contact) => PublicContent::MessageContact {
            contact: contact.clone(),
        },
        MessageContent::Location(location) => PublicContent::MessageLocation {
            location: *location,
            live_period: 0,
            expires_in: 0,
        },
        MessageContent::LiveLocation(live) => PublicContent::MessageLocation {
            location: live.location,
            live_period: live.period,
            expires_in: expires_in(message_date, live.period, clock),
        },
        MessageContent::Venue(venue) => PublicContent::MessageVenue {
            venue: venue.clone(),
        },
        MessageContent::Game(game) => PublicContent::MessageGame { game: game.clone() },
        MessageContent::Invoice(invoice) => PublicContent::MessageInvoice {
            title: invoice.title.clone(),
            description: invoice.description.clone(),
            photo: invoice.photo.clone(),
            currency: invoice.currency.clone(),
            total_amount: invoice.total_amount,
            start_parameter: invoice.start_parameter.clone(),
            is_test: invoice.is_test,
            need_shipping_address: invoice.need_shipping_address,
            receipt_message_id: invoice
                .receipt_message_id
                .is_valid()
                .then_some(invoice.receipt_message_id),
        },
        MessageContent::Call(call) => PublicContent::MessageCall {
            discard_reason: call.discard_reason,
            duration: call.duration,
        },
        MessageContent::ChatCreate(action) => PublicContent::MessageBasicGroupChatCreate {
            title: action.title.clone(),
            member_user_ids: action.participant_user_ids.clone(),
        },
        MessageContent::ChannelCreate(action) => PublicContent::MessageSupergroupChatCreate {
            title: action.title.clone(),
        },
        MessageContent::ChatChangeTitle(action) => PublicContent::MessageChatChangeTitle {
            title: action.title.clone(),
        },
        MessageContent::ChatChangePhoto(action) => PublicContent::MessageChatChangePhoto {
            photo: action.photo.clone(),
        },
        MessageContent::ChatDeletePhoto => PublicContent::MessageChatDeletePhoto,
        MessageContent::ChatAddUsers(action) => PublicContent::MessageChatAddMembers {
            member_user_ids: action.user_ids.clone(),
        },
        MessageContent::ChatJoinedByLink => PublicContent::MessageChatJoinByLink,
        MessageContent::ChatDeleteUser(action) => PublicContent::MessageChatDeleteMember {
            user_id: action.user_id,
        },
        MessageContent::ChatMigrateTo(action) => PublicContent::MessageChatUpgradeTo {
            supergroup_id: action.channel_id,
        },
        MessageContent::ChannelMigrateFrom(action) => PublicContent::MessageChatUpgradeFrom {
            title: action.title.clone(),
            basic_group_id: action.chat_id,
        },
        MessageContent::PinMessage(action) => PublicContent::MessagePinMessage {
            message_id: action.message_id,
        },
        MessageContent::ScreenshotTaken => PublicContent::MessageScreenshotTaken,
        MessageContent::ChatSetTtl(action) => PublicContent::MessageChatSetTtl { ttl: action.ttl },
        MessageContent::CustomServiceAction(action) => {
            PublicContent::MessageCustomServiceAction {
                text: action.message.clone(),
            }
        }
        MessageContent::GameScore(action) => PublicContent::MessageGameScore {
            game_message_id: action.game_message_id,
            game_id: action.game_id,
            score: action.score,
        },
        MessageContent::PaymentSuccessful(action) => match &action.bot_details {
            Some(details) => PublicContent::MessagePaymentSuccessfulBot {
                invoice_message_id: action.invoice_message_id,
                currency: action.currency.clone(),
                total_amount: action.total_amount,
                invoice_payload: details.invoice_payload.clone(),
                shipping_option_id: details.shipping_option_id.clone(),
                service_charge_id: details.service_charge_id.clone(),
                provider_charge_id: details.provider_charge_id.clone(),
            },
            None => PublicContent::MessagePaymentSuccessful {
                invoice_message_id: action.invoice_message_id,
                currency: action.currency.clone(),
                total_amount: action.total_amount,
            },
        },
        MessageContent::ContactRegistered => PublicContent::MessageContactRegistered,
        MessageContent::ExpiredPhoto => PublicContent::MessageExpiredPhoto,
        MessageContent::ExpiredVideo => PublicContent::MessageExpiredVideo,
        MessageContent::WebsiteConnected(action) => PublicContent::MessageWebsiteConnected {
            domain_name: action.domain_name.clone(),
        },
        MessageContent::PassportDataSent(action) => PublicContent::MessagePassportDataSent {
            types: action.types.clone(),
        },
        MessageContent::PassportDataReceived(action) => {
            PublicContent::MessagePassportDataReceived {
                elements: action.values.clone(),
                credentials: action.credentials.clone(),
            }
        }
        // Clearing history is applied by the store, never shown.
        MessageContent::ChatDeleteHistory | MessageContent::Unsupported => {
            PublicContent::MessageUnsupported
        }
    }
}

fn expires_in(message_date: DateTime<Utc>, period: i32, clock: &impl Clock) -> i32 {
    let Some(expires_at) = message_date.checked_add_signed(TimeDelta::seconds(i64::from(period)))
    else {
        return 0;
    };
    let remaining = expires_at.signed_duration_since(clock.utc()).num_seconds();
    i32::try_from(remaining.max(0)).unwrap_or(i32::MAX)
}
