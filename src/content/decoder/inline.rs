//! Content for results chosen from inline bot queries.

use crate::content::{
    config::ContentOptions,
    domain::{
        Animation, AnimationContent, Audio, AudioContent, Contact, ContentKind, Document,
        DocumentContent, FileId, FormattedText, Game, InlineContent, LiveLocationContent,
        Location, MessageContent, Photo, PhotoContent, Sticker, StickerContent, UserId, Venue,
        Video, VideoContent, VideoNote, VideoNoteContent, VoiceNote, VoiceNoteContent,
    },
    error::InputContentError,
    wire::{BotInlineMessage, GeoPoint, WireInlineMessage},
};

/// Builds the content sent when a user picks an inline query result.
///
/// `allowed_kind` is the kind the result was declared as. It decides how
/// an auto-media message uses `file_id`, `photo` or `game`; other inline
/// messages carry their own content.
///
/// # Examples
///
/// ```
/// use missive::content::{
///     config::ContentOptions,
///     decoder::create_inline_content,
///     domain::{ContentKind, FileId},
///     wire::{BotInlineMessage, WireInlineMessage},
/// };
///
/// let message = WireInlineMessage {
///     message: BotInlineMessage::MediaAuto { caption: "cat".to_owned() },
///     reply_markup: None,
/// };
/// let inline = create_inline_content(
///     FileId::new(3, 0),
///     message,
///     ContentKind::Animation,
///     None,
///     None,
///     &ContentOptions::default(),
/// )?;
/// assert_eq!(inline.content.kind(), ContentKind::Animation);
/// # Ok::<(), missive::content::error::InputContentError>(())
/// ```
///
/// # Errors
///
/// Returns `InputContentError` if the result's media is missing or can't
/// be sent as `allowed_kind`, or if its text, location or contact is
/// invalid.
pub fn create_inline_content(
    file_id: FileId,
    inline_message: WireInlineMessage,
    allowed_kind: ContentKind,
    photo: Option<Photo>,
    game: Option<Game>,
    options: &ContentOptions,
) -> Result<InlineContent, InputContentError> {
    let WireInlineMessage {
        message,
        reply_markup,
    } = inline_message;
    let mut disable_web_page_preview = false;
    let content = match message {
        BotInlineMessage::MediaAuto { caption } => auto_media(
            file_id,
            allowed_kind,
            photo,
            game,
            FormattedText::plain(caption)
                .trimmed()
                .truncated(options.max_caption_length),
        )?,
        BotInlineMessage::Text {
            text,
            entities,
            no_webpage,
        } => {
            let formatted = FormattedText::new(text, entities).trimmed();
            if formatted.is_empty() {
                return Err(InputContentError::EmptyText);
            }
            disable_web_page_preview = no_webpage;
            MessageContent::text(formatted.truncated(options.max_text_length))
        }
        BotInlineMessage::Geo { point, period } => {
            let location = inline_location(point)?;
            if period > 0 {
                MessageContent::LiveLocation(LiveLocationContent { location, period })
            } else {
                MessageContent::Location(location)
            }
        }
        BotInlineMessage::Venue {
            point,
            title,
            address,
            provider,
            venue_id,
            venue_type,
        } => MessageContent::Venue(Venue {
            location: inline_location(point)?,
            title,
            address,
            provider,
            id: venue_id,
            venue_type,
        }),
        BotInlineMessage::Contact {
            phone_number,
            first_name,
            last_name,
            vcard,
        } => {
            if phone_number.is_empty() {
                return Err(InputContentError::InvalidContact);
            }
            MessageContent::Contact(Contact {
                phone_number,
                first_name,
                last_name,
                vcard,
                user_id: UserId::default(),
            })
        }
    };
    Ok(InlineContent {
        content,
        reply_markup: reply_markup.filter(|markup| !markup.is_empty()),
        disable_web_page_preview,
    })
}

fn auto_media(
    file_id: FileId,
    allowed_kind: ContentKind,
    photo: Option<Photo>,
    game: Option<Game>,
    caption: FormattedText,
) -> Result<MessageContent, InputContentError> {
    let missing = || InputContentError::MissingFile(allowed_kind);
    let require_file = || {
        if file_id.is_valid() {
            Ok(file_id)
        } else {
            Err(missing())
        }
    };
    let content = match allowed_kind {
        ContentKind::Animation => MessageContent::Animation(AnimationContent {
            animation: Animation {
                file_id: require_file()?,
                ..Animation::default()
            },
            caption,
        }),
        ContentKind::Audio => MessageContent::Audio(AudioContent {
            audio: Audio {
                file_id: require_file()?,
                ..Audio::default()
            },
            caption,
        }),
        ContentKind::Document => MessageContent::Document(DocumentContent {
            document: Document {
                file_id: require_file()?,
                ..Document::default()
            },
            caption,
        }),
        ContentKind::Photo => MessageContent::Photo(PhotoContent {
            photo: photo.filter(|found| !found.is_empty()).ok_or_else(missing)?,
            caption,
            ttl: 0,
        }),
        ContentKind::Sticker => MessageContent::Sticker(StickerContent {
            sticker: Sticker {
                file_id: require_file()?,
                ..Sticker::default()
            },
        }),
        ContentKind::Video => MessageContent::Video(VideoContent {
            video: Video {
                file_id: require_file()?,
                ..Video::default()
            },
            caption,
            ttl: 0,
        }),
        ContentKind::VideoNote => MessageContent::VideoNote(VideoNoteContent {
            video_note: VideoNote {
                file_id: require_file()?,
                ..VideoNote::default()
            },
            is_viewed: false,
        }),
        ContentKind::VoiceNote => MessageContent::VoiceNote(VoiceNoteContent {
            voice_note: VoiceNote {
                file_id: require_file()?,
                ..VoiceNote::default()
            },
            caption,
            is_listened: false,
        }),
        ContentKind::Game => {
            let mut found = game.ok_or_else(missing)?;
            found.text = caption;
            MessageContent::Game(found)
        }
        ContentKind::Text
        | ContentKind::Contact
        | ContentKind::Location
        | ContentKind::Venue
        | ContentKind::ChatCreate
        | ContentKind::ChatChangeTitle
        | ContentKind::ChatChangePhoto
        | ContentKind::ChatDeletePhoto
        | ContentKind::ChatDeleteHistory
        | ContentKind::ChatAddUsers
        | ContentKind::ChatJoinedByLink
        | ContentKind::ChatDeleteUser
        | ContentKind::ChatMigrateTo
        | ContentKind::ChannelCreate
        | ContentKind::ChannelMigrateFrom
        | ContentKind::PinMessage
        | ContentKind::GameScore
        | ContentKind::ScreenshotTaken
        | ContentKind::ChatSetTtl
        | ContentKind::Unsupported
        | ContentKind::Call
        | ContentKind::Invoice
        | ContentKind::PaymentSuccessful
        | ContentKind::ContactRegistered
        | ContentKind::ExpiredPhoto
        | ContentKind::ExpiredVideo
        | ContentKind::LiveLocation
        | ContentKind::CustomServiceAction
        | ContentKind::WebsiteConnected
        | ContentKind::PassportDataSent
        | ContentKind::PassportDataReceived => {
            return Err(InputContentError::InvalidInlineResult(allowed_kind));
        }
    };
    Ok(content)
}

fn inline_location(point: GeoPoint) -> Result<Location, InputContentError> {
    let location = Location::new(point.latitude, point.longitude);
    if location.is_valid() {
        Ok(location)
    } else {
        Err(InputContentError::InvalidLocation)
    }
}
