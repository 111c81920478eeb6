//! Validation of public-API send requests.

use crate::content::{
    config::ContentOptions,
    domain::{
        Animation, AnimationContent, Audio, AudioContent, Contact, ContentKind, DialogId,
        DialogType, Document, DocumentContent, FileId, FormattedText, Game, InputContent, Invoice,
        LiveLocationContent, Location, MessageContent, Photo, PhotoContent, Sticker,
        StickerContent, UserId, Venue, Video, VideoContent, VideoNote, VideoNoteContent, VoiceNote,
        VoiceNoteContent,
    },
    error::InputContentError,
};

/// A message a client asked to send.
///
/// Media requests carry files the file manager has already resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum InputMessageRequest {
    /// A text message.
    Text {
        /// The text.
        text: FormattedText,
        /// Suppress the link preview.
        disable_web_page_preview: bool,
        /// Clear the chat draft once sent.
        clear_draft: bool,
    },
    /// An animation.
    Animation {
        /// The animation.
        animation: Animation,
        /// Caption.
        caption: FormattedText,
    },
    /// A music file.
    Audio {
        /// The audio file.
        audio: Audio,
        /// Caption.
        caption: FormattedText,
    },
    /// A generic file.
    Document {
        /// The document.
        document: Document,
        /// Caption.
        caption: FormattedText,
    },
    /// A photo.
    Photo {
        /// The photo.
        photo: Photo,
        /// Caption.
        caption: FormattedText,
        /// Self-destruct timer in seconds, zero if none.
        ttl: i32,
    },
    /// A sticker.
    Sticker {
        /// The sticker.
        sticker: Sticker,
    },
    /// A video.
    Video {
        /// The video.
        video: Video,
        /// Caption.
        caption: FormattedText,
        /// Self-destruct timer in seconds, zero if none.
        ttl: i32,
    },
    /// A round video note.
    VideoNote {
        /// The video note.
        video_note: VideoNote,
    },
    /// A voice note.
    VoiceNote {
        /// The voice note.
        voice_note: VoiceNote,
        /// Caption.
        caption: FormattedText,
    },
    /// A static or live location.
    Location {
        /// The point.
        location: Location,
        /// Live period in seconds, zero for a static location.
        live_period: i32,
    },
    /// A venue.
    Venue {
        /// The venue.
        venue: Venue,
    },
    /// A contact card.
    Contact {
        /// The contact.
        contact: Contact,
    },
    /// A game offered by a bot.
    Game {
        /// Bot owning the game.
        bot_user_id: UserId,
        /// Short name of the game.
        short_name: String,
    },
    /// An invoice, bots only.
    Invoice {
        /// The invoice.
        invoice: Invoice,
    },
}

/// Validates a send request and builds the content to send.
///
/// Text is trimmed and must be non-empty and within
/// [`ContentOptions::max_text_length`]. Captions are trimmed and truncated
/// to [`ContentOptions::max_caption_length`]. Self-destruct timers are only
/// accepted on photos and videos sent to private chats and are capped at
/// [`ContentOptions::max_secret_ttl`].
///
/// # Examples
///
/// ```
/// use missive::content::{
///     config::ContentOptions,
///     decoder::{InputMessageRequest, create_input_content},
///     domain::{ContentKind, DialogId, FormattedText, UserId},
/// };
///
/// let request = InputMessageRequest::Text {
///     text: FormattedText::plain("  hello  "),
///     disable_web_page_preview: true,
///     clear_draft: false,
/// };
/// let dialog = DialogId::from_user(UserId::new(5));
/// let input = create_input_content(dialog, request, &ContentOptions::default())?;
/// assert_eq!(input.content.kind(), ContentKind::Text);
/// assert!(input.disable_web_page_preview);
/// # Ok::<(), missive::content::error::InputContentError>(())
/// ```
///
/// # Errors
///
/// Returns `InputContentError` describing the first rule the request
/// breaks.
pub fn create_input_content(
    dialog: DialogId,
    request: InputMessageRequest,
    options: &ContentOptions,
) -> Result<InputContent, InputContentError> {
    let caption = |text: FormattedText| text.trimmed().truncated(options.max_caption_length);
    let input = match request {
        InputMessageRequest::Text {
            text,
            disable_web_page_preview,
            clear_draft,
        } => InputContent::new(MessageContent::text(message_text(text, options)?))
            .with_disable_web_page_preview(disable_web_page_preview)
            .with_clear_draft(clear_draft),
        InputMessageRequest::Animation {
            animation,
            caption: text,
        } => {
            require_file(animation.file_id, ContentKind::Animation)?;
            InputContent::new(MessageContent::Animation(AnimationContent {
                animation,
                caption: caption(text),
            }))
        }
        InputMessageRequest::Audio {
            audio,
            caption: text,
        } => {
            require_file(audio.file_id, ContentKind::Audio)?;
            InputContent::new(MessageContent::Audio(AudioContent {
                audio,
                caption: caption(text),
            }))
        }
        InputMessageRequest::Document {
            document,
            caption: text,
        } => {
            require_file(document.file_id, ContentKind::Document)?;
            InputContent::new(MessageContent::Document(DocumentContent {
                document,
                caption: caption(text),
            }))
        }
        InputMessageRequest::Photo {
            photo,
            caption: text,
            ttl: requested_ttl,
        } => {
            if photo.largest().is_none() {
                return Err(InputContentError::MissingFile(ContentKind::Photo));
            }
            let ttl = checked_ttl(dialog, ContentKind::Photo, requested_ttl, options)?;
            InputContent::new(MessageContent::Photo(PhotoContent {
                photo,
                caption: caption(text),
                ttl,
            }))
            .with_ttl(ttl)
        }
        InputMessageRequest::Sticker { sticker } => {
            require_file(sticker.file_id, ContentKind::Sticker)?;
            InputContent::new(MessageContent::Sticker(StickerContent { sticker }))
        }
        InputMessageRequest::Video {
            video,
            caption: text,
            ttl: requested_ttl,
        } => {
            require_file(video.file_id, ContentKind::Video)?;
            let ttl = checked_ttl(dialog, ContentKind::Video, requested_ttl, options)?;
            InputContent::new(MessageContent::Video(VideoContent {
                video,
                caption: caption(text),
                ttl,
            }))
            .with_ttl(ttl)
        }
        InputMessageRequest::VideoNote { video_note } => {
            require_file(video_note.file_id, ContentKind::VideoNote)?;
            InputContent::new(MessageContent::VideoNote(VideoNoteContent {
                video_note,
                is_viewed: false,
            }))
        }
        InputMessageRequest::VoiceNote {
            voice_note,
            caption: text,
        } => {
            require_file(voice_note.file_id, ContentKind::VoiceNote)?;
            InputContent::new(MessageContent::VoiceNote(VoiceNoteContent {
                voice_note,
                caption: caption(text),
                is_listened: false,
            }))
        }
        InputMessageRequest::Location {
            location,
            live_period,
        } => InputContent::new(location_content(location, live_period, options)?),
        InputMessageRequest::Venue { venue } => {
            InputContent::new(MessageContent::Venue(checked_venue(venue)?))
        }
        InputMessageRequest::Contact { contact } => {
            if contact.phone_number.is_empty() || contact.first_name.is_empty() {
                return Err(InputContentError::InvalidContact);
            }
            InputContent::new(MessageContent::Contact(contact))
        }
        InputMessageRequest::Game {
            bot_user_id,
            short_name,
        } => {
            if !bot_user_id.is_valid() || short_name.is_empty() {
                return Err(InputContentError::InvalidGame);
            }
            InputContent::new(MessageContent::Game(Game {
                bot_user_id,
                short_name,
                ..Game::default()
            }))
        }
        InputMessageRequest::Invoice { invoice } => {
            InputContent::new(MessageContent::Invoice(checked_invoice(invoice)?))
        }
    };
    tracing::trace!(kind = %input.content.kind(), %dialog, "validated send request");
    Ok(input)
}

fn message_text(
    text: FormattedText,
    options: &ContentOptions,
) -> Result<FormattedText, InputContentError> {
    let trimmed = text.trimmed();
    if trimmed.is_empty() {
        return Err(InputContentError::EmptyText);
    }
    let actual = trimmed.text.chars().count();
    if actual > options.max_text_length {
        return Err(InputContentError::TextTooLong {
            max: options.max_text_length,
            actual,
        });
    }
    Ok(trimmed)
}

fn require_file(file_id: FileId, kind: ContentKind) -> Result<(), InputContentError> {
    if file_id.is_valid() {
        Ok(())
    } else {
        Err(InputContentError::MissingFile(kind))
    }
}

fn checked_ttl(
    dialog: DialogId,
    kind: ContentKind,
    ttl: i32,
    options: &ContentOptions,
) -> Result<i32, InputContentError> {
    if ttl <= 0 {
        return Ok(0);
    }
    if dialog.dialog_type() != DialogType::User {
        return Err(InputContentError::TtlNotAllowed(kind));
    }
    Ok(ttl.min(options.max_secret_ttl))
}

fn location_content(
    location: Location,
    live_period: i32,
    options: &ContentOptions,
) -> Result<MessageContent, InputContentError> {
    if !location.is_valid() {
        return Err(InputContentError::InvalidLocation);
    }
    if live_period == 0 {
        return Ok(MessageContent::Location(location));
    }
    let (min, max) = (
        options.min_live_location_period,
        options.max_live_location_period,
    );
    if !(min..=max).contains(&live_period) {
        return Err(InputContentError::InvalidLivePeriod {
            period: live_period,
            min,
            max,
        });
    }
    Ok(MessageContent::LiveLocation(LiveLocationContent {
        location,
        period: live_period,
    }))
}

fn checked_venue(venue: Venue) -> Result<Venue, InputContentError> {
    if !venue.location.is_valid() {
        return Err(InputContentError::InvalidLocation);
    }
    if venue.title.is_empty() || venue.address.is_empty() {
        return Err(InputContentError::InvalidVenue);
    }
    Ok(venue)
}

fn checked_invoice(invoice: Invoice) -> Result<Invoice, InputContentError> {
    if invoice.title.is_empty() {
        return Err(InputContentError::InvalidInvoice("title is empty".to_owned()));
    }
    if invoice.currency.is_empty() {
        return Err(InputContentError::InvalidInvoice(
            "currency is empty".to_owned(),
        ));
    }
    if invoice.prices.is_empty() {
        return Err(InputContentError::InvalidInvoice("no prices".to_owned()));
    }
    if invoice.prices.iter().any(|price| price.amount < 0) {
        return Err(InputContentError::InvalidInvoice(
            "negative price".to_owned(),
        ));
    }
    let total_amount = invoice
        .prices
        .iter()
        .fold(0_i64, |total, price| total.saturating_add(price.amount));
    Ok(Invoice {
        total_amount,
        ..invoice
    })
}
