//! Decoding of public protocol media.

use super::{
    DecodeContext,
    document::{DocumentParts, classify_document},
    location_from_point, photo_from_wire, photo_size_from_wire,
};
use crate::content::{
    domain::{
        Contact, DialogId, FormattedText, Game, Invoice, LiveLocationContent, MessageContent,
        MessageId, PhotoContent, TextContent, UserId, Venue, WebPageId,
    },
    wire::{PublicMedia, WireDocument, WireGame, WireInvoice},
};

/// Builds content from a public protocol message.
///
/// `text` is the message text; for media it becomes the caption.
/// Self-destruct timers found on the media are written to `ttl`.
/// `is_content_read` seeds the played flags of voice and video notes.
///
/// Unknown and malformed media produce
/// [`MessageContent::Unsupported`].
///
/// # Examples
///
/// ```
/// use missive::content::{
///     adapters::memory::InMemoryFileRegistry,
///     config::ContentOptions,
///     decoder::{DecodeContext, decode_public_media},
///     domain::{ContentKind, DialogId, FormattedText, UserId},
///     wire::PublicMedia,
/// };
///
/// let files = InMemoryFileRegistry::new();
/// let options = ContentOptions::default();
/// let ctx = DecodeContext::new(&files, &options);
/// let mut ttl = 0;
/// let content = decode_public_media(
///     FormattedText::plain("hello"),
///     PublicMedia::Empty,
///     DialogId::from_user(UserId::new(1)),
///     false,
///     UserId::default(),
///     &mut ttl,
///     &ctx,
/// );
/// assert_eq!(content.kind(), ContentKind::Text);
/// ```
#[must_use]
pub fn decode_public_media(
    text: FormattedText,
    media: PublicMedia,
    owner: DialogId,
    is_content_read: bool,
    via_bot_user_id: UserId,
    ttl: &mut i32,
    ctx: &DecodeContext<'_>,
) -> MessageContent {
    match media {
        PublicMedia::Empty => MessageContent::text(text),
        PublicMedia::WebPage { web_page_id } => MessageContent::Text(TextContent {
            text,
            web_page_id: web_page_id.unwrap_or_default(),
        }),
        PublicMedia::Photo { photo: None, .. } => MessageContent::ExpiredPhoto,
        PublicMedia::Photo {
            photo: Some(wire_photo),
            ttl_seconds,
        } => {
            let photo = photo_from_wire(&wire_photo, owner, ctx);
            if photo.is_empty() {
                return unsupported("photo without sizes");
            }
            if let Some(seconds) = ttl_seconds {
                *ttl = seconds.max(0);
            }
            MessageContent::Photo(PhotoContent {
                photo,
                caption: text,
                ttl: ttl_seconds.unwrap_or(0).max(0),
            })
        }
        PublicMedia::Geo { point } => match point.and_then(location_from_point) {
            Some(location) => MessageContent::Location(location),
            None => unsupported("empty or invalid location"),
        },
        PublicMedia::GeoLive { point, period } => match point.and_then(location_from_point) {
            Some(location) if period > 0 => {
                MessageContent::LiveLocation(LiveLocationContent { location, period })
            }
            Some(location) => MessageContent::Location(location),
            None => unsupported("empty or invalid live location"),
        },
        PublicMedia::Venue {
            point,
            title,
            address,
            provider,
            venue_id,
            venue_type,
        } => match point.and_then(location_from_point) {
            Some(location) => MessageContent::Venue(Venue {
                location,
                title,
                address,
                provider,
                id: venue_id,
                venue_type,
            }),
            None => unsupported("venue without location"),
        },
        PublicMedia::Contact {
            phone_number,
            first_name,
            last_name,
            vcard,
            user_id,
        } => MessageContent::Contact(Contact {
            phone_number,
            first_name,
            last_name,
            vcard,
            user_id: UserId::new(user_id),
        }),
        PublicMedia::Document { document: None, .. } => MessageContent::ExpiredVideo,
        PublicMedia::Document {
            document: Some(document),
            ttl_seconds,
        } => {
            if let Some(seconds) = ttl_seconds {
                *ttl = seconds.max(0);
            }
            decode_document(
                document,
                owner,
                text,
                is_content_read,
                ttl_seconds.unwrap_or(0).max(0),
                ctx,
            )
        }
        PublicMedia::Game(game) => decode_game(game, text, owner, via_bot_user_id, ctx),
        PublicMedia::Invoice(invoice) => decode_invoice(invoice, owner, ctx),
        PublicMedia::Unsupported => MessageContent::Unsupported,
        PublicMedia::Unknown { constructor } => {
            tracing::debug!(constructor, "unknown public media");
            MessageContent::Unsupported
        }
    }
}

/// Registers a server document and classifies it.
pub(super) fn decode_document(
    document: WireDocument,
    owner: DialogId,
    caption: FormattedText,
    is_content_read: bool,
    ttl: i32,
    ctx: &DecodeContext<'_>,
) -> MessageContent {
    let file_id = match ctx.files.register_remote(&document.location, owner) {
        Ok(file_id) => file_id,
        Err(err) => {
            tracing::debug!(error = %err, "document can't be registered");
            return MessageContent::Unsupported;
        }
    };
    let thumbnail = document
        .thumbnail
        .as_ref()
        .and_then(|size| photo_size_from_wire(size, owner, ctx));
    classify_document(
        DocumentParts {
            file_id,
            thumbnail,
            mime_type: document.mime_type,
            attributes: document.attributes,
        },
        caption,
        is_content_read,
        ttl,
    )
}

fn decode_game(
    game: WireGame,
    text: FormattedText,
    owner: DialogId,
    via_bot_user_id: UserId,
    ctx: &DecodeContext<'_>,
) -> MessageContent {
    let photo = game
        .photo
        .as_ref()
        .map(|photo| photo_from_wire(photo, owner, ctx))
        .unwrap_or_default();
    let animation_file_id = game
        .document
        .as_ref()
        .and_then(|document| ctx.files.register_remote(&document.location, owner).ok())
        .unwrap_or_default();
    MessageContent::Game(Game {
        id: game.id,
        access_hash: game.access_hash,
        bot_user_id: via_bot_user_id,
        short_name: game.short_name,
        title: game.title,
        description: game.description,
        photo,
        animation_file_id,
        text,
    })
}

fn decode_invoice(
    invoice: WireInvoice,
    owner: DialogId,
    ctx: &DecodeContext<'_>,
) -> MessageContent {
    let photo = invoice
        .photo
        .as_ref()
        .map(|photo| photo_from_wire(photo, owner, ctx))
        .unwrap_or_default();
    MessageContent::Invoice(Invoice {
        title: invoice.title,
        description: invoice.description,
        photo,
        start_parameter: invoice.start_parameter,
        currency: invoice.currency,
        prices: Vec::new(),
        total_amount: invoice.total_amount,
        receipt_message_id: invoice
            .receipt_message_id
            .map(MessageId::from_server)
            .unwrap_or_default(),
        is_test: invoice.is_test,
        need_shipping_address: invoice.shipping_address_requested,
    })
}

fn unsupported(reason: &'static str) -> MessageContent {
    tracing::debug!(reason, "public media degraded to unsupported");
    MessageContent::Unsupported
}
