//! Tests for validating send requests and inline bot results.

use super::fixtures::{caption, invoice, options, photo, private_chat, video};
use crate::content::{
    config::ContentOptions,
    decoder::{InputMessageRequest, create_inline_content, create_input_content},
    domain::{
        ChatId, Contact, ContentKind, DialogId, FileId, FormattedText, InlineButton,
        InlineButtonAction, LabeledPrice, Location, MessageContent, Photo, ReplyMarkup, UserId,
        Venue,
    },
    error::InputContentError,
    wire::{BotInlineMessage, GeoPoint, WireInlineMessage},
};
use rstest::rstest;

fn group_chat() -> DialogId {
    DialogId::from_chat(ChatId::new(77))
}

// ============================================================================
// Text
// ============================================================================

#[rstest]
fn text_is_trimmed(options: ContentOptions, private_chat: DialogId) {
    let input = create_input_content(
        private_chat,
        InputMessageRequest::Text {
            text: FormattedText::plain("  hello  "),
            disable_web_page_preview: true,
            clear_draft: true,
        },
        &options,
    )
    .expect("text is valid");

    assert_eq!(input.content.message_text().map(|text| text.text.as_str()), Some("hello"));
    assert!(input.disable_web_page_preview);
    assert!(input.clear_draft);
}

#[rstest]
#[case::blank("   ")]
#[case::empty("")]
fn blank_text_is_rejected(options: ContentOptions, private_chat: DialogId, #[case] text: &str) {
    let result = create_input_content(
        private_chat,
        InputMessageRequest::Text {
            text: FormattedText::plain(text),
            disable_web_page_preview: false,
            clear_draft: false,
        },
        &options,
    );

    assert_eq!(result, Err(InputContentError::EmptyText));
}

#[rstest]
fn overlong_text_is_rejected(private_chat: DialogId) {
    let options = ContentOptions::strict();
    let long = "a".repeat(options.max_text_length.saturating_add(1));

    let result = create_input_content(
        private_chat,
        InputMessageRequest::Text {
            text: FormattedText::plain(long),
            disable_web_page_preview: false,
            clear_draft: false,
        },
        &options,
    );

    assert_eq!(
        result,
        Err(InputContentError::TextTooLong {
            max: options.max_text_length,
            actual: options.max_text_length.saturating_add(1),
        })
    );
}

// ============================================================================
// Media
// ============================================================================

#[rstest]
fn long_captions_are_truncated(private_chat: DialogId) {
    let options = ContentOptions::strict();

    let input = create_input_content(
        private_chat,
        InputMessageRequest::Video {
            video: video(FileId::new(3, 0)),
            caption: caption(&"c".repeat(500)),
            ttl: 0,
        },
        &options,
    )
    .expect("video is valid");

    let kept = input.content.caption().map(|text| text.text.chars().count());
    assert_eq!(kept, Some(options.max_caption_length));
}

#[rstest]
fn media_without_file_is_rejected(options: ContentOptions, private_chat: DialogId) {
    let photo_result = create_input_content(
        private_chat,
        InputMessageRequest::Photo {
            photo: Photo::default(),
            caption: FormattedText::default(),
            ttl: 0,
        },
        &options,
    );
    let video_result = create_input_content(
        private_chat,
        InputMessageRequest::Video {
            video: video(FileId::default()),
            caption: FormattedText::default(),
            ttl: 0,
        },
        &options,
    );

    assert_eq!(
        photo_result,
        Err(InputContentError::MissingFile(ContentKind::Photo))
    );
    assert_eq!(
        video_result,
        Err(InputContentError::MissingFile(ContentKind::Video))
    );
}

#[rstest]
#[case::disabled(0, 0)]
#[case::negative(-3, 0)]
#[case::within_limit(20, 20)]
#[case::capped(3_600, 60)]
fn private_chats_accept_timers(
    options: ContentOptions,
    private_chat: DialogId,
    #[case] requested: i32,
    #[case] expected: i32,
) {
    let input = create_input_content(
        private_chat,
        InputMessageRequest::Photo {
            photo: photo(FileId::new(4, 0)),
            caption: FormattedText::default(),
            ttl: requested,
        },
        &options,
    )
    .expect("photo is valid");

    assert_eq!(input.ttl, expected);
}

#[rstest]
fn group_chats_reject_timers(options: ContentOptions) {
    let result = create_input_content(
        group_chat(),
        InputMessageRequest::Photo {
            photo: photo(FileId::new(4, 0)),
            caption: FormattedText::default(),
            ttl: 10,
        },
        &options,
    );

    assert_eq!(
        result,
        Err(InputContentError::TtlNotAllowed(ContentKind::Photo))
    );
}

// ============================================================================
// Places, contacts, games and invoices
// ============================================================================

#[rstest]
#[case::static_location(0, Ok(ContentKind::Location))]
#[case::live_location(900, Ok(ContentKind::LiveLocation))]
#[case::too_short(30, Err(InputContentError::InvalidLivePeriod { period: 30, min: 60, max: 86_400 }))]
fn live_period_selects_kind(
    options: ContentOptions,
    private_chat: DialogId,
    #[case] live_period: i32,
    #[case] expected: Result<ContentKind, InputContentError>,
) {
    let result = create_input_content(
        private_chat,
        InputMessageRequest::Location {
            location: Location::new(51.5, -0.12),
            live_period,
        },
        &options,
    );

    assert_eq!(result.map(|input| input.content.kind()), expected);
}

#[rstest]
fn out_of_range_location_is_rejected(options: ContentOptions, private_chat: DialogId) {
    let result = create_input_content(
        private_chat,
        InputMessageRequest::Location {
            location: Location::new(0.0, 181.0),
            live_period: 0,
        },
        &options,
    );

    assert_eq!(result, Err(InputContentError::InvalidLocation));
}

#[rstest]
fn venue_needs_title_and_address(options: ContentOptions, private_chat: DialogId) {
    let result = create_input_content(
        private_chat,
        InputMessageRequest::Venue {
            venue: Venue {
                location: Location::new(48.85, 2.35),
                title: "Café".to_owned(),
                ..Venue::default()
            },
        },
        &options,
    );

    assert_eq!(result, Err(InputContentError::InvalidVenue));
}

#[rstest]
fn contact_needs_phone_and_first_name(options: ContentOptions, private_chat: DialogId) {
    let result = create_input_content(
        private_chat,
        InputMessageRequest::Contact {
            contact: Contact {
                first_name: "Ada".to_owned(),
                ..Contact::default()
            },
        },
        &options,
    );

    assert_eq!(result, Err(InputContentError::InvalidContact));
}

#[rstest]
fn game_needs_bot_and_short_name(options: ContentOptions, private_chat: DialogId) {
    let result = create_input_content(
        private_chat,
        InputMessageRequest::Game {
            bot_user_id: UserId::default(),
            short_name: "tetris".to_owned(),
        },
        &options,
    );

    assert_eq!(result, Err(InputContentError::InvalidGame));
}

#[rstest]
fn invoice_total_is_summed_from_prices(options: ContentOptions, private_chat: DialogId) {
    let mut request = invoice();
    request.prices.push(LabeledPrice {
        label: "tip".to_owned(),
        amount: 50,
    });
    request.total_amount = 0;

    let input = create_input_content(
        private_chat,
        InputMessageRequest::Invoice { invoice: request },
        &options,
    )
    .expect("invoice is valid");

    let MessageContent::Invoice(created) = input.content else {
        panic!("expected an invoice");
    };
    assert_eq!(created.total_amount, 400);
}

#[rstest]
fn invoice_without_prices_is_rejected(options: ContentOptions, private_chat: DialogId) {
    let mut request = invoice();
    request.prices.clear();

    let result = create_input_content(
        private_chat,
        InputMessageRequest::Invoice { invoice: request },
        &options,
    );

    assert!(matches!(result, Err(InputContentError::InvalidInvoice(_))));
}

// ============================================================================
// Inline results
// ============================================================================

fn inline(message: BotInlineMessage) -> WireInlineMessage {
    WireInlineMessage {
        message,
        reply_markup: None,
    }
}

#[rstest]
fn auto_media_uses_the_result_file(options: ContentOptions) {
    let content = create_inline_content(
        FileId::new(6, 0),
        inline(BotInlineMessage::MediaAuto {
            caption: " funny ".to_owned(),
        }),
        ContentKind::Video,
        None,
        None,
        &options,
    )
    .expect("video result is valid");

    assert_eq!(content.content.file_id(), FileId::new(6, 0));
    assert_eq!(
        content.content.caption().map(|text| text.text.as_str()),
        Some("funny")
    );
}

#[rstest]
#[case::missing_file(ContentKind::Document, InputContentError::MissingFile(ContentKind::Document))]
#[case::not_media(ContentKind::Contact, InputContentError::InvalidInlineResult(ContentKind::Contact))]
fn unusable_auto_media_is_rejected(
    options: ContentOptions,
    #[case] allowed_kind: ContentKind,
    #[case] expected: InputContentError,
) {
    let result = create_inline_content(
        FileId::default(),
        inline(BotInlineMessage::MediaAuto {
            caption: String::new(),
        }),
        allowed_kind,
        None,
        None,
        &options,
    );

    assert_eq!(result, Err(expected));
}

#[rstest]
fn inline_text_keeps_preview_choice(options: ContentOptions) {
    let content = create_inline_content(
        FileId::default(),
        WireInlineMessage {
            message: BotInlineMessage::Text {
                text: "see https://example.com".to_owned(),
                entities: Vec::new(),
                no_webpage: true,
            },
            reply_markup: Some(ReplyMarkup::default()),
        },
        ContentKind::Text,
        None,
        None,
        &options,
    )
    .expect("text result is valid");

    assert!(content.disable_web_page_preview);
    assert_eq!(content.reply_markup, None);
}

#[rstest]
fn inline_keyboard_is_kept(options: ContentOptions) {
    let markup = ReplyMarkup {
        rows: vec![vec![InlineButton {
            text: "Open".to_owned(),
            action: InlineButtonAction::Url("https://example.com".to_owned()),
        }]],
    };

    let content = create_inline_content(
        FileId::default(),
        WireInlineMessage {
            message: BotInlineMessage::Geo {
                point: GeoPoint {
                    latitude: 10.0,
                    longitude: 20.0,
                },
                period: 600,
            },
            reply_markup: Some(markup.clone()),
        },
        ContentKind::Location,
        None,
        None,
        &options,
    )
    .expect("location result is valid");

    assert_eq!(content.content.kind(), ContentKind::LiveLocation);
    assert_eq!(content.reply_markup, Some(markup));
}
