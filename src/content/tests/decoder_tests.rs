//! Tests for building content from public, secret and local sources.

use super::fixtures::{options, private_chat};
use crate::content::{
    adapters::memory::InMemoryFileRegistry,
    config::ContentOptions,
    decoder::{
        DecodeContext, chat_set_ttl_content, decode_action, decode_public_media,
        decode_secret_media, key_fingerprint, screenshot_taken_content,
    },
    domain::{
        ChatSetTtlAction, ContentKind, DialogId, EntityKind, FormattedText, MessageContent,
        MessageEntity, MessageId, UserId,
    },
    error::DecodeError,
    secret_media::{JoinBarrier, SecretPart},
    wire::{
        DocumentAttribute, EncryptedFile, GeoPoint, PaymentCharge, PublicAction, PublicMedia,
        RemoteFile, SecretEntity, SecretKey, SecretMedia, SecretThumbnail, WireDocument,
        WirePhoto, WirePhotoSize,
    },
};
use rstest::{fixture, rstest};

#[fixture]
fn files() -> InMemoryFileRegistry {
    InMemoryFileRegistry::new()
}

fn decode(
    media: PublicMedia,
    files: &InMemoryFileRegistry,
    options: &ContentOptions,
) -> (MessageContent, i32) {
    let ctx = DecodeContext::new(files, options);
    let mut ttl = 0;
    let content = decode_public_media(
        FormattedText::plain("caption"),
        media,
        DialogId::from_user(UserId::new(42)),
        false,
        UserId::default(),
        &mut ttl,
        &ctx,
    );
    (content, ttl)
}

fn remote(id: i64) -> RemoteFile {
    RemoteFile {
        id,
        access_hash: 1,
        dc_id: 2,
        size: 4_096,
    }
}

fn wire_document(attributes: Vec<DocumentAttribute>) -> WireDocument {
    WireDocument {
        location: remote(300),
        date: 1_600_000_000,
        mime_type: "application/octet-stream".to_owned(),
        thumbnail: None,
        attributes,
    }
}

// ============================================================================
// Public media
// ============================================================================

#[rstest]
fn unknown_public_media_is_unsupported(files: InMemoryFileRegistry, options: ContentOptions) {
    let (content, _) = decode(PublicMedia::Unknown { constructor: 0xdead }, &files, &options);

    assert_eq!(content, MessageContent::Unsupported);
}

#[rstest]
fn photo_registers_sizes_and_reports_timer(files: InMemoryFileRegistry, options: ContentOptions) {
    let media = PublicMedia::Photo {
        photo: Some(WirePhoto {
            id: 10,
            date: 1_600_000_000,
            sizes: vec![
                WirePhotoSize {
                    size_type: "x".to_owned(),
                    width: 800,
                    height: 600,
                    location: Some(remote(101)),
                },
                WirePhotoSize {
                    size_type: "s".to_owned(),
                    width: 90,
                    height: 60,
                    location: Some(remote(102)),
                },
                WirePhotoSize {
                    size_type: "empty".to_owned(),
                    width: 0,
                    height: 0,
                    location: None,
                },
            ],
            has_stickers: false,
        }),
        ttl_seconds: Some(15),
    };

    let (content, ttl) = decode(media, &files, &options);

    let MessageContent::Photo(photo) = &content else {
        panic!("expected a photo, got {:?}", content.kind());
    };
    assert_eq!(ttl, 15);
    assert_eq!(photo.ttl, 15);
    assert_eq!(photo.photo.sizes.len(), 2);
    assert_eq!(
        photo.photo.largest().map(|size| size.size_type.as_str()),
        Some("x")
    );
    assert!(content.file_id().is_valid());
}

#[rstest]
fn expired_media_keep_their_expired_kinds(files: InMemoryFileRegistry, options: ContentOptions) {
    let (photo, _) = decode(
        PublicMedia::Photo {
            photo: None,
            ttl_seconds: Some(10),
        },
        &files,
        &options,
    );
    let (video, _) = decode(
        PublicMedia::Document {
            document: None,
            ttl_seconds: Some(10),
        },
        &files,
        &options,
    );

    assert_eq!(photo, MessageContent::ExpiredPhoto);
    assert_eq!(video, MessageContent::ExpiredVideo);
}

#[rstest]
#[case(vec![DocumentAttribute::Sticker { alt: "🙂".to_owned(), set_id: 1, is_mask: false }], ContentKind::Sticker)]
#[case(vec![DocumentAttribute::Animated, DocumentAttribute::Filename("a.gif".to_owned())], ContentKind::Animation)]
#[case(vec![DocumentAttribute::Video { duration: 5, width: 240, height: 240, round_message: true, supports_streaming: false }], ContentKind::VideoNote)]
#[case(vec![DocumentAttribute::Video { duration: 5, width: 640, height: 480, round_message: false, supports_streaming: true }], ContentKind::Video)]
#[case(vec![DocumentAttribute::Audio { duration: 3, voice: true, title: String::new(), performer: String::new(), waveform: vec![1, 2] }], ContentKind::VoiceNote)]
#[case(vec![DocumentAttribute::Audio { duration: 180, voice: false, title: "Song".to_owned(), performer: "Band".to_owned(), waveform: Vec::new() }], ContentKind::Audio)]
#[case(vec![DocumentAttribute::Filename("notes.txt".to_owned())], ContentKind::Document)]
fn documents_are_classified_by_attributes(
    files: InMemoryFileRegistry,
    options: ContentOptions,
    #[case] attributes: Vec<DocumentAttribute>,
    #[case] expected: ContentKind,
) {
    let (content, _) = decode(
        PublicMedia::Document {
            document: Some(wire_document(attributes)),
            ttl_seconds: None,
        },
        &files,
        &options,
    );

    assert_eq!(content.kind(), expected);
    assert!(content.file_id().is_valid());
}

#[rstest]
fn venue_without_location_is_unsupported(files: InMemoryFileRegistry, options: ContentOptions) {
    let (content, _) = decode(
        PublicMedia::Venue {
            point: None,
            title: "Nowhere".to_owned(),
            address: String::new(),
            provider: String::new(),
            venue_id: String::new(),
            venue_type: String::new(),
        },
        &files,
        &options,
    );

    assert_eq!(content, MessageContent::Unsupported);
}

// ============================================================================
// Service actions
// ============================================================================

#[rstest]
fn unknown_action_is_unsupported(files: InMemoryFileRegistry, options: ContentOptions) {
    let ctx = DecodeContext::new(&files, &options);

    let content = decode_action(
        PublicAction::Unknown { constructor: 0xbeef },
        DialogId::from_user(UserId::new(42)),
        MessageId::default(),
        &ctx,
    );

    assert_eq!(content, MessageContent::Unsupported);
}

#[rstest]
#[case(MessageId::from_server(41), ContentKind::PinMessage)]
#[case(MessageId::default(), ContentKind::Unsupported)]
fn pin_needs_the_pinned_message(
    files: InMemoryFileRegistry,
    options: ContentOptions,
    #[case] reply_to: MessageId,
    #[case] expected: ContentKind,
) {
    let ctx = DecodeContext::new(&files, &options);

    let content = decode_action(
        PublicAction::PinMessage,
        DialogId::from_user(UserId::new(42)),
        reply_to,
        &ctx,
    );

    assert_eq!(content.kind(), expected);
    if expected == ContentKind::PinMessage {
        assert_eq!(content.pinned_message_id(), reply_to);
    }
}

#[rstest]
fn invalid_added_users_are_dropped(files: InMemoryFileRegistry, options: ContentOptions) {
    let ctx = DecodeContext::new(&files, &options);

    let content = decode_action(
        PublicAction::ChatAddUser {
            users: vec![0, 7, -1],
        },
        DialogId::from_user(UserId::new(42)),
        MessageId::default(),
        &ctx,
    );

    let MessageContent::ChatAddUsers(action) = content else {
        panic!("expected added users");
    };
    assert_eq!(action.user_ids, vec![UserId::new(7)]);
}

#[rstest]
fn bot_payment_keeps_binary_payload(files: InMemoryFileRegistry, options: ContentOptions) {
    let ctx = DecodeContext::new(&files, &options);
    let payload = vec![0xff, 0x00, 0xfe, b'o', b'k'];

    let content = decode_action(
        PublicAction::PaymentSentMe {
            currency: "EUR".to_owned(),
            total_amount: 1_250,
            payload: payload.clone(),
            shipping_option_id: None,
            charge: PaymentCharge {
                id: "svc-1".to_owned(),
                provider_charge_id: "prov-1".to_owned(),
            },
        },
        DialogId::from_user(UserId::new(42)),
        MessageId::from_server(12),
        &ctx,
    );

    let MessageContent::PaymentSuccessful(action) = content else {
        panic!("expected a payment");
    };
    let details = action.bot_details.expect("bot payments carry details");
    assert_eq!(details.invoice_payload, payload);
    assert_eq!(details.provider_charge_id, "prov-1");
}

// ============================================================================
// Local events
// ============================================================================

#[test]
fn local_events_build_their_kinds() {
    assert_eq!(screenshot_taken_content(), MessageContent::ScreenshotTaken);
    assert_eq!(
        chat_set_ttl_content(-5),
        MessageContent::ChatSetTtl(ChatSetTtlAction { ttl: 0 })
    );
}

// ============================================================================
// Secret media
// ============================================================================

fn secret_key() -> SecretKey {
    SecretKey {
        key: (0..32).collect(),
        iv: (32..64).collect(),
    }
}

fn encrypted_file(size: i64) -> EncryptedFile {
    EncryptedFile {
        id: 555,
        access_hash: 1,
        size,
        dc_id: 2,
        key_fingerprint: key_fingerprint(&secret_key()),
    }
}

fn secret_photo(key: SecretKey) -> SecretMedia {
    SecretMedia::Photo {
        thumbnail: SecretThumbnail {
            bytes: vec![0xff, 0xd8, 0xff],
            width: 90,
            height: 67,
        },
        width: 800,
        height: 600,
        size: 64_000,
        key,
        caption: "secret".to_owned(),
    }
}

fn decode_secret(
    encrypted_file: Option<EncryptedFile>,
    media: SecretMedia,
    barrier: &mut JoinBarrier,
    files: &InMemoryFileRegistry,
    options: &ContentOptions,
) -> Result<MessageContent, DecodeError> {
    let ctx = DecodeContext::new(files, options);
    decode_secret_media(
        String::new(),
        encrypted_file,
        media,
        Vec::new(),
        DialogId::from_secret_chat(9),
        barrier,
        &ctx,
    )
}

#[rstest]
fn secret_photo_registers_file_and_thumbnail(
    files: InMemoryFileRegistry,
    options: ContentOptions,
) {
    let mut barrier = JoinBarrier::new();

    let content = decode_secret(
        Some(encrypted_file(64_000)),
        secret_photo(secret_key()),
        &mut barrier,
        &files,
        &options,
    )
    .expect("secret photo decodes");

    assert_eq!(content.kind(), ContentKind::Photo);
    assert!(matches!(
        barrier.parts(),
        [
            SecretPart::DecryptFile { .. },
            SecretPart::DecodeThumbnail { .. }
        ]
    ));
}

#[rstest]
#[case::missing_file(None, secret_key(), "missing")]
#[case::zero_id(Some(EncryptedFile { id: 0, ..encrypted_file(10) }), secret_key(), "invalid file")]
#[case::short_key(Some(encrypted_file(10)), SecretKey { key: vec![1; 16], iv: vec![2; 32] }, "key material")]
#[case::wrong_fingerprint(Some(EncryptedFile { key_fingerprint: 1, ..encrypted_file(10) }), secret_key(), "fingerprint")]
#[case::too_large(Some(encrypted_file(i64::MAX)), secret_key(), "too large")]
fn invalid_secret_files_are_rejected(
    files: InMemoryFileRegistry,
    options: ContentOptions,
    #[case] encrypted_file: Option<EncryptedFile>,
    #[case] key: SecretKey,
    #[case] expected: &str,
) {
    let mut barrier = JoinBarrier::new();

    let err = decode_secret(
        encrypted_file,
        secret_photo(key),
        &mut barrier,
        &files,
        &options,
    )
    .expect_err("invalid file is rejected");

    let matched = match err {
        DecodeError::MissingField(_) => "missing",
        DecodeError::InvalidEncryptedFile(_) => "invalid file",
        DecodeError::InvalidKeyMaterial { .. } => "key material",
        DecodeError::FingerprintMismatch { .. } => "fingerprint",
        DecodeError::FileTooLarge { .. } => "too large",
        DecodeError::InvalidMetadata(_) => "metadata",
    };
    assert_eq!(matched, expected);
    assert!(barrier.parts().is_empty());
}

#[rstest]
fn secret_location_out_of_range_is_invalid(files: InMemoryFileRegistry, options: ContentOptions) {
    let mut barrier = JoinBarrier::new();

    let result = decode_secret(
        None,
        SecretMedia::Geo {
            point: GeoPoint {
                latitude: 91.0,
                longitude: 0.0,
            },
        },
        &mut barrier,
        &files,
        &options,
    );

    assert!(matches!(result, Err(DecodeError::InvalidMetadata(_))));
}

#[rstest]
fn secret_name_mentions_are_dropped(files: InMemoryFileRegistry, options: ContentOptions) {
    let ctx = DecodeContext::new(&files, &options);
    let mut barrier = JoinBarrier::new();

    let content = decode_secret_media(
        "hi Ada".to_owned(),
        None,
        SecretMedia::Empty,
        vec![
            SecretEntity {
                kind: EntityKind::MentionName(UserId::new(5)),
                offset: 3,
                length: 3,
            },
            SecretEntity {
                kind: EntityKind::Bold,
                offset: 0,
                length: 2,
            },
        ],
        DialogId::from_secret_chat(9),
        &mut barrier,
        &ctx,
    )
    .expect("text decodes");

    let text = content.message_text().expect("text content has text");
    assert_eq!(text.entities.len(), 1);
    assert_eq!(
        text.entities.first().map(|entity| &entity.kind),
        Some(&EntityKind::Bold)
    );
}

#[rstest]
fn secret_photo_caption_keeps_message_entities(
    files: InMemoryFileRegistry,
    options: ContentOptions,
) {
    let ctx = DecodeContext::new(&files, &options);
    let mut barrier = JoinBarrier::new();

    let content = decode_secret_media(
        "look here".to_owned(),
        Some(encrypted_file(64_000)),
        secret_photo(secret_key()),
        vec![SecretEntity {
            kind: EntityKind::Bold,
            offset: 0,
            length: 4,
        }],
        DialogId::from_secret_chat(9),
        &mut barrier,
        &ctx,
    )
    .expect("secret photo decodes");

    let caption = content.caption().expect("photo has a caption");
    assert_eq!(caption.text, "look here");
    assert_eq!(
        caption.entities,
        [MessageEntity::new(EntityKind::Bold, 0, 4)]
    );
}

#[rstest]
fn secret_photo_without_text_uses_header_caption(
    files: InMemoryFileRegistry,
    options: ContentOptions,
) {
    let mut barrier = JoinBarrier::new();

    let content = decode_secret(
        Some(encrypted_file(64_000)),
        secret_photo(secret_key()),
        &mut barrier,
        &files,
        &options,
    )
    .expect("secret photo decodes");

    assert_eq!(content.caption(), Some(&FormattedText::plain("secret")));
}

#[rstest]
fn external_non_sticker_is_unsupported(files: InMemoryFileRegistry, options: ContentOptions) {
    let mut barrier = JoinBarrier::new();

    let content = decode_secret(
        None,
        SecretMedia::ExternalDocument(wire_document(vec![DocumentAttribute::Filename(
            "leak.pdf".to_owned(),
        )])),
        &mut barrier,
        &files,
        &options,
    )
    .expect("external document decodes");

    assert_eq!(content, MessageContent::Unsupported);
}

#[rstest]
fn secret_web_page_is_resolved_later(files: InMemoryFileRegistry, options: ContentOptions) {
    let mut barrier = JoinBarrier::new();

    let content = decode_secret(
        None,
        SecretMedia::WebPage {
            url: "https://example.com".to_owned(),
        },
        &mut barrier,
        &files,
        &options,
    )
    .expect("web page decodes");

    assert_eq!(content.kind(), ContentKind::Text);
    assert_eq!(
        barrier.parts(),
        [SecretPart::ResolveWebPage {
            url: "https://example.com".to_owned()
        }]
    );
}

#[test]
fn fingerprint_depends_on_key_and_iv() {
    let key = secret_key();
    let mut other = secret_key();
    other.iv.reverse();

    assert_eq!(key_fingerprint(&key), key_fingerprint(&secret_key()));
    assert_ne!(key_fingerprint(&key), key_fingerprint(&other));
}

#[rstest]
fn unknown_secret_media_is_unsupported(
    files: InMemoryFileRegistry,
    options: ContentOptions,
    private_chat: DialogId,
) {
    let ctx = DecodeContext::new(&files, &options);
    let mut barrier = JoinBarrier::new();

    let content = decode_secret_media(
        String::new(),
        None,
        SecretMedia::Unknown { constructor: 7 },
        Vec::new(),
        private_chat,
        &mut barrier,
        &ctx,
    )
    .expect("unknown media decodes");

    assert_eq!(content, MessageContent::Unsupported);
}
