//! Shared sample content and helpers for content tests.

use crate::content::{
    config::ContentOptions,
    domain::{
        Animation, AnimationContent, Audio, AudioContent, BotPaymentDetails, CallAction,
        CallDiscardReason, CallId, ChannelId, ChannelMigrateFromAction, ChatAddUsersAction,
        ChatCreateAction, ChatDeleteUserAction, ChatId, ChatMigrateToAction, ChatPhotoAction,
        ChatSetTtlAction, Contact, ContentKind, CustomServiceAction, DialogId, Dimensions,
        Document, DocumentContent, EncryptedSecureCredentials, EncryptedSecureData,
        EncryptedSecureFile, EncryptedSecureValue, EntityKind, FileId, FormattedText, Game,
        GameScoreAction, Invoice, LabeledPrice, LiveLocationContent, Location, MessageContent,
        MessageEntity, MessageId, PassportDataReceivedAction, PassportDataSentAction,
        PaymentSuccessfulAction, Photo, PhotoContent, PhotoSize, PinMessageAction,
        SecureValueType, Sticker, StickerContent, TextContent, TitleAction, UserId, Venue, Video,
        VideoContent, VideoNote, VideoNoteContent, VoiceNote, VoiceNoteContent, WebPageId,
        WebsiteConnectedAction,
    },
};
use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use rstest::fixture;

#[fixture]
pub fn options() -> ContentOptions {
    ContentOptions::default()
}

#[fixture]
pub fn private_chat() -> DialogId {
    DialogId::from_user(UserId::new(42))
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn caption(text: &str) -> FormattedText {
    FormattedText::plain(text)
}

pub fn thumbnail(file_id: FileId) -> PhotoSize {
    PhotoSize {
        size_type: "s".to_owned(),
        dimensions: Dimensions::new(90, 60),
        size: 1_200,
        file_id,
    }
}

pub fn photo(file_id: FileId) -> Photo {
    Photo {
        id: 5_001,
        date: 1_600_000_000,
        sizes: vec![
            thumbnail(FileId::new(file_id.id.saturating_add(100), 0)),
            PhotoSize {
                size_type: "x".to_owned(),
                dimensions: Dimensions::new(800, 600),
                size: 64_000,
                file_id,
            },
        ],
        has_stickers: false,
        sticker_file_ids: Vec::new(),
    }
}

pub fn photo_content(file_id: FileId, text: &str) -> MessageContent {
    MessageContent::Photo(PhotoContent {
        photo: photo(file_id),
        caption: caption(text),
        ttl: 0,
    })
}

pub fn video(file_id: FileId) -> Video {
    Video {
        file_id,
        duration: 31,
        dimensions: Dimensions::new(1280, 720),
        file_name: "clip.mp4".to_owned(),
        mime_type: "video/mp4".to_owned(),
        supports_streaming: true,
        has_stickers: false,
        thumbnail: Some(thumbnail(FileId::new(900, 0))),
    }
}

pub fn video_content(file_id: FileId, text: &str) -> MessageContent {
    MessageContent::Video(VideoContent {
        video: video(file_id),
        caption: caption(text),
        ttl: 0,
    })
}

pub fn invoice() -> Invoice {
    Invoice {
        title: "Coffee".to_owned(),
        description: "A flat white".to_owned(),
        photo: Photo::default(),
        start_parameter: "coffee".to_owned(),
        currency: "EUR".to_owned(),
        prices: vec![LabeledPrice {
            label: "cup".to_owned(),
            amount: 350,
        }],
        total_amount: 350,
        receipt_message_id: MessageId::default(),
        is_test: true,
        need_shipping_address: false,
    }
}

/// Returns a representative value of `kind` with every field populated.
pub fn sample_content(kind: ContentKind) -> MessageContent {
    match kind {
        ContentKind::Text => MessageContent::Text(TextContent {
            text: FormattedText::new(
                "read https://example.com",
                vec![MessageEntity::new(EntityKind::Url, 5, 19)],
            ),
            web_page_id: WebPageId::new(17),
        }),
        ContentKind::Animation => MessageContent::Animation(AnimationContent {
            animation: Animation {
                file_id: FileId::new(11, 0),
                duration: 4,
                dimensions: Dimensions::new(320, 240),
                file_name: "loop.gif".to_owned(),
                mime_type: "video/mp4".to_owned(),
                thumbnail: Some(thumbnail(FileId::new(12, 0))),
            },
            caption: caption("loop"),
        }),
        ContentKind::Audio => MessageContent::Audio(AudioContent {
            audio: Audio {
                file_id: FileId::new(13, 0),
                duration: 215,
                title: "Song".to_owned(),
                performer: "Band".to_owned(),
                file_name: "song.mp3".to_owned(),
                mime_type: "audio/mpeg".to_owned(),
                thumbnail: None,
            },
            caption: caption("listen"),
        }),
        ContentKind::Document => MessageContent::Document(DocumentContent {
            document: Document {
                file_id: FileId::new(14, 0),
                file_name: "report.pdf".to_owned(),
                mime_type: "application/pdf".to_owned(),
                thumbnail: Some(thumbnail(FileId::new(15, 0))),
            },
            caption: caption("quarterly"),
        }),
        ContentKind::Photo => photo_content(FileId::new(16, 0), "sunset"),
        ContentKind::Sticker => MessageContent::Sticker(StickerContent {
            sticker: Sticker {
                file_id: FileId::new(17, 0),
                dimensions: Dimensions::new(512, 512),
                emoji: "🙂".to_owned(),
                set_id: 9_001,
                is_mask: false,
                thumbnail: None,
            },
        }),
        ContentKind::Video => video_content(FileId::new(18, 0), "holiday"),
        ContentKind::VoiceNote => MessageContent::VoiceNote(VoiceNoteContent {
            voice_note: VoiceNote {
                file_id: FileId::new(19, 0),
                duration: 7,
                waveform: vec![0, 31, 12, 7],
                mime_type: "audio/ogg".to_owned(),
            },
            caption: FormattedText::default(),
            is_listened: true,
        }),
        ContentKind::Contact => MessageContent::Contact(Contact {
            phone_number: "+44 20 7946 0000".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            vcard: String::new(),
            user_id: UserId::new(77),
        }),
        ContentKind::Location => MessageContent::Location(Location::new(51.5, -0.12)),
        ContentKind::Venue => MessageContent::Venue(Venue {
            location: Location::new(48.85, 2.35),
            title: "Café".to_owned(),
            address: "1 Rue de Rivoli".to_owned(),
            provider: "foursquare".to_owned(),
            id: "4b0".to_owned(),
            venue_type: "food/cafe".to_owned(),
        }),
        ContentKind::ChatCreate => MessageContent::ChatCreate(ChatCreateAction {
            title: "Team".to_owned(),
            participant_user_ids: vec![UserId::new(1), UserId::new(2)],
        }),
        ContentKind::ChatChangeTitle => MessageContent::ChatChangeTitle(TitleAction {
            title: "Renamed".to_owned(),
        }),
        ContentKind::ChatChangePhoto => MessageContent::ChatChangePhoto(ChatPhotoAction {
            photo: photo(FileId::new(20, 0)),
        }),
        ContentKind::ChatDeletePhoto => MessageContent::ChatDeletePhoto,
        ContentKind::ChatDeleteHistory => MessageContent::ChatDeleteHistory,
        ContentKind::ChatAddUsers => MessageContent::ChatAddUsers(ChatAddUsersAction {
            user_ids: vec![UserId::new(3)],
        }),
        ContentKind::ChatJoinedByLink => MessageContent::ChatJoinedByLink,
        ContentKind::ChatDeleteUser => MessageContent::ChatDeleteUser(ChatDeleteUserAction {
            user_id: UserId::new(4),
        }),
        ContentKind::ChatMigrateTo => MessageContent::ChatMigrateTo(ChatMigrateToAction {
            channel_id: ChannelId::new(500),
        }),
        ContentKind::ChannelCreate => MessageContent::ChannelCreate(TitleAction {
            title: "News".to_owned(),
        }),
        ContentKind::ChannelMigrateFrom => {
            MessageContent::ChannelMigrateFrom(ChannelMigrateFromAction {
                title: "Old team".to_owned(),
                chat_id: ChatId::new(600),
            })
        }
        ContentKind::PinMessage => MessageContent::PinMessage(PinMessageAction {
            message_id: MessageId::from_server(41),
        }),
        ContentKind::Game => MessageContent::Game(Game {
            id: 700,
            access_hash: 701,
            bot_user_id: UserId::new(702),
            short_name: "tetris".to_owned(),
            title: "Tetris".to_owned(),
            description: "Falling blocks".to_owned(),
            photo: photo(FileId::new(21, 0)),
            animation_file_id: FileId::default(),
            text: FormattedText::default(),
        }),
        ContentKind::GameScore => MessageContent::GameScore(GameScoreAction {
            game_message_id: MessageId::from_server(42),
            game_id: 700,
            score: 1_500,
        }),
        ContentKind::ScreenshotTaken => MessageContent::ScreenshotTaken,
        ContentKind::ChatSetTtl => MessageContent::ChatSetTtl(ChatSetTtlAction { ttl: 30 }),
        ContentKind::Unsupported => MessageContent::Unsupported,
        ContentKind::Call => MessageContent::Call(CallAction {
            call_id: CallId::new(800),
            duration: 62,
            discard_reason: CallDiscardReason::HungUp,
        }),
        ContentKind::Invoice => MessageContent::Invoice(invoice()),
        ContentKind::PaymentSuccessful => {
            MessageContent::PaymentSuccessful(PaymentSuccessfulAction {
                invoice_message_id: MessageId::from_server(43),
                currency: "EUR".to_owned(),
                total_amount: 350,
                bot_details: Some(BotPaymentDetails {
                    invoice_payload: b"order-1".to_vec(),
                    shipping_option_id: String::new(),
                    service_charge_id: "svc".to_owned(),
                    provider_charge_id: "prov".to_owned(),
                }),
            })
        }
        ContentKind::VideoNote => MessageContent::VideoNote(VideoNoteContent {
            video_note: VideoNote {
                file_id: FileId::new(22, 0),
                duration: 12,
                length: 240,
                thumbnail: None,
            },
            is_viewed: false,
        }),
        ContentKind::ContactRegistered => MessageContent::ContactRegistered,
        ContentKind::ExpiredPhoto => MessageContent::ExpiredPhoto,
        ContentKind::ExpiredVideo => MessageContent::ExpiredVideo,
        ContentKind::LiveLocation => MessageContent::LiveLocation(LiveLocationContent {
            location: Location::new(40.7, -74.0),
            period: 900,
        }),
        ContentKind::CustomServiceAction => {
            MessageContent::CustomServiceAction(CustomServiceAction {
                message: "Something happened".to_owned(),
            })
        }
        ContentKind::WebsiteConnected => MessageContent::WebsiteConnected(WebsiteConnectedAction {
            domain_name: "example.com".to_owned(),
        }),
        ContentKind::PassportDataSent => MessageContent::PassportDataSent(PassportDataSentAction {
            types: vec![SecureValueType::Passport, SecureValueType::Address],
        }),
        ContentKind::PassportDataReceived => {
            MessageContent::PassportDataReceived(PassportDataReceivedAction {
                values: vec![EncryptedSecureValue {
                    value_type: SecureValueType::Passport,
                    data: EncryptedSecureData {
                        data: vec![1, 2, 3],
                        hash: vec![4],
                        encrypted_secret: vec![5],
                    },
                    files: Vec::new(),
                    plain_value: String::new(),
                    front_side: Some(EncryptedSecureFile {
                        file_id: FileId::new(23, 0),
                        date: 1_600_000_000,
                        file_hash: vec![6],
                        encrypted_secret: vec![7],
                    }),
                    reverse_side: None,
                    selfie: None,
                    hash: vec![8],
                }],
                credentials: EncryptedSecureCredentials {
                    data: vec![9],
                    hash: vec![10],
                    encrypted_secret: vec![11],
                },
            })
        }
    }
}
