//! Classification of documents by their attributes.

use crate::content::{
    domain::{
        Animation, AnimationContent, Audio, AudioContent, Dimensions, Document, DocumentContent,
        FileId, FormattedText, MessageContent, PhotoSize, Sticker, StickerContent, Video,
        VideoContent, VideoNote, VideoNoteContent, VoiceNote, VoiceNoteContent,
    },
    wire::DocumentAttribute,
};

/// Attributes of a document folded into one record.
#[derive(Debug, Default)]
struct Traits {
    dimensions: Dimensions,
    is_animated: bool,
    sticker: Option<(String, i64, bool)>,
    video: Option<VideoTraits>,
    audio: Option<AudioTraits>,
    file_name: String,
    has_stickers: bool,
}

#[derive(Debug)]
struct VideoTraits {
    duration: i32,
    dimensions: Dimensions,
    is_round: bool,
    supports_streaming: bool,
}

#[derive(Debug)]
struct AudioTraits {
    duration: i32,
    is_voice: bool,
    title: String,
    performer: String,
    waveform: Vec<u8>,
}

impl Traits {
    fn collect(attributes: Vec<DocumentAttribute>) -> Self {
        let mut traits = Self::default();
        for attribute in attributes {
            match attribute {
                DocumentAttribute::ImageSize { width, height } => {
                    traits.dimensions = Dimensions::new(width, height);
                }
                DocumentAttribute::Animated => traits.is_animated = true,
                DocumentAttribute::Sticker {
                    alt,
                    set_id,
                    is_mask,
                } => traits.sticker = Some((alt, set_id, is_mask)),
                DocumentAttribute::Video {
                    duration,
                    width,
                    height,
                    round_message,
                    supports_streaming,
                } => {
                    traits.video = Some(VideoTraits {
                        duration: duration.max(0),
                        dimensions: Dimensions::new(width, height),
                        is_round: round_message,
                        supports_streaming,
                    });
                }
                DocumentAttribute::Audio {
                    duration,
                    voice,
                    title,
                    performer,
                    waveform,
                } => {
                    traits.audio = Some(AudioTraits {
                        duration: duration.max(0),
                        is_voice: voice,
                        title,
                        performer,
                        waveform,
                    });
                }
                DocumentAttribute::Filename(file_name) => traits.file_name = file_name,
                DocumentAttribute::HasStickers => traits.has_stickers = true,
            }
        }
        traits
    }
}

/// A document's file, thumbnail and description.
#[derive(Debug)]
pub(super) struct DocumentParts {
    pub file_id: FileId,
    pub thumbnail: Option<PhotoSize>,
    pub mime_type: String,
    pub attributes: Vec<DocumentAttribute>,
}

/// Builds the content kind the attributes describe.
///
/// Stickers win over everything, then round videos, animations, videos,
/// voice notes and music; anything else is a generic document.
pub(super) fn classify_document(
    parts: DocumentParts,
    caption: FormattedText,
    is_content_read: bool,
    ttl: i32,
) -> MessageContent {
    let DocumentParts {
        file_id,
        thumbnail,
        mime_type,
        attributes,
    } = parts;
    let traits = Traits::collect(attributes);
    if let Some((emoji, set_id, is_mask)) = traits.sticker {
        return MessageContent::Sticker(StickerContent {
            sticker: Sticker {
                file_id,
                dimensions: traits.dimensions,
                emoji,
                set_id,
                is_mask,
                thumbnail,
            },
        });
    }
    match (traits.video, traits.audio) {
        (Some(video), _) if video.is_round => MessageContent::VideoNote(VideoNoteContent {
            video_note: VideoNote {
                file_id,
                duration: video.duration,
                length: i32::from(video.dimensions.width),
                thumbnail,
            },
            is_viewed: is_content_read,
        }),
        (video, _) if traits.is_animated => {
            let (duration, dimensions) = video.map_or((0, traits.dimensions), |video| {
                (video.duration, video.dimensions)
            });
            MessageContent::Animation(AnimationContent {
                animation: Animation {
                    file_id,
                    duration,
                    dimensions,
                    file_name: traits.file_name,
                    mime_type,
                    thumbnail,
                },
                caption,
            })
        }
        (Some(video), _) => MessageContent::Video(VideoContent {
            video: Video {
                file_id,
                duration: video.duration,
                dimensions: video.dimensions,
                file_name: traits.file_name,
                mime_type,
                supports_streaming: video.supports_streaming,
                has_stickers: traits.has_stickers,
                thumbnail,
            },
            caption,
            ttl,
        }),
        (None, Some(audio)) if audio.is_voice => MessageContent::VoiceNote(VoiceNoteContent {
            voice_note: VoiceNote {
                file_id,
                duration: audio.duration,
                waveform: audio.waveform,
                mime_type,
            },
            caption,
            is_listened: is_content_read,
        }),
        (None, Some(audio)) => MessageContent::Audio(AudioContent {
            audio: Audio {
                file_id,
                duration: audio.duration,
                title: audio.title,
                performer: audio.performer,
                file_name: traits.file_name,
                mime_type,
                thumbnail,
            },
            caption,
        }),
        (None, None) => MessageContent::Document(DocumentContent {
            document: Document {
                file_id,
                file_name: traits.file_name,
                mime_type,
                thumbnail,
            },
            caption,
        }),
    }
}
