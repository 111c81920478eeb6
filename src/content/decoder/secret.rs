//! Decoding of secret chat media.
//!
//! Secret attachments arrive encrypted. Decoding validates the file
//! descriptor, builds provisional content with placeholder files and
//! registers the decryption work on a [`JoinBarrier`].

use super::{
    DecodeContext,
    document::{DocumentParts, classify_document},
    location_from_point,
    public::decode_document,
};
use crate::content::{
    domain::{
        Contact, ContentKind, DialogId, Dimensions, EntityKind, FileId, FormattedText, Location,
        MessageContent, MessageEntity, Photo, PhotoContent, PhotoSize, UserId, Venue, Video,
        VideoContent, VoiceNote, VoiceNoteContent,
    },
    error::DecodeError,
    secret_media::{JoinBarrier, SecretPart},
    wire::{EncryptedFile, GeoPoint, SecretEntity, SecretKey, SecretMedia, SecretThumbnail},
};
use sha2::{Digest, Sha256};

const KEY_LENGTH: usize = 32;

/// Derives the fingerprint peers attach to encrypted files.
///
/// The first two little-endian words of `SHA-256(key || iv)` XORed.
///
/// # Examples
///
/// ```
/// use missive::content::{decoder::key_fingerprint, wire::SecretKey};
///
/// let key = SecretKey { key: vec![1; 32], iv: vec![2; 32] };
/// assert_eq!(key_fingerprint(&key), key_fingerprint(&key.clone()));
/// ```
#[must_use]
#[expect(
    clippy::little_endian_bytes,
    reason = "fingerprint words are defined as little-endian"
)]
pub fn key_fingerprint(key: &SecretKey) -> i32 {
    let digest = Sha256::new()
        .chain_update(&key.key)
        .chain_update(&key.iv)
        .finalize();
    let mut words = digest.chunks_exact(4).map(|chunk| {
        let mut word = [0_u8; 4];
        word.copy_from_slice(chunk);
        i32::from_le_bytes(word)
    });
    let first = words.next().unwrap_or_default();
    let second = words.next().unwrap_or_default();
    first ^ second
}

/// Builds provisional content from a secret chat message.
///
/// Attachments are validated against `encrypted_file` and their decryption
/// is registered on `barrier`; the returned content becomes usable once
/// [`SecretMediaLoader::finalize`](crate::content::secret_media::SecretMediaLoader::finalize)
/// has applied the loaded parts. Name mentions are dropped from
/// `entities`, since user identifiers don't cross into secret chats.
/// The message text becomes the caption of file media; the caption in the
/// media header is used only when the text is empty.
///
/// Unknown media produce [`MessageContent::Unsupported`].
///
/// # Errors
///
/// Returns `DecodeError` if the encrypted file or the media metadata is
/// structurally invalid.
pub fn decode_secret_media(
    text: String,
    encrypted_file: Option<EncryptedFile>,
    media: SecretMedia,
    entities: Vec<SecretEntity>,
    owner: DialogId,
    barrier: &mut JoinBarrier,
    ctx: &DecodeContext<'_>,
) -> Result<MessageContent, DecodeError> {
    let formatted = FormattedText::new(
        text,
        entities
            .into_iter()
            .filter(|entity| !matches!(entity.kind, EntityKind::MentionName(_)))
            .map(|entity| MessageEntity::new(entity.kind, entity.offset, entity.length))
            .collect(),
    );
    match media {
        SecretMedia::Empty => {
            warn_unused_file(encrypted_file.as_ref(), "text");
            Ok(MessageContent::text(formatted))
        }
        SecretMedia::Photo {
            thumbnail,
            width,
            height,
            size,
            key,
            caption,
        } => {
            let file = validate_encrypted_file(encrypted_file, &key, ctx)?;
            let photo = Photo {
                sizes: vec![PhotoSize {
                    size_type: "i".to_owned(),
                    dimensions: Dimensions::new(width, height),
                    size,
                    file_id: FileId::default(),
                }],
                ..Photo::default()
            };
            register_parts(barrier, file, key, thumbnail, owner);
            Ok(MessageContent::Photo(PhotoContent {
                photo,
                caption: caption_or_header(formatted, caption),
                ttl: 0,
            }))
        }
        SecretMedia::Video {
            thumbnail,
            duration,
            mime_type,
            width,
            height,
            key,
            caption,
        } => {
            let file = validate_encrypted_file(encrypted_file, &key, ctx)?;
            register_parts(barrier, file, key, thumbnail, owner);
            Ok(MessageContent::Video(VideoContent {
                video: Video {
                    duration: duration.max(0),
                    dimensions: Dimensions::new(width, height),
                    mime_type,
                    ..Video::default()
                },
                caption: caption_or_header(formatted, caption),
                ttl: 0,
            }))
        }
        SecretMedia::Document {
            thumbnail,
            mime_type,
            key,
            attributes,
            caption,
        } => {
            let file = validate_encrypted_file(encrypted_file, &key, ctx)?;
            register_parts(barrier, file, key, thumbnail, owner);
            Ok(classify_document(
                DocumentParts {
                    file_id: FileId::default(),
                    thumbnail: None,
                    mime_type,
                    attributes,
                },
                caption_or_header(formatted, caption),
                false,
                0,
            ))
        }
        SecretMedia::Audio {
            duration,
            mime_type,
            key,
        } => {
            let file = validate_encrypted_file(encrypted_file, &key, ctx)?;
            register_parts(barrier, file, key, SecretThumbnail::default(), owner);
            Ok(MessageContent::VoiceNote(VoiceNoteContent {
                voice_note: VoiceNote {
                    duration: duration.max(0),
                    mime_type,
                    ..VoiceNote::default()
                },
                caption: formatted,
                is_listened: false,
            }))
        }
        SecretMedia::ExternalDocument(document) => {
            warn_unused_file(encrypted_file.as_ref(), "external document");
            let content = decode_document(document, owner, FormattedText::default(), false, 0, ctx);
            if content.kind() == ContentKind::Sticker {
                return Ok(content);
            }
            tracing::debug!(kind = %content.kind(), "external document is not a sticker");
            Ok(MessageContent::Unsupported)
        }
        SecretMedia::Geo { point } => {
            warn_unused_file(encrypted_file.as_ref(), "location");
            Ok(MessageContent::Location(secret_location(point)?))
        }
        SecretMedia::Venue {
            point,
            title,
            address,
            provider,
            venue_id,
        } => {
            warn_unused_file(encrypted_file.as_ref(), "venue");
            Ok(MessageContent::Venue(Venue {
                location: secret_location(point)?,
                title,
                address,
                provider,
                id: venue_id,
                venue_type: String::new(),
            }))
        }
        SecretMedia::Contact {
            phone_number,
            first_name,
            last_name,
            user_id,
        } => {
            warn_unused_file(encrypted_file.as_ref(), "contact");
            if phone_number.is_empty() {
                return Err(DecodeError::invalid_metadata("contact without phone number"));
            }
            Ok(MessageContent::Contact(Contact {
                phone_number,
                first_name,
                last_name,
                vcard: String::new(),
                user_id: UserId::new(user_id),
            }))
        }
        SecretMedia::WebPage { url } => {
            warn_unused_file(encrypted_file.as_ref(), "web page");
            if !url.is_empty() {
                barrier.register(SecretPart::ResolveWebPage { url });
            }
            Ok(MessageContent::text(formatted))
        }
        SecretMedia::Unknown { constructor } => {
            tracing::debug!(constructor, "unknown secret media");
            Ok(MessageContent::Unsupported)
        }
    }
}

fn validate_encrypted_file(
    encrypted_file: Option<EncryptedFile>,
    key: &SecretKey,
    ctx: &DecodeContext<'_>,
) -> Result<EncryptedFile, DecodeError> {
    let file = encrypted_file.ok_or(DecodeError::MissingField("encrypted file"))?;
    if file.id == 0 {
        return Err(DecodeError::invalid_file("file identifier is zero"));
    }
    if file.size < 0 {
        return Err(DecodeError::invalid_file("negative file size"));
    }
    for material in [&key.key, &key.iv] {
        if material.len() != KEY_LENGTH {
            return Err(DecodeError::InvalidKeyMaterial {
                expected: KEY_LENGTH,
                actual: material.len(),
            });
        }
    }
    let computed = key_fingerprint(key);
    if computed != file.key_fingerprint {
        return Err(DecodeError::FingerprintMismatch {
            declared: file.key_fingerprint,
            computed,
        });
    }
    let limit = ctx.options.max_secret_file_size;
    if file.size > limit {
        return Err(DecodeError::FileTooLarge {
            size: file.size,
            limit,
        });
    }
    Ok(file)
}

fn register_parts(
    barrier: &mut JoinBarrier,
    file: EncryptedFile,
    key: SecretKey,
    thumbnail: SecretThumbnail,
    owner: DialogId,
) {
    barrier.register(SecretPart::DecryptFile { file, key, owner });
    if thumbnail.is_present() {
        barrier.register(SecretPart::DecodeThumbnail { thumbnail, owner });
    }
}

/// Message text with its entities is the caption; older peers only fill
/// the media header.
fn caption_or_header(formatted: FormattedText, header: String) -> FormattedText {
    if formatted.text.is_empty() {
        FormattedText::plain(header)
    } else {
        formatted
    }
}

fn secret_location(point: GeoPoint) -> Result<Location, DecodeError> {
    location_from_point(point).ok_or_else(|| DecodeError::invalid_metadata("invalid coordinates"))
}

fn warn_unused_file(encrypted_file: Option<&EncryptedFile>, media: &'static str) {
    if encrypted_file.is_some() {
        tracing::warn!(media, "ignoring encrypted file attached to media without a file");
    }
}
