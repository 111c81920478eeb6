//! Write-ahead log encoding of message content.
//!
//! A record is the kind's `u32` tag followed by the kind's body, both
//! encoded with `bincode`. Size computation, writing and reading are
//! generated from one table of kinds and body types, so
//! [`compute_length`] always equals the byte count [`store`] writes.
//! Bodiless kinds write the tag alone.

mod replay;

pub use replay::{LogReplay, ReplayOutcome, frame_record};

use crate::content::{
    domain::{
        AnimationContent, AudioContent, CallAction, ChannelMigrateFromAction, ChatAddUsersAction,
        ChatCreateAction, ChatDeleteUserAction, ChatMigrateToAction, ChatPhotoAction,
        ChatSetTtlAction, Contact, ContentKind, CustomServiceAction, DocumentContent, Game,
        GameScoreAction, Invoice, LiveLocationContent, Location, MessageContent,
        PassportDataReceivedAction, PassportDataSentAction, PaymentSuccessfulAction, PhotoContent,
        PinMessageAction, StickerContent, TextContent, TitleAction, Venue, VideoContent,
        VideoNoteContent, VoiceNoteContent, WebsiteConnectedAction,
    },
    error::LogCodecError,
};
use std::{
    io::{self, Read, Write},
    sync::Arc,
};

macro_rules! record_bodies {
    (
        bodies: [$($kind:ident($body:ty)),* $(,)?],
        bodiless: [$($unit:ident),* $(,)?] $(,)?
    ) => {
        fn body_size(content: &MessageContent) -> bincode::Result<u64> {
            match content {
                $(MessageContent::$kind(body) => bincode::serialized_size(body),)*
                $(MessageContent::$unit => Ok(0),)*
            }
        }

        fn write_body<W: Write>(content: &MessageContent, sink: W) -> bincode::Result<()> {
            match content {
                $(MessageContent::$kind(body) => bincode::serialize_into(sink, body),)*
                $(MessageContent::$unit => Ok(()),)*
            }
        }

        fn read_body<R: Read>(kind: ContentKind, source: R) -> bincode::Result<MessageContent> {
            match kind {
                $(ContentKind::$kind => {
                    bincode::deserialize_from::<_, $body>(source).map(MessageContent::$kind)
                })*
                $(ContentKind::$unit => Ok(MessageContent::$unit),)*
            }
        }
    };
}

record_bodies! {
    bodies: [
        Text(TextContent),
        Animation(AnimationContent),
        Audio(AudioContent),
        Document(DocumentContent),
        Photo(PhotoContent),
        Sticker(StickerContent),
        Video(VideoContent),
        VoiceNote(VoiceNoteContent),
        Contact(Contact),
        Location(Location),
        Venue(Venue),
        ChatCreate(ChatCreateAction),
        ChatChangeTitle(TitleAction),
        ChatChangePhoto(ChatPhotoAction),
        ChatAddUsers(ChatAddUsersAction),
        ChatDeleteUser(ChatDeleteUserAction),
        ChatMigrateTo(ChatMigrateToAction),
        ChannelCreate(TitleAction),
        ChannelMigrateFrom(ChannelMigrateFromAction),
        PinMessage(PinMessageAction),
        Game(Game),
        GameScore(GameScoreAction),
        ChatSetTtl(ChatSetTtlAction),
        Call(CallAction),
        Invoice(Invoice),
        PaymentSuccessful(PaymentSuccessfulAction),
        VideoNote(VideoNoteContent),
        LiveLocation(LiveLocationContent),
        CustomServiceAction(CustomServiceAction),
        WebsiteConnected(WebsiteConnectedAction),
        PassportDataSent(PassportDataSentAction),
        PassportDataReceived(PassportDataReceivedAction),
    ],
    bodiless: [
        ChatDeletePhoto,
        ChatDeleteHistory,
        ChatJoinedByLink,
        ScreenshotTaken,
        Unsupported,
        ContactRegistered,
        ExpiredPhoto,
        ExpiredVideo,
    ],
}

/// Returns the number of bytes [`store`] writes for `content`.
///
/// # Errors
///
/// Returns `LogCodecError::Malformed` if the body can't be encoded.
pub fn compute_length(content: &MessageContent) -> Result<u64, LogCodecError> {
    let kind = content.kind();
    let tag = bincode::serialized_size(&kind.tag())
        .map_err(|err| LogCodecError::malformed(kind, err))?;
    let body = body_size(content).map_err(|err| LogCodecError::malformed(kind, err))?;
    Ok(tag.saturating_add(body))
}

/// Writes one record to `sink` and returns the bytes written.
///
/// # Examples
///
/// ```
/// use missive::content::{
///     codec::{compute_length, parse, store},
///     domain::{FormattedText, MessageContent},
/// };
///
/// let content = MessageContent::text(FormattedText::plain("hello"));
/// let mut buffer = Vec::new();
/// let written = store(&content, &mut buffer)?;
/// assert_eq!(written, compute_length(&content)?);
/// assert_eq!(parse(buffer.as_slice())?, content);
/// # Ok::<(), missive::content::error::LogCodecError>(())
/// ```
///
/// # Errors
///
/// Returns `LogCodecError::Io` if the sink fails and
/// `LogCodecError::Malformed` if the body can't be encoded.
pub fn store<W: Write>(content: &MessageContent, sink: W) -> Result<u64, LogCodecError> {
    let kind = content.kind();
    let mut counter = CountingWriter::new(sink);
    bincode::serialize_into(&mut counter, &kind.tag()).map_err(|err| write_error(kind, err))?;
    write_body(content, &mut counter).map_err(|err| write_error(kind, err))?;
    tracing::trace!(%kind, bytes = counter.written, "stored content record");
    Ok(counter.written)
}

/// Reads one record from `source`.
///
/// # Errors
///
/// Returns `LogCodecError::UnreadableTag` if the tag can't be read,
/// `LogCodecError::UnknownTag` if no kind has that tag and
/// `LogCodecError::Malformed` if the body doesn't decode.
pub fn parse<R: Read>(mut source: R) -> Result<MessageContent, LogCodecError> {
    let tag: u32 = bincode::deserialize_from(&mut source)
        .map_err(|err| LogCodecError::UnreadableTag(Arc::new(err)))?;
    let kind = ContentKind::from_tag(tag).ok_or(LogCodecError::UnknownTag(tag))?;
    let content = read_body(kind, source).map_err(|err| LogCodecError::malformed(kind, err))?;
    tracing::trace!(%kind, "parsed content record");
    Ok(content)
}

fn write_error(kind: ContentKind, err: bincode::Error) -> LogCodecError {
    match *err {
        bincode::ErrorKind::Io(io_err) => io_err.into(),
        other => LogCodecError::malformed(kind, Box::new(other)),
    }
}

/// Sink adapter counting the bytes that pass through it.
struct CountingWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> CountingWriter<W> {
    const fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let count = self.inner.write(buf)?;
        self.written = self
            .written
            .saturating_add(u64::try_from(count).unwrap_or(u64::MAX));
        Ok(count)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
