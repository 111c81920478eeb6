//! Error types for content decoding, persistence and secret media loading.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Unknown
//! wire tags are deliberately absent: they decode to
//! [`MessageContent::Unsupported`](super::domain::MessageContent::Unsupported)
//! instead of failing.

use super::domain::{ContentKind, FileId};
use std::sync::Arc;
use thiserror::Error;

/// Structurally invalid wire input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The encrypted file descriptor is unusable.
    #[error("invalid encrypted file: {0}")]
    InvalidEncryptedFile(String),

    /// The decryption key or initialisation vector has the wrong length.
    #[error("invalid secret key material: expected {expected} bytes, got {actual}")]
    InvalidKeyMaterial {
        /// Required length in bytes.
        expected: usize,
        /// Supplied length in bytes.
        actual: usize,
    },

    /// The key fingerprint does not match the key and IV.
    #[error("key fingerprint mismatch: declared {declared}, computed {computed}")]
    FingerprintMismatch {
        /// Fingerprint sent by the peer.
        declared: i32,
        /// Fingerprint derived from the key material.
        computed: i32,
    },

    /// The file is larger than allowed.
    #[error("encrypted file of {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge {
        /// Declared size in bytes.
        size: i64,
        /// Maximum size in bytes.
        limit: i64,
    },

    /// A mandatory field is missing.
    #[error("missing mandatory field: {0}")]
    MissingField(&'static str),

    /// Media metadata is structurally invalid.
    #[error("invalid media metadata: {0}")]
    InvalidMetadata(String),
}

impl DecodeError {
    /// Creates an invalid encrypted file error.
    #[must_use]
    pub fn invalid_file(reason: impl Into<String>) -> Self {
        Self::InvalidEncryptedFile(reason.into())
    }

    /// Creates an invalid metadata error.
    #[must_use]
    pub fn invalid_metadata(reason: impl Into<String>) -> Self {
        Self::InvalidMetadata(reason.into())
    }
}

/// Rejection of a public-API send request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputContentError {
    /// The message text is empty.
    #[error("message text can't be empty")]
    EmptyText,

    /// The message text is too long.
    #[error("message text of {actual} characters exceeds limit of {max}")]
    TextTooLong {
        /// Maximum length in characters.
        max: usize,
        /// Supplied length in characters.
        actual: usize,
    },

    /// The request needs a file but none was supplied.
    #[error("file is required for {0}")]
    MissingFile(ContentKind),

    /// Coordinates are out of range.
    #[error("invalid location")]
    InvalidLocation,

    /// The live location period is out of range.
    #[error("live location period {period} is outside {min}..={max}")]
    InvalidLivePeriod {
        /// Requested period in seconds.
        period: i32,
        /// Minimum period in seconds.
        min: i32,
        /// Maximum period in seconds.
        max: i32,
    },

    /// A contact must have a phone number and first name.
    #[error("contact requires a phone number and first name")]
    InvalidContact,

    /// A venue must have a title and address.
    #[error("venue requires a title and address")]
    InvalidVenue,

    /// Self-destruct timers are only allowed here in private chats.
    #[error("self-destruct timer is not allowed for {0} in this chat")]
    TtlNotAllowed(ContentKind),

    /// A game must name a bot and a short name.
    #[error("game requires a bot and short name")]
    InvalidGame,

    /// An invoice must have a title, currency and prices.
    #[error("invalid invoice: {0}")]
    InvalidInvoice(String),

    /// An inline result's media can't be sent as the requested kind.
    #[error("inline result can't be sent as {0}")]
    InvalidInlineResult(ContentKind),
}

/// Failure to store or parse a single write-ahead log record.
#[derive(Debug, Clone, Error)]
pub enum LogCodecError {
    /// The record starts with a tag no kind is registered for.
    #[error("unknown content tag {0}")]
    UnknownTag(u32),

    /// The record body could not be encoded or decoded.
    #[error("malformed {kind} record: {source}")]
    Malformed {
        /// Kind named by the record tag.
        kind: ContentKind,
        /// Underlying encoder error.
        #[source]
        source: Arc<bincode::Error>,
    },

    /// The record tag could not be read.
    #[error("unreadable record tag: {0}")]
    UnreadableTag(Arc<bincode::Error>),

    /// The framed record stream ended mid-record.
    #[error("truncated record: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Bytes announced by the frame header.
        expected: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// The sink or source failed.
    #[error("log I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl LogCodecError {
    /// Creates a malformed record error.
    #[must_use]
    pub fn malformed(kind: ContentKind, source: bincode::Error) -> Self {
        Self::Malformed {
            kind,
            source: Arc::new(source),
        }
    }
}

impl From<std::io::Error> for LogCodecError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

/// Failure of the file manager collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRegistryError {
    /// The file manager does not know the file.
    #[error("unknown file {0}")]
    UnknownFile(FileId),

    /// Two handles cannot be the same file.
    #[error("files {0} and {1} can't be merged")]
    Conflict(FileId, FileId),
}

/// Failure while loading secret chat media.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretMediaError {
    /// A part could not be fetched or decrypted.
    #[error("media unavailable: {part} failed: {reason}")]
    PartFailed {
        /// Which part failed.
        part: String,
        /// Collaborator-supplied reason.
        reason: String,
    },

    /// A waiter was dropped without reporting.
    #[error("media unavailable: {0} was abandoned")]
    Abandoned(String),

    /// The owning message was cancelled.
    #[error("media loading cancelled")]
    Cancelled,
}

impl SecretMediaError {
    /// Creates a part failure error.
    #[must_use]
    pub fn part_failed(part: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PartFailed {
            part: part.into(),
            reason: reason.into(),
        }
    }
}
