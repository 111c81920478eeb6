//! Replay of framed write-ahead log records.
//!
//! Each record is preceded by its length as a 4-byte big-endian `u32`.
//! A record that fails to parse is reported and skipped; only a frame cut
//! short ends the replay.

use super::{compute_length, parse, store};
use crate::content::{domain::MessageContent, error::LogCodecError};
use std::io::{self, Read, Write};

const HEADER_LEN: usize = 4;

/// Outcome of one framed record.
#[derive(Debug, Clone)]
pub enum ReplayOutcome {
    /// The record decoded.
    Parsed(MessageContent),
    /// The record was skipped.
    Corrupt {
        /// Zero-based position of the record in the log.
        index: usize,
        /// Why it could not be decoded.
        error: LogCodecError,
    },
}

/// Iterator over the records of a framed log.
///
/// Yields `Err` once, and then stops, if the log ends mid-frame or the
/// source fails.
///
/// # Examples
///
/// ```
/// use missive::content::{
///     codec::{LogReplay, ReplayOutcome, frame_record},
///     domain::MessageContent,
/// };
///
/// let mut log = Vec::new();
/// frame_record(&MessageContent::ScreenshotTaken, &mut log)?;
/// let outcomes: Vec<_> = LogReplay::new(log.as_slice()).collect::<Result<_, _>>()?;
/// assert!(matches!(
///     outcomes.as_slice(),
///     [ReplayOutcome::Parsed(MessageContent::ScreenshotTaken)]
/// ));
/// # Ok::<(), missive::content::error::LogCodecError>(())
/// ```
#[derive(Debug)]
pub struct LogReplay<R> {
    source: R,
    index: usize,
    finished: bool,
}

impl<R: Read> LogReplay<R> {
    /// Starts replaying `source` from its current position.
    #[must_use]
    pub const fn new(source: R) -> Self {
        Self {
            source,
            index: 0,
            finished: false,
        }
    }

    #[expect(
        clippy::big_endian_bytes,
        reason = "frame lengths are big-endian on disk"
    )]
    fn read_header(&mut self) -> Result<Option<usize>, LogCodecError> {
        let mut header = [0_u8; HEADER_LEN];
        let filled = read_fully(&mut self.source, &mut header)?;
        if filled == 0 {
            return Ok(None);
        }
        if filled < HEADER_LEN {
            return Err(LogCodecError::Truncated {
                expected: HEADER_LEN,
                actual: filled,
            });
        }
        let length = u32::from_be_bytes(header);
        usize::try_from(length).map(Some).map_err(|_| {
            LogCodecError::from(io::Error::new(
                io::ErrorKind::InvalidData,
                "frame length exceeds address space",
            ))
        })
    }

    fn read_frame(&mut self) -> Result<Option<Vec<u8>>, LogCodecError> {
        let Some(length) = self.read_header()? else {
            return Ok(None);
        };
        let mut body = Vec::with_capacity(length);
        let limit = u64::try_from(length).unwrap_or(u64::MAX);
        (&mut self.source).take(limit).read_to_end(&mut body)?;
        if body.len() < length {
            return Err(LogCodecError::Truncated {
                expected: length,
                actual: body.len(),
            });
        }
        Ok(Some(body))
    }
}

impl<R: Read> Iterator for LogReplay<R> {
    type Item = Result<ReplayOutcome, LogCodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let frame = match self.read_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                self.finished = true;
                return None;
            }
            Err(err) => {
                self.finished = true;
                tracing::warn!(index = self.index, error = %err, "log replay stopped");
                return Some(Err(err));
            }
        };
        let index = self.index;
        self.index = self.index.saturating_add(1);
        let outcome = match parse(frame.as_slice()) {
            Ok(content) => ReplayOutcome::Parsed(content),
            Err(error) => {
                tracing::warn!(index, error = %error, "skipping corrupt log record");
                ReplayOutcome::Corrupt { index, error }
            }
        };
        Some(Ok(outcome))
    }
}

/// Writes `content` as one framed record and returns the bytes written,
/// header included.
///
/// # Errors
///
/// Returns `LogCodecError` if the record can't be encoded, is too large
/// to frame, or the sink fails.
#[expect(
    clippy::big_endian_bytes,
    reason = "frame lengths are big-endian on disk"
)]
pub fn frame_record<W: Write>(content: &MessageContent, mut sink: W) -> Result<u64, LogCodecError> {
    let length = u32::try_from(compute_length(content)?).map_err(|_| {
        LogCodecError::from(io::Error::new(
            io::ErrorKind::InvalidInput,
            "record too large to frame",
        ))
    })?;
    sink.write_all(&length.to_be_bytes())?;
    let written = store(content, &mut sink)?;
    Ok(written.saturating_add(4))
}

fn read_fully<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while let Some(rest) = buf.get_mut(filled..) {
        if rest.is_empty() {
            break;
        }
        match source.read(rest) {
            Ok(0) => break,
            Ok(count) => filled += count,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
