//! Reconciliation of stored content with a fresh copy from the server.
//!
//! Merging is pure: it returns the value to store together with what
//! changed, and the caller swaps the stored value. The file manager is the
//! only collaborator consulted, to unify handles to the same file.

mod compare;

use compare::Changes;

use crate::content::{
    config::ContentOptions,
    domain::{DialogId, FileId, MessageContent},
    ports::FileRegistry,
};

/// Collaborators and flags for one merge.
#[derive(Clone, Copy)]
pub struct MergeContext<'a> {
    /// Chat the message belongs to.
    pub dialog_id: DialogId,
    /// Ask the file manager to unify differing file handles.
    pub need_merge_files: bool,
    /// The file manager.
    pub files: &'a dyn FileRegistry,
    /// Limits, including the location comparison epsilon.
    pub options: &'a ContentOptions,
}

impl<'a> MergeContext<'a> {
    /// Creates a merge context.
    #[must_use]
    pub const fn new(
        dialog_id: DialogId,
        need_merge_files: bool,
        files: &'a dyn FileRegistry,
        options: &'a ContentOptions,
    ) -> Self {
        Self {
            dialog_id,
            need_merge_files,
            files,
            options,
        }
    }
}

impl std::fmt::Debug for MergeContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeContext")
            .field("dialog_id", &self.dialog_id)
            .field("need_merge_files", &self.need_merge_files)
            .field("options", self.options)
            .finish_non_exhaustive()
    }
}

/// Result of [`merge_contents`].
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// The value to store.
    pub content: MessageContent,
    /// A user-visible part of the message changed, so it counts as edited.
    pub content_changed: bool,
    /// Clients must be sent the new value.
    pub needs_update: bool,
}

/// Result of [`merge_file_id`].
#[derive(Debug, Clone, PartialEq)]
pub struct FileMergeOutcome {
    /// The value to store.
    pub content: MessageContent,
    /// The main file handle was replaced.
    pub file_changed: bool,
    /// Clients must be sent the new value.
    pub needs_update: bool,
}

/// Reconciles the stored content `old` with the received `new` and
/// returns the value to store in its place.
///
/// Content of a different kind replaces the old one outright. Otherwise
/// the kinds compare field by field: file handles are unified through
/// the file manager when `need_merge_files` is set, and the old handle is
/// kept if the file manager resolves to it or refuses. Fields echoed back
/// by the server, such as an invoice receipt or a game access hash, are
/// not compared.
///
/// # Examples
///
/// ```
/// use missive::content::{
///     adapters::memory::InMemoryFileRegistry,
///     config::ContentOptions,
///     domain::{DialogId, FormattedText, MessageContent, UserId},
///     merge::{MergeContext, merge_contents},
/// };
///
/// let files = InMemoryFileRegistry::new();
/// let options = ContentOptions::default();
/// let ctx = MergeContext::new(DialogId::from_user(UserId::new(1)), true, &files, &options);
///
/// let old = MessageContent::text(FormattedText::plain("hello"));
/// let outcome = merge_contents(&old, old.clone(), &ctx);
/// assert!(!outcome.content_changed && !outcome.needs_update);
///
/// let edited = MessageContent::text(FormattedText::plain("hello!"));
/// let outcome = merge_contents(&old, edited, &ctx);
/// assert!(outcome.content_changed);
/// ```
#[must_use]
pub fn merge_contents(
    old: &MessageContent,
    new: MessageContent,
    ctx: &MergeContext<'_>,
) -> MergeOutcome {
    let mut changes = Changes::default();
    let content = merge_same_kind(old, new, &mut changes, ctx);
    if changes.content_changed {
        tracing::trace!(dialog_id = %ctx.dialog_id, kind = %content.kind(), "content changed");
    }
    MergeOutcome {
        content,
        content_changed: changes.content_changed,
        needs_update: changes.needs_update,
    }
}

/// Replaces the main file handle, typically once an upload completes.
///
/// The file manager unifies the handles first; if it refuses, the old
/// handle stays. A handle to another remote location of the same file is
/// adopted directly. Clients are updated when the handle changes or the
/// file gains or loses a location. Nothing but the file handle is touched.
#[must_use]
pub fn merge_file_id(
    mut content: MessageContent,
    new_file_id: FileId,
    files: &dyn FileRegistry,
) -> FileMergeOutcome {
    let mut file_changed = false;
    let mut needs_update = false;
    if let Some(slot) = content.main_file_slot() {
        let old_file_id = *slot;
        if new_file_id.is_valid() && new_file_id != old_file_id {
            let unified = if old_file_id.is_valid() {
                unify_files(files, old_file_id, new_file_id)
            } else {
                UnifiedFile {
                    kept: new_file_id,
                    locations_changed: false,
                }
            };
            file_changed = unified.kept != old_file_id;
            needs_update = file_changed || unified.locations_changed;
            *slot = unified.kept;
        }
    }
    FileMergeOutcome {
        content,
        file_changed,
        needs_update,
    }
}

/// Handle chosen for a file seen under two handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UnifiedFile {
    kept: FileId,
    /// The kept file gained or lost a local or remote copy.
    locations_changed: bool,
}

/// Unifies `incoming` with `existing` through the file manager.
///
/// A handle to another remote location of the same file is taken as is.
/// If the file manager refuses, `existing` is kept.
fn unify_files(files: &dyn FileRegistry, existing: FileId, incoming: FileId) -> UnifiedFile {
    if existing.same_file(incoming) {
        return UnifiedFile {
            kept: incoming,
            locations_changed: false,
        };
    }
    let before = files.view(existing);
    let kept = files.merge(incoming, existing).unwrap_or_else(|err| {
        tracing::warn!(
            old = %existing,
            new = %incoming,
            error = %err,
            "keeping old file after failed merge"
        );
        existing
    });
    UnifiedFile {
        kept,
        locations_changed: files.view(kept) != before,
    }
}

/// Matches `new` against `old` of the same variant, replacing `old`
/// outright when the kinds differ.
macro_rules! same_kind {
    ($old:ident, $incoming:ident, $changes:ident, $variant:ident, |$existing:ident| $merged:expr) => {{
        let MessageContent::$variant($existing) = $old else {
            return replaced($old, MessageContent::$variant($incoming), $changes);
        };
        MessageContent::$variant($merged)
    }};
}

fn merge_same_kind(
    old: &MessageContent,
    new: MessageContent,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> MessageContent {
    match new {
        MessageContent::Text(incoming) => {
            same_kind!(old, incoming, changes, Text, |existing| {
                compare::text(existing, incoming, changes)
            })
        }
        MessageContent::Animation(incoming) => {
            same_kind!(old, incoming, changes, Animation, |existing| {
                compare::animation(existing, incoming, changes, ctx)
            })
        }
        MessageContent::Audio(incoming) => {
            same_kind!(old, incoming, changes, Audio, |existing| {
                compare::audio(existing, incoming, changes, ctx)
            })
        }
        MessageContent::Document(incoming) => {
            same_kind!(old, incoming, changes, Document, |existing| {
                compare::document(existing, incoming, changes, ctx)
            })
        }
        MessageContent::Photo(incoming) => {
            same_kind!(old, incoming, changes, Photo, |existing| {
                compare::photo(existing, incoming, changes, ctx)
            })
        }
        MessageContent::Sticker(incoming) => {
            same_kind!(old, incoming, changes, Sticker, |existing| {
                compare::sticker(existing, incoming, changes, ctx)
            })
        }
        MessageContent::Video(incoming) => {
            same_kind!(old, incoming, changes, Video, |existing| {
                compare::video(existing, incoming, changes, ctx)
            })
        }
        MessageContent::VoiceNote(incoming) => {
            same_kind!(old, incoming, changes, VoiceNote, |existing| {
                compare::voice_note(existing, incoming, changes, ctx)
            })
        }
        MessageContent::VideoNote(incoming) => {
            same_kind!(old, incoming, changes, VideoNote, |existing| {
                compare::video_note(existing, incoming, changes, ctx)
            })
        }
        MessageContent::Contact(incoming) => {
            same_kind!(old, incoming, changes, Contact, |existing| {
                compare::contact(existing, incoming, changes)
            })
        }
        MessageContent::Location(incoming) => {
            same_kind!(old, incoming, changes, Location, |existing| {
                compare::location(existing, incoming, changes, ctx)
            })
        }
        MessageContent::Venue(incoming) => {
            same_kind!(old, incoming, changes, Venue, |existing| {
                compare::venue(existing, incoming, changes, ctx)
            })
        }
        MessageContent::LiveLocation(incoming) => {
            same_kind!(old, incoming, changes, LiveLocation, |existing| {
                compare::live_location(existing, incoming, changes, ctx)
            })
        }
        MessageContent::Game(incoming) => {
            same_kind!(old, incoming, changes, Game, |existing| {
                compare::game(existing, incoming, changes)
            })
        }
        MessageContent::Invoice(incoming) => {
            same_kind!(old, incoming, changes, Invoice, |existing| {
                compare::invoice(existing, incoming, changes)
            })
        }
        MessageContent::ChatCreate(incoming) => {
            same_kind!(old, incoming, changes, ChatCreate, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::ChatChangeTitle(incoming) => {
            same_kind!(old, incoming, changes, ChatChangeTitle, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::ChatChangePhoto(incoming) => {
            same_kind!(old, incoming, changes, ChatChangePhoto, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::ChatAddUsers(incoming) => {
            same_kind!(old, incoming, changes, ChatAddUsers, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::ChatDeleteUser(incoming) => {
            same_kind!(old, incoming, changes, ChatDeleteUser, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::ChatMigrateTo(incoming) => {
            same_kind!(old, incoming, changes, ChatMigrateTo, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::ChannelCreate(incoming) => {
            same_kind!(old, incoming, changes, ChannelCreate, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::ChannelMigrateFrom(incoming) => {
            same_kind!(old, incoming, changes, ChannelMigrateFrom, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::PinMessage(incoming) => {
            same_kind!(old, incoming, changes, PinMessage, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::GameScore(incoming) => {
            same_kind!(old, incoming, changes, GameScore, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::ChatSetTtl(incoming) => {
            same_kind!(old, incoming, changes, ChatSetTtl, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::Call(incoming) => {
            same_kind!(old, incoming, changes, Call, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::PaymentSuccessful(incoming) => {
            same_kind!(old, incoming, changes, PaymentSuccessful, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::CustomServiceAction(incoming) => {
            same_kind!(old, incoming, changes, CustomServiceAction, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::WebsiteConnected(incoming) => {
            same_kind!(old, incoming, changes, WebsiteConnected, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::PassportDataSent(incoming) => {
            same_kind!(old, incoming, changes, PassportDataSent, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        MessageContent::PassportDataReceived(incoming) => {
            same_kind!(old, incoming, changes, PassportDataReceived, |existing| {
                compare::action(existing, incoming, changes)
            })
        }
        unit @ (MessageContent::ChatDeletePhoto
        | MessageContent::ChatDeleteHistory
        | MessageContent::ChatJoinedByLink
        | MessageContent::ScreenshotTaken
        | MessageContent::Unsupported
        | MessageContent::ContactRegistered
        | MessageContent::ExpiredPhoto
        | MessageContent::ExpiredVideo) => {
            if old.kind() == unit.kind() {
                unit
            } else {
                replaced(old, unit, changes)
            }
        }
    }
}

fn replaced(old: &MessageContent, new: MessageContent, changes: &mut Changes) -> MessageContent {
    tracing::debug!(old = %old.kind(), new = %new.kind(), "content kind changed");
    changes.content_if(true);
    new
}
