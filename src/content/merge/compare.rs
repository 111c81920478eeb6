//! Per-kind comparison of an old and a new content value.
//!
//! Each function returns the value to keep, built from the new value with
//! the reconciled file handle, and records what changed.

use super::{MergeContext, unify_files};
use crate::content::domain::{
    AnimationContent, AudioContent, Contact, DocumentContent, FileId, FormattedText, Game,
    Invoice, LiveLocationContent, Location, PhotoContent, PhotoSize, StickerContent, TextContent,
    Venue, VideoContent, VideoNoteContent, VoiceNoteContent,
};

/// What a merge found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Changes {
    /// A user-visible part of the message changed.
    pub content_changed: bool,
    /// Clients must be told about the new value.
    pub needs_update: bool,
}

impl Changes {
    pub(super) const fn content_if(&mut self, changed: bool) {
        if changed {
            self.content_changed = true;
            self.needs_update = true;
        }
    }

    pub(super) const fn update_if(&mut self, changed: bool) {
        if changed {
            self.needs_update = true;
        }
    }

    fn caption(&mut self, old: &FormattedText, new: &FormattedText) {
        self.content_if(old.text != new.text);
        self.update_if(old.entities != new.entities);
    }

    fn thumbnail(&mut self, old: Option<&PhotoSize>, new: Option<&PhotoSize>) {
        self.update_if(old != new);
    }

    /// Reconciles two handles to the main file and returns the one to keep.
    fn file(&mut self, old: FileId, new: FileId, ctx: &MergeContext<'_>) -> FileId {
        if old == new || !new.is_valid() {
            return old;
        }
        if !old.is_valid() || !ctx.need_merge_files {
            self.update_if(true);
            return new;
        }
        let unified = unify_files(ctx.files, old, new);
        self.update_if(unified.kept != old || unified.locations_changed);
        unified.kept
    }
}

fn same_location(old: &Location, new: &Location, ctx: &MergeContext<'_>) -> bool {
    old.is_near(new, ctx.options.location_epsilon)
}

pub(super) fn text(old: &TextContent, new: TextContent, changes: &mut Changes) -> TextContent {
    changes.caption(&old.text, &new.text);
    changes.update_if(old.web_page_id != new.web_page_id);
    new
}

pub(super) fn animation(
    old: &AnimationContent,
    mut new: AnimationContent,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> AnimationContent {
    let (before, after) = (&old.animation, &mut new.animation);
    after.file_id = changes.file(before.file_id, after.file_id, ctx);
    changes.thumbnail(before.thumbnail.as_ref(), after.thumbnail.as_ref());
    changes.content_if(
        before.duration != after.duration
            || before.dimensions != after.dimensions
            || before.file_name != after.file_name
            || before.mime_type != after.mime_type,
    );
    changes.caption(&old.caption, &new.caption);
    new
}

pub(super) fn audio(
    old: &AudioContent,
    mut new: AudioContent,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> AudioContent {
    let (before, after) = (&old.audio, &mut new.audio);
    after.file_id = changes.file(before.file_id, after.file_id, ctx);
    changes.thumbnail(before.thumbnail.as_ref(), after.thumbnail.as_ref());
    changes.content_if(
        before.duration != after.duration
            || before.title != after.title
            || before.performer != after.performer
            || before.file_name != after.file_name
            || before.mime_type != after.mime_type,
    );
    changes.caption(&old.caption, &new.caption);
    new
}

pub(super) fn document(
    old: &DocumentContent,
    mut new: DocumentContent,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> DocumentContent {
    let (before, after) = (&old.document, &mut new.document);
    after.file_id = changes.file(before.file_id, after.file_id, ctx);
    changes.thumbnail(before.thumbnail.as_ref(), after.thumbnail.as_ref());
    changes.content_if(before.file_name != after.file_name || before.mime_type != after.mime_type);
    changes.caption(&old.caption, &new.caption);
    new
}

pub(super) fn photo(
    old: &PhotoContent,
    mut new: PhotoContent,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> PhotoContent {
    let old_file_id = old.photo.largest().map(|size| size.file_id).unwrap_or_default();
    if let Some(size) = new.photo.largest_mut() {
        size.file_id = changes.file(old_file_id, size.file_id, ctx);
    }
    changes.content_if(old.photo.id != new.photo.id);
    changes.update_if(
        old.photo.sizes != new.photo.sizes
            || old.photo.has_stickers != new.photo.has_stickers
            || old.photo.sticker_file_ids != new.photo.sticker_file_ids
            || old.ttl != new.ttl,
    );
    changes.caption(&old.caption, &new.caption);
    new
}

pub(super) fn sticker(
    old: &StickerContent,
    mut new: StickerContent,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> StickerContent {
    let (before, after) = (&old.sticker, &mut new.sticker);
    after.file_id = changes.file(before.file_id, after.file_id, ctx);
    changes.thumbnail(before.thumbnail.as_ref(), after.thumbnail.as_ref());
    changes.content_if(
        before.dimensions != after.dimensions
            || before.emoji != after.emoji
            || before.is_mask != after.is_mask,
    );
    changes.update_if(before.set_id != after.set_id);
    new
}

pub(super) fn video(
    old: &VideoContent,
    mut new: VideoContent,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> VideoContent {
    let (before, after) = (&old.video, &mut new.video);
    after.file_id = changes.file(before.file_id, after.file_id, ctx);
    changes.thumbnail(before.thumbnail.as_ref(), after.thumbnail.as_ref());
    changes.content_if(
        before.duration != after.duration
            || before.dimensions != after.dimensions
            || before.file_name != after.file_name
            || before.mime_type != after.mime_type
            || before.supports_streaming != after.supports_streaming
            || before.has_stickers != after.has_stickers,
    );
    changes.update_if(old.ttl != new.ttl);
    changes.caption(&old.caption, &new.caption);
    new
}

pub(super) fn voice_note(
    old: &VoiceNoteContent,
    mut new: VoiceNoteContent,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> VoiceNoteContent {
    let (before, after) = (&old.voice_note, &mut new.voice_note);
    after.file_id = changes.file(before.file_id, after.file_id, ctx);
    changes.content_if(before.duration != after.duration || before.mime_type != after.mime_type);
    changes.update_if(before.waveform != after.waveform || old.is_listened != new.is_listened);
    changes.caption(&old.caption, &new.caption);
    new
}

pub(super) fn video_note(
    old: &VideoNoteContent,
    mut new: VideoNoteContent,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> VideoNoteContent {
    let (before, after) = (&old.video_note, &mut new.video_note);
    after.file_id = changes.file(before.file_id, after.file_id, ctx);
    changes.thumbnail(before.thumbnail.as_ref(), after.thumbnail.as_ref());
    changes.content_if(before.duration != after.duration || before.length != after.length);
    changes.update_if(old.is_viewed != new.is_viewed);
    new
}

pub(super) fn contact(old: &Contact, new: Contact, changes: &mut Changes) -> Contact {
    changes.content_if(
        old.phone_number != new.phone_number
            || old.first_name != new.first_name
            || old.last_name != new.last_name
            || old.vcard != new.vcard,
    );
    changes.update_if(old.user_id != new.user_id);
    new
}

pub(super) fn location(
    old: &Location,
    new: Location,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> Location {
    changes.content_if(!same_location(old, &new, ctx));
    new
}

pub(super) fn venue(old: &Venue, new: Venue, changes: &mut Changes, ctx: &MergeContext<'_>) -> Venue {
    changes.content_if(
        !same_location(&old.location, &new.location, ctx)
            || old.title != new.title
            || old.address != new.address
            || old.provider != new.provider
            || old.id != new.id
            || old.venue_type != new.venue_type,
    );
    new
}

pub(super) fn live_location(
    old: &LiveLocationContent,
    new: LiveLocationContent,
    changes: &mut Changes,
    ctx: &MergeContext<'_>,
) -> LiveLocationContent {
    changes.content_if(old.period != new.period);
    changes.update_if(!same_location(&old.location, &new.location, ctx));
    new
}

pub(super) fn game(old: &Game, new: Game, changes: &mut Changes) -> Game {
    changes.content_if(!old.same_as(&new));
    new
}

pub(super) fn invoice(old: &Invoice, new: Invoice, changes: &mut Changes) -> Invoice {
    changes.content_if(!old.same_as(&new));
    new
}

/// Compares service actions, which have no echo fields or files to keep.
pub(super) fn action<T: PartialEq>(old: &T, new: T, changes: &mut Changes) -> T {
    changes.content_if(*old != new);
    new
}
