//! Tests for reconciling stored content with fresh server copies.

use super::fixtures::{
    caption, invoice, options, photo_content, private_chat, sample_content, video_content,
};
use crate::content::{
    adapters::memory::InMemoryFileRegistry,
    config::ContentOptions,
    domain::{
        ContentKind, DialogId, EntityKind, FileId, FormattedText, LiveLocationContent, Location,
        MessageContent, MessageEntity, MessageId, VoiceNoteContent,
    },
    error::FileRegistryError,
    merge::{MergeContext, merge_contents, merge_file_id},
    ports::{FileRegistry, FileView, files::MockFileRegistry},
    wire::RemoteFile,
};
use mockall::predicate::eq;
use rstest::rstest;

fn local_view() -> FileView {
    FileView {
        has_local: true,
        has_remote: false,
        size: 10,
    }
}

fn merge_with(
    files: &MockFileRegistry,
    options: &ContentOptions,
    dialog: DialogId,
    old: &MessageContent,
    new: MessageContent,
) -> (MessageContent, bool, bool) {
    let ctx = MergeContext::new(dialog, true, files, options);
    let outcome = merge_contents(old, new, &ctx);
    (outcome.content, outcome.content_changed, outcome.needs_update)
}

// ============================================================================
// Unchanged content
// ============================================================================

#[rstest]
fn identical_content_reports_no_change(options: ContentOptions, private_chat: DialogId) {
    // No expectations: identical handles must not reach the file manager.
    let files = MockFileRegistry::new();
    for kind in ContentKind::ALL {
        let content = sample_content(kind);

        let (merged, content_changed, needs_update) =
            merge_with(&files, &options, private_chat, &content, content.clone());

        assert_eq!(merged, content, "{kind} was altered");
        assert!(!content_changed, "{kind} reported a content change");
        assert!(!needs_update, "{kind} reported an update");
    }
}

// ============================================================================
// Captions and text
// ============================================================================

#[rstest]
fn photo_caption_edit_keeps_file(options: ContentOptions, private_chat: DialogId) {
    let files = MockFileRegistry::new();
    let file_id = FileId::new(16, 0);
    let old = photo_content(file_id, "a");

    let (merged, content_changed, needs_update) = merge_with(
        &files,
        &options,
        private_chat,
        &old,
        photo_content(file_id, "b"),
    );

    assert!(content_changed);
    assert!(needs_update);
    assert_eq!(merged.file_id(), file_id);
    assert_eq!(merged.caption().map(|text| text.text.as_str()), Some("b"));
}

#[rstest]
fn entity_only_change_needs_update_but_is_not_an_edit(
    options: ContentOptions,
    private_chat: DialogId,
) {
    let files = MockFileRegistry::new();
    let old = MessageContent::text(FormattedText::plain("bold move"));
    let new = MessageContent::text(FormattedText::new(
        "bold move",
        vec![MessageEntity::new(EntityKind::Bold, 0, 4)],
    ));

    let (_, content_changed, needs_update) = merge_with(&files, &options, private_chat, &old, new);

    assert!(!content_changed);
    assert!(needs_update);
}

#[rstest]
fn kind_change_replaces_content(options: ContentOptions, private_chat: DialogId) {
    let files = MockFileRegistry::new();
    let old = MessageContent::text(FormattedText::plain("uploading…"));
    let new = photo_content(FileId::new(3, 0), "done");

    let (merged, content_changed, needs_update) =
        merge_with(&files, &options, private_chat, &old, new.clone());

    assert_eq!(merged, new);
    assert!(content_changed && needs_update);
}

// ============================================================================
// File reconciliation
// ============================================================================

#[rstest]
fn file_manager_choice_of_old_handle_is_silent(options: ContentOptions, private_chat: DialogId) {
    let mut files = MockFileRegistry::new();
    files
        .expect_merge()
        .with(eq(FileId::new(9, 0)), eq(FileId::new(5, 0)))
        .times(1)
        .returning(|_, existing| Ok(existing));
    files.expect_view().returning(|_| Some(local_view()));
    let old = video_content(FileId::new(5, 0), "clip");

    let (merged, content_changed, needs_update) = merge_with(
        &files,
        &options,
        private_chat,
        &old,
        video_content(FileId::new(9, 0), "clip"),
    );

    assert_eq!(merged.file_id(), FileId::new(5, 0));
    assert!(!content_changed && !needs_update);
}

#[rstest]
fn refused_file_merge_keeps_old_handle(options: ContentOptions, private_chat: DialogId) {
    let mut files = MockFileRegistry::new();
    files
        .expect_merge()
        .times(1)
        .returning(|incoming, existing| Err(FileRegistryError::Conflict(incoming, existing)));
    files.expect_view().returning(|_| Some(local_view()));
    let old = video_content(FileId::new(5, 0), "clip");

    let (merged, content_changed, needs_update) = merge_with(
        &files,
        &options,
        private_chat,
        &old,
        video_content(FileId::new(9, 0), "clip"),
    );

    assert_eq!(merged.file_id(), FileId::new(5, 0));
    assert!(!content_changed && !needs_update);
}

#[rstest]
fn new_handle_is_taken_without_file_merging(options: ContentOptions, private_chat: DialogId) {
    let files = MockFileRegistry::new();
    let ctx = MergeContext::new(private_chat, false, &files, &options);
    let old = video_content(FileId::new(5, 0), "clip");

    let outcome = merge_contents(&old, video_content(FileId::new(9, 0), "clip"), &ctx);

    assert_eq!(outcome.content.file_id(), FileId::new(9, 0));
    assert!(!outcome.content_changed);
    assert!(outcome.needs_update);
}

#[test]
fn upload_completion_replaces_video_file() {
    let mut files = MockFileRegistry::new();
    files
        .expect_merge()
        .with(eq(FileId::new(8, 0)), eq(FileId::new(3, 0)))
        .times(1)
        .returning(|incoming, _| Ok(incoming));
    files.expect_view().returning(|_| Some(local_view()));
    let pending = video_content(FileId::new(3, 0), "holiday");

    let outcome = merge_file_id(pending.clone(), FileId::new(8, 0), &files);

    assert!(outcome.file_changed);
    assert!(outcome.needs_update);
    assert_eq!(outcome.content.file_id(), FileId::new(8, 0));
    assert_eq!(outcome.content.caption(), pending.caption());
    assert_eq!(outcome.content.duration(), pending.duration());
}

#[rstest]
fn upload_completion_into_registry_needs_update(private_chat: DialogId) {
    let files = InMemoryFileRegistry::new();
    let local = files.register_local(4_096);
    let uploaded = files
        .register_remote(
            &RemoteFile {
                id: 700,
                access_hash: 1,
                dc_id: 2,
                size: 4_096,
            },
            private_chat,
        )
        .expect("remote registers");

    let outcome = merge_file_id(video_content(local, "holiday"), uploaded, &files);

    assert_eq!(outcome.content.file_id(), local);
    assert!(!outcome.file_changed);
    assert!(outcome.needs_update);
    let view = files.view(local).expect("local handle stays registered");
    assert!(view.has_remote && view.has_local);
}

#[test]
fn same_file_with_new_remote_handle_is_adopted() {
    let files = InMemoryFileRegistry::new();
    let local = files.register_local(4_096);
    let relocated = FileId::new(local.id, 5);

    let outcome = merge_file_id(video_content(local, "holiday"), relocated, &files);

    assert_eq!(outcome.content.file_id(), relocated);
    assert!(outcome.file_changed);
    assert!(outcome.needs_update);
}

#[rstest]
fn merged_upload_in_registry_needs_update(options: ContentOptions, private_chat: DialogId) {
    let files = InMemoryFileRegistry::new();
    let local = files.register_local(4_096);
    let uploaded = files
        .register_remote(
            &RemoteFile {
                id: 701,
                access_hash: 1,
                dc_id: 2,
                size: 4_096,
            },
            private_chat,
        )
        .expect("remote registers");
    let ctx = MergeContext::new(private_chat, true, &files, &options);

    let outcome = merge_contents(
        &video_content(local, "clip"),
        video_content(uploaded, "clip"),
        &ctx,
    );

    assert_eq!(outcome.content.file_id(), local);
    assert!(!outcome.content_changed);
    assert!(outcome.needs_update);
}

#[rstest]
fn registry_merge_without_new_locations_is_silent(
    options: ContentOptions,
    private_chat: DialogId,
) {
    let files = InMemoryFileRegistry::new();
    let original = files.register_local(4_096);
    let copy = files.duplicate(original).expect("handle duplicates");
    let ctx = MergeContext::new(private_chat, true, &files, &options);

    let outcome = merge_contents(
        &video_content(original, "clip"),
        video_content(copy, "clip"),
        &ctx,
    );

    assert_eq!(outcome.content.file_id(), original);
    assert!(!outcome.content_changed && !outcome.needs_update);
}

#[test]
fn merge_file_id_ignores_content_without_files() {
    let files = MockFileRegistry::new();
    let text = MessageContent::text(caption("no files here"));

    let outcome = merge_file_id(text.clone(), FileId::new(8, 0), &files);

    assert_eq!(outcome.content, text);
    assert!(!outcome.file_changed && !outcome.needs_update);
}

// ============================================================================
// Echo fields and flags
// ============================================================================

#[rstest]
fn invoice_receipt_is_not_an_edit(options: ContentOptions, private_chat: DialogId) {
    let files = MockFileRegistry::new();
    let old = MessageContent::Invoice(invoice());
    let mut paid = invoice();
    paid.receipt_message_id = MessageId::from_server(99);

    let (_, content_changed, needs_update) =
        merge_with(&files, &options, private_chat, &old, MessageContent::Invoice(paid));

    assert!(!content_changed && !needs_update);
}

#[rstest]
fn listened_flag_needs_update_only(options: ContentOptions, private_chat: DialogId) {
    let files = MockFileRegistry::new();
    let old = sample_content(ContentKind::VoiceNote);
    let MessageContent::VoiceNote(played) = old.clone() else {
        panic!("sample is a voice note");
    };
    let unplayed = MessageContent::VoiceNote(VoiceNoteContent {
        is_listened: false,
        ..played
    });

    let (_, content_changed, needs_update) =
        merge_with(&files, &options, private_chat, &old, unplayed);

    assert!(!content_changed);
    assert!(needs_update);
}

#[rstest]
#[case(Location::new(51.5, -0.12), false)]
#[case(Location::new(51.500_000_1, -0.12), false)]
#[case(Location::new(51.6, -0.12), true)]
fn location_moves_beyond_epsilon_are_edits(
    options: ContentOptions,
    private_chat: DialogId,
    #[case] moved_to: Location,
    #[case] is_edit: bool,
) {
    let files = MockFileRegistry::new();
    let old = MessageContent::Location(Location::new(51.5, -0.12));

    let (_, content_changed, needs_update) = merge_with(
        &files,
        &options,
        private_chat,
        &old,
        MessageContent::Location(moved_to),
    );

    assert_eq!(content_changed, is_edit);
    assert_eq!(needs_update, is_edit);
}

#[rstest]
fn live_location_movement_is_not_an_edit(options: ContentOptions, private_chat: DialogId) {
    let files = MockFileRegistry::new();
    let old = MessageContent::LiveLocation(LiveLocationContent {
        location: Location::new(40.7, -74.0),
        period: 900,
    });
    let moved = MessageContent::LiveLocation(LiveLocationContent {
        location: Location::new(40.8, -74.0),
        period: 900,
    });

    let (_, content_changed, needs_update) = merge_with(&files, &options, private_chat, &old, moved);

    assert!(!content_changed);
    assert!(needs_update);
}

#[rstest]
fn live_location_period_change_is_an_edit(options: ContentOptions, private_chat: DialogId) {
    let files = MockFileRegistry::new();
    let old = MessageContent::LiveLocation(LiveLocationContent {
        location: Location::new(40.7, -74.0),
        period: 900,
    });
    let extended = MessageContent::LiveLocation(LiveLocationContent {
        location: Location::new(40.7, -74.0),
        period: 3_600,
    });

    let (merged, content_changed, needs_update) =
        merge_with(&files, &options, private_chat, &old, extended.clone());

    assert_eq!(merged, extended);
    assert!(content_changed);
    assert!(needs_update);
}
