//! Tests for loading secret chat attachments through the join barrier.

use super::fixtures::options;
use crate::content::{
    adapters::memory::{InMemoryFileRegistry, InMemorySecretLoader},
    config::ContentOptions,
    decoder::{DecodeContext, decode_secret_media, key_fingerprint},
    domain::{ContentKind, DialogId, MessageContent, WebPageId},
    error::SecretMediaError,
    ports::{FileRegistry, SecretLoadResult, SecretPayloadLoader},
    secret_media::{JoinBarrier, LoadedPart, SecretMediaLoader, SecretPart},
    wire::{EncryptedFile, SecretKey, SecretMedia, SecretThumbnail},
};
use async_trait::async_trait;
use rstest::rstest;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::sync::Notify;

const FILE_ID: i64 = 555;

fn secret_key() -> SecretKey {
    SecretKey {
        key: vec![7; 32],
        iv: vec![9; 32],
    }
}

fn encrypted_file() -> EncryptedFile {
    EncryptedFile {
        id: FILE_ID,
        access_hash: 1,
        size: 64_000,
        dc_id: 2,
        key_fingerprint: key_fingerprint(&secret_key()),
    }
}

fn secret_photo() -> SecretMedia {
    SecretMedia::Photo {
        thumbnail: SecretThumbnail {
            bytes: vec![0xff, 0xd8, 0xff],
            width: 90,
            height: 67,
        },
        width: 800,
        height: 600,
        size: 64_000,
        key: secret_key(),
        caption: "for your eyes".to_owned(),
    }
}

fn decode_pending(
    media: SecretMedia,
    encrypted: Option<EncryptedFile>,
    files: &InMemoryFileRegistry,
    options: &ContentOptions,
) -> (MessageContent, JoinBarrier) {
    let ctx = DecodeContext::new(files, options);
    let mut barrier = JoinBarrier::new();
    let pending = decode_secret_media(
        String::new(),
        encrypted,
        media,
        Vec::new(),
        DialogId::from_secret_chat(3),
        &mut barrier,
        &ctx,
    )
    .expect("secret media decodes");
    (pending, barrier)
}

// ============================================================================
// Finalisation
// ============================================================================

#[rstest]
#[tokio::test]
async fn photo_is_finished_with_file_and_thumbnail(options: ContentOptions) {
    let files = InMemoryFileRegistry::new();
    let loader = SecretMediaLoader::new(Arc::new(InMemorySecretLoader::new(files.clone())));
    let (pending, barrier) = decode_pending(secret_photo(), Some(encrypted_file()), &files, &options);
    assert!(!pending.file_id().is_valid());

    let content = loader
        .finalize(pending, barrier)
        .await
        .expect("photo loads");

    let MessageContent::Photo(photo) = &content else {
        panic!("expected a photo, got {}", content.kind());
    };
    assert_eq!(photo.photo.sizes.len(), 2);
    assert_eq!(
        photo.photo.thumbnail().map(|size| size.size_type.as_str()),
        Some("t")
    );
    let view = files.view(content.file_id()).expect("decrypted file is registered");
    assert!(view.has_local);
    assert_eq!(view.size, 64_000);
}

#[rstest]
#[tokio::test]
async fn failed_decryption_fails_the_content(options: ContentOptions) {
    let files = InMemoryFileRegistry::new();
    let loader = SecretMediaLoader::new(Arc::new(
        InMemorySecretLoader::new(files.clone()).failing_file(FILE_ID),
    ));
    let (pending, barrier) = decode_pending(secret_photo(), Some(encrypted_file()), &files, &options);

    let result = loader.finalize(pending, barrier).await;

    assert_eq!(
        result,
        Err(SecretMediaError::part_failed(
            format!("file {FILE_ID}"),
            "decryption failed"
        ))
    );
}

#[rstest]
#[tokio::test]
async fn web_page_preview_is_attached(options: ContentOptions) {
    let files = InMemoryFileRegistry::new();
    let loader = SecretMediaLoader::new(Arc::new(
        InMemorySecretLoader::new(files.clone()).with_web_page("https://example.com", WebPageId::new(3)),
    ));
    let (pending, barrier) = decode_pending(
        SecretMedia::WebPage {
            url: "https://example.com".to_owned(),
        },
        None,
        &files,
        &options,
    );

    let content = loader
        .finalize(pending, barrier)
        .await
        .expect("web page resolves");

    assert_eq!(content.kind(), ContentKind::Text);
    assert_eq!(content.web_page_id(), WebPageId::new(3));
}

#[rstest]
#[tokio::test]
async fn content_without_parts_finishes_immediately(options: ContentOptions) {
    let files = InMemoryFileRegistry::new();
    let loader = SecretMediaLoader::new(Arc::new(InMemorySecretLoader::new(files.clone())));
    let (pending, barrier) = decode_pending(SecretMedia::Empty, None, &files, &options);

    let content = loader
        .finalize(pending.clone(), barrier)
        .await
        .expect("text needs nothing");

    assert_eq!(content, pending);
}

/// Loader whose loads block until the gate opens.
#[derive(Default)]
struct GatedLoader {
    started: Notify,
    gate: Notify,
    finished: Notify,
    completed: AtomicBool,
}

struct NotifyOnDrop<'a>(&'a Notify);

impl Drop for NotifyOnDrop<'_> {
    fn drop(&mut self) {
        self.0.notify_one();
    }
}

#[async_trait]
impl SecretPayloadLoader for GatedLoader {
    async fn load(&self, _part: SecretPart) -> SecretLoadResult<LoadedPart> {
        let _finished = NotifyOnDrop(&self.finished);
        self.started.notify_one();
        self.gate.notified().await;
        self.completed.store(true, Ordering::SeqCst);
        Ok(LoadedPart::WebPage(WebPageId::new(1)))
    }
}

#[rstest]
#[tokio::test]
async fn dropping_finalize_aborts_running_loads(options: ContentOptions) {
    let files = InMemoryFileRegistry::new();
    let gated = Arc::new(GatedLoader::default());
    let loader = SecretMediaLoader::new(Arc::clone(&gated));
    let (pending, barrier) = decode_pending(
        SecretMedia::WebPage {
            url: "https://example.com".to_owned(),
        },
        None,
        &files,
        &options,
    );

    tokio::select! {
        _ = loader.finalize(pending, barrier) => panic!("a gated load cannot finish"),
        () = gated.started.notified() => {}
    }
    gated.gate.notify_one();
    gated.finished.notified().await;

    assert!(!gated.completed.load(Ordering::SeqCst));
}

// ============================================================================
// Barrier
// ============================================================================

#[tokio::test]
async fn first_failure_fails_the_barrier() {
    let mut barrier = JoinBarrier::new();
    let first = barrier.waiter("file");
    let second = barrier.waiter("thumbnail");

    second.fail(SecretMediaError::part_failed("thumbnail", "corrupt"));
    first.succeed(LoadedPart::WebPage(WebPageId::new(1)));

    assert_eq!(
        barrier.wait().await,
        Err(SecretMediaError::part_failed("thumbnail", "corrupt"))
    );
}

#[tokio::test]
async fn dropped_waiter_is_abandoned() {
    let mut barrier = JoinBarrier::new();
    let waiter = barrier.waiter("file 1");

    drop(waiter);

    assert_eq!(
        barrier.wait().await,
        Err(SecretMediaError::Abandoned("file 1".to_owned()))
    );
}

#[tokio::test]
async fn registered_part_never_handed_out_is_abandoned() {
    let mut barrier = JoinBarrier::new();
    barrier.register(SecretPart::ResolveWebPage {
        url: "https://example.com".to_owned(),
    });

    let result = barrier.wait().await;

    assert_eq!(
        result,
        Err(SecretMediaError::Abandoned(
            "web page https://example.com".to_owned()
        ))
    );
}

#[tokio::test]
async fn cancelled_barrier_stops_waiting() {
    let mut barrier = JoinBarrier::new();
    let _pending = barrier.waiter("file");
    let canceller = barrier.canceller();

    canceller.cancel();

    assert_eq!(barrier.wait().await, Err(SecretMediaError::Cancelled));
}
