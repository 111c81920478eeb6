//! Coordination of secret chat media loading.
//!
//! A secret attachment decodes to provisional content whose file and
//! thumbnail are still encrypted. The decoder registers the work needed on
//! a [`JoinBarrier`]; [`SecretMediaLoader::finalize`] runs that work through
//! the [`SecretPayloadLoader`] port and returns the finished content, or
//! nothing at all if any part fails.

mod barrier;

pub use barrier::{BarrierCanceller, JoinBarrier, LoadId, PartWaiter};

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::content::{
    domain::{DialogId, FileId, MessageContent, PhotoSize, WebPageId},
    error::SecretMediaError,
    ports::SecretPayloadLoader,
    wire::{EncryptedFile, SecretKey, SecretThumbnail},
};

/// Work needed before a secret attachment can be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretPart {
    /// Register and decrypt the attachment itself.
    DecryptFile {
        /// The encrypted file descriptor.
        file: EncryptedFile,
        /// Key material.
        key: SecretKey,
        /// Chat the file belongs to.
        owner: DialogId,
    },
    /// Decode the inline preview into a local thumbnail.
    DecodeThumbnail {
        /// The inline preview.
        thumbnail: SecretThumbnail,
        /// Chat the preview belongs to.
        owner: DialogId,
    },
    /// Resolve a link preview from its URL.
    ResolveWebPage {
        /// The previewed URL.
        url: String,
    },
}

impl SecretPart {
    /// Returns a short description for logs and errors.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::DecryptFile { file, .. } => format!("file {}", file.id),
            Self::DecodeThumbnail { .. } => "thumbnail".to_owned(),
            Self::ResolveWebPage { url } => format!("web page {url}"),
        }
    }
}

/// Result of one [`SecretPart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedPart {
    /// The decrypted attachment.
    File(FileId),
    /// The decoded thumbnail.
    Thumbnail(PhotoSize),
    /// The resolved link preview.
    WebPage(WebPageId),
}

/// Applies loaded parts to provisional content.
#[must_use]
pub fn apply_parts(mut content: MessageContent, parts: Vec<LoadedPart>) -> MessageContent {
    for part in parts {
        match part {
            LoadedPart::File(file_id) => {
                if let Some(slot) = content.main_file_slot() {
                    *slot = file_id;
                }
            }
            LoadedPart::Thumbnail(size) => {
                if let MessageContent::Photo(photo) = &mut content {
                    photo.photo.sizes.insert(0, size);
                } else if let Some(slot) = content.thumbnail_slot() {
                    *slot = Some(size);
                }
            }
            LoadedPart::WebPage(web_page_id) => content.set_web_page_id(web_page_id),
        }
    }
    content
}

/// Service finishing secret chat content.
///
/// # Examples
///
/// ```ignore
/// let loader = SecretMediaLoader::new(Arc::new(payload_loader));
/// let mut barrier = JoinBarrier::new();
/// let pending = decode_secret_media(text, file, media, entities, owner, &mut barrier, &ctx)?;
/// let content = loader.finalize(pending, barrier).await?;
/// ```
#[derive(Clone)]
pub struct SecretMediaLoader<L>
where
    L: SecretPayloadLoader + 'static,
{
    loader: Arc<L>,
}

impl<L> SecretMediaLoader<L>
where
    L: SecretPayloadLoader + 'static,
{
    /// Creates a loader backed by `loader`.
    #[must_use]
    pub const fn new(loader: Arc<L>) -> Self {
        Self { loader }
    }

    /// Loads every part registered on `barrier` and applies them to
    /// `pending`.
    ///
    /// Parts load concurrently. On the first failure the remaining loads
    /// are aborted, as they are when the returned future is dropped.
    ///
    /// # Errors
    ///
    /// Returns `SecretMediaError` if any part fails or the barrier is
    /// cancelled.
    pub async fn finalize(
        &self,
        pending: MessageContent,
        mut barrier: JoinBarrier,
    ) -> Result<MessageContent, SecretMediaError> {
        let load_id = barrier.id();
        // Dropping the set aborts any load still running.
        let mut loads = JoinSet::new();
        for (part, waiter) in barrier.take_pending() {
            let loader = Arc::clone(&self.loader);
            loads.spawn(async move {
                match loader.load(part).await {
                    Ok(loaded) => waiter.succeed(loaded),
                    Err(err) => waiter.fail(err),
                }
            });
        }
        tracing::debug!(%load_id, parts = loads.len(), kind = %pending.kind(), "loading secret media");
        match barrier.wait().await {
            Ok(parts) => Ok(apply_parts(pending, parts)),
            Err(err) => {
                loads.abort_all();
                Err(err)
            }
        }
    }
}
