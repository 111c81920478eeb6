//! In-memory secret payload loader.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::InMemoryFileRegistry;
use crate::content::{
    domain::{Dimensions, PhotoSize, WebPageId},
    error::SecretMediaError,
    ports::{SecretLoadResult, SecretPayloadLoader},
    secret_media::{LoadedPart, SecretPart},
};

/// Payload loader that "decrypts" by registering local files.
///
/// Encrypted files become local files of the declared size in the backing
/// [`InMemoryFileRegistry`]. Web page URLs resolve from a preconfigured
/// table; unknown URLs and files marked as failing report
/// [`SecretMediaError::PartFailed`].
#[derive(Debug, Clone)]
pub struct InMemorySecretLoader {
    files: InMemoryFileRegistry,
    state: Arc<RwLock<LoaderState>>,
}

#[derive(Debug, Default)]
struct LoaderState {
    web_pages: HashMap<String, WebPageId>,
    failing_files: Vec<i64>,
}

impl InMemorySecretLoader {
    /// Creates a loader registering decrypted files in `files`.
    #[must_use]
    pub fn new(files: InMemoryFileRegistry) -> Self {
        Self {
            files,
            state: Arc::default(),
        }
    }

    /// Makes `url` resolve to `web_page_id`.
    #[must_use]
    pub fn with_web_page(self, url: impl Into<String>, web_page_id: WebPageId) -> Self {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .web_pages
            .insert(url.into(), web_page_id);
        self
    }

    /// Makes decryption of the encrypted file `file_id` fail.
    #[must_use]
    pub fn failing_file(self, file_id: i64) -> Self {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .failing_files
            .push(file_id);
        self
    }
}

#[async_trait]
impl SecretPayloadLoader for InMemorySecretLoader {
    async fn load(&self, part: SecretPart) -> SecretLoadResult<LoadedPart> {
        let label = part.label();
        match part {
            SecretPart::DecryptFile { file, .. } => {
                let fails = self
                    .state
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .failing_files
                    .contains(&file.id);
                if fails {
                    return Err(SecretMediaError::part_failed(label, "decryption failed"));
                }
                Ok(LoadedPart::File(self.files.register_local(file.size)))
            }
            SecretPart::DecodeThumbnail { thumbnail, .. } => {
                let size = i64::try_from(thumbnail.bytes.len()).unwrap_or(i64::MAX);
                Ok(LoadedPart::Thumbnail(PhotoSize {
                    size_type: "t".to_owned(),
                    dimensions: Dimensions::new(thumbnail.width, thumbnail.height),
                    size: i32::try_from(size).unwrap_or(i32::MAX),
                    file_id: self.files.register_local(size),
                }))
            }
            SecretPart::ResolveWebPage { url } => self
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .web_pages
                .get(&url)
                .copied()
                .map(LoadedPart::WebPage)
                .ok_or_else(|| SecretMediaError::part_failed(label, "unknown web page")),
        }
    }
}
