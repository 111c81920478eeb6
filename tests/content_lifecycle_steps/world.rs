//! Shared world state for content lifecycle BDD scenarios.

use missive::content::{
    adapters::memory::{InMemoryFileRegistry, InMemorySecretLoader},
    config::ContentOptions,
    domain::{DialogId, Dimensions, FormattedText, MessageContent, Photo, PhotoContent, PhotoSize},
    error::SecretMediaError,
    secret_media::JoinBarrier,
};
use rstest::fixture;

/// Scenario world for content lifecycle behaviour tests.
pub struct ContentWorld {
    pub files: InMemoryFileRegistry,
    pub options: ContentOptions,
    pub payloads: Option<InMemorySecretLoader>,
    pub stored: Option<MessageContent>,
    pub current: Option<MessageContent>,
    pub content_changed: bool,
    pub needs_update: bool,
    pub replayed: Option<MessageContent>,
    pub pending_secret: Option<(MessageContent, JoinBarrier)>,
    pub secret_result: Option<Result<MessageContent, SecretMediaError>>,
}

impl ContentWorld {
    /// Creates a world with an empty file registry.
    #[must_use]
    pub fn new() -> Self {
        let files = InMemoryFileRegistry::new();
        Self {
            payloads: Some(InMemorySecretLoader::new(files.clone())),
            files,
            options: ContentOptions::default(),
            stored: None,
            current: None,
            content_changed: false,
            needs_update: false,
            replayed: None,
            pending_secret: None,
            secret_result: None,
        }
    }

    /// Builds a photo with one locally stored size.
    #[must_use]
    pub fn photo(&self, caption: &str) -> MessageContent {
        MessageContent::Photo(PhotoContent {
            photo: Photo {
                id: 1_001,
                sizes: vec![PhotoSize {
                    size_type: "x".to_owned(),
                    dimensions: Dimensions::new(1_280, 960),
                    size: 90_000,
                    file_id: self.files.register_local(90_000),
                }],
                ..Photo::default()
            },
            caption: FormattedText::plain(caption),
            ttl: 30,
        })
    }

    /// Returns the chat every scenario takes place in.
    #[must_use]
    pub const fn dialog() -> DialogId {
        DialogId::from_secret_chat(5)
    }
}

impl Default for ContentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ContentWorld {
    ContentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
