//! Message content: the typed payload of every chat message.
//!
//! This module models the closed set of content kinds a message can carry
//! and everything done with them: construction from the public and secret
//! chat protocols, local events and send requests; persistence to the
//! write-ahead log; reconciliation with fresh server copies; projection to
//! the public client API; and coordination of secret media downloads.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure content types ([`domain::MessageContent`], [`domain::ContentKind`], media records)
//! - **Wire**: Protocol records the decoders consume ([`wire::PublicMedia`], [`wire::SecretMedia`], [`wire::PublicAction`])
//! - **Ports**: Collaborator interfaces ([`ports::FileRegistry`], [`ports::SecretPayloadLoader`], [`ports::DependencyResolver`])
//! - **Adapters**: In-memory implementations ([`adapters::memory::InMemoryFileRegistry`], [`adapters::memory::InMemorySecretLoader`])
//! - **Operations**: [`decoder`], [`codec`], [`merge`], [`query`] and [`secret_media`]
//!
//! # Example
//!
//! ```
//! use missive::content::{
//!     adapters::memory::InMemoryFileRegistry,
//!     codec::{parse, store},
//!     config::ContentOptions,
//!     decoder::{DecodeContext, decode_public_media},
//!     domain::{DialogId, FormattedText, UserId},
//!     wire::PublicMedia,
//! };
//!
//! let files = InMemoryFileRegistry::new();
//! let options = ContentOptions::default();
//! let ctx = DecodeContext::new(&files, &options);
//! let mut ttl = 0;
//! let content = decode_public_media(
//!     FormattedText::plain("Hello, world!"),
//!     PublicMedia::Empty,
//!     DialogId::from_user(UserId::new(42)),
//!     false,
//!     UserId::default(),
//!     &mut ttl,
//!     &ctx,
//! );
//!
//! let mut log = Vec::new();
//! store(&content, &mut log).expect("record stores");
//! assert_eq!(parse(log.as_slice()).expect("record parses"), content);
//! assert_eq!(content.search_text(), "Hello, world!");
//! ```

pub mod adapters;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod domain;
pub mod error;
pub mod merge;
pub mod ports;
pub mod query;
pub mod secret_media;
pub mod wire;

#[cfg(test)]
mod tests;
