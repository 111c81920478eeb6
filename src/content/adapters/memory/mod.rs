//! In-memory adapters for the content ports.
//!
//! Useful for tests and for embedding the content model without a real
//! file manager.

mod files;
mod secret;

pub use files::InMemoryFileRegistry;
pub use secret::InMemorySecretLoader;
