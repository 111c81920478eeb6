//! Port trait definitions for the content subsystem.
//!
//! Ports define the abstract interfaces the content model requires from
//! its collaborators: the file manager, the secret payload capability and
//! the entity caches used for dependency resolution.

pub mod dependencies;
pub mod files;
pub mod secret;

pub use dependencies::DependencyResolver;
pub use files::{FileRegistry, FileResult, FileView};
pub use secret::{SecretLoadResult, SecretPayloadLoader};
