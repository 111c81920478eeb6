//! Secret media payload port.
//!
//! Decrypting and decoding secret chat attachments is done by a capability
//! outside this crate. The content model describes what it needs as
//! [`SecretPart`]s and receives [`LoadedPart`]s back.

use crate::content::{
    error::SecretMediaError,
    secret_media::{LoadedPart, SecretPart},
};
use async_trait::async_trait;

/// Result type for secret payload loads.
pub type SecretLoadResult<T> = Result<T, SecretMediaError>;

/// Port for fetching and decrypting secret chat attachments.
///
/// # Implementation Notes
///
/// Implementations own retries and timeouts. A returned error is final for
/// the part and fails the whole pending content.
#[async_trait]
pub trait SecretPayloadLoader: Send + Sync {
    /// Loads one part of a secret chat attachment.
    ///
    /// # Errors
    ///
    /// Returns `SecretMediaError` if the part cannot be fetched or
    /// decrypted.
    async fn load(&self, part: SecretPart) -> SecretLoadResult<LoadedPart>;
}
