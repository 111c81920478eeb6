//! Wire records consumed by the decoders.
//!
//! These mirror the shapes delivered by the network layers after their own
//! framing has been removed. They are input only: nothing in this crate
//! writes them back to the network.

mod action;
mod public;
mod secret;

pub use action::{PaymentCharge, PublicAction, WireDiscardReason, WireSecureFile, WireSecureValue};
pub use public::{
    BotInlineMessage, DocumentAttribute, GeoPoint, PublicMedia, RemoteFile, WireDocument,
    WireGame, WireInlineMessage, WireInvoice, WirePhoto, WirePhotoSize,
};
pub use secret::{EncryptedFile, SecretEntity, SecretKey, SecretMedia, SecretThumbnail};
