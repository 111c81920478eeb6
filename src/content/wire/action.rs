//! Service action records of the public network protocol.

use super::{RemoteFile, WirePhoto};
use crate::content::domain::SecureValueType;

/// Reason a call ended, as sent by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireDiscardReason {
    /// Not answered.
    Missed,
    /// Connection lost.
    Disconnect,
    /// A party hung up.
    Hangup,
    /// The callee declined.
    Busy,
}

/// Charge identifiers of a completed payment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentCharge {
    /// Identifier assigned by the messaging service.
    pub id: String,
    /// Identifier assigned by the payment provider.
    pub provider_charge_id: String,
}

/// An encrypted passport file on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireSecureFile {
    /// Where the file is stored.
    pub location: RemoteFile,
    /// Unix upload time.
    pub date: i32,
    /// Hash of the decrypted file.
    pub file_hash: Vec<u8>,
    /// Encrypted decryption secret.
    pub secret: Vec<u8>,
}

/// An encrypted passport element on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireSecureValue {
    /// Element type.
    pub value_type: SecureValueType,
    /// Encrypted data, hash and secret.
    pub data: Option<(Vec<u8>, Vec<u8>, Vec<u8>)>,
    /// Document scans.
    pub files: Vec<WireSecureFile>,
    /// Plain phone number or e-mail.
    pub plain_value: Option<String>,
    /// Front side scan.
    pub front_side: Option<WireSecureFile>,
    /// Reverse side scan.
    pub reverse_side: Option<WireSecureFile>,
    /// Selfie.
    pub selfie: Option<WireSecureFile>,
    /// Element hash.
    pub hash: Vec<u8>,
}

/// Service action attached to a public protocol message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicAction {
    /// No action.
    Empty,
    /// A basic group was created.
    ChatCreate {
        /// Initial title.
        title: String,
        /// Initial members.
        users: Vec<i64>,
    },
    /// Chat title changed.
    ChatEditTitle {
        /// New title.
        title: String,
    },
    /// Chat photo changed.
    ChatEditPhoto {
        /// New photo.
        photo: WirePhoto,
    },
    /// Chat photo removed.
    ChatDeletePhoto,
    /// Members added.
    ChatAddUser {
        /// Added members.
        users: Vec<i64>,
    },
    /// A user joined by invite link.
    ChatJoinedByLink {
        /// Creator of the link.
        inviter_id: i64,
    },
    /// A member left.
    ChatDeleteUser {
        /// The member.
        user_id: i64,
    },
    /// Upgraded to a supergroup.
    ChatMigrateTo {
        /// The supergroup.
        channel_id: i64,
    },
    /// A channel was created.
    ChannelCreate {
        /// Channel title.
        title: String,
    },
    /// Supergroup created from a basic group.
    ChannelMigrateFrom {
        /// Old group title.
        title: String,
        /// Old group.
        chat_id: i64,
    },
    /// The replied-to message was pinned.
    PinMessage,
    /// History was cleared.
    HistoryClear,
    /// A game score for the replied-to game message.
    GameScore {
        /// Server game identifier.
        game_id: i64,
        /// The score.
        score: i32,
    },
    /// A voice call.
    PhoneCall {
        /// Server call identifier.
        call_id: i64,
        /// Duration, if the call connected.
        duration: Option<i32>,
        /// Why it ended.
        reason: Option<WireDiscardReason>,
    },
    /// The user paid the replied-to invoice.
    PaymentSent {
        /// ISO 4217 currency code.
        currency: String,
        /// Total in the smallest currency units.
        total_amount: i64,
    },
    /// A payment arrived at this bot.
    PaymentSentMe {
        /// ISO 4217 currency code.
        currency: String,
        /// Total in the smallest currency units.
        total_amount: i64,
        /// Bot-defined invoice payload.
        payload: Vec<u8>,
        /// Chosen shipping option.
        shipping_option_id: Option<String>,
        /// Charge identifiers.
        charge: PaymentCharge,
    },
    /// A screenshot was taken.
    ScreenshotTaken,
    /// Free-form service message.
    CustomAction {
        /// Message text.
        message: String,
    },
    /// Logged in to a website via bot.
    BotAllowed {
        /// Website domain.
        domain: String,
    },
    /// Passport data was sent.
    SecureValuesSent {
        /// Sent element types.
        types: Vec<SecureValueType>,
    },
    /// Passport data was received by this bot.
    SecureValuesSentMe {
        /// Encrypted elements.
        values: Vec<WireSecureValue>,
        /// Encrypted credentials data, hash and secret.
        credentials: (Vec<u8>, Vec<u8>, Vec<u8>),
    },
    /// A constructor newer than this client.
    Unknown {
        /// Wire constructor identifier.
        constructor: u32,
    },
}
