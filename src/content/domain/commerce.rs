//! Payment, call and passport records carried by service content.

use super::{FileId, Photo};
use serde::{Deserialize, Serialize};

/// A labelled component of an invoice total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledPrice {
    /// Label shown to the payer.
    pub label: String,
    /// Amount in the smallest units of the currency.
    pub amount: i64,
}

/// An invoice sent by a bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Invoice {
    /// Product name.
    pub title: String,
    /// Product description.
    pub description: String,
    /// Product photo.
    pub photo: Photo,
    /// Deep-link parameter of the bot.
    pub start_parameter: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Price breakdown.
    pub prices: Vec<LabeledPrice>,
    /// Sum of `prices` in the smallest currency units.
    pub total_amount: i64,
    /// Message with the receipt once paid; echoed back by the server.
    pub receipt_message_id: super::MessageId,
    /// Whether this is a test invoice.
    pub is_test: bool,
    /// Whether a shipping address is required.
    pub need_shipping_address: bool,
}

impl Invoice {
    /// Compares the fields users see, ignoring the receipt echo.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.photo == other.photo
            && self.start_parameter == other.start_parameter
            && self.currency == other.currency
            && self.prices == other.prices
            && self.total_amount == other.total_amount
            && self.is_test == other.is_test
            && self.need_shipping_address == other.need_shipping_address
    }
}

/// Details of a completed payment visible only to the receiving bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotPaymentDetails {
    /// Invoice payload chosen by the bot, passed through as raw bytes.
    pub invoice_payload: Vec<u8>,
    /// Chosen shipping option.
    pub shipping_option_id: String,
    /// Charge identifier of the messaging service.
    pub service_charge_id: String,
    /// Charge identifier of the payment provider.
    pub provider_charge_id: String,
}

/// Why a call ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallDiscardReason {
    /// Unknown or not yet ended.
    #[default]
    Empty,
    /// The callee did not answer.
    Missed,
    /// The connection dropped.
    Disconnected,
    /// A party hung up.
    HungUp,
    /// The callee declined.
    Declined,
}

/// Kind of personal data exchanged through the passport flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecureValueType {
    /// Personal details.
    PersonalDetails,
    /// Passport.
    Passport,
    /// Driver licence.
    DriverLicense,
    /// Identity card.
    IdentityCard,
    /// Internal passport.
    InternalPassport,
    /// Home address.
    Address,
    /// Utility bill.
    UtilityBill,
    /// Bank statement.
    BankStatement,
    /// Rental agreement.
    RentalAgreement,
    /// Passport registration page.
    PassportRegistration,
    /// Temporary registration.
    TemporaryRegistration,
    /// Phone number.
    PhoneNumber,
    /// E-mail address.
    EmailAddress,
}

/// An encrypted file attached to a secure value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncryptedSecureFile {
    /// The encrypted file.
    pub file_id: FileId,
    /// Unix time the file was uploaded.
    pub date: i32,
    /// Hash of the decrypted file.
    pub file_hash: Vec<u8>,
    /// Encrypted decryption secret.
    pub encrypted_secret: Vec<u8>,
}

/// Encrypted payload of a secure value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncryptedSecureData {
    /// Encrypted JSON.
    pub data: Vec<u8>,
    /// Hash of the decrypted data.
    pub hash: Vec<u8>,
    /// Encrypted decryption secret.
    pub encrypted_secret: Vec<u8>,
}

/// One encrypted passport element received by a bot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncryptedSecureValue {
    /// What the element is.
    pub value_type: SecureValueType,
    /// Encrypted fields.
    pub data: EncryptedSecureData,
    /// Attached document scans.
    pub files: Vec<EncryptedSecureFile>,
    /// Plain value for phone and e-mail elements.
    pub plain_value: String,
    /// Front side scan.
    pub front_side: Option<EncryptedSecureFile>,
    /// Reverse side scan.
    pub reverse_side: Option<EncryptedSecureFile>,
    /// Selfie with the document.
    pub selfie: Option<EncryptedSecureFile>,
    /// Hash of the whole element.
    pub hash: Vec<u8>,
}

impl EncryptedSecureValue {
    /// Returns every file of the element.
    #[must_use]
    pub fn file_ids(&self) -> Vec<FileId> {
        self.files
            .iter()
            .chain(self.front_side.iter())
            .chain(self.reverse_side.iter())
            .chain(self.selfie.iter())
            .map(|file| file.file_id)
            .filter(|file_id| file_id.is_valid())
            .collect()
    }
}

/// Credentials needed to decrypt received passport elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncryptedSecureCredentials {
    /// Encrypted credentials.
    pub data: Vec<u8>,
    /// Hash of the decrypted credentials.
    pub hash: Vec<u8>,
    /// Encrypted decryption secret.
    pub encrypted_secret: Vec<u8>,
}
