//! Decoding of public protocol service actions.

use super::{DecodeContext, photo_from_wire};
use crate::content::{
    domain::{
        BotPaymentDetails, CallAction, CallDiscardReason, CallId, ChannelId,
        ChannelMigrateFromAction, ChatAddUsersAction, ChatCreateAction, ChatDeleteUserAction,
        ChatId, ChatMigrateToAction, ChatPhotoAction, CustomServiceAction, DialogId,
        EncryptedSecureCredentials, EncryptedSecureData, EncryptedSecureFile,
        EncryptedSecureValue, FileId, GameScoreAction, MessageContent, MessageId,
        PassportDataReceivedAction, PassportDataSentAction, PaymentSuccessfulAction,
        PinMessageAction, TitleAction, UserId, WebsiteConnectedAction,
    },
    wire::{PublicAction, WireDiscardReason, WireSecureFile, WireSecureValue},
};

/// Builds content from a public protocol service action.
///
/// `reply_to_message_id` is the message the action replies to; pins,
/// game scores and payments refer to it. Actions that need a reference
/// they don't have, or whose references are invalid, produce
/// [`MessageContent::Unsupported`] with a warning.
#[must_use]
pub fn decode_action(
    action: PublicAction,
    owner: DialogId,
    reply_to_message_id: MessageId,
    ctx: &DecodeContext<'_>,
) -> MessageContent {
    match action {
        PublicAction::Empty => MessageContent::Unsupported,
        PublicAction::ChatCreate { title, users } => MessageContent::ChatCreate(ChatCreateAction {
            title,
            participant_user_ids: valid_users(users),
        }),
        PublicAction::ChatEditTitle { title } => {
            MessageContent::ChatChangeTitle(TitleAction { title })
        }
        PublicAction::ChatEditPhoto { photo } => {
            let chat_photo = photo_from_wire(&photo, owner, ctx);
            if chat_photo.is_empty() {
                return invalid_reference("chat photo without sizes");
            }
            MessageContent::ChatChangePhoto(ChatPhotoAction { photo: chat_photo })
        }
        PublicAction::ChatDeletePhoto => MessageContent::ChatDeletePhoto,
        PublicAction::ChatAddUser { users } => {
            let user_ids = valid_users(users);
            if user_ids.is_empty() {
                return invalid_reference("no valid users added");
            }
            MessageContent::ChatAddUsers(ChatAddUsersAction { user_ids })
        }
        PublicAction::ChatJoinedByLink { .. } => MessageContent::ChatJoinedByLink,
        PublicAction::ChatDeleteUser { user_id: raw_id } => {
            let user_id = UserId::new(raw_id);
            if !user_id.is_valid() {
                return invalid_reference("deleted user is invalid");
            }
            MessageContent::ChatDeleteUser(ChatDeleteUserAction { user_id })
        }
        PublicAction::ChatMigrateTo { channel_id: raw_id } => {
            let channel_id = ChannelId::new(raw_id);
            if !channel_id.is_valid() {
                return invalid_reference("migration target is invalid");
            }
            MessageContent::ChatMigrateTo(ChatMigrateToAction { channel_id })
        }
        PublicAction::ChannelCreate { title } => MessageContent::ChannelCreate(TitleAction { title }),
        PublicAction::ChannelMigrateFrom {
            title,
            chat_id: raw_id,
        } => {
            let chat_id = ChatId::new(raw_id);
            if !chat_id.is_valid() {
                return invalid_reference("migration source is invalid");
            }
            MessageContent::ChannelMigrateFrom(ChannelMigrateFromAction { title, chat_id })
        }
        PublicAction::PinMessage => {
            if !reply_to_message_id.is_valid() {
                return invalid_reference("pin without pinned message");
            }
            MessageContent::PinMessage(PinMessageAction {
                message_id: reply_to_message_id,
            })
        }
        PublicAction::HistoryClear => MessageContent::ChatDeleteHistory,
        PublicAction::GameScore { game_id, score } => {
            MessageContent::GameScore(GameScoreAction {
                game_message_id: replied_or_warn(reply_to_message_id, "game score"),
                game_id,
                score,
            })
        }
        PublicAction::PhoneCall {
            call_id,
            duration,
            reason,
        } => MessageContent::Call(CallAction {
            call_id: CallId::new(call_id),
            duration: duration.unwrap_or(0).max(0),
            discard_reason: reason.map_or(CallDiscardReason::Empty, discard_reason),
        }),
        PublicAction::PaymentSent {
            currency,
            total_amount,
        } => MessageContent::PaymentSuccessful(PaymentSuccessfulAction {
            invoice_message_id: replied_or_warn(reply_to_message_id, "payment"),
            currency,
            total_amount,
            bot_details: None,
        }),
        PublicAction::PaymentSentMe {
            currency,
            total_amount,
            payload,
            shipping_option_id,
            charge,
        } => MessageContent::PaymentSuccessful(PaymentSuccessfulAction {
            invoice_message_id: reply_to_message_id,
            currency,
            total_amount,
            bot_details: Some(BotPaymentDetails {
                invoice_payload: payload,
                shipping_option_id: shipping_option_id.unwrap_or_default(),
                service_charge_id: charge.id,
                provider_charge_id: charge.provider_charge_id,
            }),
        }),
        PublicAction::ScreenshotTaken => MessageContent::ScreenshotTaken,
        PublicAction::CustomAction { message } => {
            MessageContent::CustomServiceAction(CustomServiceAction { message })
        }
        PublicAction::BotAllowed { domain } => {
            MessageContent::WebsiteConnected(WebsiteConnectedAction {
                domain_name: domain,
            })
        }
        PublicAction::SecureValuesSent { types } => {
            MessageContent::PassportDataSent(PassportDataSentAction { types })
        }
        PublicAction::SecureValuesSentMe {
            values,
            credentials,
        } => {
            let (data, hash, encrypted_secret) = credentials;
            MessageContent::PassportDataReceived(PassportDataReceivedAction {
                values: values
                    .into_iter()
                    .map(|value| secure_value(value, owner, ctx))
                    .collect(),
                credentials: EncryptedSecureCredentials {
                    data,
                    hash,
                    encrypted_secret,
                },
            })
        }
        PublicAction::Unknown { constructor } => {
            tracing::debug!(constructor, "unknown public action");
            MessageContent::Unsupported
        }
    }
}

fn valid_users(users: Vec<i64>) -> Vec<UserId> {
    let total = users.len();
    let user_ids: Vec<UserId> = users
        .into_iter()
        .map(UserId::new)
        .filter(|user_id| user_id.is_valid())
        .collect();
    if user_ids.len() != total {
        tracing::warn!(
            dropped = total.saturating_sub(user_ids.len()),
            "dropped invalid users from action"
        );
    }
    user_ids
}

fn replied_or_warn(reply_to_message_id: MessageId, action: &'static str) -> MessageId {
    if !reply_to_message_id.is_valid() {
        tracing::warn!(action, "action has no replied-to message");
    }
    reply_to_message_id
}

const fn discard_reason(reason: WireDiscardReason) -> CallDiscardReason {
    match reason {
        WireDiscardReason::Missed => CallDiscardReason::Missed,
        WireDiscardReason::Disconnect => CallDiscardReason::Disconnected,
        WireDiscardReason::Hangup => CallDiscardReason::HungUp,
        WireDiscardReason::Busy => CallDiscardReason::Declined,
    }
}

fn secure_file(
    file: WireSecureFile,
    owner: DialogId,
    ctx: &DecodeContext<'_>,
) -> EncryptedSecureFile {
    let file_id = ctx
        .files
        .register_remote(&file.location, owner)
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "passport file can't be registered");
            FileId::default()
        });
    EncryptedSecureFile {
        file_id,
        date: file.date,
        file_hash: file.file_hash,
        encrypted_secret: file.secret,
    }
}

fn secure_value(
    value: WireSecureValue,
    owner: DialogId,
    ctx: &DecodeContext<'_>,
) -> EncryptedSecureValue {
    let data = value
        .data
        .map(|(data, hash, encrypted_secret)| EncryptedSecureData {
            data,
            hash,
            encrypted_secret,
        })
        .unwrap_or_default();
    EncryptedSecureValue {
        value_type: value.value_type,
        data,
        files: value
            .files
            .into_iter()
            .map(|file| secure_file(file, owner, ctx))
            .collect(),
        plain_value: value.plain_value.unwrap_or_default(),
        front_side: value.front_side.map(|file| secure_file(file, owner, ctx)),
        reverse_side: value.reverse_side.map(|file| secure_file(file, owner, ctx)),
        selfie: value.selfie.map(|file| secure_file(file, owner, ctx)),
        hash: value.hash,
    }
}

fn invalid_reference(reason: &'static str) -> MessageContent {
    tracing::warn!(reason, "service action degraded to unsupported");
    MessageContent::Unsupported
}
