//! Foreign references a message depends on.

use super::{ChannelId, ChatId, DialogId, FileId, MessageId, UserId, WebPageId};
use std::collections::BTreeSet;

/// Every weak reference held by one or more contents.
///
/// The message store resolves these before treating a message as loaded
/// and retains them while the message exists. Invalid identifiers are never
/// recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    /// Referenced users.
    pub user_ids: BTreeSet<UserId>,
    /// Referenced basic groups.
    pub chat_ids: BTreeSet<ChatId>,
    /// Referenced channels.
    pub channel_ids: BTreeSet<ChannelId>,
    /// Referenced dialogs.
    pub dialog_ids: BTreeSet<DialogId>,
    /// Referenced web page previews.
    pub web_page_ids: BTreeSet<WebPageId>,
    /// Referenced files.
    pub file_ids: BTreeSet<FileId>,
    /// Referenced messages in the owning dialog.
    pub message_ids: BTreeSet<MessageId>,
}

impl Dependencies {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a user.
    pub fn add_user(&mut self, user_id: UserId) {
        if user_id.is_valid() {
            self.user_ids.insert(user_id);
        }
    }

    /// Records a basic group.
    pub fn add_chat(&mut self, chat_id: ChatId) {
        if chat_id.is_valid() {
            self.chat_ids.insert(chat_id);
        }
    }

    /// Records a channel.
    pub fn add_channel(&mut self, channel_id: ChannelId) {
        if channel_id.is_valid() {
            self.channel_ids.insert(channel_id);
        }
    }

    /// Records a dialog and, for private chats, its user.
    pub fn add_dialog(&mut self, dialog_id: DialogId) {
        if !dialog_id.is_valid() {
            return;
        }
        self.dialog_ids.insert(dialog_id);
        if let Some(user_id) = dialog_id.user_id() {
            self.add_user(user_id);
        }
    }

    /// Records a web page preview.
    pub fn add_web_page(&mut self, web_page_id: WebPageId) {
        if web_page_id.is_valid() {
            self.web_page_ids.insert(web_page_id);
        }
    }

    /// Records a file.
    pub fn add_file(&mut self, file_id: FileId) {
        if file_id.is_valid() {
            self.file_ids.insert(file_id);
        }
    }

    /// Records a message.
    pub fn add_message(&mut self, message_id: MessageId) {
        if message_id.is_valid() {
            self.message_ids.insert(message_id);
        }
    }

    /// Adds everything recorded in `other`.
    pub fn extend(&mut self, other: Self) {
        self.user_ids.extend(other.user_ids);
        self.chat_ids.extend(other.chat_ids);
        self.channel_ids.extend(other.channel_ids);
        self.dialog_ids.extend(other.dialog_ids);
        self.web_page_ids.extend(other.web_page_ids);
        self.file_ids.extend(other.file_ids);
        self.message_ids.extend(other.message_ids);
    }

    /// Returns `true` if nothing is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user_ids.is_empty()
            && self.chat_ids.is_empty()
            && self.channel_ids.is_empty()
            && self.dialog_ids.is_empty()
            && self.web_page_ids.is_empty()
            && self.file_ids.is_empty()
            && self.message_ids.is_empty()
    }
}
