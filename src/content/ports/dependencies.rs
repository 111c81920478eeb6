//! Dependency resolution port.

use crate::content::domain::{ChannelId, ChatId, DialogId, UserId, WebPageId};

/// Port answering whether referenced entities are already known locally.
///
/// The message store consults it before treating a message as loaded.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyResolver: Send + Sync {
    /// Returns `true` if the user is known.
    fn has_user(&self, user_id: UserId) -> bool;

    /// Returns `true` if the basic group is known.
    fn has_chat(&self, chat_id: ChatId) -> bool;

    /// Returns `true` if the channel is known.
    fn has_channel(&self, channel_id: ChannelId) -> bool;

    /// Returns `true` if the dialog is known.
    fn has_dialog(&self, dialog_id: DialogId) -> bool;

    /// Returns `true` if the web page preview is known.
    fn has_web_page(&self, web_page_id: WebPageId) -> bool;
}
