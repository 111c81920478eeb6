//! Content generated locally rather than received from a peer.

use crate::content::domain::{
    ChatSetTtlAction, FormattedText, MessageContent, TextContent, WebPageId,
};

/// Creates a text message, optionally with a resolved link preview.
///
/// # Examples
///
/// ```
/// use missive::content::{
///     decoder::text_content,
///     domain::{ContentKind, FormattedText, WebPageId},
/// };
///
/// let content = text_content(FormattedText::plain("hello"), WebPageId::default());
/// assert_eq!(content.kind(), ContentKind::Text);
/// ```
#[must_use]
pub const fn text_content(text: FormattedText, web_page_id: WebPageId) -> MessageContent {
    MessageContent::Text(TextContent { text, web_page_id })
}

/// Creates the notice that a contact joined.
#[must_use]
pub const fn contact_registered_content() -> MessageContent {
    MessageContent::ContactRegistered
}

/// Creates the notice that a screenshot was taken.
#[must_use]
pub const fn screenshot_taken_content() -> MessageContent {
    MessageContent::ScreenshotTaken
}

/// Creates the notice that the chat's self-destruct timer changed.
///
/// Negative timers are stored as zero.
#[must_use]
pub fn chat_set_ttl_content(ttl: i32) -> MessageContent {
    MessageContent::ChatSetTtl(ChatSetTtlAction { ttl: ttl.max(0) })
}
