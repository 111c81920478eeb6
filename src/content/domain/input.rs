//! Transient content records for outgoing and inline messages.

use super::{MessageContent, UserId};

/// Action attached to an inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineButtonAction {
    /// Opens a URL.
    Url(String),
    /// Sends callback data to the bot.
    Callback(Vec<u8>),
    /// Switches to inline mode with a query.
    SwitchInline {
        /// Query to insert.
        query: String,
        /// Whether to stay in the current chat.
        current_chat: bool,
    },
    /// Launches the attached game.
    CallbackGame,
    /// Opens the payment form.
    Buy,
}

/// A button of an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    /// Button label.
    pub text: String,
    /// What pressing it does.
    pub action: InlineButtonAction,
}

/// Inline keyboard shown under a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyMarkup {
    /// Button rows, top to bottom.
    pub rows: Vec<Vec<InlineButton>>,
}

impl ReplyMarkup {
    /// Returns `true` if there are no buttons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }
}

/// Content of a message about to be sent, with its send-time flags.
///
/// Created per send call and decomposed by the send pipeline into a
/// [`MessageContent`] plus message metadata; never persisted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct InputContent {
    /// The content to send.
    pub content: MessageContent,
    /// Suppress the link preview of a text message.
    pub disable_web_page_preview: bool,
    /// Clear the dialog draft after sending.
    pub clear_draft: bool,
    /// Self-destruct timer in seconds, zero if none.
    pub ttl: i32,
    /// Bot the message is attributed to.
    pub via_bot_user_id: UserId,
}

impl InputContent {
    /// Wraps content with default send flags.
    #[must_use]
    pub fn new(content: MessageContent) -> Self {
        Self {
            content,
            disable_web_page_preview: false,
            clear_draft: false,
            ttl: 0,
            via_bot_user_id: UserId::default(),
        }
    }

    /// Sets whether the link preview is suppressed.
    #[must_use]
    pub const fn with_disable_web_page_preview(mut self, disable: bool) -> Self {
        self.disable_web_page_preview = disable;
        self
    }

    /// Sets whether the draft is cleared.
    #[must_use]
    pub const fn with_clear_draft(mut self, clear_draft: bool) -> Self {
        self.clear_draft = clear_draft;
        self
    }

    /// Sets the self-destruct timer.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: i32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Attributes the message to a bot.
    #[must_use]
    pub const fn with_via_bot(mut self, via_bot_user_id: UserId) -> Self {
        self.via_bot_user_id = via_bot_user_id;
        self
    }
}

/// Content chosen from an inline query result.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineContent {
    /// The content to send.
    pub content: MessageContent,
    /// Keyboard to attach.
    pub reply_markup: Option<ReplyMarkup>,
    /// Suppress the link preview of a text message.
    pub disable_web_page_preview: bool,
}
