//! Foreign-key extraction and resolution.

use crate::content::{
    domain::{DialogId, Dependencies, FormattedText, MessageContent},
    ports::{DependencyResolver, FileRegistry},
};

/// Collects every user, chat, channel, web page, file and message the
/// content refers to.
///
/// # Examples
///
/// ```
/// use missive::content::domain::{ChatDeleteUserAction, MessageContent, UserId};
/// use missive::content::query::collect_dependencies;
///
/// let content = MessageContent::ChatDeleteUser(ChatDeleteUserAction {
///     user_id: UserId::new(42),
/// });
/// let dependencies = collect_dependencies(&content);
/// assert!(dependencies.user_ids.contains(&UserId::new(42)));
/// ```
#[must_use]
pub fn collect_dependencies(content: &MessageContent) -> Dependencies {
    let mut dependencies = Dependencies::new();
    match content {
        MessageContent::Text(text) => {
            add_mentions(&mut dependencies, &text.text);
            dependencies.add_web_page(text.web_page_id);
        }
        MessageContent::Contact(contact) => dependencies.add_user(contact.user_id),
        MessageContent::ChatCreate(action) => {
            for user_id in &action.participant_user_ids {
                dependencies.add_user(*user_id);
            }
        }
        MessageContent::ChatAddUsers(action) => {
            for user_id in &action.user_ids {
                dependencies.add_user(*user_id);
            }
        }
        MessageContent::ChatDeleteUser(action) => dependencies.add_user(action.user_id),
        MessageContent::ChatMigrateTo(action) => {
            dependencies.add_channel(action.channel_id);
            dependencies.add_dialog(DialogId::from_channel(action.channel_id));
        }
        MessageContent::ChannelMigrateFrom(action) => {
            dependencies.add_chat(action.chat_id);
            dependencies.add_dialog(DialogId::from_chat(action.chat_id));
        }
        MessageContent::Game(game) => {
            dependencies.add_user(game.bot_user_id);
            add_mentions(&mut dependencies, &game.text);
        }
        MessageContent::PinMessage(_)
        | MessageContent::GameScore(_)
        | MessageContent::PaymentSuccessful(_) => {
            dependencies.add_message(content.replied_message_id());
        }
        MessageContent::Invoice(invoice) => dependencies.add_message(invoice.receipt_message_id),
        MessageContent::Animation(_)
        | MessageContent::Audio(_)
        | MessageContent::Document(_)
        | MessageContent::Photo(_)
        | MessageContent::Sticker(_)
        | MessageContent::Video(_)
        | MessageContent::VoiceNote(_)
        | MessageContent::Location(_)
        | MessageContent::Venue(_)
        | MessageContent::ChatChangeTitle(_)
        | MessageContent::ChatChangePhoto(_)
        | MessageContent::ChatDeletePhoto
        | MessageContent::ChatDeleteHistory
        | MessageContent::ChatJoinedByLink
        | MessageContent::ChannelCreate(_)
        | MessageContent::ScreenshotTaken
        | MessageContent::ChatSetTtl(_)
        | MessageContent::Unsupported
        | MessageContent::Call(_)
        | MessageContent::VideoNote(_)
        | MessageContent::ContactRegistered
        | MessageContent::ExpiredPhoto
        | MessageContent::ExpiredVideo
        | MessageContent::LiveLocation(_)
        | MessageContent::CustomServiceAction(_)
        | MessageContent::WebsiteConnected(_)
        | MessageContent::PassportDataSent(_)
        | MessageContent::PassportDataReceived(_) => {
            if let Some(caption) = content.caption() {
                add_mentions(&mut dependencies, caption);
            }
        }
    }
    for file_id in content.file_ids() {
        dependencies.add_file(file_id);
    }
    dependencies
}

fn add_mentions(dependencies: &mut Dependencies, text: &FormattedText) {
    for user_id in text.mentioned_user_ids() {
        dependencies.add_user(user_id);
    }
}

/// Tells the file manager which files a message in `owner` holds.
pub fn register_file_references(
    content: &MessageContent,
    owner: DialogId,
    files: &dyn FileRegistry,
) {
    for file_id in content.file_ids() {
        files.register_reference(file_id, owner);
    }
}

impl Dependencies {
    /// Returns the references the resolver doesn't know.
    ///
    /// Files and messages are resolved by their owners and never reported.
    #[must_use]
    pub fn missing(&self, resolver: &dyn DependencyResolver) -> Self {
        Self {
            user_ids: self
                .user_ids
                .iter()
                .copied()
                .filter(|user_id| !resolver.has_user(*user_id))
                .collect(),
            chat_ids: self
                .chat_ids
                .iter()
                .copied()
                .filter(|chat_id| !resolver.has_chat(*chat_id))
                .collect(),
            channel_ids: self
                .channel_ids
                .iter()
                .copied()
                .filter(|channel_id| !resolver.has_channel(*channel_id))
                .collect(),
            dialog_ids: self
                .dialog_ids
                .iter()
                .copied()
                .filter(|dialog_id| !resolver.has_dialog(*dialog_id))
                .collect(),
            web_page_ids: self
                .web_page_ids
                .iter()
                .copied()
                .filter(|web_page_id| !resolver.has_web_page(*web_page_id))
                .collect(),
            ..Self::default()
        }
    }

    /// Returns `true` if every reference is known to the resolver.
    ///
    /// Missing references are logged at debug level.
    #[must_use]
    pub fn resolve(&self, resolver: &dyn DependencyResolver) -> bool {
        let missing = self.missing(resolver);
        if missing.is_empty() {
            return true;
        }
        tracing::debug!(
            users = missing.user_ids.len(),
            chats = missing.chat_ids.len(),
            channels = missing.channel_ids.len(),
            dialogs = missing.dialog_ids.len(),
            web_pages = missing.web_page_ids.len(),
            "content has unresolved dependencies"
        );
        false
    }
}
