//! Identifier newtypes for the entities a message content can reference.
//!
//! Every identifier here is a weak reference: the content model stores and
//! compares them, but the lifecycle of the referenced user, chat, message,
//! web page or file belongs to another subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from its raw value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Returns `true` if the identifier refers to an existing entity.
            #[must_use]
            pub const fn is_valid(self) -> bool {
                self.0 > 0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id!(
    /// Identifier of a user account.
    ///
    /// # Examples
    ///
    /// ```
    /// use missive::content::domain::UserId;
    ///
    /// assert!(UserId::new(42).is_valid());
    /// assert!(!UserId::default().is_valid());
    /// ```
    UserId
);

integer_id!(
    /// Identifier of a basic group chat.
    ChatId
);

integer_id!(
    /// Identifier of a channel or supergroup.
    ChannelId
);

integer_id!(
    /// Identifier of a web page preview attached to a text message.
    WebPageId
);

integer_id!(
    /// Identifier of a voice call.
    CallId
);

/// Number of low bits reserved for the local part of a message identifier.
const SERVER_MESSAGE_ID_SHIFT: u32 = 20;

/// Identifier of a message within a dialog.
///
/// Server-assigned message numbers occupy the high bits; the low
/// [`SERVER_MESSAGE_ID_SHIFT`] bits are zero for messages the server knows
/// about.
///
/// # Examples
///
/// ```
/// use missive::content::domain::MessageId;
///
/// let id = MessageId::from_server(5);
/// assert!(id.is_server());
/// assert_eq!(id.server_id(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i64);

impl MessageId {
    /// Creates a message identifier from its raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Creates a message identifier from a server-side message number.
    #[must_use]
    pub const fn from_server(server_id: i32) -> Self {
        Self((server_id as i64) << SERVER_MESSAGE_ID_SHIFT)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the server-side message number.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "server message numbers are 32-bit by construction"
    )]
    pub const fn server_id(self) -> i32 {
        (self.0 >> SERVER_MESSAGE_ID_SHIFT) as i32
    }

    /// Returns `true` if the identifier refers to a message.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the identifier was assigned by the server.
    #[must_use]
    pub const fn is_server(self) -> bool {
        self.is_valid() && self.0 & ((1 << SERVER_MESSAGE_ID_SHIFT) - 1) == 0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const ZERO_CHANNEL_ID: i64 = -1_000_000_000_000;
const ZERO_SECRET_CHAT_ID: i64 = -2_000_000_000_000;

/// Kind of dialog a [`DialogId`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogType {
    /// Not a dialog.
    None,
    /// A private chat with a user.
    User,
    /// A basic group chat.
    Chat,
    /// A channel or supergroup.
    Channel,
    /// An end-to-end encrypted chat.
    SecretChat,
}

/// Identifier of the dialog that owns a message.
///
/// Users, chats, channels and secret chats share one integer space:
/// positive values are users, small negative values are chats, and the
/// two offset ranges below hold channels and secret chats.
///
/// # Examples
///
/// ```
/// use missive::content::domain::{ChannelId, DialogId, DialogType};
///
/// let dialog = DialogId::from_channel(ChannelId::new(7));
/// assert_eq!(dialog.dialog_type(), DialogType::Channel);
/// assert_eq!(dialog.channel_id(), Some(ChannelId::new(7)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogId(i64);

impl DialogId {
    /// Creates a dialog identifier from its raw encoded value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the dialog of a private chat with `user_id`.
    #[must_use]
    pub const fn from_user(user_id: UserId) -> Self {
        Self(user_id.get())
    }

    /// Returns the dialog of a basic group chat.
    #[must_use]
    pub const fn from_chat(chat_id: ChatId) -> Self {
        Self(-chat_id.get())
    }

    /// Returns the dialog of a channel.
    #[must_use]
    pub const fn from_channel(channel_id: ChannelId) -> Self {
        Self(ZERO_CHANNEL_ID - channel_id.get())
    }

    /// Returns the dialog of a secret chat.
    #[must_use]
    pub const fn from_secret_chat(secret_chat_id: i32) -> Self {
        Self(ZERO_SECRET_CHAT_ID + secret_chat_id as i64)
    }

    /// Returns the raw encoded value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the kind of dialog this identifier encodes.
    #[must_use]
    pub const fn dialog_type(self) -> DialogType {
        let value = self.0;
        if value > 0 {
            DialogType::User
        } else if value < 0 && value > ZERO_CHANNEL_ID {
            DialogType::Chat
        } else if value < ZERO_CHANNEL_ID && value > ZERO_SECRET_CHAT_ID + i32::MIN as i64 {
            if value > ZERO_SECRET_CHAT_ID + i32::MAX as i64 {
                DialogType::Channel
            } else {
                DialogType::SecretChat
            }
        } else {
            DialogType::None
        }
    }

    /// Returns `true` if the identifier encodes a dialog.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self.dialog_type(), DialogType::None)
    }

    /// Returns `true` for end-to-end encrypted dialogs.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self.dialog_type(), DialogType::SecretChat)
    }

    /// Returns the user of a private chat.
    #[must_use]
    pub const fn user_id(self) -> Option<UserId> {
        match self.dialog_type() {
            DialogType::User => Some(UserId::new(self.0)),
            DialogType::None | DialogType::Chat | DialogType::Channel | DialogType::SecretChat => {
                None
            }
        }
    }

    /// Returns the chat of a basic group.
    #[must_use]
    pub const fn chat_id(self) -> Option<ChatId> {
        match self.dialog_type() {
            DialogType::Chat => Some(ChatId::new(-self.0)),
            DialogType::None | DialogType::User | DialogType::Channel | DialogType::SecretChat => {
                None
            }
        }
    }

    /// Returns the channel of a channel dialog.
    #[must_use]
    pub const fn channel_id(self) -> Option<ChannelId> {
        match self.dialog_type() {
            DialogType::Channel => Some(ChannelId::new(ZERO_CHANNEL_ID - self.0)),
            DialogType::None | DialogType::User | DialogType::Chat | DialogType::SecretChat => {
                None
            }
        }
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle into the file manager.
///
/// `id` names the file; `remote` selects which remote location of that file
/// the holder last saw. Two handles with the same `id` are the same file.
///
/// # Examples
///
/// ```
/// use missive::content::domain::FileId;
///
/// let file = FileId::new(10, 1);
/// assert!(file.is_valid());
/// assert!(file.same_file(FileId::new(10, 2)));
/// assert!(!FileId::default().is_valid());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileId {
    /// File manager key.
    pub id: i32,
    /// Index of the remote location known to the holder.
    pub remote: i32,
}

impl FileId {
    /// Creates a file handle.
    #[must_use]
    pub const fn new(id: i32, remote: i32) -> Self {
        Self { id, remote }
    }

    /// Returns `true` if the handle refers to a file.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.id > 0
    }

    /// Returns `true` if both handles name the same file.
    #[must_use]
    pub const fn same_file(self, other: Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.id, self.remote)
    }
}
