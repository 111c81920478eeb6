//! Formatted text and its entities.

use super::UserId;
use serde::{Deserialize, Serialize};

/// Kind of formatting or semantic markup an entity applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// `@username` mention.
    Mention,
    /// `#hashtag`.
    Hashtag,
    /// `$CASH` tag.
    Cashtag,
    /// `/command`.
    BotCommand,
    /// A bare URL.
    Url,
    /// An e-mail address.
    EmailAddress,
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Inline monospace.
    Code,
    /// Preformatted block.
    Pre,
    /// Preformatted block in a named language.
    PreCode(String),
    /// Text linking to a URL.
    TextUrl(String),
    /// Text mentioning a user without a username.
    MentionName(UserId),
    /// A phone number.
    PhoneNumber,
}

/// A formatting entity spanning part of a text.
///
/// Offsets and lengths are in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageEntity {
    /// What the entity marks up.
    pub kind: EntityKind,
    /// Start offset in UTF-16 code units.
    pub offset: i32,
    /// Length in UTF-16 code units.
    pub length: i32,
}

impl MessageEntity {
    /// Creates an entity.
    #[must_use]
    pub const fn new(kind: EntityKind, offset: i32, length: i32) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }

    /// Returns the offset one past the last covered code unit.
    #[must_use]
    pub const fn end(&self) -> i32 {
        self.offset.saturating_add(self.length)
    }
}

/// Text with an ordered list of formatting entities.
///
/// # Examples
///
/// ```
/// use missive::content::domain::FormattedText;
///
/// let text = FormattedText::plain("hello");
/// assert!(!text.is_empty());
/// assert!(text.entities.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormattedText {
    /// The raw text.
    pub text: String,
    /// Entities sorted by offset.
    pub entities: Vec<MessageEntity>,
}

impl FormattedText {
    /// Creates formatted text, sorting the entities by offset.
    #[must_use]
    pub fn new(text: impl Into<String>, mut entities: Vec<MessageEntity>) -> Self {
        entities.sort_by_key(|entity| (entity.offset, -entity.length));
        Self {
            text: text.into(),
            entities,
        }
    }

    /// Creates formatted text without entities.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: Vec::new(),
        }
    }

    /// Returns `true` if there is no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the text length in UTF-16 code units.
    #[must_use]
    pub fn utf16_len(&self) -> usize {
        self.text.encode_utf16().count()
    }

    /// Returns the users mentioned by name.
    pub fn mentioned_user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.entities.iter().filter_map(|entity| match entity.kind {
            EntityKind::MentionName(user_id) => Some(user_id),
            EntityKind::Mention
            | EntityKind::Hashtag
            | EntityKind::Cashtag
            | EntityKind::BotCommand
            | EntityKind::Url
            | EntityKind::EmailAddress
            | EntityKind::Bold
            | EntityKind::Italic
            | EntityKind::Code
            | EntityKind::Pre
            | EntityKind::PreCode(_)
            | EntityKind::TextUrl(_)
            | EntityKind::PhoneNumber => None,
        })
    }

    /// Strips leading and trailing whitespace and drops entities that no
    /// longer fit, shifting the rest.
    #[must_use]
    pub fn trimmed(self) -> Self {
        let leading: String = self
            .text
            .chars()
            .take_while(|c| c.is_whitespace())
            .collect();
        let trimmed = self.text.trim();
        if trimmed.len() == self.text.len() {
            return self;
        }
        let shift = utf16_offset(&leading);
        let new_len = utf16_offset(trimmed);
        let entities = self
            .entities
            .into_iter()
            .filter_map(|entity| {
                let start = entity.offset.saturating_sub(shift).max(0);
                let end = entity.end().saturating_sub(shift).min(new_len);
                (end > start).then(|| MessageEntity::new(entity.kind, start, end - start))
            })
            .collect();
        Self::new(trimmed, entities)
    }

    /// Cuts the text to at most `max_len` characters, dropping or clipping
    /// entities that extend past the cut.
    #[must_use]
    pub fn truncated(self, max_len: usize) -> Self {
        if self.text.chars().count() <= max_len {
            return self;
        }
        let text: String = self.text.chars().take(max_len).collect();
        let limit = utf16_offset(&text);
        let entities = self
            .entities
            .into_iter()
            .filter(|entity| entity.offset < limit)
            .map(|entity| {
                let end = entity.end().min(limit);
                MessageEntity::new(entity.kind, entity.offset, end - entity.offset)
            })
            .collect();
        Self { text, entities }
    }
}

fn utf16_offset(text: &str) -> i32 {
    i32::try_from(text.encode_utf16().count()).unwrap_or(i32::MAX)
}

impl From<&str> for FormattedText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}
