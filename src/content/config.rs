//! Tunable limits for decoding, validation and merging.

/// Limits applied when content is created or compared.
///
/// # Examples
///
/// ```
/// use missive::content::config::ContentOptions;
///
/// let options = ContentOptions::default();
/// assert_eq!(options.max_caption_length, 1024);
///
/// let strict = ContentOptions::strict();
/// assert!(strict.max_text_length < options.max_text_length);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOptions {
    /// Maximum message text length in characters.
    pub max_text_length: usize,
    /// Maximum caption length in characters; longer captions are truncated.
    pub max_caption_length: usize,
    /// Coordinate difference in degrees below which two locations are equal.
    pub location_epsilon: f64,
    /// Shortest allowed live location period in seconds.
    pub min_live_location_period: i32,
    /// Longest allowed live location period in seconds.
    pub max_live_location_period: i32,
    /// Largest self-destruct timer, in seconds, that makes media secret.
    pub max_secret_ttl: i32,
    /// Largest encrypted file accepted from a secret chat, in bytes.
    pub max_secret_file_size: i64,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            max_text_length: 4096,
            max_caption_length: 1024,
            location_epsilon: 1e-6,
            min_live_location_period: 60,
            max_live_location_period: 86_400,
            max_secret_ttl: 60,
            max_secret_file_size: 1_500 * 1024 * 1024,
        }
    }
}

impl ContentOptions {
    /// Creates options with generous limits, for replaying old data.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_text_length: 65_536,
            max_caption_length: 4096,
            ..Self::default()
        }
    }

    /// Creates options with reduced limits.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_text_length: 1024,
            max_caption_length: 200,
            max_secret_file_size: 50 * 1024 * 1024,
            ..Self::default()
        }
    }
}
