//! Emoji entity - a catalog record keyed by shortcode

use serde::{Deserialize, Serialize};

/// Emoji as served by the catalog service
///
/// The shortcode is the stable key shared by the catalog and the voting service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emoji {
    pub shortcode: String,
    pub unicode: String,
}

impl Emoji {
    /// Create a new Emoji
    pub fn new(shortcode: impl Into<String>, unicode: impl Into<String>) -> Self {
        Self {
            shortcode: shortcode.into(),
            unicode: unicode.into(),
        }
    }

    /// Check if this emoji is identified by the given shortcode
    #[inline]
    pub fn has_shortcode(&self, shortcode: &str) -> bool {
        self.shortcode == shortcode
    }
}
