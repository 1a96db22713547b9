//! Vote tallies and the leaderboard rows built from them

use serde::{Deserialize, Serialize};

use super::Emoji;

/// Vote count for one shortcode, as ranked by the voting service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoteTally {
    pub shortcode: String,
    pub votes: i32,
}

impl VoteTally {
    /// Create a new VoteTally
    pub fn new(shortcode: impl Into<String>, votes: i32) -> Self {
        Self {
            shortcode: shortcode.into(),
            votes,
        }
    }
}

/// Leaderboard row: catalog metadata joined with a tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub shortcode: String,
    pub unicode: String,
    pub votes: i32,
}

impl LeaderboardEntry {
    /// Join an emoji with its tally
    ///
    /// The shortcode is taken from the catalog record.
    pub fn join(emoji: Emoji, tally: &VoteTally) -> Self {
        Self {
            shortcode: emoji.shortcode,
            unicode: emoji.unicode,
            votes: tally.votes,
        }
    }
}
