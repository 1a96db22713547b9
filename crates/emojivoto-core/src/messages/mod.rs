//! Wire messages exchanged with the catalog and voting services
//!
//! Field names follow the backend contract (`Shortcode`, `Emoji`, `list`, `results`).

use serde::{Deserialize, Serialize};

use crate::entities::{Emoji, VoteTally};

// ============================================================================
// Emoji catalog
// ============================================================================

/// FindByShortcode input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindByShortcodeRequest {
    #[serde(rename = "Shortcode")]
    pub shortcode: String,
}

impl FindByShortcodeRequest {
    pub fn new(shortcode: impl Into<String>) -> Self {
        Self {
            shortcode: shortcode.into(),
        }
    }
}

/// FindByShortcode output; `emoji` is `None` when the catalog has no match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindByShortcodeResponse {
    #[serde(rename = "Emoji", default)]
    pub emoji: Option<Emoji>,
}

/// ListAll input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAllRequest {}

/// ListAll output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAllResponse {
    #[serde(default)]
    pub list: Vec<Emoji>,
}

// ============================================================================
// Voting
// ============================================================================

/// Results input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsRequest {}

/// Results output, ranked by the voting service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub results: Vec<VoteTally>,
}

/// Input of every vote operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {}

/// Output of every vote operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResponse {}
