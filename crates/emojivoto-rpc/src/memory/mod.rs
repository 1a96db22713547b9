//! In-process backends
//!
//! Used when `BACKEND_MODE=memory` and by tests. Both settle their completions
//! inline, before returning.

mod emoji_catalog;
mod voting_tally;

pub use emoji_catalog::InMemoryEmojiClient;
pub use voting_tally::InMemoryVotingClient;
