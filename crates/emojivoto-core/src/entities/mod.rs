//! Domain entities - core business objects

mod emoji;
mod tally;

pub use emoji::Emoji;
pub use tally::{LeaderboardEntry, VoteTally};
