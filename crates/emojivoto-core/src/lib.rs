//! # emojivoto-core
//!
//! Domain layer containing the emoji and tally entities, the backend wire messages,
//! and the callback-style client ports the web layer talks to.
//! This crate has zero dependencies on infrastructure (runtime, transport, web framework).

pub mod entities;
pub mod error;
pub mod messages;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Emoji, LeaderboardEntry, VoteTally};
pub use error::{RemoteOperationError, RemoteResult};
pub use messages::{
    FindByShortcodeRequest, FindByShortcodeResponse, ListAllRequest, ListAllResponse,
    ResultsRequest, ResultsResponse, VoteRequest, VoteResponse,
};
pub use traits::{Completion, EmojiClient, VotingClient};
pub use value_objects::VoteOperation;
