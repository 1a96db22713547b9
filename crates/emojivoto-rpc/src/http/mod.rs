//! JSON-over-HTTP stubs for the backend services
//!
//! Each RPC method is a POST to `{base_url}/{service}/{method}`.

mod emoji_client;
mod endpoint;
mod voting_client;

pub use emoji_client::HttpEmojiClient;
pub use endpoint::RpcEndpoint;
pub use voting_client::HttpVotingClient;

/// Fully qualified name of the emoji catalog service
pub const EMOJI_SERVICE: &str = "emojivoto.v1.EmojiService";

/// Fully qualified name of the voting service
pub const VOTING_SERVICE: &str = "emojivoto.v1.VotingService";
