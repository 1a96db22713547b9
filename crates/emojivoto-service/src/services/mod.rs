//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] and reaches the backends only
//! through its [`emojivoto_rpc::CallAdapter`].

pub mod context;
pub mod emoji;
pub mod error;
pub mod leaderboard;
pub mod shortcode;
pub mod vote;


// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use emoji::EmojiService;
pub use error::{ServiceError, ServiceResult};
pub use leaderboard::LeaderboardService;
pub use shortcode::ShortcodeTable;
pub use vote::VoteService;
