//! # emojivoto-service
//!
//! Application layer: vote dispatch, leaderboard aggregation, catalog listing,
//! and the shortcode-to-operation table they rely on.

pub mod dto;
pub mod services;

pub use dto::{HealthChecks, HealthResponse, ReadinessResponse};
pub use services::{
    EmojiService, LeaderboardService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, ShortcodeTable, VoteService,
};
