//! Data transfer objects for API responses
//!
//! Catalog records and leaderboard rows are served as the core entities
//! (`Emoji`, `LeaderboardEntry`); only the probe responses live here.

pub mod responses;

pub use responses::{HealthChecks, HealthResponse, ReadinessResponse};
