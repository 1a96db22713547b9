//! Response DTOs for the probe endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Reachability of each backend
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub emoji_service: String,
    pub voting_service: String,
}

impl ReadinessResponse {
    pub fn ready(emoji_healthy: bool, voting_healthy: bool) -> Self {
        let all_healthy = emoji_healthy && voting_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                emoji_service: if emoji_healthy { "healthy" } else { "unhealthy" }.to_string(),
                voting_service: if voting_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
