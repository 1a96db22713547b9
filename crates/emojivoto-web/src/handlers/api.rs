//! JSON API handlers
//!
//! Endpoints the browser client calls for the catalog, the leaderboard and voting.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use emojivoto_core::{Emoji, LeaderboardEntry};
use emojivoto_service::{EmojiService, LeaderboardService, ServiceError, VoteService};
use serde::Deserialize;
use tracing::error;

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Query string of the vote endpoint
#[derive(Debug, Default, Deserialize)]
pub struct VoteQuery {
    pub choice: Option<String>,
}

/// Ranked leaderboard
///
/// GET /api/leaderboard
pub async fn leaderboard(State(state): State<AppState>) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let service = LeaderboardService::new(state.service_context());
    Ok(Json(service.leaderboard().await?))
}

/// Whole emoji catalog
///
/// GET /api/list
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Emoji>>> {
    let service = EmojiService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// Register one vote
///
/// GET /api/vote?choice={shortcode}
pub async fn vote(
    State(state): State<AppState>,
    query: Result<Query<VoteQuery>, QueryRejection>,
) -> ApiResult<StatusCode> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    let service = VoteService::new(state.service_context());

    match service.register_vote(query.choice.as_deref()).await {
        Ok(()) => Ok(StatusCode::OK),
        // Answered as a no-op; the vote is not registered.
        Err(e @ ServiceError::UnsupportedOperation { .. }) => {
            error!(error = %e, "Vote dropped");
            Ok(StatusCode::OK)
        }
        Err(e) => Err(e.into()),
    }
}
