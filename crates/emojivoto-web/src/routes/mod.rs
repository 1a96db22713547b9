//! Route definitions
//!
//! JSON API under /api, the HTML shell and its static assets at the root.

use axum::{routing::get, Router};
use emojivoto_common::AssetConfig;
use tower_http::services::ServeFile;

use crate::handlers::{api, health, pages};
use crate::state::AppState;

/// Create the main router (excluding health for separate middleware handling)
pub fn create_router(assets: &AssetConfig) -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(page_routes(assets))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// JSON API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(api::leaderboard))
        .route("/list", get(api::list))
        .route("/vote", get(api::vote))
}

/// HTML shell and static assets
fn page_routes(assets: &AssetConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/leaderboard", get(pages::index))
        .route_service(pages::BUNDLE_ROUTE, ServeFile::new(&assets.index_bundle))
        .route_service("/img/favicon.ico", ServeFile::new(&assets.favicon))
}
