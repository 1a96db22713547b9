//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use emojivoto_common::{AppConfig, AppError, AppResult, BackendConfig, BackendMode};
use emojivoto_core::{EmojiClient, VotingClient};
use emojivoto_rpc::{
    CallAdapter, HttpEmojiClient, HttpVotingClient, InMemoryEmojiClient, InMemoryVotingClient,
};
use emojivoto_service::{ServiceContextBuilder, ServiceError, ShortcodeTable};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Catalog and voting clients the services call
pub type Backends = (Arc<dyn EmojiClient>, Arc<dyn VotingClient>);

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> AppResult<Router> {
    let config = state.config();
    let router = apply_middleware_with_config(
        create_router(&config.assets),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let router = router.merge(apply_middleware(health_routes()));

    Ok(router.with_state(state))
}

/// Connect the backend clients selected by `BACKEND_MODE`
pub fn create_backends(config: &BackendConfig) -> AppResult<Backends> {
    match config.mode {
        BackendMode::Http => {
            let emoji_url = config
                .emoji_url
                .as_deref()
                .ok_or_else(|| AppError::config("EMOJISVC_HOST is required in http mode"))?;
            let voting_url = config
                .voting_url
                .as_deref()
                .ok_or_else(|| AppError::config("VOTINGSVC_HOST is required in http mode"))?;

            let http = reqwest::Client::builder()
                .build()
                .map_err(AppError::internal)?;

            info!(emoji_url, voting_url, "Using HTTP backends");
            let emoji: Arc<dyn EmojiClient> = Arc::new(HttpEmojiClient::new(http.clone(), emoji_url));
            let voting: Arc<dyn VotingClient> = Arc::new(HttpVotingClient::new(http, voting_url));
            Ok((emoji, voting))
        }
        BackendMode::Memory => {
            info!("Using in-memory backends");
            let emoji: Arc<dyn EmojiClient> = Arc::new(InMemoryEmojiClient::with_default_catalog());
            let voting: Arc<dyn VotingClient> =
                Arc::new(InMemoryVotingClient::with_default_operations());
            Ok((emoji, voting))
        }
    }
}

/// Initialize all dependencies over the given backends and create AppState
pub fn create_app_state_with(config: AppConfig, backends: Backends) -> AppResult<AppState> {
    let (emoji_client, voting_client) = backends;

    let shortcodes = ShortcodeTable::load(
        &config.voting.shortcode_table_path,
        voting_client.as_ref(),
        config.voting.unsupported_operation,
    )
    .map_err(bootstrap_error)?;

    let service_context = ServiceContextBuilder::new()
        .emoji_client(emoji_client)
        .voting_client(voting_client)
        .shortcodes(shortcodes)
        .adapter(CallAdapter::from(&config.backends))
        .build()
        .map_err(bootstrap_error)?;

    Ok(AppState::new(service_context, config))
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let backends = create_backends(&config.backends)?;
    create_app_state_with(config, backends)
}

fn bootstrap_error(err: ServiceError) -> AppError {
    match err {
        ServiceError::Config(msg) => AppError::Config(msg),
        other => AppError::internal(other),
    }
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .web
        .address()
        .parse()
        .map_err(|e| AppError::config(format!("invalid bind address {}: {e}", config.web.address())))?;

    let state = create_app_state(config)?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
