//! Test fixtures and fake backends
//!
//! [`FakeBackends`] serves both backend services over HTTP with scripted
//! catalog, tallies, delays and failures, so tests can run the web server in
//! `http` mode end to end.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use emojivoto_core::{
    Emoji, FindByShortcodeRequest, FindByShortcodeResponse, ListAllResponse, ResultsResponse,
    VoteTally,
};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

/// Leaderboard row as the browser sees it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaderboardRow {
    pub shortcode: String,
    pub unicode: String,
    pub votes: i32,
}

impl LeaderboardRow {
    pub fn new(shortcode: &str, unicode: &str, votes: i32) -> Self {
        Self {
            shortcode: shortcode.to_string(),
            unicode: unicode.to_string(),
            votes,
        }
    }
}

/// Catalog entry as the browser sees it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmojiRow {
    pub shortcode: String,
    pub unicode: String,
}

/// Message the fake voting service answers failed votes with
pub const VOTE_FAILURE: &str = "tally store unavailable";

#[derive(Default)]
struct Script {
    catalog: Vec<Emoji>,
    results: Vec<VoteTally>,
    lookup_delays: HashMap<String, Duration>,
    failing_lookups: HashSet<String>,
    fail_votes: bool,
}

#[derive(Clone, Default)]
struct FakeState {
    script: Arc<Script>,
    votes: Arc<Mutex<Vec<String>>>,
    lookups: Arc<AtomicUsize>,
}

/// Builder for a fake emoji + voting backend
#[derive(Default)]
pub struct FakeBackends {
    script: Script,
}

impl FakeBackends {
    pub fn new(catalog: &[(&str, &str)]) -> Self {
        Self {
            script: Script {
                catalog: catalog
                    .iter()
                    .map(|(shortcode, unicode)| Emoji::new(*shortcode, *unicode))
                    .collect(),
                ..Script::default()
            },
        }
    }

    /// Ranked tallies returned by `Results`, in this order
    pub fn with_results(mut self, tallies: &[(&str, i32)]) -> Self {
        self.script.results = tallies
            .iter()
            .map(|(shortcode, votes)| VoteTally::new(*shortcode, *votes))
            .collect();
        self
    }

    pub fn delay_lookup(mut self, shortcode: &str, millis: u64) -> Self {
        self.script
            .lookup_delays
            .insert(shortcode.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn fail_lookup(mut self, shortcode: &str) -> Self {
        self.script.failing_lookups.insert(shortcode.to_string());
        self
    }

    pub fn fail_votes(mut self) -> Self {
        self.script.fail_votes = true;
        self
    }

    /// Serve both services on an ephemeral port
    pub async fn spawn(self) -> Result<RunningBackends> {
        let state = FakeState {
            script: Arc::new(self.script),
            ..FakeState::default()
        };

        let router = Router::new()
            .route("/emojivoto.v1.EmojiService/FindByShortcode", post(find_by_shortcode))
            .route("/emojivoto.v1.EmojiService/ListAll", post(list_all))
            .route("/emojivoto.v1.VotingService/Results", post(results))
            .route("/emojivoto.v1.VotingService/:operation", post(vote))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Ok(RunningBackends {
            url: format!("http://{addr}"),
            state,
        })
    }
}

/// Handle on a spawned [`FakeBackends`]
pub struct RunningBackends {
    pub url: String,
    state: FakeState,
}

impl RunningBackends {
    /// Vote operations received so far, in arrival order
    pub fn votes(&self) -> Vec<String> {
        self.state.votes.lock().clone()
    }

    /// Number of `FindByShortcode` calls received
    pub fn lookups(&self) -> usize {
        self.state.lookups.load(Ordering::SeqCst)
    }
}

async fn find_by_shortcode(
    State(state): State<FakeState>,
    Json(request): Json<FindByShortcodeRequest>,
) -> Response {
    state.lookups.fetch_add(1, Ordering::SeqCst);

    if let Some(delay) = state.script.lookup_delays.get(&request.shortcode) {
        tokio::time::sleep(*delay).await;
    }

    if state.script.failing_lookups.contains(&request.shortcode) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("catalog lookup failed for {}", request.shortcode),
        )
            .into_response();
    }

    let emoji = state
        .script
        .catalog
        .iter()
        .find(|e| e.has_shortcode(&request.shortcode))
        .cloned();
    Json(FindByShortcodeResponse { emoji }).into_response()
}

async fn list_all(State(state): State<FakeState>) -> Json<ListAllResponse> {
    Json(ListAllResponse {
        list: state.script.catalog.clone(),
    })
}

async fn results(State(state): State<FakeState>) -> Json<ResultsResponse> {
    Json(ResultsResponse {
        results: state.script.results.clone(),
    })
}

async fn vote(State(state): State<FakeState>, Path(operation): Path<String>) -> Response {
    state.votes.lock().push(operation);

    if state.script.fail_votes {
        return (StatusCode::INTERNAL_SERVER_ERROR, VOTE_FAILURE).into_response();
    }
    Json(json!({})).into_response()
}
