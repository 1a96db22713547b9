//! API Integration Tests
//!
//! Every test spawns its own server on an ephemeral port, over either the
//! in-memory backends or a fake HTTP backend. No external services needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_body, assert_json, assert_status, EmojiRow, FakeBackends, LeaderboardRow, TestConfig,
    TestServer, BUNDLE_CONTENTS, FAVICON_CONTENTS, VOTE_FAILURE,
};
use reqwest::StatusCode;

const FRUIT: &[(&str, &str)] = &[(":a:", "🍎"), (":b:", "🍌"), (":c:", "🍒")];

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let backends = FakeBackends::new(FRUIT).spawn().await.unwrap();
    let server = TestServer::start_with_fake(&backends).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["emoji_service"], "healthy");
    assert_eq!(body["checks"]["voting_service"], "healthy");
}

#[tokio::test]
async fn test_health_ready_with_unreachable_backends() {
    let config = TestConfig::http("http://127.0.0.1:1", "http://127.0.0.1:1")
        .unwrap()
        .build()
        .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["status"], "not_ready");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/list").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_list_returns_catalog() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/list").await.unwrap();
    let list: Vec<EmojiRow> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(list.len(), emojivoto_rpc::DEFAULT_CATALOG.len());
    assert!(list
        .iter()
        .any(|e| e.shortcode == ":doughnut:" && e.unicode == "🍩"));
}

#[tokio::test]
async fn test_list_empty_catalog_is_empty_array() {
    let backends = FakeBackends::new(&[]).spawn().await.unwrap();
    let server = TestServer::start_with_fake(&backends).await.unwrap();

    let response = server.get("/api/list").await.unwrap();
    let body = assert_body(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_list_backend_down_is_server_error() {
    let config = TestConfig::http("http://127.0.0.1:1", "http://127.0.0.1:1")
        .unwrap()
        .build()
        .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let response = server.get("/api/list").await.unwrap();
    let message: String = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(!message.is_empty());
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_shows_on_leaderboard() {
    let server = TestServer::start().await.unwrap();

    for choice in [":doughnut:", ":doughnut:", ":joy:"] {
        let response = server.vote(choice).await.unwrap();
        let body = assert_body(response, StatusCode::OK).await.unwrap();
        assert!(body.is_empty());
    }

    let response = server.get("/api/leaderboard").await.unwrap();
    let board: Vec<LeaderboardRow> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        board,
        vec![
            LeaderboardRow::new(":doughnut:", "🍩", 2),
            LeaderboardRow::new(":joy:", "😂", 1),
        ]
    );
}

#[tokio::test]
async fn test_vote_without_choice_is_bad_request() {
    let backends = FakeBackends::new(FRUIT).spawn().await.unwrap();
    let server = TestServer::start_with_fake(&backends).await.unwrap();

    for path in ["/api/vote", "/api/vote?choice=", "/api/vote?choice=:a:&choice=:b:"] {
        let response = server.get(path).await.unwrap();
        let body = assert_body(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert!(body.is_empty());
    }

    assert_eq!(backends.lookups(), 0);
    assert!(backends.votes().is_empty());
}

#[tokio::test]
async fn test_vote_unknown_choice_is_bad_request() {
    let backends = FakeBackends::new(&[(":joy:", "😂")]).spawn().await.unwrap();
    let server = TestServer::start_with_fake(&backends).await.unwrap();

    for choice in [":not-an-emoji:", ":doughnut:"] {
        let response = server.vote(choice).await.unwrap();
        let body = assert_body(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert!(body.is_empty());
    }

    assert!(backends.votes().is_empty());
}

#[tokio::test]
async fn test_vote_dispatches_mapped_operation() {
    let backends = FakeBackends::new(&[(":joy:", "😂"), (":100:", "💯")])
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start_with_fake(&backends).await.unwrap();

    assert_status(server.vote(":100:").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_status(server.vote(":joy:").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    assert_eq!(backends.votes(), vec!["Vote100", "VoteJoy"]);
}

#[tokio::test]
async fn test_vote_without_operation_is_silent_no_op() {
    let backends = FakeBackends::new(&[(":crossed_swords:", "⚔️")])
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start_with_fake(&backends).await.unwrap();

    let response = server.vote(":crossed_swords:").await.unwrap();
    let body = assert_body(response, StatusCode::OK).await.unwrap();

    assert!(body.is_empty());
    assert!(backends.votes().is_empty());
}

#[tokio::test]
async fn test_vote_failure_returns_message() {
    let backends = FakeBackends::new(&[(":joy:", "😂")])
        .fail_votes()
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start_with_fake(&backends).await.unwrap();

    let response = server.vote(":joy:").await.unwrap();
    let message: String = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(message, VOTE_FAILURE);
    assert_eq!(backends.votes(), vec!["VoteJoy"]);
}

// ============================================================================
// Leaderboard Tests
// ============================================================================

#[tokio::test]
async fn test_leaderboard_keeps_ranking_order() {
    let backends = FakeBackends::new(FRUIT)
        .with_results(&[(":b:", 5), (":a:", 3)])
        .delay_lookup(":b:", 100)
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start_with_fake(&backends).await.unwrap();

    let response = server.get("/api/leaderboard").await.unwrap();
    let board: Vec<LeaderboardRow> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        board,
        vec![
            LeaderboardRow::new(":b:", "🍌", 5),
            LeaderboardRow::new(":a:", "🍎", 3),
        ]
    );
}

#[tokio::test]
async fn test_leaderboard_fails_on_any_lookup_failure() {
    let backends = FakeBackends::new(FRUIT)
        .with_results(&[(":a:", 3), (":b:", 2), (":c:", 1)])
        .fail_lookup(":b:")
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start_with_fake(&backends).await.unwrap();

    let response = server.get("/api/leaderboard").await.unwrap();
    let message: String = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(message, "catalog lookup failed for :b:");
    assert_eq!(backends.lookups(), 3);
}

#[tokio::test]
async fn test_leaderboard_fails_on_tally_without_emoji() {
    let backends = FakeBackends::new(&[(":a:", "🍎")])
        .with_results(&[(":a:", 3), (":gone:", 1)])
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start_with_fake(&backends).await.unwrap();

    let response = server.get("/api/leaderboard").await.unwrap();
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_leaderboard_empty() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/leaderboard").await.unwrap();
    let board: Vec<LeaderboardRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(board.is_empty());
}

// ============================================================================
// Page Tests
// ============================================================================

#[tokio::test]
async fn test_html_shell_routes() {
    let server = TestServer::start().await.unwrap();

    for path in ["/", "/leaderboard"] {
        let response = server.get(path).await.unwrap();
        let html = assert_body(response, StatusCode::OK).await.unwrap();

        assert!(html.contains("<title>Emoji Vote</title>"));
        assert!(html.contains(r#"<link rel="icon" href="/img/favicon.ico">"#));
        assert!(html.contains(r#"src="/js""#));
    }
}

#[tokio::test]
async fn test_html_shell_uses_dev_server() {
    let config = TestConfig::memory()
        .unwrap()
        .set("WEBPACK_DEV_SERVER", "http://localhost:8083")
        .build()
        .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let response = server.get("/").await.unwrap();
    let html = assert_body(response, StatusCode::OK).await.unwrap();
    assert!(html.contains(r#"src="http://localhost:8083/dist/index_bundle.js""#));
}

#[tokio::test]
async fn test_static_assets() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/js").await.unwrap();
    assert_eq!(assert_body(response, StatusCode::OK).await.unwrap(), BUNDLE_CONTENTS);

    let response = server.get("/img/favicon.ico").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.bytes().await.unwrap().as_ref(), FAVICON_CONTENTS);
}

// ============================================================================
// Startup Tests
// ============================================================================

#[tokio::test]
async fn test_strict_table_refuses_to_start() {
    let config = TestConfig::memory()
        .unwrap()
        .table(r#"{"VoteJoy": ":joy:", "VoteCrossedSwords": ":crossed_swords:"}"#)
        .unwrap()
        .build()
        .unwrap();

    assert!(TestServer::start_with_config(config).await.is_err());
}

#[tokio::test]
async fn test_lenient_table_starts_and_drops_entry() {
    let config = TestConfig::memory()
        .unwrap()
        .table(r#"{"VoteJoy": ":joy:", "VoteCrossedSwords": ":crossed_swords:"}"#)
        .unwrap()
        .set("UNSUPPORTED_OPERATION_POLICY", "lenient")
        .build()
        .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    assert_status(server.vote(":crossed_swords:").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_status(server.vote(":joy:").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    let response = server.get("/api/leaderboard").await.unwrap();
    let board: Vec<LeaderboardRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(board, vec![LeaderboardRow::new(":joy:", "😂", 1)]);
}
