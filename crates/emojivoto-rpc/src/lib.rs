//! # emojivoto-rpc
//!
//! Backend client layer for the emoji catalog and voting services.
//!
//! ## Features
//!
//! - **Call Adapter**: turns a callback-style stub operation into an awaitable call with a timeout
//! - **HTTP Stubs**: JSON-over-HTTP clients for both services
//! - **In-Memory Backends**: seeded catalog and tally store for local runs and tests
//!
//! ## Example
//!
//! ```ignore
//! use emojivoto_core::{EmojiClient, FindByShortcodeRequest};
//! use emojivoto_rpc::{CallAdapter, HttpEmojiClient};
//!
//! let adapter = CallAdapter::new(Duration::from_secs(5));
//! let emoji = HttpEmojiClient::new(http, "http://emoji-svc:8080");
//!
//! let response = adapter
//!     .call("FindByShortcode", |done| {
//!         emoji.find_by_shortcode(FindByShortcodeRequest::new(":joy:"), done)
//!     })
//!     .await?;
//! ```

pub mod adapter;
pub mod http;
pub mod memory;
pub mod operations;

pub use adapter::CallAdapter;
pub use http::{HttpEmojiClient, HttpVotingClient, RpcEndpoint, EMOJI_SERVICE, VOTING_SERVICE};
pub use memory::{InMemoryEmojiClient, InMemoryVotingClient};
pub use operations::{default_catalog, DEFAULT_CATALOG, VOTE_OPERATIONS};
