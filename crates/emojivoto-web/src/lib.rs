//! # emojivoto-web
//!
//! Browser-facing HTTP server built with the Axum framework: the JSON API over
//! the emoji and voting backends, the HTML shell, and its static assets.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_state_with, create_backends, run, Backends};
pub use state::AppState;
