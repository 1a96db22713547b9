//! HTML shell
//!
//! The browser app is a single page; `/` and `/leaderboard` serve the same
//! shell and the client-side router takes over.

use axum::{extract::State, response::Html};

use crate::state::AppState;

/// Path the bundled client is served from
pub const BUNDLE_ROUTE: &str = "/js";

/// Render the page shell, loading the client from `script_src`
pub fn render_shell(script_src: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <title>Emoji Vote</title>
    <link rel="icon" href="/img/favicon.ico">
  </head>
  <body>
    <div id="main" class="main"></div>
  </body>
  <script type="text/javascript" src="{script_src}" async></script>
</html>"#
    )
}

/// Where the shell loads the client bundle from
pub fn script_source(webpack_dev_server: Option<&str>) -> String {
    match webpack_dev_server {
        Some(host) if !host.is_empty() => format!("{host}/dist/index_bundle.js"),
        _ => BUNDLE_ROUTE.to_string(),
    }
}

/// GET / and GET /leaderboard
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let src = script_source(state.config().assets.webpack_dev_server.as_deref());
    Html(render_shell(&src))
}
