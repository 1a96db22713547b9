//! Emoji catalog stub

use emojivoto_core::{
    Completion, EmojiClient, FindByShortcodeRequest, FindByShortcodeResponse, ListAllRequest,
    ListAllResponse,
};

use super::{RpcEndpoint, EMOJI_SERVICE};

/// Emoji catalog client over HTTP
#[derive(Debug, Clone)]
pub struct HttpEmojiClient {
    endpoint: RpcEndpoint,
}

impl HttpEmojiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            endpoint: RpcEndpoint::new(http, base_url, EMOJI_SERVICE),
        }
    }
}

impl EmojiClient for HttpEmojiClient {
    fn find_by_shortcode(
        &self,
        request: FindByShortcodeRequest,
        done: Completion<FindByShortcodeResponse>,
    ) {
        self.endpoint
            .spawn_call("FindByShortcode".to_string(), request, done);
    }

    fn list_all(&self, request: ListAllRequest, done: Completion<ListAllResponse>) {
        self.endpoint.spawn_call("ListAll".to_string(), request, done);
    }
}
