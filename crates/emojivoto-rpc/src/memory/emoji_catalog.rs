//! In-memory emoji catalog

use emojivoto_core::{
    Completion, Emoji, EmojiClient, FindByShortcodeRequest, FindByShortcodeResponse,
    ListAllRequest, ListAllResponse,
};

use crate::operations::default_catalog;

/// Fixed catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmojiClient {
    catalog: Vec<Emoji>,
}

impl InMemoryEmojiClient {
    pub fn new(catalog: Vec<Emoji>) -> Self {
        Self { catalog }
    }

    /// Catalog seeded with [`crate::DEFAULT_CATALOG`]
    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }

    pub fn find(&self, shortcode: &str) -> Option<&Emoji> {
        self.catalog.iter().find(|e| e.has_shortcode(shortcode))
    }
}

impl EmojiClient for InMemoryEmojiClient {
    fn find_by_shortcode(
        &self,
        request: FindByShortcodeRequest,
        done: Completion<FindByShortcodeResponse>,
    ) {
        done(Ok(FindByShortcodeResponse {
            emoji: self.find(&request.shortcode).cloned(),
        }));
    }

    fn list_all(&self, _request: ListAllRequest, done: Completion<ListAllResponse>) {
        done(Ok(ListAllResponse {
            list: self.catalog.clone(),
        }));
    }
}
