//! Service context - dependency container for services
//!
//! Holds the backend clients, the call adapter, and the resolved shortcode table.

use std::sync::Arc;

use emojivoto_core::{EmojiClient, VotingClient};
use emojivoto_rpc::CallAdapter;

use super::error::{ServiceError, ServiceResult};
use super::shortcode::ShortcodeTable;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    emoji_client: Arc<dyn EmojiClient>,
    voting_client: Arc<dyn VotingClient>,
    shortcodes: Arc<ShortcodeTable>,
    adapter: CallAdapter,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        emoji_client: Arc<dyn EmojiClient>,
        voting_client: Arc<dyn VotingClient>,
        shortcodes: Arc<ShortcodeTable>,
        adapter: CallAdapter,
    ) -> Self {
        Self {
            emoji_client,
            voting_client,
            shortcodes,
            adapter,
        }
    }

    /// Get the emoji catalog client
    pub fn emoji_client(&self) -> &dyn EmojiClient {
        self.emoji_client.as_ref()
    }

    /// Get the voting client
    pub fn voting_client(&self) -> &dyn VotingClient {
        self.voting_client.as_ref()
    }

    /// Get the shortcode-to-operation table
    pub fn shortcodes(&self) -> &ShortcodeTable {
        &self.shortcodes
    }

    /// Get the call adapter
    pub fn adapter(&self) -> &CallAdapter {
        &self.adapter
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("emoji_client", &"EmojiClient")
            .field("voting_client", &"VotingClient")
            .field("shortcodes", &self.shortcodes.len())
            .field("adapter", &self.adapter)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    emoji_client: Option<Arc<dyn EmojiClient>>,
    voting_client: Option<Arc<dyn VotingClient>>,
    shortcodes: Option<Arc<ShortcodeTable>>,
    adapter: Option<CallAdapter>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emoji_client(mut self, client: Arc<dyn EmojiClient>) -> Self {
        self.emoji_client = Some(client);
        self
    }

    pub fn voting_client(mut self, client: Arc<dyn VotingClient>) -> Self {
        self.voting_client = Some(client);
        self
    }

    pub fn shortcodes(mut self, table: ShortcodeTable) -> Self {
        self.shortcodes = Some(Arc::new(table));
        self
    }

    pub fn adapter(mut self, adapter: CallAdapter) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Config` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.emoji_client
                .ok_or_else(|| ServiceError::config("emoji_client is required"))?,
            self.voting_client
                .ok_or_else(|| ServiceError::config("voting_client is required"))?,
            self.shortcodes
                .ok_or_else(|| ServiceError::config("shortcodes is required"))?,
            self.adapter
                .ok_or_else(|| ServiceError::config("adapter is required"))?,
        ))
    }
}
