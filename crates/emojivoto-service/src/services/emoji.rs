//! Emoji catalog service

use emojivoto_core::{Emoji, ListAllRequest, ResultsRequest};
use tracing::{instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;
use crate::dto::ReadinessResponse;

/// Catalog listing and backend probes
pub struct EmojiService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EmojiService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whole catalog, in the order the catalog service returned it
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<Emoji>> {
        let client = self.ctx.emoji_client();
        let response = self
            .ctx
            .adapter()
            .call("ListAll", |done| client.list_all(ListAllRequest::default(), done))
            .await?;

        Ok(response.list)
    }

    /// Probe both backends concurrently
    pub async fn readiness(&self) -> ReadinessResponse {
        let adapter = self.ctx.adapter();
        let emoji = self.ctx.emoji_client();
        let voting = self.ctx.voting_client();

        let (catalog, tally) = futures::join!(
            adapter.call("ListAll", |done| emoji.list_all(ListAllRequest::default(), done)),
            adapter.call("Results", |done| voting.results(ResultsRequest::default(), done)),
        );

        if let Err(e) = &catalog {
            warn!(error = %e, "Emoji service not ready");
        }
        if let Err(e) = &tally {
            warn!(error = %e, "Voting service not ready");
        }

        ReadinessResponse::ready(catalog.is_ok(), tally.is_ok())
    }
}
