//! Vote dispatch service

use emojivoto_core::{FindByShortcodeRequest, VoteRequest};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Vote service for registering one vote per request
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register one vote for `choice`
    ///
    /// Votes are not deduplicated; every successful call adds one.
    #[instrument(skip(self))]
    pub async fn register_vote(&self, choice: Option<&str>) -> ServiceResult<()> {
        let shortcode = match choice {
            Some(choice) if !choice.is_empty() => choice,
            _ => return Err(ServiceError::InvalidChoice),
        };

        let client = self.ctx.emoji_client();
        let found = self
            .ctx
            .adapter()
            .call("FindByShortcode", |done| {
                client.find_by_shortcode(FindByShortcodeRequest::new(shortcode), done);
            })
            .await?;

        if found.emoji.is_none() {
            return Err(ServiceError::unknown_choice(shortcode));
        }

        let operation = self
            .ctx
            .shortcodes()
            .lookup(shortcode)
            .ok_or_else(|| ServiceError::unsupported(shortcode))?;

        let voting = self.ctx.voting_client();
        self.ctx
            .adapter()
            .call(operation.name(), |done| {
                voting.vote(operation, VoteRequest::default(), done);
            })
            .await?;

        info!(shortcode, operation = %operation, "Vote registered");
        Ok(())
    }
}
