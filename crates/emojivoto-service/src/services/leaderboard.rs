//! Leaderboard aggregation service

use emojivoto_core::{FindByShortcodeRequest, LeaderboardEntry, ResultsRequest};
use futures::future::join_all;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Joins ranked tallies with catalog metadata
pub struct LeaderboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ranked leaderboard, in the order the voting service returned it
    ///
    /// Every emoji lookup runs concurrently and all of them settle before the
    /// result is assembled. Any failed lookup, or a tally the catalog has no
    /// emoji for, fails the whole leaderboard.
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> ServiceResult<Vec<LeaderboardEntry>> {
        let adapter = self.ctx.adapter();
        let voting = self.ctx.voting_client();
        let tallies = adapter
            .call("Results", |done| voting.results(ResultsRequest::default(), done))
            .await?
            .results;

        let emoji = self.ctx.emoji_client();
        let lookups = tallies.iter().map(move |tally| {
            adapter.call("FindByShortcode", move |done| {
                emoji.find_by_shortcode(FindByShortcodeRequest::new(tally.shortcode.as_str()), done);
            })
        });
        let resolved = join_all(lookups).await;

        let mut entries = Vec::with_capacity(tallies.len());
        for (tally, lookup) in tallies.iter().zip(resolved) {
            let found = lookup?
                .emoji
                .ok_or_else(|| ServiceError::MissingEmoji(tally.shortcode.clone()))?;
            entries.push(LeaderboardEntry::join(found, tally));
        }

        debug!(entries = entries.len(), "Leaderboard assembled");
        Ok(entries)
    }
}
