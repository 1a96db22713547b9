//! In-memory voting service

use std::collections::HashMap;

use emojivoto_core::{
    Completion, RemoteOperationError, ResultsRequest, ResultsResponse, VoteOperation, VoteRequest,
    VoteResponse, VoteTally, VotingClient,
};
use parking_lot::Mutex;

use crate::operations::VOTE_OPERATIONS;

/// Vote counter keyed by shortcode
///
/// Each vote operation is bound to the shortcode it increments.
#[derive(Debug, Default)]
pub struct InMemoryVotingClient {
    operations: HashMap<String, String>,
    tallies: Mutex<HashMap<String, i32>>,
}

impl InMemoryVotingClient {
    /// Client implementing the given `(operation, shortcode)` pairs
    pub fn new<I, O, S>(operations: I) -> Self
    where
        I: IntoIterator<Item = (O, S)>,
        O: Into<String>,
        S: Into<String>,
    {
        Self {
            operations: operations
                .into_iter()
                .map(|(op, shortcode)| (op.into(), shortcode.into()))
                .collect(),
            tallies: Mutex::new(HashMap::new()),
        }
    }

    /// Client implementing every operation in [`VOTE_OPERATIONS`]
    pub fn with_default_operations() -> Self {
        Self::new(VOTE_OPERATIONS.iter().copied())
    }

    /// Current count for one shortcode
    pub fn votes_for(&self, shortcode: &str) -> i32 {
        self.tallies.lock().get(shortcode).copied().unwrap_or(0)
    }

    /// Tallies ranked by votes, most first; ties by shortcode
    pub fn ranked(&self) -> Vec<VoteTally> {
        let mut ranked: Vec<VoteTally> = self
            .tallies
            .lock()
            .iter()
            .filter(|(_, votes)| **votes > 0)
            .map(|(shortcode, votes)| VoteTally::new(shortcode.clone(), *votes))
            .collect();
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes).then_with(|| a.shortcode.cmp(&b.shortcode)));
        ranked
    }
}

impl VotingClient for InMemoryVotingClient {
    fn results(&self, _request: ResultsRequest, done: Completion<ResultsResponse>) {
        done(Ok(ResultsResponse {
            results: self.ranked(),
        }));
    }

    fn implements(&self, operation: &str) -> bool {
        self.operations.contains_key(operation)
    }

    fn vote(&self, operation: &VoteOperation, _request: VoteRequest, done: Completion<VoteResponse>) {
        let Some(shortcode) = self.operations.get(operation.name()) else {
            done(Err(RemoteOperationError::new(
                operation.name(),
                format!("unimplemented operation {operation}"),
            )));
            return;
        };

        *self.tallies.lock().entry(shortcode.clone()).or_insert(0) += 1;
        done(Ok(VoteResponse::default()));
    }
}
