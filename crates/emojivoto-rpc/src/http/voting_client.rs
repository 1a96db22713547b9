//! Voting service stub

use emojivoto_core::{
    Completion, ResultsRequest, ResultsResponse, VoteOperation, VoteRequest, VoteResponse,
    VotingClient,
};

use super::{RpcEndpoint, VOTING_SERVICE};
use crate::operations::VOTE_OPERATIONS;

/// Voting client over HTTP
///
/// Exposes the vote operations listed in [`VOTE_OPERATIONS`].
#[derive(Debug, Clone)]
pub struct HttpVotingClient {
    endpoint: RpcEndpoint,
}

impl HttpVotingClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            endpoint: RpcEndpoint::new(http, base_url, VOTING_SERVICE),
        }
    }
}

impl VotingClient for HttpVotingClient {
    fn results(&self, request: ResultsRequest, done: Completion<ResultsResponse>) {
        self.endpoint.spawn_call("Results".to_string(), request, done);
    }

    fn implements(&self, operation: &str) -> bool {
        VOTE_OPERATIONS.iter().any(|(name, _)| *name == operation)
    }

    fn vote(&self, operation: &VoteOperation, request: VoteRequest, done: Completion<VoteResponse>) {
        self.endpoint
            .spawn_call(operation.name().to_string(), request, done);
    }
}
