//! Backend client ports
//!
//! Both backends are RPC services reached through stubs with callback-style
//! completion: every operation takes its input and a [`Completion`] that the stub
//! calls once the remote side has answered. Implementations live in the
//! infrastructure layer; the domain only defines what it needs.

use crate::error::RemoteResult;
use crate::messages::{
    FindByShortcodeRequest, FindByShortcodeResponse, ListAllRequest, ListAllResponse,
    ResultsRequest, ResultsResponse, VoteRequest, VoteResponse,
};
use crate::value_objects::VoteOperation;

/// Completion callback for a remote operation
///
/// Calling it consumes it, so a stub can settle an operation at most once.
pub type Completion<T> = Box<dyn FnOnce(RemoteResult<T>) + Send + 'static>;

// ============================================================================
// Emoji Client
// ============================================================================

pub trait EmojiClient: Send + Sync {
    /// Look up one emoji by shortcode
    fn find_by_shortcode(
        &self,
        request: FindByShortcodeRequest,
        done: Completion<FindByShortcodeResponse>,
    );

    /// List the whole catalog
    fn list_all(&self, request: ListAllRequest, done: Completion<ListAllResponse>);
}

// ============================================================================
// Voting Client
// ============================================================================

pub trait VotingClient: Send + Sync {
    /// Ranked vote tallies
    fn results(&self, request: ResultsRequest, done: Completion<ResultsResponse>);

    /// Whether the client exposes a vote operation under this name
    fn implements(&self, operation: &str) -> bool;

    /// Register one vote through a resolved operation
    fn vote(&self, operation: &VoteOperation, request: VoteRequest, done: Completion<VoteResponse>);
}
