//! Resolved vote operation handle

use std::fmt;

use crate::traits::VotingClient;

/// Name of a vote operation that a voting client is known to implement
///
/// The only constructor is [`VoteOperation::resolve`], so holding one means the
/// name was checked against a client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoteOperation(String);

impl VoteOperation {
    /// Resolve an operation name against a client
    ///
    /// Returns `None` when the client has no implementation under that name.
    pub fn resolve(name: &str, client: &dyn VotingClient) -> Option<Self> {
        client.implements(name).then(|| Self(name.to_string()))
    }

    /// Operation name as exposed by the voting service
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
