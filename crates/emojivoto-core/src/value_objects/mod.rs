//! Value objects - immutable domain primitives

mod vote_operation;

pub use vote_operation::VoteOperation;
