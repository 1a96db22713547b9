//! Client traits (ports) - the backend operations this layer consumes

mod clients;

pub use clients::{Completion, EmojiClient, VotingClient};
