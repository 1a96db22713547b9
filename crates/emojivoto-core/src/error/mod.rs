//! Domain errors

mod remote_error;

pub use remote_error::{RemoteOperationError, RemoteResult};
