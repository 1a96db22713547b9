//! Remote operation errors - the failure side of every backend call

use thiserror::Error;

/// Failure reported for a single backend operation
///
/// Displays as the bare message so it can be handed to clients unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteOperationError {
    operation: String,
    message: String,
}

/// Result type for backend operations
pub type RemoteResult<T> = Result<T, RemoteOperationError>;

impl RemoteOperationError {
    /// Create an error for the named operation
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// The call did not settle within the allotted time
    pub fn timed_out(operation: impl Into<String>, after_ms: u128) -> Self {
        let operation = operation.into();
        let message = format!("{operation} timed out after {after_ms}ms");
        Self { operation, message }
    }

    /// The stub dropped its completion without reporting anything
    pub fn abandoned(operation: impl Into<String>) -> Self {
        let operation = operation.into();
        let message = format!("{operation} completed without a result");
        Self { operation, message }
    }

    /// Name of the operation that failed
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Human-readable failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}
