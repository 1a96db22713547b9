//! Service layer error types
//!
//! Every backend failure is converted into one of these before it reaches the
//! HTTP layer.

use emojivoto_core::RemoteOperationError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No choice given, or an empty one
    #[error("Emoji choice is mandatory")]
    InvalidChoice,

    /// Well-formed choice the catalog does not know
    #[error("Chosen emoji shortcode [{0}] doesn't exist")]
    UnknownChoice(String),

    /// Catalog emoji with no resolved vote operation
    #[error("Emoji [{shortcode}] lacks an implementation of a vote operation")]
    UnsupportedOperation { shortcode: String },

    /// Any backend call failure; displays the backend's message
    #[error(transparent)]
    Upstream(#[from] RemoteOperationError),

    /// A ranked tally whose shortcode the catalog no longer has
    #[error("Tally for shortcode [{0}] has no matching emoji in the catalog")]
    MissingEmoji(String),

    /// Shortcode table or context wiring problem
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Create an unknown choice error
    pub fn unknown_choice(shortcode: impl Into<String>) -> Self {
        Self::UnknownChoice(shortcode.into())
    }

    /// Create an unsupported operation error
    pub fn unsupported(shortcode: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            shortcode: shortcode.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// The vote route answers `UnsupportedOperation` as a no-op instead.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidChoice | Self::UnknownChoice(_) => 400,
            Self::UnsupportedOperation { .. }
            | Self::Upstream(_)
            | Self::MissingEmoji(_)
            | Self::Config(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidChoice => "INVALID_CHOICE",
            Self::UnknownChoice(_) => "UNKNOWN_CHOICE",
            Self::UnsupportedOperation { .. } => "UNSUPPORTED_OPERATION",
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::MissingEmoji(_) => "UPSTREAM_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Check if the caller can fix this by changing the request (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
