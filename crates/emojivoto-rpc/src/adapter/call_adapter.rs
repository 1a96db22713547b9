//! Call adapter
//!
//! Every backend call in the web layer goes through [`CallAdapter::call`]. The stub
//! operation receives a [`Completion`] wired to a oneshot channel; the adapter awaits
//! the channel with a deadline.

use std::time::Duration;

use emojivoto_common::BackendConfig;
use emojivoto_core::{Completion, RemoteOperationError, RemoteResult};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Adapts callback-style stub operations into single-shot async calls
#[derive(Debug, Clone, Copy)]
pub struct CallAdapter {
    timeout: Duration,
}

impl From<&BackendConfig> for CallAdapter {
    fn from(config: &BackendConfig) -> Self {
        Self::new(config.call_timeout())
    }
}

impl CallAdapter {
    /// Create an adapter that bounds each call by `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Per-call deadline
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one stub operation and await its completion
    ///
    /// `op` is an `FnOnce`, so the underlying operation is started at most once.
    /// A completion dropped without being called, or a call still pending when the
    /// deadline passes, is reported as a `RemoteOperationError`.
    pub async fn call<T, F>(&self, operation: &str, op: F) -> RemoteResult<T>
    where
        T: Send + 'static,
        F: FnOnce(Completion<T>) + Send,
    {
        let (tx, rx) = oneshot::channel();
        let done: Completion<T> = Box::new(move |result| {
            // Receiver is gone when the caller timed out.
            let _ = tx.send(result);
        });

        debug!(operation, "Calling backend");
        op(done);

        let result = match tokio::time::timeout(self.timeout, rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(RemoteOperationError::abandoned(operation)),
            Err(_) => Err(RemoteOperationError::timed_out(
                operation,
                self.timeout.as_millis(),
            )),
        };

        if let Err(e) = &result {
            warn!(operation, error = %e, "Backend call failed");
        }

        result
    }
}
