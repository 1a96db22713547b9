//! One backend service reachable over HTTP

use emojivoto_core::{Completion, RemoteOperationError, RemoteResult};
use serde::{de::DeserializeOwned, Serialize};
use tokio::runtime::Handle;

/// Base URL plus service name, sharing one pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct RpcEndpoint {
    http: reqwest::Client,
    base_url: String,
    service: &'static str,
}

impl RpcEndpoint {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, service: &'static str) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service,
        }
    }

    /// URL of one RPC method
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.service, method)
    }

    /// Start a call in the background and settle `done` when it finishes
    pub fn spawn_call<Req, Resp>(&self, method: String, request: Req, done: Completion<Resp>)
    where
        Req: Serialize + Send + Sync + 'static,
        Resp: DeserializeOwned + Send + 'static,
    {
        let Ok(runtime) = Handle::try_current() else {
            done(Err(RemoteOperationError::new(
                method,
                "no async runtime available to run the call",
            )));
            return;
        };

        let endpoint = self.clone();
        runtime.spawn(async move {
            let result = endpoint.post(&method, &request).await;
            done(result);
        });
    }

    async fn post<Req, Resp>(&self, method: &str, request: &Req) -> RemoteResult<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.method_url(method))
            .json(request)
            .send()
            .await
            .map_err(|e| RemoteOperationError::new(method, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.to_string()
            } else {
                body
            };
            return Err(RemoteOperationError::new(method, message));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| RemoteOperationError::new(method, format!("invalid response: {e}")))
    }
}
