//! The request-style surface: raise-on-failure calls over the shared
//! dispatch primitive.

use async_trait::async_trait;
use serde_json::Value;

use wirerpc_core::{ClientError, ClientOptions, Endpoint, Params, Provider};

use crate::dispatch::{BatchCall, ThrottledDispatcher};

/// HTTP-backed JSON-RPC provider.
///
/// Narrows the tagged-outcome contract: a well-formed protocol error is
/// raised as [`ClientError::Rpc`] instead of returned as a value. The
/// endpoint may itself be another [`Provider`], so providers nest.
pub struct HttpProvider {
    inner: ThrottledDispatcher,
}

impl HttpProvider {
    /// Create a provider for the given endpoint.
    pub fn new(endpoint: impl Into<Endpoint>, options: ClientOptions) -> Self {
        Self {
            inner: ThrottledDispatcher::new(endpoint, &options),
        }
    }

    /// Create with default options (no throttle, params omitted when absent).
    pub fn default_for(endpoint: impl Into<Endpoint>) -> Self {
        Self::new(endpoint, ClientOptions::default())
    }

    /// Perform one call, returning the raw result value or raising the
    /// server's error.
    pub async fn request(
        &self,
        method: &str,
        params: Option<Params>,
    ) -> Result<Value, ClientError> {
        let outcome = self.inner.dispatch(method, params).await?;
        outcome.into_result().map_err(ClientError::Rpc)
    }

    /// Send a batch as one transport invocation.
    pub async fn request_batch(&self, calls: Vec<BatchCall>) -> Result<Vec<Value>, ClientError> {
        self.inner.dispatch_batch(calls).await
    }
}

#[async_trait]
impl Provider for HttpProvider {
    async fn request(&self, method: &str, params: Option<Params>) -> Result<Value, ClientError> {
        HttpProvider::request(self, method, params).await
    }

    fn supports_batch(&self) -> bool {
        self.inner.endpoint().supports_batch()
    }

    fn endpoint(&self) -> &str {
        self.inner.endpoint().describe()
    }
}
