//! The curried call surface: bind a method first, invoke it later.

use std::marker::PhantomData;

use serde_json::Value;

use wirerpc_core::{CallOutcome, ClientError, ClientOptions, Endpoint, Params, RpcMethod};
use wirerpc_http::ThrottledDispatcher;

use crate::invoker::BoundMethod;

/// JSON-RPC client whose calls are curried over the method.
pub struct CurriedRpc {
    inner: ThrottledDispatcher,
}

impl CurriedRpc {
    /// Create a client for the given endpoint — a URL, or a nested
    /// request-capable provider.
    pub fn new(endpoint: impl Into<Endpoint>, options: ClientOptions) -> Self {
        Self {
            inner: ThrottledDispatcher::new(endpoint, &options),
        }
    }

    /// Bind a statically declared method; the returned invoker decodes a
    /// typed outcome.
    pub fn call<M: RpcMethod>(&self) -> MethodCall<'_, M> {
        MethodCall {
            inner: &self.inner,
            _method: PhantomData,
        }
    }

    /// Bind a method that is not statically declared.
    ///
    /// Runtime behavior is identical to [`Self::call`]; only the typed
    /// decoding is gone.
    pub fn call_unknown(&self, method: impl Into<String>) -> BoundMethod<'_> {
        BoundMethod::new(&self.inner, method.into())
    }

    /// Perform one call and unwrap the outcome: the result value on
    /// success, the server's error raised as [`ClientError::Rpc`].
    pub async fn request(
        &self,
        method: &str,
        params: Option<Params>,
    ) -> Result<Value, ClientError> {
        let outcome = self.inner.dispatch(method, params).await?;
        outcome.into_result().map_err(ClientError::Rpc)
    }
}

/// Invoker bound to the declared method `M`.
pub struct MethodCall<'a, M: RpcMethod> {
    inner: &'a ThrottledDispatcher,
    _method: PhantomData<fn() -> M>,
}

impl<M: RpcMethod> MethodCall<'_, M> {
    /// Perform one dispatch and decode both arms into `M`'s declared
    /// shapes. Pass `()` for zero-argument methods.
    pub async fn invoke(
        &self,
        params: M::Params,
    ) -> Result<CallOutcome<M::Output, M::Error>, ClientError> {
        let params = Params::from_serialize(params).map_err(ClientError::Params)?;
        match self.inner.dispatch(M::NAME, params).await? {
            CallOutcome::Success(value) => {
                Ok(CallOutcome::Success(serde_json::from_value(value)?))
            }
            CallOutcome::Failure(error) => {
                let raw = serde_json::to_value(error).map_err(ClientError::Params)?;
                Ok(CallOutcome::Failure(serde_json::from_value(raw)?))
            }
        }
    }
}
