//! Method-name-bound invokers.

use serde::Serialize;
use serde_json::Value;

use wirerpc_core::{CallOutcome, ClientError, ErrorObject, Params};
use wirerpc_http::ThrottledDispatcher;

/// A callable bound to one method name.
///
/// Parameters are normalized through
/// [`Params::from_serialize`]: pass `()` for zero-argument methods, a
/// tuple or `Vec` for positional params, a struct or map for named ones.
pub struct BoundMethod<'a> {
    inner: &'a ThrottledDispatcher,
    method: String,
}

impl<'a> BoundMethod<'a> {
    pub(crate) fn new(inner: &'a ThrottledDispatcher, method: String) -> Self {
        Self { inner, method }
    }

    /// The method name this invoker is bound to.
    pub fn name(&self) -> &str {
        &self.method
    }

    /// Perform one dispatch.
    pub async fn invoke<P: Serialize>(
        &self,
        params: P,
    ) -> Result<CallOutcome<Value, ErrorObject>, ClientError> {
        let params = Params::from_serialize(params).map_err(ClientError::Params)?;
        self.inner.dispatch(&self.method, params).await
    }
}
