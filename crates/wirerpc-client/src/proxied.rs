//! The proxied call surface: any name is a method.

use wirerpc_core::{ClientOptions, Endpoint};
use wirerpc_http::ThrottledDispatcher;

use crate::invoker::BoundMethod;

/// JSON-RPC client addressed by method name.
///
/// The map-based accessor rendering of dynamic property interception:
/// [`Self::method`] accepts any string and yields a callable bound to it,
/// with exactly the contract of the curried surface. No name is
/// special-cased except the batch sentinel
/// ([`BATCH_METHOD`](wirerpc_core::BATCH_METHOD)), which routes into the
/// batch path when the endpoint supports batching.
pub struct ProxiedRpc {
    inner: ThrottledDispatcher,
}

impl ProxiedRpc {
    /// Create a client for the given endpoint — a URL, or a nested
    /// request-capable provider.
    pub fn new(endpoint: impl Into<Endpoint>, options: ClientOptions) -> Self {
        Self {
            inner: ThrottledDispatcher::new(endpoint, &options),
        }
    }

    /// Yield an invoker bound to `name`.
    pub fn method(&self, name: impl Into<String>) -> BoundMethod<'_> {
        BoundMethod::new(&self.inner, name.into())
    }
}
