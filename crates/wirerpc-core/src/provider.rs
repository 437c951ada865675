//! The `Provider` trait — the request-capable collaborator contract.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::envelope::Params;
use crate::error::ClientError;

/// A value that can service JSON-RPC requests.
///
/// This is the recursive endpoint contract: anything implementing it can
/// stand in for a URL when constructing a client, so RPC clients compose
/// (a throttling client wrapping another RPC-capable client, a test stub,
/// and so on).
///
/// # Thread Safety
/// Implementations must be `Send + Sync` for use across Tokio tasks.
///
/// # Object Safety
/// The trait is object-safe and can be stored as `Arc<dyn Provider>`.
#[async_trait]
pub trait Provider: Send + Sync + 'static {
    /// Perform one call and return the raw result value.
    ///
    /// Protocol errors are raised as [`ClientError::Rpc`]; transport-level
    /// failures keep their own variants.
    async fn request(&self, method: &str, params: Option<Params>) -> Result<Value, ClientError>;

    /// Whether this provider understands the batch sentinel method.
    fn supports_batch(&self) -> bool {
        false
    }

    /// The provider's identifier (URL or name), for error messages and logs.
    fn endpoint(&self) -> &str;
}

/// Where a client sends its calls: a URL, or a nested provider.
#[derive(Clone)]
pub enum Endpoint {
    /// Plain HTTP endpoint, dispatched over POST.
    Url(String),
    /// Another request-capable collaborator; dispatch delegates to it.
    Provider(Arc<dyn Provider>),
}

impl Endpoint {
    /// Identifier used in error messages and logs.
    pub fn describe(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Provider(provider) => provider.endpoint(),
        }
    }

    /// Whether the batch sentinel can be serviced on this endpoint.
    pub fn supports_batch(&self) -> bool {
        match self {
            Self::Url(_) => true,
            Self::Provider(provider) => provider.supports_batch(),
        }
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.debug_tuple("Url").field(url).finish(),
            Self::Provider(provider) => {
                f.debug_tuple("Provider").field(&provider.endpoint()).finish()
            }
        }
    }
}

impl From<&str> for Endpoint {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<Arc<dyn Provider>> for Endpoint {
    fn from(provider: Arc<dyn Provider>) -> Self {
        Self::Provider(provider)
    }
}

impl<P: Provider> From<Arc<P>> for Endpoint {
    fn from(provider: Arc<P>) -> Self {
        Self::Provider(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub;

    #[async_trait]
    impl Provider for Stub {
        async fn request(
            &self,
            _method: &str,
            _params: Option<Params>,
        ) -> Result<Value, ClientError> {
            Ok(Value::Null)
        }

        fn endpoint(&self) -> &str {
            "stub"
        }
    }

    #[test]
    fn url_endpoints_support_batch() {
        let endpoint = Endpoint::from("http://localhost:8545");
        assert!(endpoint.supports_batch());
        assert_eq!(endpoint.describe(), "http://localhost:8545");
    }

    #[test]
    fn provider_endpoints_advertise_their_own_support() {
        let endpoint = Endpoint::from(Arc::new(Stub));
        assert!(!endpoint.supports_batch());
        assert_eq!(endpoint.describe(), "stub");
        assert_eq!(format!("{endpoint:?}"), "Provider(\"stub\")");
    }
}
