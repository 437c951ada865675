//! wirerpc-client — ergonomic call surfaces over the dispatch primitive.
//!
//! Two front-ends with one contract:
//!
//! - [`CurriedRpc`] — `call::<M>()` yields an invoker bound to a
//!   statically declared method; invoking it performs one dispatch and
//!   decodes a typed outcome.
//! - [`ProxiedRpc`] — `method(name)` yields an invoker bound to any
//!   method name, no declaration needed.
//!
//! Both accept a URL or a nested [`Provider`](wirerpc_core::Provider) as
//! their endpoint, and both honor the same throttle and error semantics
//! as the request-style [`HttpProvider`](wirerpc_http::HttpProvider) —
//! the surfaces differ only in ergonomics, never in behavior.
//!
//! ```rust,no_run
//! use wirerpc_client::{ClientOptions, CurriedRpc, NoError, RpcMethod};
//!
//! struct ChainId;
//!
//! impl RpcMethod for ChainId {
//!     const NAME: &'static str = "eth_chainId";
//!     type Params = ();
//!     type Output = String;
//!     type Error = NoError;
//! }
//!
//! # async fn run() -> Result<(), wirerpc_client::ClientError> {
//! let rpc = CurriedRpc::new("https://rpc.example.com", ClientOptions::default());
//! let chain_id = rpc.call::<ChainId>();
//! if let Some(id) = chain_id.invoke(()).await?.success() {
//!     println!("chain id: {id}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod curried;
pub mod invoker;
pub mod proxied;

pub use curried::{CurriedRpc, MethodCall};
pub use invoker::BoundMethod;
pub use proxied::ProxiedRpc;

// Re-exported so callers need only this crate for the common path.
pub use wirerpc_core::{
    CallOutcome, ClientError, ClientOptions, EmptyParams, Endpoint, ErrorObject, NoError, Params,
    Provider, RpcMethod, BATCH_METHOD,
};
pub use wirerpc_http::{BatchCall, HttpProvider};
