//! wirerpc-core — foundation traits and types for WireRPC.
//!
//! # Overview
//!
//! WireRPC is a client-side JSON-RPC 2.0 dispatch library. The core crate
//! defines:
//!
//! - [`RequestEnvelope`] / [`ResponseEnvelope`] / [`ErrorObject`] — wire types
//! - [`CallOutcome`] — the tagged success/failure union returned to callers
//! - [`ClientError`] — structured error type for transport-level failures
//! - [`Provider`] / [`Endpoint`] — the request-capable collaborator contract
//! - [`RequestThrottle`] — FIFO request-rate admission gate
//! - [`RpcMethod`] — compile-time method-name-to-shape registry

pub mod envelope;
pub mod error;
pub mod method;
pub mod options;
pub mod outcome;
pub mod provider;
pub mod throttle;

pub use envelope::{ErrorObject, Params, RequestEnvelope, ResponseEnvelope, RpcId};
pub use error::ClientError;
pub use method::RpcMethod;
pub use options::{ClientOptions, EmptyParams};
pub use outcome::{CallOutcome, NoError};
pub use provider::{Endpoint, Provider};
pub use throttle::RequestThrottle;

/// JSON-RPC 2.0 version tag carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Sentinel method name that routes a call into the batch path.
///
/// A request for this method carries a positional list of
/// `{method, params?}` pairs and is transmitted as a single HTTP call
/// containing a JSON array of envelopes.
pub const BATCH_METHOD: &str = "eth_batch";
