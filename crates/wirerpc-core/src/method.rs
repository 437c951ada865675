//! Compile-time method registry.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A statically declared JSON-RPC method: its wire name plus the shapes
/// of its parameters, result, and declared error.
///
/// Methods that declare no error shape use
/// [`NoError`](crate::outcome::NoError):
///
/// ```
/// use wirerpc_core::{NoError, RpcMethod};
///
/// struct ChainId;
///
/// impl RpcMethod for ChainId {
///     const NAME: &'static str = "eth_chainId";
///     type Params = ();
///     type Output = String;
///     type Error = NoError;
/// }
/// ```
pub trait RpcMethod {
    /// Wire method name.
    const NAME: &'static str;

    /// Parameter shape. `()` for zero-argument methods.
    type Params: Serialize;

    /// Result shape on success.
    type Output: DeserializeOwned;

    /// Declared error shape.
    type Error: DeserializeOwned;
}
