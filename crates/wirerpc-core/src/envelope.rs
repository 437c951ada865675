//! JSON-RPC 2.0 wire types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;
use crate::outcome::CallOutcome;
use crate::JSONRPC_VERSION;

/// JSON-RPC response ID as echoed by the server — string, number, or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(u64),
    String(String),
    Null,
}

impl std::fmt::Display for RpcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
        }
    }
}

/// Request parameters — a positional list or a named map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Params {
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl Params {
    /// Normalize any serializable value into wire parameters.
    ///
    /// `null` becomes absent params, arrays stay positional, objects stay
    /// named, and a bare scalar is wrapped into a one-element positional
    /// list so `invoke(42)` means `params: [42]`.
    pub fn from_serialize<P: Serialize>(params: P) -> Result<Option<Self>, serde_json::Error> {
        Ok(match serde_json::to_value(params)? {
            Value::Null => None,
            Value::Array(items) => Some(Self::Positional(items)),
            Value::Object(map) => Some(Self::Named(map)),
            scalar => Some(Self::Positional(vec![scalar])),
        })
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Positional(items) => items.is_empty(),
            Self::Named(map) => map.is_empty(),
        }
    }

    /// Convert into a plain JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Positional(items) => Value::Array(items),
            Self::Named(map) => Value::Object(map),
        }
    }
}

impl From<Vec<Value>> for Params {
    fn from(items: Vec<Value>) -> Self {
        Self::Positional(items)
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self::Named(map)
    }
}

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl RequestEnvelope {
    /// Frame a request. Absent params are encoded as an absent field.
    pub fn new(id: u64, method: impl Into<String>, params: Option<Params>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            method: method.into(),
            params,
        }
    }
}

/// Reserved JSON-RPC 2.0 error codes.
pub mod codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
    pub const SERVER_ERROR: i64 = -32000;
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorObject {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(codes::INVALID_REQUEST, message)
    }

    pub fn method_not_found(message: impl Into<String>) -> Self {
        Self::new(codes::METHOD_NOT_FOUND, message)
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(codes::INVALID_PARAMS, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL_ERROR, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(codes::SERVER_ERROR, message)
    }
}

impl std::fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JSON-RPC error {}: {}", self.code, self.message)
    }
}

// `Option<Value>` alone cannot tell `"result": null` from an absent field,
// and the success/failure discriminator is field presence, not value truth.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(Some)
}

/// A JSON-RPC 2.0 response envelope.
///
/// Decoding is lenient: `jsonrpc` and `id` may be missing. `result` tracks
/// field presence separately from nullness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<RpcId>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub result: Option<Option<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

impl ResponseEnvelope {
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id: Some(RpcId::Number(id)),
            result: Some(Some(result)),
            error: None,
        }
    }

    pub fn failure(id: u64, error: ErrorObject) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id: Some(RpcId::Number(id)),
            result: None,
            error: Some(error),
        }
    }

    /// Returns `true` if the `result` field was present on the wire.
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// The decoded `result` value, with a present-but-null field
    /// flattened to `Value::Null`.
    pub fn result_value(self) -> Option<Value> {
        self.result.map(|inner| inner.unwrap_or(Value::Null))
    }

    /// Normalize into the tagged outcome.
    ///
    /// An `error` field wins; otherwise a present `result` field is a
    /// success whatever its value (`null`, `0`, `""`, `false` included);
    /// a response carrying neither is surfaced as [`ClientError::NoResult`].
    pub fn into_outcome(self) -> Result<CallOutcome, ClientError> {
        let Self { result, error, .. } = self;
        if let Some(error) = error {
            return Ok(CallOutcome::Failure(error));
        }
        match result {
            Some(value) => Ok(CallOutcome::Success(value.unwrap_or(Value::Null))),
            None => Err(ClientError::NoResult),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serialization() {
        let req = RequestEnvelope::new(7, "eth_blockNumber", None);
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"method\":\"eth_blockNumber\""));
        assert!(!json.contains("params"));
    }

    #[test]
    fn request_with_positional_params() {
        let params = Params::from_serialize(json!([1, false])).unwrap();
        let req = RequestEnvelope::new(1, "eth_getBlockByNumber", params);
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"params\":[1,false]"));
    }

    #[test]
    fn params_normalization() {
        assert_eq!(Params::from_serialize(()).unwrap(), None);
        assert_eq!(
            Params::from_serialize(json!([1])).unwrap(),
            Some(Params::Positional(vec![json!(1)]))
        );
        assert!(matches!(
            Params::from_serialize(json!({"key": "value"})).unwrap(),
            Some(Params::Named(_))
        ));
        // Bare scalars get wrapped into a one-element list
        assert_eq!(
            Params::from_serialize(42).unwrap(),
            Some(Params::Positional(vec![json!(42)]))
        );
    }

    #[test]
    fn response_result_present() {
        let resp: ResponseEnvelope =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":"0x1"}"#).unwrap();
        assert!(resp.has_result());
        assert_eq!(resp.result_value(), Some(json!("0x1")));
    }

    #[test]
    fn response_result_null_is_present() {
        let resp: ResponseEnvelope =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":null}"#).unwrap();
        assert!(resp.has_result());
        assert_eq!(resp.result_value(), Some(Value::Null));
    }

    #[test]
    fn response_result_absent() {
        let resp: ResponseEnvelope =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1}"#).unwrap();
        assert!(!resp.has_result());
        assert!(matches!(resp.into_outcome(), Err(ClientError::NoResult)));
    }

    #[test]
    fn response_error_wins() {
        let resp: ResponseEnvelope = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"no such method"}}"#,
        )
        .unwrap();
        match resp.into_outcome().unwrap() {
            CallOutcome::Failure(err) => {
                assert_eq!(err.code, codes::METHOD_NOT_FOUND);
                assert_eq!(err.message, "no such method");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn falsy_results_are_successes() {
        for value in [json!(0), json!(""), json!(false), json!(null), json!([])] {
            let resp = ResponseEnvelope::success(1, value.clone());
            match resp.into_outcome().unwrap() {
                CallOutcome::Success(v) => assert_eq!(v, value),
                other => panic!("expected success for {value}, got {other:?}"),
            }
        }
    }

    #[test]
    fn reserved_codes() {
        assert_eq!(ErrorObject::parse_error("x").code, -32700);
        assert_eq!(ErrorObject::method_not_found("x").code, -32601);
        assert_eq!(ErrorObject::internal_error("x").code, -32603);
        assert_eq!(ErrorObject::server_error("x").code, -32000);
    }

    #[test]
    fn rpc_id_display() {
        assert_eq!(RpcId::Number(3).to_string(), "3");
        assert_eq!(RpcId::String("abc".into()).to_string(), "abc");
        assert_eq!(RpcId::Null.to_string(), "null");
    }
}
