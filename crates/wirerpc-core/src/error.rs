//! Client-side error types.

use thiserror::Error;

use crate::envelope::{ErrorObject, ResponseEnvelope};

/// Errors surfaced outside the value channel.
///
/// Everything here means the call did not complete normally at the
/// transport or framing layer. A server that explicitly answered with an
/// `error` field is *not* represented here (see
/// [`CallOutcome`](crate::CallOutcome)), except through [`Self::Rpc`],
/// which the raise-on-failure `request` surface uses to narrow the
/// outcome contract.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure (connection refused, reset, DNS). The call's
    /// outcome is unknown; callers must not assume it is safe to resend.
    #[error("transport failure at {endpoint} (method: {method}): {reason}")]
    Transport {
        endpoint: String,
        method: String,
        reason: String,
    },

    /// The server answered with an HTTP status other than 200.
    #[error("unexpected HTTP status {status} from {endpoint} (method: {method})")]
    Status {
        endpoint: String,
        method: String,
        status: u16,
    },

    /// Response body could not be parsed.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request params could not be serialized.
    #[error("failed to encode request params: {0}")]
    Params(serde_json::Error),

    /// Well-formed response carrying neither `result` nor `error`.
    #[error("response carried neither result nor error")]
    NoResult,

    /// Batch call was malformed before any transport work happened.
    #[error("invalid batch call: {0}")]
    InvalidBatch(String),

    /// At least one batch element failed; the entire decoded response
    /// array is carried so callers can inspect every element.
    #[error("batch failed: {} response(s), at least one carried an error or no result", .responses.len())]
    Batch { responses: Vec<ResponseEnvelope> },

    /// Protocol error promoted out of the value channel by `request`.
    #[error("{0}")]
    Rpc(ErrorObject),

    /// An unexpected error.
    #[error("{0}")]
    Other(String),
}

impl ClientError {
    /// Returns `true` when the call's outcome is unknown — the request may
    /// or may not have reached the server, so resending is not known to be
    /// safe.
    pub fn outcome_unknown(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::Decode(_) | Self::NoResult
        )
    }

    /// Returns `true` if the server explicitly answered with an RPC error.
    pub fn is_rpc(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_outcome_is_unknown() {
        let err = ClientError::Transport {
            endpoint: "http://localhost:1".into(),
            method: "eth_chainId".into(),
            reason: "connection refused".into(),
        };
        assert!(err.outcome_unknown());
        assert!(!err.is_rpc());
    }

    #[test]
    fn rpc_error_outcome_is_known() {
        let err = ClientError::Rpc(ErrorObject::invalid_params("bad args"));
        assert!(!err.outcome_unknown());
        assert!(err.is_rpc());
        assert_eq!(err.to_string(), "JSON-RPC error -32602: bad args");
    }

    #[test]
    fn status_carries_code() {
        let err = ClientError::Status {
            endpoint: "http://rpc".into(),
            method: "m".into(),
            status: 500,
        };
        assert!(err.to_string().contains("500"));
    }
}
