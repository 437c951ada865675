//! The dispatch primitive: envelope framing, transport invocation,
//! response decoding, and batch fan-out/fan-in.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use wirerpc_core::{
    CallOutcome, ClientError, ClientOptions, EmptyParams, Endpoint, Params, RequestEnvelope,
    RequestThrottle, ResponseEnvelope, BATCH_METHOD,
};

// One strictly increasing id source shared by every endpoint and call
// surface in the process, batched sub-calls included. Never reset.
static REQUEST_ID: AtomicU64 = AtomicU64::new(0);

/// Claim the next request id from the process-wide counter.
pub fn next_request_id() -> u64 {
    REQUEST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// One `{method, params}` pair inside a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCall {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl BatchCall {
    pub fn new(method: impl Into<String>, params: Option<Params>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// The single funnel every call surface dispatches through.
pub struct Dispatcher {
    http: reqwest::Client,
    endpoint: Endpoint,
    empty_params: EmptyParams,
}

impl Dispatcher {
    pub fn new(endpoint: impl Into<Endpoint>, empty_params: EmptyParams) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            empty_params,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Perform one logical call and normalize the reply.
    ///
    /// The batch sentinel method routes into [`Self::dispatch_batch`] on
    /// URL endpoints; nested provider endpoints receive the call as-is
    /// and apply their own sentinel handling.
    pub async fn dispatch(
        &self,
        method: &str,
        params: Option<Params>,
    ) -> Result<CallOutcome, ClientError> {
        match &self.endpoint {
            Endpoint::Provider(provider) => {
                match provider.request(method, params).await {
                    Ok(value) => Ok(CallOutcome::Success(value)),
                    // Re-unify the collaborator's raised protocol errors
                    // into the value channel this contract promises.
                    Err(ClientError::Rpc(error)) => Ok(CallOutcome::Failure(error)),
                    Err(error) => Err(error),
                }
            }
            Endpoint::Url(url) => {
                if method == BATCH_METHOD {
                    let calls = parse_batch_params(params)?;
                    let results = self.dispatch_batch(calls).await?;
                    return Ok(CallOutcome::Success(Value::Array(results)));
                }

                let id = next_request_id();
                let envelope =
                    RequestEnvelope::new(id, method, self.empty_params.apply(params));
                debug!(id, method, endpoint = url.as_str(), "dispatching request");

                let body = self.post(url, method, &envelope).await?;
                let decoded: ResponseEnvelope = serde_json::from_slice(&body)?;
                decoded.into_outcome()
            }
        }
    }

    /// Send a batch of calls as one transport invocation.
    ///
    /// An empty batch short-circuits to an empty output with no transport
    /// call. Any element carrying an `error` field or missing its
    /// `result` fails the whole batch with the full decoded array.
    pub async fn dispatch_batch(
        &self,
        calls: Vec<BatchCall>,
    ) -> Result<Vec<Value>, ClientError> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        match &self.endpoint {
            Endpoint::Provider(provider) if provider.supports_batch() => {
                let entries = calls
                    .iter()
                    .map(serde_json::to_value)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(ClientError::Params)?;
                let value = provider
                    .request(BATCH_METHOD, Some(Params::Positional(entries)))
                    .await?;
                match value {
                    Value::Array(results) => Ok(results),
                    other => Err(ClientError::Other(format!(
                        "batch provider returned a non-array result: {other}"
                    ))),
                }
            }
            Endpoint::Provider(provider) => {
                // Collaborator without batch support: per-call dispatch in
                // submission order, aborting on the first failure.
                let mut results = Vec::with_capacity(calls.len());
                for call in calls {
                    results.push(provider.request(&call.method, call.params).await?);
                }
                Ok(results)
            }
            Endpoint::Url(url) => {
                let envelopes: Vec<RequestEnvelope> = calls
                    .into_iter()
                    .map(|call| {
                        RequestEnvelope::new(
                            next_request_id(),
                            call.method,
                            self.empty_params.apply(call.params),
                        )
                    })
                    .collect();
                debug!(
                    count = envelopes.len(),
                    endpoint = url.as_str(),
                    "dispatching batch"
                );

                let body = self.post(url, BATCH_METHOD, &envelopes).await?;
                let decoded: Vec<ResponseEnvelope> = serde_json::from_slice(&body)?;

                let complete = decoded.len() == envelopes.len()
                    && decoded.iter().all(|r| r.error.is_none() && r.has_result());
                if !complete {
                    return Err(ClientError::Batch { responses: decoded });
                }

                // Reply order is trusted; no correlation by id.
                Ok(decoded
                    .into_iter()
                    .map(|r| r.result_value().unwrap_or(Value::Null))
                    .collect())
            }
        }
    }

    async fn post<B: Serialize>(
        &self,
        url: &str,
        method: &str,
        body: &B,
    ) -> Result<Vec<u8>, ClientError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                endpoint: url.to_string(),
                method: method.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ClientError::Status {
                endpoint: url.to_string(),
                method: method.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await.map_err(|e| ClientError::Transport {
            endpoint: url.to_string(),
            method: method.to_string(),
            reason: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}

fn parse_batch_params(params: Option<Params>) -> Result<Vec<BatchCall>, ClientError> {
    let Some(Params::Positional(entries)) = params else {
        return Err(ClientError::InvalidBatch(
            "params must be a list of {method, params} calls".into(),
        ));
    };
    entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value(entry)
                .map_err(|e| ClientError::InvalidBatch(format!("malformed batch entry: {e}")))
        })
        .collect()
}

/// [`Dispatcher`] behind the admission gate.
///
/// With a configured request rate, every dispatch — a batch counts as one
/// transport invocation — waits for its FIFO slot before touching the
/// wire. Admission delays initiation only; settled calls never block one
/// another. Without a rate, calls pass straight through.
pub struct ThrottledDispatcher {
    dispatcher: Dispatcher,
    throttle: Option<RequestThrottle>,
}

impl ThrottledDispatcher {
    pub fn new(endpoint: impl Into<Endpoint>, options: &ClientOptions) -> Self {
        Self {
            dispatcher: Dispatcher::new(endpoint, options.empty_params),
            throttle: options.build_throttle(),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        self.dispatcher.endpoint()
    }

    pub async fn dispatch(
        &self,
        method: &str,
        params: Option<Params>,
    ) -> Result<CallOutcome, ClientError> {
        self.admit().await;
        self.dispatcher.dispatch(method, params).await
    }

    pub async fn dispatch_batch(
        &self,
        calls: Vec<BatchCall>,
    ) -> Result<Vec<Value>, ClientError> {
        self.admit().await;
        self.dispatcher.dispatch_batch(calls).await
    }

    async fn admit(&self) {
        if let Some(throttle) = &self.throttle {
            throttle.acquire().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_strictly_increase() {
        let first = next_request_id();
        let second = next_request_id();
        let third = next_request_id();
        assert!(first < second && second < third);
    }

    #[test]
    fn batch_call_omits_absent_params() {
        let call = BatchCall::new("eth_chainId", None);
        let json = serde_json::to_string(&call).unwrap();
        assert_eq!(json, r#"{"method":"eth_chainId"}"#);
    }

    #[test]
    fn batch_params_must_be_a_list() {
        assert!(matches!(
            parse_batch_params(None),
            Err(ClientError::InvalidBatch(_))
        ));
        let named = Params::from_serialize(serde_json::json!({"method": "a"})).unwrap();
        assert!(matches!(
            parse_batch_params(named),
            Err(ClientError::InvalidBatch(_))
        ));
    }

    #[test]
    fn batch_params_parse_entries() {
        let params =
            Params::from_serialize(serde_json::json!([{"method": "a"}, {"method": "b", "params": [1]}]))
                .unwrap();
        let calls = parse_batch_params(params).unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, "a");
        assert!(calls[0].params.is_none());
        assert_eq!(calls[1].method, "b");
    }
}
