//! wirerpc-http — the dispatch primitive over HTTP POST.
//!
//! One logical remote call runs: encode envelope with a fresh process-wide
//! id → POST → status check → decode → tagged outcome. Batches ride a
//! single POST carrying a JSON array of envelopes. The
//! [`ThrottledDispatcher`] gates admission when a request-rate cap is
//! configured, and [`HttpProvider`] is the raise-on-failure request
//! surface implementing the [`Provider`](wirerpc_core::Provider) contract.

pub mod dispatch;
pub mod provider;

pub use dispatch::{next_request_id, BatchCall, Dispatcher, ThrottledDispatcher};
pub use provider::HttpProvider;
