//! Marketdeck AI - asset commentary via a hosted inference endpoint.
//!
//! The dashboard's "AI analysis" text comes from a third-party
//! natural-language inference endpoint. This crate wraps the endpoint's
//! small wire contract: a POST with `{ user_id, "in-0" }` authorized by a
//! static bearer token, answered by `{ outputs: { "out-0": ... } }`.
//! Endpoint URL and token are injected by the application; nothing is
//! hard-coded here.

mod client;
mod error;
mod types;

pub use client::InferenceClient;
pub use error::AiError;
pub use types::{InferenceOutputs, InferenceRequest, InferenceResponse};
