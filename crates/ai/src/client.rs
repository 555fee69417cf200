use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::error::AiError;
use crate::types::{InferenceRequest, InferenceResponse};
use marketdeck_market_data::AssetKind;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the hosted inference endpoint.
pub struct InferenceClient {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl InferenceClient {
    /// Creates a client for the given endpoint and bearer token.
    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
            api_token: api_token.into(),
        }
    }

    /// Run a free-form query through the endpoint.
    pub async fn query(&self, user_id: &str, input: &str) -> Result<String, AiError> {
        debug!("Running inference for {}", user_id);
        let request = InferenceRequest {
            user_id: user_id.to_string(),
            input: input.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Status { status });
        }

        let payload: InferenceResponse = response.json().await?;
        payload.into_output().ok_or(AiError::MissingOutput)
    }

    /// Commentary for one asset, using the fixed analysis prompt.
    pub async fn asset_analysis(&self, symbol: &str, kind: AssetKind) -> Result<String, AiError> {
        let user_id = format!("{}_analysis", kind);
        let input = format!("give analysis of {} {}", symbol, kind);
        self.query(&user_id, &input).await
    }
}
