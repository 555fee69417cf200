use serde::{Deserialize, Serialize};

/// Request body for the inference endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest {
    pub user_id: String,
    /// The endpoint names its single input slot "in-0".
    #[serde(rename = "in-0")]
    pub input: String,
}

/// The endpoint's output map; the answer lives in the "out-0" slot.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceOutputs {
    #[serde(rename = "out-0")]
    pub primary: Option<String>,
}

/// Response body from the inference endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceResponse {
    pub outputs: Option<InferenceOutputs>,
}

impl InferenceResponse {
    /// The answer text, if the response carried one.
    pub fn into_output(self) -> Option<String> {
        self.outputs.and_then(|outputs| outputs.primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_slot_names() {
        let request = InferenceRequest {
            user_id: "crypto_analysis".to_string(),
            input: "give analysis of BTC crypto".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"in-0\":\"give analysis of BTC crypto\""));
        assert!(json.contains("\"user_id\""));
    }

    #[test]
    fn test_response_output_extraction() {
        let response: InferenceResponse =
            serde_json::from_str(r#"{"outputs":{"out-0":"Looks bullish."}}"#).unwrap();
        assert_eq!(response.into_output().as_deref(), Some("Looks bullish."));

        let empty: InferenceResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(empty.into_output(), None);

        let missing_slot: InferenceResponse =
            serde_json::from_str(r#"{"outputs":{}}"#).unwrap();
        assert_eq!(missing_slot.into_output(), None);
    }
}
