use thiserror::Error;

/// Errors from the inference endpoint.
#[derive(Error, Debug)]
pub enum AiError {
    /// The endpoint rejected the request or the transport failed.
    #[error("Inference request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Inference endpoint returned {status}")]
    Status { status: reqwest::StatusCode },

    /// The response did not contain the expected output slot.
    #[error("Invalid inference response format")]
    MissingOutput,
}
