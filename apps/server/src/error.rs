//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use marketdeck_ai::AiError;
use marketdeck_core::errors::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error carried out of a handler, rendered as `{ "error": ... }` with a
/// status matching the failure class.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// An upstream dependency (market feed, inference endpoint) failed.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::Portfolio(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::MarketData(_) => StatusCode::BAD_GATEWAY,
            Error::Storage(_) | Error::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        ApiError::upstream(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}", self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
