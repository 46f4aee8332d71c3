use std::time::Duration;

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders the same `{"error": {"code", "message"}}` envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(&'static str),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream timed out after {0:?}")]
    UpstreamTimeout(Duration),

    #[error("Bad JSON from upstream: {0}")]
    BadUpstreamJson(String),

    #[error("Request body rejected: {0}")]
    RequestBody(#[from] BytesRejection),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::MissingConfiguration("OPENAI_API_KEY"),
            LlmError::Timeout { after } => AppError::UpstreamTimeout(after),
            LlmError::Api { status, message } => {
                AppError::Upstream(format!("status {status}: {message}"))
            }
            LlmError::Http(e) => AppError::Upstream(e.to_string()),
            LlmError::Parse(e) => AppError::Upstream(format!("undecodable response: {e}")),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingConfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) | AppError::BadUpstreamJson(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::RequestBody(rejection) => rejection.status(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MissingConfiguration(_) => "MISSING_CONFIGURATION",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::UpstreamTimeout(_) => "UPSTREAM_TIMEOUT",
            AppError::BadUpstreamJson(_) => "BAD_UPSTREAM_JSON",
            AppError::RequestBody(rejection) => {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    "PAYLOAD_TOO_LARGE"
                } else {
                    "BAD_REQUEST_BODY"
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::MethodNotAllowed(method) => format!("Method {method} not allowed, use POST"),
            AppError::NotFound(msg) => msg.clone(),
            AppError::MissingConfiguration(key) => {
                tracing::error!("Missing configuration: {key}");
                format!("Missing {key}")
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                "AI provider error".to_string()
            }
            AppError::UpstreamTimeout(after) => {
                tracing::warn!("Upstream timed out after {}ms", after.as_millis());
                "AI provider did not respond in time".to_string()
            }
            AppError::BadUpstreamJson(msg) => {
                tracing::error!("Bad JSON from upstream: {msg}");
                "Bad JSON from AI".to_string()
            }
            AppError::RequestBody(rejection) => {
                tracing::warn!("Request body rejected: {rejection}");
                rejection.body_text()
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_maps_to_server_misconfiguration() {
        let err = AppError::from(LlmError::MissingApiKey);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "MISSING_CONFIGURATION");
    }

    #[test]
    fn test_timeout_is_distinct_from_gateway_errors() {
        let timeout = AppError::from(LlmError::Timeout {
            after: Duration::from_millis(8000),
        });
        let api = AppError::from(LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(timeout.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(api.status(), StatusCode::BAD_GATEWAY);
        assert_ne!(timeout.code(), api.code());
    }

    #[test]
    fn test_bad_upstream_json_is_bad_gateway() {
        let err = AppError::BadUpstreamJson("not json".to_string());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "BAD_UPSTREAM_JSON");
    }

    #[test]
    fn test_method_not_allowed_status() {
        let response = AppError::MethodNotAllowed("GET".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
