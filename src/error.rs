//! Error types for tanya-relay
//!
//! All errors implement `IntoResponse` for Axum handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Detail string returned when a request fails unexpectedly.
pub const INTERNAL_ERROR_DETAIL: &str = "Terjadi kesalahan pada server. Silakan coba lagi nanti.";

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration in {path}: {reason}")]
    ConfigValidationFailed { path: String, reason: String },

    #[error("Environment variable {var} is not set or empty; the upstream API key is required")]
    MissingApiKey { var: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        // Internal details stay in the logs; callers only see the fixed detail string.
        let detail = match &self {
            Self::Internal(_) => INTERNAL_ERROR_DETAIL.to_string(),
            _ => self.to_string(),
        };

        let body = Json(serde_json::json!({
            "detail": detail,
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_creates() {
        let err = AppError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_api_key_names_variable() {
        let err = AppError::MissingApiKey {
            var: "OPENROUTER_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn test_validation_failed_includes_path_and_reason() {
        let err = AppError::ConfigValidationFailed {
            path: "config.toml".to_string(),
            reason: "upstream.models must not be empty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("config.toml"));
        assert!(msg.contains("upstream.models"));
    }

    #[test]
    fn test_internal_error_response_status() {
        let err = AppError::Internal("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err = AppError::Internal("json rejection: missing field".to_string());
        let response = err.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], INTERNAL_ERROR_DETAIL);
    }
}
