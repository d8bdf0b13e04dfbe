//! Health check and route index
//!
//! Both responses are static and never touch the upstream API.

use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub message: &'static str,
}

/// Route listing returned by `GET /`
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: &'static [&'static str],
}

/// Every route served by the application
pub const ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /metrics",
    "POST /ask",
    "POST /ask-law",
    "POST /ask-law-simple",
    "POST /ask-law-mock",
    "POST /ask-farm",
];

/// GET /health handler
pub async fn handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            message: "Layanan Tanya Hukum dan FarmSmart berjalan normal",
        }),
    )
}

/// GET / handler
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Tanya Hukum & FarmSmart AI relay",
        endpoints: ENDPOINTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_handler_returns_healthy() {
        let (status, Json(body)) = handler().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "tanya-relay");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_index_lists_answering_routes() {
        let Json(body) = index().await;
        for route in ["POST /ask-law", "POST /ask-law-simple", "POST /ask-farm"] {
            assert!(body.endpoints.contains(&route), "missing {route}");
        }
    }
}
