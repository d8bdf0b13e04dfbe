//! Integration tests for /health, / and /metrics

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use secrecy::SecretString;
use std::sync::Arc;
use tanya_relay::{config::Config, handlers};
use tower::ServiceExt; // for `oneshot`

fn create_app() -> Router {
    let state = handlers::AppState::new(
        Arc::new(Config::default()),
        SecretString::from("sk-test".to_string()),
    )
    .expect("should create AppState");
    handlers::app(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_health_endpoint_returns_healthy() {
    let (status, body) = get(create_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "tanya-relay");
}

#[tokio::test]
async fn test_index_lists_routes() {
    let (status, body) = get(create_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let endpoints: Vec<&str> = json["endpoints"]
        .as_array()
        .expect("endpoints should be an array")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    for route in ["POST /ask-law", "POST /ask-law-simple", "POST /ask-farm", "GET /health"] {
        assert!(endpoints.contains(&route), "missing {}", route);
    }
}

#[tokio::test]
async fn test_metrics_endpoint_counts_answers() {
    let app = create_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ask-farm")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"plant": "padi", "location": "jawa"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = get(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("tanya_relay_answers_total"));
    assert!(text.contains("route=\"ask_farm\""));
    assert!(text.contains("source=\"template\""));
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let (status, _) = get(create_app(), "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ask_law_rejects_get() {
    let (status, _) = get(create_app(), "/ask-law").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
