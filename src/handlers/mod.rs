//! HTTP request handlers for the tanya-relay API

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::metrics::{AnswerSource, Metrics, RouteLabel};
use crate::middleware::request_id_middleware;
use crate::relay::{FallbackSynthesizer, KeywordClassifier, UpstreamClient};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use secrecy::SecretString;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod ask;
pub mod farm;
pub mod health;
pub mod law;
pub mod metrics;
pub mod types;

/// Application state shared across all handlers
///
/// Everything behind the `Arc`s is immutable after construction, so cloning
/// per request is cheap and needs no locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    classifier: Arc<KeywordClassifier>,
    fallback: Arc<FallbackSynthesizer>,
    upstream: Arc<UpstreamClient>,
    metrics: Arc<Metrics>,
}

impl AppState {
    /// Build state from validated configuration and the upstream API key
    ///
    /// # Errors
    ///
    /// Returns an error if metrics registration or HTTP client construction fails.
    pub fn new(config: Arc<Config>, api_key: SecretString) -> AppResult<Self> {
        let metrics = Arc::new(
            Metrics::new()
                .map_err(|e| AppError::Internal(format!("Failed to create metrics: {}", e)))?,
        );
        let upstream = Arc::new(UpstreamClient::new(
            &config.upstream,
            api_key,
            metrics.clone(),
        )?);
        let classifier = Arc::new(KeywordClassifier::new(&config.classifier.legal_keywords));

        Ok(Self {
            config,
            classifier,
            fallback: Arc::new(FallbackSynthesizer::legal()),
            upstream,
            metrics,
        })
    }

    /// Replace the static answer table
    pub fn with_fallback(mut self, fallback: FallbackSynthesizer) -> Self {
        self.fallback = Arc::new(fallback);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn classifier(&self) -> &KeywordClassifier {
        &self.classifier
    }

    pub fn fallback(&self) -> &FallbackSynthesizer {
        &self.fallback
    }

    pub fn upstream(&self) -> &UpstreamClient {
        &self.upstream
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Count an answer; metrics failures are logged and never fail the request
    pub(crate) fn record_answer(&self, route: RouteLabel, source: AnswerSource) {
        if let Err(e) = self.metrics.record_answer(route, source) {
            tracing::error!(
                error = %e,
                route = route.as_str(),
                source = source.as_str(),
                "Metrics recording failed (non-fatal), request will continue"
            );
        }
    }
}

/// Build the application router with all routes and middleware
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::handler))
        .route("/metrics", get(metrics::handler))
        .route("/ask", post(ask::handler))
        .route("/ask-law", post(law::ask_law))
        .route("/ask-law-simple", post(law::ask_law_simple))
        .route("/ask-law-mock", post(law::ask_law_mock))
        .route("/ask-farm", post(farm::handler))
        .with_state(state)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}
