//! Upstream completion caller with ordered model failover
//!
//! Talks to an OpenAI-compatible `/chat/completions` endpoint. Each model in
//! the configured list is tried once, in order, until one produces an answer.
//! Failures never escape this module: the caller gets `None` and falls back
//! to a static answer.

use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};
use crate::metrics::{AttemptLabel, Metrics};
use crate::middleware::RequestId;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Connection establishment never gets more than this, even with a long timeout
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of a single completion attempt against one model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// HTTP 200 with a non-empty `choices` array and non-blank content
    Success(String),
    /// This model failed; the next one may still succeed
    Retryable(String),
}

impl AttemptOutcome {
    pub fn label(&self) -> AttemptLabel {
        match self {
            AttemptOutcome::Success(_) => AttemptLabel::Success,
            AttemptOutcome::Retryable(_) => AttemptLabel::Retryable,
        }
    }
}

/// Answer produced by the first model that succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamAnswer {
    model: String,
    content: String,
    attempts: usize,
}

impl UpstreamAnswer {
    /// Model identifier that produced the answer
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of attempts made, including the successful one
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 2],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the remote completion API
///
/// Holds one pooled `reqwest::Client`; cloning the surrounding `Arc` is the
/// intended way to share it between handlers.
pub struct UpstreamClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
    models: Vec<String>,
    max_tokens: u32,
    temperature: f64,
    timeout: Duration,
    system_prompt: String,
    metrics: Arc<Metrics>,
}

impl UpstreamClient {
    /// Create a client from validated upstream configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError::HttpClient` if the TLS backend cannot be initialized.
    pub fn new(
        config: &UpstreamConfig,
        api_key: SecretString,
        metrics: Arc<Metrics>,
    ) -> AppResult<Self> {
        let timeout = config.timeout();
        let http = reqwest::Client::builder()
            .connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        let endpoint = format!(
            "{}/chat/completions",
            config.base_url().trim_end_matches('/')
        );

        tracing::info!(
            endpoint = %endpoint,
            models = ?config.models(),
            timeout_seconds = timeout.as_secs(),
            "Upstream client initialized"
        );

        Ok(Self {
            http,
            endpoint,
            api_key,
            models: config.models().to_vec(),
            max_tokens: config.max_tokens(),
            temperature: config.temperature(),
            timeout,
            system_prompt: config.system_prompt().to_string(),
            metrics,
        })
    }

    /// Full URL of the completion endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model identifiers in the order they are tried
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Issue one completion call against `model`
    pub async fn attempt(&self, model: &str, question: &str) -> AttemptOutcome {
        let body = CompletionRequest {
            model,
            messages: [
                WireMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                WireMessage {
                    role: "user",
                    content: question,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        // The timeout covers connect, send and reading the whole body.
        let response = match self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return AttemptOutcome::Retryable(format!(
                    "timed out after {} seconds",
                    self.timeout.as_secs()
                ));
            }
            Err(e) => return AttemptOutcome::Retryable(format!("request failed: {}", e)),
        };

        // Any status but 200, 401 included, moves on to the next model.
        let status = response.status();
        if status != StatusCode::OK {
            return AttemptOutcome::Retryable(format!("unexpected status {}", status));
        }

        let parsed: CompletionResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) if e.is_timeout() => {
                return AttemptOutcome::Retryable(format!(
                    "timed out reading body after {} seconds",
                    self.timeout.as_secs()
                ));
            }
            Err(e) => return AttemptOutcome::Retryable(format!("malformed body: {}", e)),
        };

        let Some(choice) = parsed.choices.into_iter().next() else {
            return AttemptOutcome::Retryable("empty choices array".to_string());
        };

        let content = choice
            .message
            .and_then(|m| m.content)
            .unwrap_or_default();

        // Content is returned verbatim; only a blank answer is rejected.
        if content.trim().is_empty() {
            return AttemptOutcome::Retryable("blank answer content".to_string());
        }

        AttemptOutcome::Success(content)
    }

    /// Try every model in order and return the first answer
    ///
    /// Stops at the first success; no call is made to any later model.
    /// Returns `None` once every model has failed.
    pub async fn ask(&self, question: &str, request_id: RequestId) -> Option<UpstreamAnswer> {
        let total = self.models.len();

        for (index, model) in self.models.iter().enumerate() {
            let attempt = index + 1;

            tracing::debug!(
                request_id = %request_id,
                model = %model,
                attempt = attempt,
                total_models = total,
                "Attempting upstream completion"
            );

            let started = Instant::now();
            let outcome = self.attempt(model, question).await;
            let duration_ms = started.elapsed().as_secs_f64() * 1000.0;

            if let Err(e) = self
                .metrics
                .record_upstream_attempt(model, outcome.label(), duration_ms)
            {
                tracing::error!(
                    request_id = %request_id,
                    model = %model,
                    error = %e,
                    "Metrics recording failed (non-fatal), request will continue"
                );
            }

            match outcome {
                AttemptOutcome::Success(content) => {
                    tracing::info!(
                        request_id = %request_id,
                        model = %model,
                        attempt = attempt,
                        answer_length = content.len(),
                        duration_ms = %duration_ms,
                        "Upstream model answered"
                    );
                    return Some(UpstreamAnswer {
                        model: model.clone(),
                        content,
                        attempts: attempt,
                    });
                }
                AttemptOutcome::Retryable(reason) => {
                    tracing::warn!(
                        request_id = %request_id,
                        model = %model,
                        attempt = attempt,
                        total_models = total,
                        reason = %reason,
                        duration_ms = %duration_ms,
                        "Upstream model failed, trying next model"
                    );
                }
            }
        }

        tracing::warn!(
            request_id = %request_id,
            total_models = total,
            "All upstream models exhausted"
        );
        None
    }
}
