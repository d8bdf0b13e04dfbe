//! Prometheus metrics collection for tanya-relay
//!
//! Tracks:
//! - Answers served, by route and by where the text came from
//! - Upstream attempts, by model and outcome
//! - Upstream attempt latency, by outcome
//!
//! Metrics are exposed via the `/metrics` endpoint in Prometheus text format.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Route label, one per answering endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLabel {
    AskLaw,
    AskLawSimple,
    AskLawMock,
    AskFarm,
    Ask,
}

impl RouteLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteLabel::AskLaw => "ask_law",
            RouteLabel::AskLawSimple => "ask_law_simple",
            RouteLabel::AskLawMock => "ask_law_mock",
            RouteLabel::AskFarm => "ask_farm",
            RouteLabel::Ask => "ask",
        }
    }
}

/// Where the text of an answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    /// Generated by an upstream model
    Upstream,
    /// Static category answer
    Fallback,
    /// Conversation was not about a legal topic
    OutOfScope,
    /// No user message to answer
    NoQuestion,
    /// Farm guide template
    Template,
    /// Request body could not be parsed
    InvalidRequest,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::Upstream => "upstream",
            AnswerSource::Fallback => "fallback",
            AnswerSource::OutOfScope => "out_of_scope",
            AnswerSource::NoQuestion => "no_question",
            AnswerSource::Template => "template",
            AnswerSource::InvalidRequest => "invalid_request",
        }
    }
}

/// Outcome label for a single upstream attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptLabel {
    Success,
    Retryable,
}

impl AttemptLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptLabel::Success => "success",
            AttemptLabel::Retryable => "retryable",
        }
    }
}

/// Metrics collector
///
/// The `model` label is bounded by the configured model list.
#[derive(Clone)]
pub struct Metrics {
    pub registry: Arc<Registry>,
    answers_total: IntCounterVec,
    upstream_attempts_total: IntCounterVec,
    upstream_attempt_duration: HistogramVec,
}

impl Metrics {
    /// Create a new Metrics instance with its own registry
    ///
    /// # Errors
    ///
    /// Returns an error if metric registration fails (e.g., duplicate names).
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let answers_total = IntCounterVec::new(
            Opts::new(
                "tanya_relay_answers_total",
                "Total answers served by route and answer source",
            ),
            &["route", "source"],
        )?;

        let upstream_attempts_total = IntCounterVec::new(
            Opts::new(
                "tanya_relay_upstream_attempts_total",
                "Total upstream completion attempts by model and outcome",
            ),
            &["model", "outcome"],
        )?;

        let upstream_attempt_duration = HistogramVec::new(
            HistogramOpts::new(
                "tanya_relay_upstream_attempt_duration_ms",
                "Upstream completion attempt latency in milliseconds",
            )
            .buckets(vec![
                50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0, 15000.0, 30000.0,
            ]),
            &["outcome"],
        )?;

        registry.register(Box::new(answers_total.clone()))?;
        registry.register(Box::new(upstream_attempts_total.clone()))?;
        registry.register(Box::new(upstream_attempt_duration.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            answers_total,
            upstream_attempts_total,
            upstream_attempt_duration,
        })
    }

    /// Count one answer served by `route`
    pub fn record_answer(
        &self,
        route: RouteLabel,
        source: AnswerSource,
    ) -> Result<(), prometheus::Error> {
        self.answers_total
            .get_metric_with_label_values(&[route.as_str(), source.as_str()])?
            .inc();
        Ok(())
    }

    /// Count one upstream attempt and observe its latency
    pub fn record_upstream_attempt(
        &self,
        model: &str,
        outcome: AttemptLabel,
        duration_ms: f64,
    ) -> Result<(), prometheus::Error> {
        self.upstream_attempts_total
            .get_metric_with_label_values(&[model, outcome.as_str()])?
            .inc();
        self.upstream_attempt_duration
            .get_metric_with_label_values(&[outcome.as_str()])?
            .observe(duration_ms);
        Ok(())
    }

    /// Current value of the answers counter
    pub fn answers_count(&self, route: RouteLabel, source: AnswerSource) -> u64 {
        self.answers_total
            .get_metric_with_label_values(&[route.as_str(), source.as_str()])
            .map(|c| c.get())
            .unwrap_or(0)
    }

    /// Current value of the upstream attempts counter
    pub fn upstream_attempts_count(&self, model: &str, outcome: AttemptLabel) -> u64 {
        self.upstream_attempts_total
            .get_metric_with_label_values(&[model, outcome.as_str()])
            .map(|c| c.get())
            .unwrap_or(0)
    }

    /// Encode all metrics in Prometheus text format
    pub fn gather(&self) -> Result<String, String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| format!("Failed to encode metrics: {}", e))?;
        String::from_utf8(buffer).map_err(|e| format!("Metrics output is not UTF-8: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creates() {
        assert!(Metrics::new().is_ok());
    }

    #[test]
    fn test_record_answer_increments() {
        let metrics = Metrics::new().unwrap();
        metrics
            .record_answer(RouteLabel::AskLaw, AnswerSource::Fallback)
            .unwrap();
        metrics
            .record_answer(RouteLabel::AskLaw, AnswerSource::Fallback)
            .unwrap();
        assert_eq!(
            metrics.answers_count(RouteLabel::AskLaw, AnswerSource::Fallback),
            2
        );
        assert_eq!(
            metrics.answers_count(RouteLabel::AskLaw, AnswerSource::Upstream),
            0
        );
    }

    #[test]
    fn test_record_upstream_attempt() {
        let metrics = Metrics::new().unwrap();
        metrics
            .record_upstream_attempt("m1", AttemptLabel::Retryable, 12.5)
            .unwrap();
        assert_eq!(
            metrics.upstream_attempts_count("m1", AttemptLabel::Retryable),
            1
        );
    }

    #[test]
    fn test_gather_contains_metric_names() {
        let metrics = Metrics::new().unwrap();
        metrics
            .record_answer(RouteLabel::AskFarm, AnswerSource::Template)
            .unwrap();
        metrics
            .record_upstream_attempt("m1", AttemptLabel::Success, 100.0)
            .unwrap();
        let output = metrics.gather().unwrap();
        assert!(output.contains("tanya_relay_answers_total"));
        assert!(output.contains("route=\"ask_farm\""));
        assert!(output.contains("tanya_relay_upstream_attempts_total"));
        assert!(output.contains("tanya_relay_upstream_attempt_duration_ms"));
    }

    #[test]
    fn test_separate_instances_do_not_share_registry() {
        let a = Metrics::new().unwrap();
        let b = Metrics::new().unwrap();
        a.record_answer(RouteLabel::Ask, AnswerSource::Upstream)
            .unwrap();
        assert_eq!(b.answers_count(RouteLabel::Ask, AnswerSource::Upstream), 0);
    }
}
