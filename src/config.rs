//! Configuration management for tanya-relay
//!
//! Parses TOML configuration files and provides typed access to settings.
//! Every section has defaults, so an empty file (or no file at all) yields a
//! working configuration pointed at OpenRouter.

use crate::error::{AppError, AppResult};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Upstream completion API configuration
///
/// Fields are private; values are only produced by deserialization or
/// `Default` and checked by `Config::validate()`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Name of the environment variable holding the bearer token
    #[serde(default = "default_api_key_env")]
    api_key_env: String,
    /// Model identifiers in priority order; the first one is tried first
    #[serde(default = "default_models")]
    models: Vec<String>,
    #[serde(default = "default_max_tokens")]
    max_tokens: u32,
    #[serde(default = "default_temperature")]
    temperature: f64,
    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
    #[serde(default = "default_system_prompt")]
    system_prompt: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            models: default_models(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_seconds: default_timeout_seconds(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl UpstreamConfig {
    /// Get the API base URL (without the `/chat/completions` suffix)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the name of the API key environment variable
    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    /// Get the model identifiers in priority order
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Get the maximum number of tokens to generate
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Get the sampling temperature
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Get the per-attempt timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Get the system preamble sent ahead of every question
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Return a copy pointed at a different base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Return a copy with a different model priority list
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    /// Return a copy with a different per-attempt timeout
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Read the API key from the configured environment variable
    ///
    /// # Errors
    ///
    /// Returns `AppError::MissingApiKey` if the variable is unset or blank.
    pub fn api_key_from_env(&self) -> AppResult<SecretString> {
        match std::env::var(&self.api_key_env) {
            Ok(value) if !value.trim().is_empty() => Ok(SecretString::from(value)),
            _ => Err(AppError::MissingApiKey {
                var: self.api_key_env.clone(),
            }),
        }
    }
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_api_key_env() -> String {
    "OPENROUTER_API_KEY".to_string()
}

fn default_models() -> Vec<String> {
    [
        "mistralai/mistral-7b-instruct:free",
        "meta-llama/llama-3.2-3b-instruct:free",
        "google/gemma-2-9b-it:free",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f64 {
    0.7
}

fn default_timeout_seconds() -> u64 {
    15
}

fn default_system_prompt() -> String {
    "Kamu adalah asisten hukum Indonesia yang membantu masyarakat desa. \
    Jawab dalam Bahasa Indonesia dengan jelas, sebutkan dasar hukum (UU, KUHP, \
    atau peraturan terkait) bila relevan, dan sarankan konsultasi dengan advokat \
    atau Lembaga Bantuan Hukum untuk kasus yang spesifik."
        .to_string()
}

/// Keyword table used by the legal-topic classifier
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_legal_keywords")]
    pub legal_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            legal_keywords: default_legal_keywords(),
        }
    }
}

fn default_legal_keywords() -> Vec<String> {
    crate::relay::classifier::DEFAULT_LEGAL_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path_display = path.as_ref().display().to_string();

        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            AppError::ConfigFileRead {
                path: path_display.clone(),
                source,
            }
        })?;

        let config: Self =
            toml::from_str(&content).map_err(|source| AppError::ConfigParseFailed {
                path: path_display.clone(),
                source,
            })?;

        config
            .validate()
            .map_err(|e| AppError::ConfigValidationFailed {
                path: path_display,
                reason: e.to_string(),
            })?;

        Ok(config)
    }

    /// Validate configuration after parsing
    ///
    /// Called by `from_file()`; call it explicitly when building a `Config`
    /// by other means.
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::Config("server.port must be non-zero".to_string()));
        }

        let upstream = &self.upstream;

        if !upstream.base_url.starts_with("http://") && !upstream.base_url.starts_with("https://")
        {
            return Err(AppError::Config(format!(
                "upstream.base_url '{}' must start with 'http://' or 'https://'",
                upstream.base_url
            )));
        }

        if upstream.api_key_env.trim().is_empty() {
            return Err(AppError::Config(
                "upstream.api_key_env must name an environment variable".to_string(),
            ));
        }

        if upstream.models.is_empty() {
            return Err(AppError::Config(
                "upstream.models must list at least one model identifier".to_string(),
            ));
        }

        if let Some(position) = upstream.models.iter().position(|m| m.trim().is_empty()) {
            return Err(AppError::Config(format!(
                "upstream.models[{}] is blank",
                position
            )));
        }

        if upstream.max_tokens == 0 {
            return Err(AppError::Config(
                "upstream.max_tokens must be greater than 0".to_string(),
            ));
        }

        if !upstream.temperature.is_finite()
            || upstream.temperature < 0.0
            || upstream.temperature > 2.0
        {
            return Err(AppError::Config(format!(
                "upstream.temperature must be a finite number between 0.0 and 2.0, got {}",
                upstream.temperature
            )));
        }

        // Upper bound keeps a single request from holding a connection for minutes.
        if upstream.timeout_seconds == 0 || upstream.timeout_seconds > 300 {
            return Err(AppError::Config(format!(
                "upstream.timeout_seconds must be in (0, 300], got {}",
                upstream.timeout_seconds
            )));
        }

        if self.classifier.legal_keywords.is_empty() {
            return Err(AppError::Config(
                "classifier.legal_keywords must not be empty".to_string(),
            ));
        }

        if self
            .classifier
            .legal_keywords
            .iter()
            .any(|k| k.trim().is_empty())
        {
            // A blank keyword is a substring of everything.
            return Err(AppError::Config(
                "classifier.legal_keywords must not contain blank entries".to_string(),
            ));
        }

        Ok(())
    }
}
