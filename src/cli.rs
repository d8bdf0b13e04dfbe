//! Command-line interface for tanya-relay
//!
//! Provides argument parsing and subcommand handling for the binary.

use clap::{Parser, Subcommand};

/// Default configuration path, used only if the file exists
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Legal Q&A and farming guide relay
#[derive(Parser)]
#[command(name = "tanya-relay")]
#[command(version)]
#[command(about = "Legal Q&A and farming guide relay in front of an LLM completion API")]
#[command(
    long_about = "tanya-relay answers legal questions through an OpenAI-compatible completion \
    API, trying each configured model in order and falling back to static answers, and serves \
    templated farming guides."
)]
pub struct Cli {
    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# tanya-relay Configuration
# ==========================
#
# Every key is optional; the values below are the defaults.

# ─────────────────────────────────────────────────────────────────────────────
# SERVER
# ─────────────────────────────────────────────────────────────────────────────

[server]
# IP address to bind to (0.0.0.0 for all interfaces, 127.0.0.1 for localhost only)
host = "0.0.0.0"
port = 8000

# ─────────────────────────────────────────────────────────────────────────────
# UPSTREAM COMPLETION API
# ─────────────────────────────────────────────────────────────────────────────
#
# Any OpenAI-compatible API works; requests go to {base_url}/chat/completions.
# The API key is read from the environment variable named by api_key_env
# (a .env file in the working directory is loaded first). The server refuses
# to start without it.

[upstream]
base_url = "https://openrouter.ai/api/v1"
api_key_env = "OPENROUTER_API_KEY"

# Tried in order; the first model that answers wins
models = [
    "mistralai/mistral-7b-instruct:free",
    "meta-llama/llama-3.2-3b-instruct:free",
    "google/gemma-2-9b-it:free",
]

max_tokens = 1000
temperature = 0.7

# Per-model attempt timeout in seconds (1-300)
timeout_seconds = 15

# ─────────────────────────────────────────────────────────────────────────────
# CLASSIFIER
# ─────────────────────────────────────────────────────────────────────────────
#
# Conversations containing none of these substrings (case-insensitive) get
# the out-of-scope answer. Uncomment to replace the built-in list.

[classifier]
# legal_keywords = ["hukum", "pasal", "uu", "kuhp", "pidana", "perdata"]

# ─────────────────────────────────────────────────────────────────────────────
# OBSERVABILITY
# ─────────────────────────────────────────────────────────────────────────────

[observability]
# Log level: "trace", "debug", "info", "warn", "error" (RUST_LOG overrides)
log_level = "info"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_config_path_is_unset() {
        let cli = Cli::parse_from(["tanya-relay"]);
        assert!(cli.config.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn custom_config_path() {
        let cli = Cli::parse_from(["tanya-relay", "--config", "custom.toml"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn config_subcommand_with_output() {
        let cli = Cli::parse_from(["tanya-relay", "config", "-o", "my-config.toml"]);
        assert!(matches!(
            cli.command,
            Some(Command::Config { output: Some(ref path) }) if path == "my-config.toml"
        ));
    }

    #[test]
    fn template_is_valid_config() {
        let config: crate::config::Config =
            toml::from_str(generate_config_template()).expect("template should parse");
        config.validate().expect("template should validate");
        assert_eq!(config.upstream.models().len(), 3);
    }
}
