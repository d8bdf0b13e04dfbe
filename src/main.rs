//! tanya-relay HTTP server
//!
//! Loads configuration and the upstream API key, then serves the Axum app.

use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tanya_relay::{
    cli::{Cli, Command, DEFAULT_CONFIG_PATH, generate_config_template},
    config::Config,
    handlers::{self, AppState},
    telemetry,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::Config { output }) = cli.command {
        let template = generate_config_template();
        match output {
            Some(path) => {
                std::fs::write(&path, template)?;
                eprintln!("Wrote configuration template to {}", path);
            }
            None => print!("{}", template),
        }
        return Ok(());
    }

    // A missing .env file is fine; the variables may come from the environment.
    let _ = dotenvy::dotenv();

    let config = match cli.config.as_deref() {
        Some(path) => Config::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Config::from_file(DEFAULT_CONFIG_PATH)?,
        None => {
            let config = Config::default();
            config.validate()?;
            config
        }
    };

    telemetry::init(&config.observability.log_level);

    // Fail fast: without a key every upstream call would be rejected.
    let api_key = config.upstream.api_key_from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Cannot start without the upstream API key");
    })?;

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .unwrap_or_else(|_| std::net::IpAddr::from([0, 0, 0, 0])),
        config.server.port,
    ));

    let state = AppState::new(Arc::new(config), api_key)?;
    let app = handlers::app(state);

    tracing::info!("Starting tanya-relay on {}", addr);
    tracing::info!("Health check available at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
