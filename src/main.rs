//! sample-microservice entry point.
//!
//! Initializes tracing, resolves configuration from the environment (and an
//! optional TOML file), builds the router and runs the HTTP server until a
//! shutdown signal arrives. Any startup failure exits with status 1.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sample_microservice::config::{
    AppConfig, LogFormat, DEFAULT_LOG_FILTER, LOG_FILTER_ENV, LOG_FORMAT_ENV,
};
use sample_microservice::http::start_server;
use sample_microservice::routes::create_router;
use sample_microservice::AppError;

/// A minimal HTTP microservice with greeting and health endpoints.
///
/// The listening port is taken from the PORT environment variable (default 3000).
#[derive(Parser, Debug)]
#[command(name = "sample-microservice", version, about)]
struct Args {}

#[tokio::main]
async fn main() -> ExitCode {
    let _args = Args::parse();

    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Service failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let app = create_router();
    start_server(app, &config).await?;
    Ok(())
}

/// Initialize tracing with priority: RUST_LOG env > default filter.
fn init_tracing() {
    let log_filter =
        std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let (format, format_error) = match std::env::var(LOG_FORMAT_ENV) {
        Ok(raw) => match raw.parse::<LogFormat>() {
            Ok(format) => (format, None),
            Err(e) => (LogFormat::default(), Some(e)),
        },
        Err(_) => (LogFormat::default(), None),
    };

    let (text_layer, json_layer) = match format {
        LogFormat::Text => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(text_layer)
        .with(json_layer)
        .init();

    if let Some(e) = format_error {
        tracing::warn!(error = %e, "Falling back to text log format");
    }
}
