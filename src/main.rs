mod config;
mod core;
mod models;
mod services;
mod ui;

use crate::config::Settings;
use crate::core::SessionFlow;
use crate::services::BackendClient;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging is up; failures go to stderr
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    // Initialize logging (environment variables override the config file)
    let log_level =
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting ScholarMatch client...");

    // Initialize backend client
    let backend = BackendClient::new(
        settings.backend.endpoint.clone(),
        Duration::from_secs(settings.backend.timeout_secs),
    );

    info!("Backend client initialized for {}", settings.backend.endpoint);

    let flow = SessionFlow::new(backend);

    ui::run(flow, &settings.backend.endpoint).await
}
